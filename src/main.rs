// src/main.rs - Runs a simulated hand through the sign pipeline and logs what it would show and say
use std::sync::Arc;
use std::time::Duration;

use hand_signs::config::CONFIG_ENV_VAR;
use hand_signs::simulation::SimulatedHand;
use hand_signs::{LogNarrator, Presentation, SessionConfig, SignSession};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => SessionConfig::load(&path).unwrap_or_else(|e| {
            warn!("{:#}; using defaults", e);
            SessionConfig::default()
        }),
        None => SessionConfig::default(),
    };
    info!(
        "narration delay {}ms, assets in {}",
        config.narration_delay_ms,
        config.asset_dir.display()
    );

    let fps = config.simulation_fps.max(1);
    let total_frames = config.simulation_seconds * u64::from(fps);
    let mut hand = SimulatedHand::new(fps);
    let mut session = SignSession::new(config, Arc::new(LogNarrator::new()));

    let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / f64::from(fps)));
    let mut shown: Option<Presentation> = None;

    for _ in 0..total_frames {
        ticker.tick().await;
        let frame = hand.next_frame();
        let outcome = session.on_frame(&frame);

        if shown.as_ref() != Some(&outcome.presentation) {
            let asset = session
                .asset_path(&outcome)
                .map(|p| p.display().to_string());
            match serde_json::to_string(&outcome) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("could not serialize frame outcome: {}", e),
            }
            info!(
                "display \"{}\" image {}",
                outcome.presentation.text,
                asset.as_deref().unwrap_or("(hidden)")
            );
            shown = Some(outcome.presentation);
        }
    }

    // Give a pending narration the chance to finish before shutting down.
    tokio::time::sleep(session.config().narration_delay() * 2).await;
    session.reset();
    info!(
        "simulation finished after {} frames ({:.1}s simulated)",
        session.frames_seen(),
        hand.sim_time()
    );
}
