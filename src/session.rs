// src/session.rs - Per-frame entry point: classify, present, narrate
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::SessionConfig;
use crate::debounce::{DebounceAction, DebounceState};
use crate::landmarks::HandFrame;
use crate::mediapipe_bridge::frame_from_results;
use crate::narrator::Narrator;
use crate::presentation::{Observation, Presentation};
use crate::scheduler::NarrationScheduler;

/// Everything decided for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutcome {
    pub observation: Observation,
    pub presentation: Presentation,
    pub action: DebounceAction,
}

/// One hand-sign session. Feed it frames in order from inside a tokio runtime.
pub struct SignSession {
    config: SessionConfig,
    scheduler: NarrationScheduler,
    last_observation: Option<Observation>,
    frames_seen: u64,
}

impl SignSession {
    pub fn new(config: SessionConfig, narrator: Arc<dyn Narrator>) -> Self {
        let scheduler = NarrationScheduler::new(narrator, config.narration_delay());
        Self {
            config,
            scheduler,
            last_observation: None,
            frames_seen: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn narration_state(&self) -> DebounceState {
        self.scheduler.state()
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    pub fn on_frame(&mut self, frame: &HandFrame) -> FrameOutcome {
        self.frames_seen += 1;

        let observation = Observation::from_frame(frame);
        if self.last_observation != Some(observation) {
            info!("frame {}: {:?}", self.frames_seen, observation);
            self.last_observation = Some(observation);
        }

        let presentation = Presentation::for_observation(observation);
        let action = self.scheduler.on_observation(observation.gesture());

        FrameOutcome {
            observation,
            presentation,
            action,
        }
    }

    /// Same as `on_frame` for a raw MediaPipe results payload.
    pub fn on_tracker_results(&mut self, results: &Value) -> FrameOutcome {
        self.on_frame(&frame_from_results(results))
    }

    /// Full path of the image to show for an outcome, if any.
    pub fn asset_path(&self, outcome: &FrameOutcome) -> Option<PathBuf> {
        outcome.presentation.asset_path(&self.config.asset_dir)
    }

    /// Stop narration and forget the last gesture, e.g. when the camera stops.
    pub fn reset(&mut self) {
        self.scheduler.reset();
        self.last_observation = None;
    }
}
