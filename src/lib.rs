// src/lib.rs
//! Static hand sign recognition from MediaPipe hand landmarks.
//!
//! Each frame's 21 landmarks are classified by a fixed rule cascade
//! ([`classifier`]), turned into a display label and image ([`presentation`]),
//! and fed to a debounced narrator ([`scheduler`]) that speaks a gesture once it
//! has held for a short quiet period.

pub mod assets;
pub mod classifier;
pub mod config;
pub mod debounce;
pub mod error;
pub mod gesture;
pub mod landmarks;
pub mod mediapipe_bridge;
pub mod narrator;
pub mod presentation;
pub mod scheduler;
pub mod session;
pub mod simulation;

pub use assets::{resolve_asset, AssetKey};
pub use classifier::classify;
pub use config::SessionConfig;
pub use debounce::{DebounceAction, DebounceState, Debouncer};
pub use error::LandmarkError;
pub use gesture::{Alias, Gesture};
pub use landmarks::{HandFrame, Landmark};
pub use narrator::{LogNarrator, Narrator};
pub use presentation::{Observation, Presentation};
pub use scheduler::NarrationScheduler;
pub use session::{FrameOutcome, SignSession};
