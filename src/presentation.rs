// src/presentation.rs - What the screen shows for a frame
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::assets::{asset_for, AssetKey};
use crate::classifier::classify;
use crate::gesture::Gesture;
use crate::landmarks::HandFrame;

pub const NO_HAND_TEXT: &str = "No hand detected...";
pub const NO_GESTURE_TEXT: &str = "No gesture detected...";

/// Classification outcome for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Observation {
    NoHand,
    NoGesture,
    Gesture(Gesture),
}

impl Observation {
    pub fn from_frame(frame: &HandFrame) -> Self {
        match frame {
            HandFrame::NoHand => Observation::NoHand,
            HandFrame::Hand(points) => match classify(points) {
                Some(gesture) => Observation::Gesture(gesture),
                None => Observation::NoGesture,
            },
        }
    }

    /// No hand and no gesture look the same to the narrator.
    pub fn gesture(self) -> Option<Gesture> {
        match self {
            Observation::Gesture(g) => Some(g),
            _ => None,
        }
    }
}

/// Display label and image for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub text: &'static str,
    /// Hidden when `None`.
    pub asset: Option<AssetKey>,
}

impl Presentation {
    pub fn for_observation(observation: Observation) -> Self {
        match observation {
            Observation::NoHand => Self {
                text: NO_HAND_TEXT,
                asset: None,
            },
            Observation::NoGesture => Self {
                text: NO_GESTURE_TEXT,
                asset: None,
            },
            Observation::Gesture(gesture) => Self {
                text: gesture.display_name(),
                asset: asset_for(gesture),
            },
        }
    }

    pub fn asset_path(&self, asset_dir: impl AsRef<Path>) -> Option<PathBuf> {
        self.asset.map(|key| key.path_in(asset_dir))
    }

    /// Alt text for the image element.
    pub fn alt_text(&self) -> Option<String> {
        self.asset.map(|_| format!("{} sign", self.text))
    }
}
