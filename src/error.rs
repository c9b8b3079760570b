// src/error.rs
use thiserror::Error;

/// Why a tracker payload could not be turned into hand landmarks.
///
/// None of these are fatal: the session degrades them to "no gesture".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("hand landmarks must be a JSON array, got {0}")]
    NotAnArray(&'static str),

    #[error("expected at least {expected} landmarks, got {actual}")]
    TooFew { expected: usize, actual: usize },

    #[error("landmark {index} has a missing or non-numeric {axis} coordinate")]
    BadCoordinate { index: usize, axis: char },
}
