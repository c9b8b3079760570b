// src/mediapipe_bridge.rs - Decodes MediaPipe Hands results into hand frames
//
// Accepts the shape the Hands solution hands to its results callback:
// { "multiHandLandmarks": [ [ {"x":..,"y":..,"z":..}, ... ], ... ] }
// Points may also be bare [x, y, z] arrays. Only the first hand is used.
use nalgebra::Vector3;
use serde_json::Value;
use tracing::debug;

use crate::error::LandmarkError;
use crate::landmarks::{HandFrame, Landmark, HAND_LANDMARK_COUNT};

/// Turn one results payload into a frame. Never fails: a missing hand list is
/// `NoHand`, a present but unreadable hand is a hand without usable points.
pub fn frame_from_results(results: &Value) -> HandFrame {
    let first_hand = results
        .get("multiHandLandmarks")
        .and_then(Value::as_array)
        .and_then(|hands| hands.first());

    match first_hand {
        None => HandFrame::NoHand,
        Some(hand) => match parse_landmarks(hand) {
            Ok(points) => HandFrame::Hand(points),
            Err(e) => {
                debug!("unusable hand landmarks: {}", e);
                HandFrame::Hand(Vec::new())
            }
        },
    }
}

/// Parse one hand's landmark list.
pub fn parse_landmarks(hand: &Value) -> Result<Vec<Landmark>, LandmarkError> {
    let points = hand
        .as_array()
        .ok_or_else(|| LandmarkError::NotAnArray(json_kind(hand)))?;

    if points.len() < HAND_LANDMARK_COUNT {
        return Err(LandmarkError::TooFew {
            expected: HAND_LANDMARK_COUNT,
            actual: points.len(),
        });
    }

    points
        .iter()
        .enumerate()
        .map(|(index, point)| parse_point(index, point))
        .collect()
}

fn parse_point(index: usize, point: &Value) -> Result<Landmark, LandmarkError> {
    let axis = |name: char, slot: usize, required: bool| -> Result<f64, LandmarkError> {
        let value = match point {
            Value::Object(map) => map.get(name.to_string().as_str()),
            Value::Array(items) => items.get(slot),
            _ => None,
        };
        match value {
            Some(v) => v
                .as_f64()
                .filter(|f| f.is_finite())
                .ok_or(LandmarkError::BadCoordinate { index, axis: name }),
            None if !required => Ok(0.0),
            None => Err(LandmarkError::BadCoordinate { index, axis: name }),
        }
    };

    Ok(Vector3::new(
        axis('x', 0, true)?,
        axis('y', 1, true)?,
        axis('z', 2, false)?,
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
