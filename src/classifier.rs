// src/classifier.rs - Static hand sign classification from a single frame of landmarks
//
// Every rule compares tip and knuckle heights in normalized image space, where a
// smaller y is higher up the frame. Rules are tried in table order and the first
// match wins, so a hand that satisfies several rules is reported as the earliest.
use tracing::trace;

use crate::gesture::Gesture;
use crate::landmarks::{
    Finger, HandPose, Landmark, INDEX_MCP, INDEX_TIP, MIDDLE_TIP, RING_TIP, THUMB_TIP, WRIST,
};

/// Thumb must sit at least this far sideways from the index tip for I Love You.
pub const THUMB_SPREAD_X: f64 = 0.10;
/// Thumb and index tips closer than this on both axes count as a pinch (OK).
pub const PINCH_DISTANCE: f64 = 0.05;
/// Minimum x-gap between neighbouring fingertips for a spread High Five.
pub const FINGER_SPREAD_X: f64 = 0.05;
/// Maximum x-gap between thumb and index tip for Rock.
pub const THUMB_TUCK_X: f64 = 0.08;
/// Minimum x-gap between index and middle tips for Victory.
pub const VICTORY_SPREAD_X: f64 = 0.07;

/// One entry of the classification cascade.
#[derive(Clone, Copy)]
pub struct Rule {
    pub gesture: Gesture,
    pub matches: fn(&HandPose<'_>) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("gesture", &self.gesture).finish()
    }
}

/// The cascade, in precedence order.
///
/// High Five and Thumbs Down can never win: Hello accepts every High Five and
/// Fist is the same test as Thumbs Down. Victory only wins with the thumb held
/// at or above the index knuckle, otherwise Peace takes it.
pub static RULES: [Rule; 15] = [
    Rule { gesture: Gesture::ThumbsUp, matches: thumbs_up },
    Rule { gesture: Gesture::Hello, matches: hello },
    Rule { gesture: Gesture::ILoveYou, matches: i_love_you },
    Rule { gesture: Gesture::Peace, matches: peace },
    Rule { gesture: Gesture::Ok, matches: ok },
    Rule { gesture: Gesture::Fist, matches: fist },
    Rule { gesture: Gesture::HighFive, matches: high_five },
    Rule { gesture: Gesture::Rock, matches: rock },
    Rule { gesture: Gesture::Point, matches: point },
    Rule { gesture: Gesture::Three, matches: three },
    Rule { gesture: Gesture::Four, matches: four },
    Rule { gesture: Gesture::CallMe, matches: call_me },
    Rule { gesture: Gesture::Gun, matches: gun },
    Rule { gesture: Gesture::ThumbsDown, matches: thumbs_down },
    Rule { gesture: Gesture::Victory, matches: victory },
];

/// Classify one hand. Returns `None` for unusable input or when no rule matches.
pub fn classify(landmarks: &[Landmark]) -> Option<Gesture> {
    let pose = HandPose::from_landmarks(landmarks)?;
    let gesture = RULES
        .iter()
        .find(|rule| (rule.matches)(&pose))
        .map(|rule| rule.gesture);
    trace!("classified hand as {:?}", gesture);
    gesture
}

/// Every rule the hand satisfies, in precedence order. The first entry is
/// what `classify` returns.
pub fn matching_rules(landmarks: &[Landmark]) -> Vec<Gesture> {
    let Some(pose) = HandPose::from_landmarks(landmarks) else {
        return Vec::new();
    };
    RULES
        .iter()
        .filter(|rule| (rule.matches)(&pose))
        .map(|rule| rule.gesture)
        .collect()
}

// Finger states, listed index, middle, ring, pinky.
fn fingers(pose: &HandPose<'_>, extended: [bool; 4]) -> bool {
    Finger::ALL.iter().zip(extended).all(|(&finger, up)| {
        if up {
            pose.is_extended(finger)
        } else {
            pose.is_curled(finger)
        }
    })
}

fn thumbs_up(pose: &HandPose<'_>) -> bool {
    pose.thumb_above(INDEX_MCP) && fingers(pose, [false, false, false, false])
}

fn hello(pose: &HandPose<'_>) -> bool {
    pose.thumb_above(WRIST) && fingers(pose, [true, true, true, true])
}

fn i_love_you(pose: &HandPose<'_>) -> bool {
    fingers(pose, [true, false, false, true])
        && pose.x_gap(THUMB_TIP, INDEX_TIP) > THUMB_SPREAD_X
        && pose.thumb_above(INDEX_MCP)
}

fn peace(pose: &HandPose<'_>) -> bool {
    fingers(pose, [true, true, false, false]) && pose.thumb_below(INDEX_MCP)
}

fn ok(pose: &HandPose<'_>) -> bool {
    pose.x_gap(INDEX_TIP, THUMB_TIP) < PINCH_DISTANCE
        && pose.y_gap(INDEX_TIP, THUMB_TIP) < PINCH_DISTANCE
        && pose.is_extended(Finger::Middle)
        && pose.is_extended(Finger::Ring)
        && pose.is_extended(Finger::Pinky)
}

fn fist(pose: &HandPose<'_>) -> bool {
    pose.thumb_below(INDEX_MCP) && fingers(pose, [false, false, false, false])
}

fn high_five(pose: &HandPose<'_>) -> bool {
    hello(pose)
        && pose.x_gap(INDEX_TIP, MIDDLE_TIP) > FINGER_SPREAD_X
        && pose.x_gap(MIDDLE_TIP, RING_TIP) > FINGER_SPREAD_X
}

fn rock(pose: &HandPose<'_>) -> bool {
    fingers(pose, [true, false, false, true])
        && pose.x_gap(THUMB_TIP, INDEX_TIP) < THUMB_TUCK_X
        && pose.thumb_below(WRIST)
}

fn point(pose: &HandPose<'_>) -> bool {
    fingers(pose, [true, false, false, false]) && pose.thumb_below(INDEX_MCP)
}

fn three(pose: &HandPose<'_>) -> bool {
    fingers(pose, [true, true, true, false]) && pose.thumb_below(INDEX_MCP)
}

fn four(pose: &HandPose<'_>) -> bool {
    fingers(pose, [true, true, true, true]) && pose.thumb_below(INDEX_MCP)
}

fn call_me(pose: &HandPose<'_>) -> bool {
    pose.thumb_above(WRIST) && fingers(pose, [false, false, false, true])
}

fn gun(pose: &HandPose<'_>) -> bool {
    pose.thumb_above(WRIST) && fingers(pose, [true, false, false, false])
}

fn thumbs_down(pose: &HandPose<'_>) -> bool {
    pose.thumb_below(INDEX_MCP) && fingers(pose, [false, false, false, false])
}

fn victory(pose: &HandPose<'_>) -> bool {
    pose.is_extended(Finger::Index)
        && pose.is_extended(Finger::Middle)
        && pose.x_gap(INDEX_TIP, MIDDLE_TIP) > VICTORY_SPREAD_X
        && pose.is_curled(Finger::Ring)
        && pose.is_curled(Finger::Pinky)
}
