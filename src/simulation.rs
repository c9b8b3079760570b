// src/simulation.rs - Synthetic hand poses and a scripted frame source for running without a tracker
use nalgebra::Vector3;

use crate::gesture::Gesture;
use crate::landmarks::{
    Finger, HandFrame, Landmark, HAND_LANDMARK_COUNT, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP,
    WRIST,
};

const WRIST_X: f64 = 0.50;
const WRIST_Y: f64 = 0.85;
const KNUCKLE_Y: f64 = 0.60;
const KNUCKLE_X: [f64; 4] = [0.42, 0.48, 0.54, 0.60];
// Tip offsets from the finger's own knuckle
const EXTENDED_REACH: f64 = -0.25;
const CURLED_DROP: f64 = 0.08;

/// Where the thumb tip sits relative to the wrist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    /// Well above the index knuckle and out to the side.
    Raised,
    /// Below the index knuckle but above the wrist.
    Tucked,
    /// Below the wrist, close to the index finger.
    Lowered,
}

impl Thumb {
    fn offset(self) -> (f64, f64) {
        match self {
            Thumb::Raised => (-0.20, -0.45),
            Thumb::Tucked => (-0.05, -0.15),
            Thumb::Lowered => (-0.06, 0.05),
        }
    }
}

/// Builds a plausible 21-point right hand, palm to camera. Starts open
/// (all fingers extended, thumb tucked).
#[derive(Debug, Clone)]
pub struct HandPoseBuilder {
    points: Vec<Landmark>,
}

impl Default for HandPoseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HandPoseBuilder {
    pub fn new() -> Self {
        let mut builder = Self {
            points: vec![Vector3::zeros(); HAND_LANDMARK_COUNT],
        };
        builder.points[WRIST] = Vector3::new(WRIST_X, WRIST_Y, 0.0);
        for (finger, x) in Finger::ALL.into_iter().zip(KNUCKLE_X) {
            builder.points[finger.mcp()] = Vector3::new(x, KNUCKLE_Y, -0.01);
            builder = builder.extend(finger);
        }
        builder.thumb(Thumb::Tucked)
    }

    pub fn extend(self, finger: Finger) -> Self {
        let mcp = self.points[finger.mcp()];
        self.place_finger(finger, Vector3::new(mcp.x, mcp.y + EXTENDED_REACH, -0.03))
    }

    pub fn curl(self, finger: Finger) -> Self {
        let mcp = self.points[finger.mcp()];
        self.place_finger(finger, Vector3::new(mcp.x, mcp.y + CURLED_DROP, -0.05))
    }

    pub fn curl_all(self) -> Self {
        Finger::ALL.into_iter().fold(self, |b, f| b.curl(f))
    }

    pub fn thumb(mut self, thumb: Thumb) -> Self {
        let wrist = self.points[WRIST];
        let (dx, dy) = thumb.offset();
        let tip = Vector3::new(wrist.x + dx, wrist.y + dy, -0.02);
        self.points[THUMB_CMC] = wrist.lerp(&tip, 0.25);
        self.points[THUMB_MCP] = wrist.lerp(&tip, 0.5);
        self.points[THUMB_IP] = wrist.lerp(&tip, 0.75);
        self.points[THUMB_TIP] = tip;
        self
    }

    /// Slide a fingertip sideways, keeping its height.
    pub fn tip_x(self, finger: Finger, x: f64) -> Self {
        let tip = self.points[finger.tip()];
        self.place_finger(finger, Vector3::new(x, tip.y, tip.z))
    }

    /// Put any landmark at an exact spot.
    pub fn tip_at(mut self, index: usize, x: f64, y: f64) -> Self {
        self.points[index].x = x;
        self.points[index].y = y;
        self
    }

    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        let shift = Vector3::new(dx, dy, 0.0);
        for point in &mut self.points {
            *point += shift;
        }
        self
    }

    pub fn build(self) -> Vec<Landmark> {
        self.points
    }

    fn place_finger(mut self, finger: Finger, tip: Landmark) -> Self {
        let [mcp, pip, dip, tip_index] = finger.chain();
        let base = self.points[mcp];
        self.points[pip] = base.lerp(&tip, 1.0 / 3.0);
        self.points[dip] = base.lerp(&tip, 2.0 / 3.0);
        self.points[tip_index] = tip;
        self
    }
}

/// A textbook hand shape for each gesture.
///
/// High Five and Thumbs Down get their own geometry, but that geometry is
/// claimed by Hello and Fist first when classified.
pub fn canonical_pose(gesture: Gesture) -> Vec<Landmark> {
    use Finger::*;
    let hand = HandPoseBuilder::new();
    match gesture {
        Gesture::ThumbsUp => hand.curl_all().thumb(Thumb::Raised),
        Gesture::Hello => hand.thumb(Thumb::Raised),
        Gesture::ILoveYou => hand.curl(Middle).curl(Ring).thumb(Thumb::Raised),
        Gesture::Peace => hand.curl(Ring).curl(Pinky),
        Gesture::Ok => hand
            .curl(Index)
            .tip_at(Index.tip(), 0.45, 0.64)
            .tip_at(THUMB_TIP, 0.46, 0.62),
        Gesture::Fist => hand.curl_all(),
        Gesture::HighFive => hand
            .thumb(Thumb::Raised)
            .tip_x(Index, 0.38)
            .tip_x(Middle, 0.48)
            .tip_x(Ring, 0.58)
            .tip_x(Pinky, 0.66),
        Gesture::Rock => hand.curl(Middle).curl(Ring).thumb(Thumb::Lowered),
        Gesture::Point => hand.curl(Middle).curl(Ring).curl(Pinky),
        Gesture::Three => hand.curl(Pinky),
        Gesture::Four => hand.thumb(Thumb::Lowered),
        Gesture::CallMe => hand.curl(Index).curl(Middle).curl(Ring).thumb(Thumb::Raised),
        Gesture::Gun => hand.curl(Middle).curl(Ring).curl(Pinky).thumb(Thumb::Raised),
        Gesture::ThumbsDown => hand.curl_all().thumb(Thumb::Lowered),
        Gesture::Victory => hand
            .curl(Ring)
            .curl(Pinky)
            .thumb(Thumb::Raised)
            .tip_x(Index, 0.38)
            .tip_x(Middle, 0.52),
    }
    .build()
}

/// What the simulated tracker shows during one stretch of the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedShape {
    Absent,
    /// Hand seen but the tracker returned too few points.
    Garbled,
    Sign(Gesture),
}

// (shape, seconds). Opens with Point/Gun flicker that should never be spoken as Point.
const SCRIPT: &[(SimulatedShape, f64)] = &[
    (SimulatedShape::Absent, 0.8),
    (SimulatedShape::Sign(Gesture::Point), 0.07),
    (SimulatedShape::Sign(Gesture::Gun), 0.07),
    (SimulatedShape::Sign(Gesture::Point), 0.07),
    (SimulatedShape::Sign(Gesture::Gun), 1.2),
    (SimulatedShape::Sign(Gesture::ThumbsUp), 1.5),
    (SimulatedShape::Absent, 0.5),
    (SimulatedShape::Sign(Gesture::Fist), 1.5),
    (SimulatedShape::Sign(Gesture::Hello), 1.5),
    (SimulatedShape::Garbled, 0.2),
    (SimulatedShape::Sign(Gesture::ILoveYou), 1.5),
    (SimulatedShape::Sign(Gesture::Peace), 1.5),
    (SimulatedShape::Sign(Gesture::Ok), 1.5),
    (SimulatedShape::Sign(Gesture::Rock), 1.5),
    (SimulatedShape::Sign(Gesture::Three), 1.5),
    (SimulatedShape::Sign(Gesture::Four), 1.5),
    (SimulatedShape::Sign(Gesture::CallMe), 1.5),
    (SimulatedShape::Sign(Gesture::Victory), 1.5),
];

/// Scripted stand-in for a live tracker. Loops through `SCRIPT`, drifting the
/// hand slightly so consecutive frames are never bit-identical.
pub struct SimulatedHand {
    sim_time: f64,
    frame_interval: f64,
    frame_counter: u64,
}

impl SimulatedHand {
    pub fn new(fps: u32) -> Self {
        Self {
            sim_time: 0.0,
            frame_interval: 1.0 / f64::from(fps.max(1)),
            frame_counter: 0,
        }
    }

    pub fn script_duration() -> f64 {
        SCRIPT.iter().map(|(_, secs)| secs).sum()
    }

    /// Shape shown at time `t` seconds into the loop.
    pub fn shape_at(t: f64) -> SimulatedShape {
        let mut remaining = t.rem_euclid(Self::script_duration());
        for &(shape, secs) in SCRIPT {
            if remaining < secs {
                return shape;
            }
            remaining -= secs;
        }
        SCRIPT[SCRIPT.len() - 1].0
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn next_frame(&mut self) -> HandFrame {
        let t = self.sim_time;
        self.sim_time += self.frame_interval;
        self.frame_counter += 1;

        match Self::shape_at(t) {
            SimulatedShape::Absent => HandFrame::NoHand,
            SimulatedShape::Garbled => {
                let mut points = canonical_pose(Gesture::Hello);
                points.truncate(12);
                HandFrame::Hand(points)
            }
            SimulatedShape::Sign(gesture) => {
                let drift = Vector3::new(0.01 * (t * 2.1).sin(), 0.008 * (t * 1.7).cos(), 0.0);
                let points = canonical_pose(gesture)
                    .into_iter()
                    .map(|p| p + drift)
                    .collect();
                HandFrame::Hand(points)
            }
        }
    }
}

impl Iterator for SimulatedHand {
    type Item = HandFrame;

    fn next(&mut self) -> Option<HandFrame> {
        Some(self.next_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::landmarks::INDEX_MCP;
    use approx::assert_relative_eq;

    #[test]
    fn builder_places_intermediate_joints_between_knuckle_and_tip() {
        let points = HandPoseBuilder::new().build();
        let [mcp, pip, dip, tip] = Finger::Middle.chain();
        assert!(points[mcp].y > points[pip].y);
        assert!(points[pip].y > points[dip].y);
        assert!(points[dip].y > points[tip].y);
        assert_relative_eq!(points[pip].y, KNUCKLE_Y + EXTENDED_REACH / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn thumb_offsets_straddle_reference_points() {
        let raised = HandPoseBuilder::new().thumb(Thumb::Raised).build();
        assert!(raised[THUMB_TIP].y < raised[INDEX_MCP].y);

        let tucked = HandPoseBuilder::new().thumb(Thumb::Tucked).build();
        assert!(tucked[THUMB_TIP].y > tucked[INDEX_MCP].y);
        assert!(tucked[THUMB_TIP].y < tucked[WRIST].y);

        let lowered = HandPoseBuilder::new().thumb(Thumb::Lowered).build();
        assert!(lowered[THUMB_TIP].y > lowered[WRIST].y);
    }

    #[test]
    fn translate_moves_every_point() {
        let base = HandPoseBuilder::new().build();
        let moved = HandPoseBuilder::new().translate(0.1, -0.2).build();
        for (a, b) in base.iter().zip(&moved) {
            assert_relative_eq!(b.x - a.x, 0.1, epsilon = 1e-12);
            assert_relative_eq!(b.y - a.y, -0.2, epsilon = 1e-12);
        }
    }

    #[test]
    fn script_lookup_wraps() {
        let total = SimulatedHand::script_duration();
        assert_eq!(SimulatedHand::shape_at(0.0), SimulatedShape::Absent);
        assert_eq!(SimulatedHand::shape_at(total), SimulatedShape::Absent);
        assert_eq!(
            SimulatedHand::shape_at(0.85),
            SimulatedShape::Sign(Gesture::Point)
        );
    }

    #[test]
    fn frames_advance_time_at_requested_rate() {
        let mut hand = SimulatedHand::new(30);
        for _ in 0..30 {
            hand.next_frame();
        }
        assert_eq!(hand.frame_counter(), 30);
        assert_relative_eq!(hand.sim_time(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn simulated_frames_classify_as_scripted() {
        let fps = 30;
        let mut hand = SimulatedHand::new(fps);
        let frames = (SimulatedHand::script_duration() * f64::from(fps)) as usize;
        for _ in 0..frames {
            let t = hand.sim_time();
            let frame = hand.next_frame();
            match SimulatedHand::shape_at(t) {
                SimulatedShape::Absent => assert_eq!(frame, HandFrame::NoHand),
                SimulatedShape::Garbled => {
                    let points = frame.landmarks().unwrap();
                    assert_eq!(classify(points), None);
                }
                SimulatedShape::Sign(gesture) => {
                    let points = frame.landmarks().unwrap();
                    assert_eq!(classify(points), Some(gesture), "t={t:.3}");
                }
            }
        }
    }
}
