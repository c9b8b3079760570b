// src/landmarks.rs - MediaPipe hand landmark layout and per-frame hand input
use nalgebra::Vector3;

/// One normalized landmark: x/y in 0..1 image space (smaller y is higher), z relative depth.
pub type Landmark = Vector3<f64>;

/// Number of landmarks MediaPipe reports per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

// MediaPipe hand landmark indices
pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Landmarks the classifier actually reads.
const KEY_LANDMARKS: [usize; 10] = [
    WRIST, THUMB_TIP, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, RING_MCP, RING_TIP,
    PINKY_MCP, PINKY_TIP,
];

/// The four non-thumb fingers. The thumb has no MCP of its own in the
/// classifier and is always compared against the wrist or the index MCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// Base knuckle (MCP) index.
    pub fn mcp(self) -> usize {
        match self {
            Finger::Index => INDEX_MCP,
            Finger::Middle => MIDDLE_MCP,
            Finger::Ring => RING_MCP,
            Finger::Pinky => PINKY_MCP,
        }
    }

    pub fn tip(self) -> usize {
        match self {
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }

    /// MCP, PIP, DIP, TIP in order from the palm outwards.
    pub fn chain(self) -> [usize; 4] {
        let mcp = self.mcp();
        [mcp, mcp + 1, mcp + 2, mcp + 3]
    }
}

/// What the tracker reported for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum HandFrame {
    /// No hand in view.
    NoHand,
    /// A hand was seen. The points may still be unusable (too few, non-finite).
    Hand(Vec<Landmark>),
}

impl HandFrame {
    pub fn is_hand(&self) -> bool {
        matches!(self, HandFrame::Hand(_))
    }

    pub fn landmarks(&self) -> Option<&[Landmark]> {
        match self {
            HandFrame::NoHand => None,
            HandFrame::Hand(points) => Some(points),
        }
    }
}

/// A validated view over one hand's landmarks.
///
/// Construction fails (returns `None`) rather than panicking when the input
/// is short or carries a non-finite coordinate in a landmark the classifier
/// reads, so every accessor can index freely.
#[derive(Debug, Clone, Copy)]
pub struct HandPose<'a> {
    points: &'a [Landmark],
}

impl<'a> HandPose<'a> {
    pub fn from_landmarks(points: &'a [Landmark]) -> Option<Self> {
        if points.len() < HAND_LANDMARK_COUNT {
            return None;
        }
        let finite = KEY_LANDMARKS
            .iter()
            .all(|&i| points[i].x.is_finite() && points[i].y.is_finite());
        if !finite {
            return None;
        }
        Some(Self { points })
    }

    pub fn point(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    pub fn wrist(&self) -> &Landmark {
        &self.points[WRIST]
    }

    pub fn thumb_tip(&self) -> &Landmark {
        &self.points[THUMB_TIP]
    }

    pub fn tip(&self, finger: Finger) -> &Landmark {
        &self.points[finger.tip()]
    }

    pub fn mcp(&self, finger: Finger) -> &Landmark {
        &self.points[finger.mcp()]
    }

    /// Tip above its knuckle.
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.tip(finger).y < self.mcp(finger).y
    }

    /// Tip below its knuckle. Not the negation of `is_extended`: a tip level
    /// with its knuckle is neither.
    pub fn is_curled(&self, finger: Finger) -> bool {
        self.tip(finger).y > self.mcp(finger).y
    }

    pub fn thumb_above(&self, reference: usize) -> bool {
        self.thumb_tip().y < self.points[reference].y
    }

    pub fn thumb_below(&self, reference: usize) -> bool {
        self.thumb_tip().y > self.points[reference].y
    }

    /// Horizontal distance between two landmarks.
    pub fn x_gap(&self, a: usize, b: usize) -> f64 {
        (self.points[a].x - self.points[b].x).abs()
    }

    pub fn y_gap(&self, a: usize, b: usize) -> f64 {
        (self.points[a].y - self.points[b].y).abs()
    }
}
