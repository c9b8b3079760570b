// src/debounce.rs - Turns the per-frame gesture stream into "announce this" decisions
//
// Idle --g--> PendingAnnounce(g) --timer--> Announced(g)
// same gesture again: nothing. different gesture: reschedule. no gesture: back to Idle.
use serde::Serialize;
use tracing::debug;

use crate::gesture::Gesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DebounceState {
    Idle,
    PendingAnnounce(Gesture),
    Announced(Gesture),
}

impl DebounceState {
    /// The gesture last seen, pending or already spoken.
    pub fn gesture(self) -> Option<Gesture> {
        match self {
            DebounceState::Idle => None,
            DebounceState::PendingAnnounce(g) | DebounceState::Announced(g) => Some(g),
        }
    }
}

/// Identifies one scheduled announcement. Only the newest ticket can be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket(u64);

/// What the caller has to do after feeding a frame's gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DebounceAction {
    Nothing,
    /// Start a delayed announcement. Nothing was in flight.
    Schedule { gesture: Gesture, ticket: Ticket },
    /// Stop speech and drop the pending announcement, then start a new one.
    Reschedule { gesture: Gesture, ticket: Ticket },
    /// Stop speech and drop the pending announcement.
    Cancel,
}

impl DebounceAction {
    pub fn cancels(&self) -> bool {
        matches!(self, DebounceAction::Reschedule { .. } | DebounceAction::Cancel)
    }

    pub fn scheduled(&self) -> Option<(Gesture, Ticket)> {
        match *self {
            DebounceAction::Schedule { gesture, ticket }
            | DebounceAction::Reschedule { gesture, ticket } => Some((gesture, ticket)),
            _ => None,
        }
    }
}

/// Remembers the last gesture and which announcement is current.
#[derive(Debug)]
pub struct Debouncer {
    state: DebounceState,
    issued: u64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            state: DebounceState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Feed one frame's classification.
    pub fn observe(&mut self, gesture: Option<Gesture>) -> DebounceAction {
        let action = match (self.state, gesture) {
            (DebounceState::Idle, None) => DebounceAction::Nothing,
            (_, None) => {
                self.state = DebounceState::Idle;
                DebounceAction::Cancel
            }
            (DebounceState::Idle, Some(next)) => {
                let ticket = self.issue(next);
                DebounceAction::Schedule { gesture: next, ticket }
            }
            (current, Some(next)) if current.gesture() == Some(next) => DebounceAction::Nothing,
            (_, Some(next)) => {
                let ticket = self.issue(next);
                DebounceAction::Reschedule { gesture: next, ticket }
            }
        };
        if action != DebounceAction::Nothing {
            debug!("debounce {:?} -> {:?}", gesture, action);
        }
        action
    }

    /// The delay for `ticket` ran out. Returns the gesture to speak if the
    /// ticket is still the pending one.
    pub fn confirm(&mut self, ticket: Ticket) -> Option<Gesture> {
        match self.state {
            DebounceState::PendingAnnounce(gesture) if ticket.0 == self.issued => {
                self.state = DebounceState::Announced(gesture);
                Some(gesture)
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = DebounceState::Idle;
    }

    fn issue(&mut self, gesture: Gesture) -> Ticket {
        self.issued += 1;
        self.state = DebounceState::PendingAnnounce(gesture);
        Ticket(self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_gesture_schedules() {
        let mut debouncer = Debouncer::new();
        let action = debouncer.observe(Some(Gesture::Hello));
        assert!(matches!(
            action,
            DebounceAction::Schedule { gesture: Gesture::Hello, .. }
        ));
        assert_eq!(debouncer.state(), DebounceState::PendingAnnounce(Gesture::Hello));
    }

    #[test]
    fn repeats_schedule_at_most_once() {
        let mut debouncer = Debouncer::new();
        let actions: Vec<_> = (0..50).map(|_| debouncer.observe(Some(Gesture::Peace))).collect();
        let scheduled = actions.iter().filter(|a| a.scheduled().is_some()).count();
        assert_eq!(scheduled, 1);
        assert!(actions[1..].iter().all(|a| *a == DebounceAction::Nothing));
    }

    #[test]
    fn confirm_moves_pending_to_announced() {
        let mut debouncer = Debouncer::new();
        let (_, ticket) = debouncer.observe(Some(Gesture::Fist)).scheduled().unwrap();
        assert_eq!(debouncer.confirm(ticket), Some(Gesture::Fist));
        assert_eq!(debouncer.state(), DebounceState::Announced(Gesture::Fist));
        // Same gesture after announcing stays quiet.
        assert_eq!(debouncer.observe(Some(Gesture::Fist)), DebounceAction::Nothing);
        // Confirming twice does nothing.
        assert_eq!(debouncer.confirm(ticket), None);
    }

    #[test]
    fn change_supersedes_pending_ticket() {
        let mut debouncer = Debouncer::new();
        let (_, first) = debouncer.observe(Some(Gesture::Point)).scheduled().unwrap();
        let action = debouncer.observe(Some(Gesture::Gun));
        assert!(action.cancels());
        let (gesture, second) = action.scheduled().unwrap();
        assert_eq!(gesture, Gesture::Gun);
        assert_ne!(first, second);

        assert_eq!(debouncer.confirm(first), None);
        assert_eq!(debouncer.confirm(second), Some(Gesture::Gun));
    }

    #[test]
    fn change_after_announcement_reschedules() {
        let mut debouncer = Debouncer::new();
        let (_, ticket) = debouncer.observe(Some(Gesture::Three)).scheduled().unwrap();
        debouncer.confirm(ticket);
        let action = debouncer.observe(Some(Gesture::Four));
        assert!(matches!(
            action,
            DebounceAction::Reschedule { gesture: Gesture::Four, .. }
        ));
    }

    #[test]
    fn losing_the_gesture_clears_memory() {
        let mut debouncer = Debouncer::new();
        let (_, ticket) = debouncer.observe(Some(Gesture::Rock)).scheduled().unwrap();
        debouncer.confirm(ticket);

        assert_eq!(debouncer.observe(None), DebounceAction::Cancel);
        assert_eq!(debouncer.state(), DebounceState::Idle);
        assert_eq!(debouncer.observe(None), DebounceAction::Nothing);

        // Same gesture again is a fresh announcement, not a repeat.
        let again = debouncer.observe(Some(Gesture::Rock));
        assert!(matches!(again, DebounceAction::Schedule { gesture: Gesture::Rock, .. }));
    }

    #[test]
    fn clearing_invalidates_pending_ticket() {
        let mut debouncer = Debouncer::new();
        let (_, ticket) = debouncer.observe(Some(Gesture::Ok)).scheduled().unwrap();
        debouncer.observe(None);
        assert_eq!(debouncer.confirm(ticket), None);
        assert_eq!(debouncer.state(), DebounceState::Idle);
    }

    #[test]
    fn flicker_back_to_pending_gesture_reschedules() {
        let mut debouncer = Debouncer::new();
        let (_, a) = debouncer.observe(Some(Gesture::Hello)).scheduled().unwrap();
        let (_, b) = debouncer.observe(Some(Gesture::Four)).scheduled().unwrap();
        let (gesture, c) = debouncer.observe(Some(Gesture::Hello)).scheduled().unwrap();
        assert_eq!(gesture, Gesture::Hello);
        assert_eq!(debouncer.confirm(a), None);
        assert_eq!(debouncer.confirm(b), None);
        assert_eq!(debouncer.confirm(c), Some(Gesture::Hello));
    }
}
