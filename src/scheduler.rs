// src/scheduler.rs - Delayed, cancellable narration on top of the debouncer
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::debounce::{DebounceAction, DebounceState, Debouncer, Ticket};
use crate::gesture::Gesture;
use crate::narrator::Narrator;

/// Default quiet period before a new gesture is spoken.
pub const DEFAULT_NARRATION_DELAY: Duration = Duration::from_millis(300);

/// Owns the debouncer and the single pending narration timer.
///
/// Must be driven from inside a tokio runtime. Frames arrive one at a time,
/// so cancel-then-reschedule inside `on_observation` is never interleaved
/// with another frame.
pub struct NarrationScheduler {
    debouncer: Arc<Mutex<Debouncer>>,
    narrator: Arc<dyn Narrator>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl NarrationScheduler {
    pub fn new(narrator: Arc<dyn Narrator>, delay: Duration) -> Self {
        Self {
            debouncer: Arc::new(Mutex::new(Debouncer::new())),
            narrator,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> DebounceState {
        self.debouncer.lock().state()
    }

    /// True while a scheduled narration has not yet fired.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Feed one frame's classification and carry out the resulting action.
    pub fn on_observation(&mut self, gesture: Option<Gesture>) -> DebounceAction {
        let action = self.debouncer.lock().observe(gesture);

        if action.cancels() {
            self.silence();
        }
        if let Some((gesture, ticket)) = action.scheduled() {
            self.schedule(gesture, ticket);
        }
        action
    }

    /// Drop any pending narration, stop speech and forget the last gesture.
    pub fn reset(&mut self) {
        self.silence();
        self.debouncer.lock().reset();
    }

    fn silence(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        if self.narrator.is_speaking() {
            self.narrator.cancel();
        }
    }

    fn schedule(&mut self, gesture: Gesture, ticket: Ticket) {
        // Never more than one timer alive.
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        let debouncer = Arc::clone(&self.debouncer);
        let narrator = Arc::clone(&self.narrator);
        // Deadline is fixed now, not when the task is first polled.
        let deadline = tokio::time::Instant::now() + self.delay;

        debug!("narration of {:?} scheduled in {}ms", gesture, self.delay.as_millis());

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            // A newer ticket means this one was superseded after the abort raced.
            let confirmed = debouncer.lock().confirm(ticket);
            match confirmed {
                Some(gesture) => {
                    info!("announcing {}", gesture.label());
                    narrator.speak(gesture.display_name());
                }
                None => debug!("narration of {:?} superseded", gesture),
            }
        }));
    }
}

impl Drop for NarrationScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
