// src/narrator.rs - Speech output boundary
use parking_lot::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Whatever turns text into speech. Requests are handled one at a time.
pub trait Narrator: Send + Sync {
    fn speak(&self, text: &str);
    /// Stop the current utterance, if any.
    fn cancel(&self);
    fn is_speaking(&self) -> bool;
}

/// Narrator that only logs. Speaking time is estimated from the text length
/// so `is_speaking` behaves like a real voice for a short while.
pub struct LogNarrator {
    per_char: Duration,
    speaking_until: Mutex<Option<Instant>>,
}

impl LogNarrator {
    pub fn new() -> Self {
        Self::with_rate(Duration::from_millis(70))
    }

    pub fn with_rate(per_char: Duration) -> Self {
        Self {
            per_char,
            speaking_until: Mutex::new(None),
        }
    }
}

impl Default for LogNarrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Narrator for LogNarrator {
    fn speak(&self, text: &str) {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        let length = self.per_char.saturating_mul(chars);
        *self.speaking_until.lock() = Some(Instant::now() + length);
        info!("🔊 {} (~{}ms)", text, length.as_millis());
    }

    fn cancel(&self) {
        if self.speaking_until.lock().take().is_some() {
            debug!("speech cancelled");
        }
    }

    fn is_speaking(&self) -> bool {
        self.speaking_until
            .lock()
            .is_some_and(|until| Instant::now() < until)
    }
}
