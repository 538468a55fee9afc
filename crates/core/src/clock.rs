//! Fixed-cadence frame clock.
//!
//! Callers may invoke [`crate::Engine::tick`] as often as they like (every
//! terminal poll, every display refresh); the clock admits at most one logical
//! step per call and only once `frame_ms` has elapsed since the last admitted
//! step.
//!
//! Time policy:
//! - The first timestamp ever seen is admitted.
//! - Skipped time is dropped: a long gap still yields a single step.
//! - A timestamp earlier than the last admitted one rebases the clock without
//!   stepping.

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_ms: u64,
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new(frame_ms: u64) -> Self {
        Self {
            frame_ms: frame_ms.max(1),
            last_ms: None,
        }
    }

    /// Decide whether a logical step runs at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                true
            }
            Some(last) if now_ms < last => {
                self.last_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms - last >= self.frame_ms => {
                self.last_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }

    /// Forget the last admitted timestamp.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }
}
