use instant::Instant;
use std::time::Duration;

/// Leading-edge rate limiter: lets one call through per `interval`.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True when a call at `now` should run; records it if so.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(prev) if now < prev + self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Forget the last call so the next one always runs.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Trailing-edge debounce. The host owns the timer: every burst event calls
/// `schedule` and arms a timer for `delay()`; when it fires, only the latest
/// token is still current.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Supersede any earlier timer and return the token for the new one.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    #[inline]
    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }
}
