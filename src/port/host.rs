//! Hosted port: monotonic clock and thread sleep

use std::thread;
use std::time::{Duration, Instant};

use crate::time::Clock;
use crate::types::Millis;

/// Monotonic clock counting milliseconds since construction
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    #[inline]
    fn now_ms(&self) -> Millis {
        // Truncation is the intended 32-bit wrap.
        self.epoch.elapsed().as_millis() as Millis
    }

    #[inline]
    fn sleep_ms(&self, ms: Millis) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
