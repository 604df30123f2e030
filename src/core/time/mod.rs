//! Time management module
//!
//! Millisecond time sources for the scheduler. Elapsed time is always
//! computed with wrapping subtraction so the 32-bit counter may roll over.

use portable_atomic::{AtomicU32, Ordering};

use crate::types::Millis;

/// Monotonic millisecond clock with a blocking sleep
pub trait Clock {
    /// Current monotonic time
    fn now_ms(&self) -> Millis;

    /// Suspend the caller for `ms` milliseconds
    fn sleep_ms(&self, ms: Millis);
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }

    #[inline]
    fn sleep_ms(&self, ms: Millis) {
        (**self).sleep_ms(ms)
    }
}

/// Milliseconds elapsed from `since` to `now`
#[inline(always)]
pub fn elapsed_ms(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// Manually driven clock
///
/// Time only moves when advanced; `sleep_ms` advances it by the requested
/// amount instead of blocking, so a run loop driven by this clock is fully
/// deterministic.
pub struct ManualClock {
    now: AtomicU32,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(ms: Millis) -> Self {
        Self {
            now: AtomicU32::new(ms),
        }
    }

    /// Move time forward by `ms`
    #[inline]
    pub fn advance(&self, ms: Millis) {
        self.now.fetch_add(ms, Ordering::AcqRel);
    }

    /// Jump to an absolute time
    #[inline]
    pub fn set(&self, ms: Millis) {
        self.now.store(ms, Ordering::Release);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> Millis {
        self.now.load(Ordering::Acquire)
    }

    #[inline]
    fn sleep_ms(&self, ms: Millis) {
        self.advance(ms);
    }
}
