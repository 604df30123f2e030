//! Core type definitions
//!
//! These types provide strong typing for scheduler and pool primitives.

/// Millisecond timestamp or duration (wraps after ~49 days)
pub type Millis = u32;

/// Task priority
///
/// Advisory only: recorded per task for diagnostics, never consulted when
/// deciding dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TaskPriority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl TaskPriority {
    pub const fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Critical => "CRITICAL",
        }
    }
}

/// Scheduler lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SchedState {
    /// Accepting task registrations, nothing dispatched yet
    Registering = 0,
    /// Dispatching tasks
    Running = 1,
    /// Dispatch loop has exited
    Stopped = 2,
}

/// Base address of a pool allocation, as a byte offset into the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PoolAddr(usize);

impl PoolAddr {
    #[inline(always)]
    pub const fn new(offset: usize) -> Self {
        PoolAddr(offset)
    }

    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.0
    }
}
