//! Task descriptors
//!
//! A task is a periodic, run-to-completion callback owned by the scheduler's
//! table. Descriptors are created during registration and live as long as
//! the scheduler.

use alloc::boxed::Box;

use crate::time::elapsed_ms;
use crate::types::{Millis, TaskPriority};

/// Task callback type
///
/// Niladic, no return value, expected to finish quickly. Closures may capture
/// whatever state they need.
pub type TaskFn<'a> = Box<dyn FnMut() + Send + 'a>;

/// A registered unit of periodic work
pub struct TaskDescriptor<'a> {
    callback: TaskFn<'a>,
    /// Dispatch period in milliseconds (> 0)
    pub(crate) period_ms: Millis,
    /// Timestamp of the last dispatch, written only by the dispatching thread
    pub(crate) last_run_ms: Millis,
    /// Advisory priority
    pub(crate) priority: TaskPriority,
    /// Task name for diagnostics
    pub(crate) name: &'static str,
    /// Number of completed dispatches
    pub(crate) run_count: u32,
}

impl<'a> TaskDescriptor<'a> {
    pub(crate) fn new(
        callback: TaskFn<'a>,
        period_ms: Millis,
        priority: TaskPriority,
        name: &'static str,
    ) -> Self {
        Self {
            callback,
            period_ms,
            last_run_ms: 0,
            priority,
            name,
            run_count: 0,
        }
    }

    /// Check if the task's period has elapsed at `now`
    #[inline]
    pub fn is_due(&self, now: Millis) -> bool {
        elapsed_ms(now, self.last_run_ms) >= self.period_ms
    }

    /// Run the callback to completion and stamp the dispatch time
    #[inline]
    pub(crate) fn dispatch(&mut self, now: Millis) {
        (self.callback)();
        self.last_run_ms = now;
        self.run_count = self.run_count.wrapping_add(1);
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn period_ms(&self) -> Millis {
        self.period_ms
    }

    #[inline(always)]
    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    #[inline(always)]
    pub fn last_run_ms(&self) -> Millis {
        self.last_run_ms
    }

    #[inline(always)]
    pub fn run_count(&self) -> u32 {
        self.run_count
    }

    /// Copy out the diagnostic fields
    pub fn info(&self) -> TaskInfo {
        TaskInfo {
            name: self.name,
            period_ms: self.period_ms,
            priority: self.priority,
            last_run_ms: self.last_run_ms,
            run_count: self.run_count,
        }
    }
}

/// Diagnostic view of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskInfo {
    pub name: &'static str,
    pub period_ms: Millis,
    pub priority: TaskPriority,
    pub last_run_ms: Millis,
    pub run_count: u32,
}
