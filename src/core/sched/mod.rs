//! Scheduler module
//!
//! Cooperative, run-to-completion periodic dispatch. Every pass reads the
//! clock once and invokes each due task in registration order; tasks never
//! interleave or preempt each other. Priority is carried for diagnostics
//! only and does not reorder a pass.
//!
//! A callback that never returns blocks the whole scheduler. There is no
//! per-task timeout and no way to interrupt a task in flight.

use alloc::boxed::Box;

use heapless::Vec;

use crate::config::{CFG_IDLE_SLEEP_MS, CFG_MAX_TASKS, CFG_WATCHDOG_REPORT_PASSES};
use crate::error::{OsError, OsResult};
use crate::status::StatusRegister;
use crate::task::{TaskDescriptor, TaskInfo};
use crate::time::Clock;
use crate::types::{Millis, SchedState, TaskPriority};

/// Fixed-capacity periodic task scheduler
pub struct Scheduler<'a, C: Clock> {
    tasks: Vec<TaskDescriptor<'a>, CFG_MAX_TASKS>,
    clock: C,
    status: &'a StatusRegister,
    state: SchedState,
    idle_ms: Millis,
    /// Diagnostic watchdog counter, one per pass
    passes: u32,
}

impl<'a, C: Clock> Scheduler<'a, C> {
    /// Create a scheduler in the registering state
    ///
    /// `status` supplies the running flag that `run()` polls.
    pub fn new(clock: C, status: &'a StatusRegister) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
            status,
            state: SchedState::Registering,
            idle_ms: CFG_IDLE_SLEEP_MS,
            passes: 0,
        }
    }

    /// Register a periodic task
    ///
    /// # Arguments
    /// * `callback` - Work to run each period
    /// * `period_ms` - Period in milliseconds (must be > 0)
    /// * `priority` - Advisory priority label
    /// * `name` - Task name for debugging
    ///
    /// # Returns
    /// * `Ok(())` - Task added to the table
    /// * `Err(OsError::InvalidPeriod)` - `period_ms` is zero
    /// * `Err(OsError::CapacityExceeded)` - Table already holds `CFG_MAX_TASKS`
    /// * `Err(OsError::SchedRunning)` - Dispatch has already begun
    pub fn add_task<F>(
        &mut self,
        callback: F,
        period_ms: Millis,
        priority: TaskPriority,
        name: &'static str,
    ) -> OsResult<()>
    where
        F: FnMut() + Send + 'a,
    {
        if self.state != SchedState::Registering {
            return Err(OsError::SchedRunning);
        }

        if period_ms == 0 {
            return Err(OsError::InvalidPeriod);
        }

        if self.tasks.is_full() {
            crate::warn!("[SCHEDULER] task table full, rejected {}", name);
            return Err(OsError::CapacityExceeded);
        }

        let task = TaskDescriptor::new(Box::new(callback), period_ms, priority, name);
        self.tasks
            .push(task)
            .map_err(|_| OsError::CapacityExceeded)?;

        crate::info!(
            "[SCHEDULER] added task {} (period {} ms, priority {})",
            name,
            period_ms,
            priority.as_str()
        );
        Ok(())
    }

    /// Run one scheduling pass
    ///
    /// Reads the clock once, dispatches every task whose period has elapsed
    /// and stamps it with that reading. The first pass closes registration.
    ///
    /// # Returns
    /// Number of callbacks invoked (0 once stopped)
    pub fn tick(&mut self) -> usize {
        match self.state {
            SchedState::Stopped => return 0,
            SchedState::Registering => self.state = SchedState::Running,
            SchedState::Running => {}
        }

        let now = self.clock.now_ms();
        let mut dispatched = 0;

        for task in self.tasks.iter_mut() {
            if task.is_due(now) {
                task.dispatch(now);
                dispatched += 1;
            }
        }

        self.passes = self.passes.wrapping_add(1);
        if self.passes % CFG_WATCHDOG_REPORT_PASSES == 0 {
            crate::info!("[WATCHDOG] system alive after {} passes", self.passes);
        }

        dispatched
    }

    /// Dispatch loop
    ///
    /// Alternates `tick()` with the idle sleep while the running flag is set.
    /// The flag is only checked between passes, so shutdown takes at most one
    /// idle interval plus the task in flight.
    ///
    /// # Returns
    /// * `Ok(())` - Running flag observed false, scheduler stopped
    /// * `Err(OsError::SchedStopped)` - Called on a stopped scheduler
    pub fn run(&mut self) -> OsResult<()> {
        if self.state == SchedState::Stopped {
            return Err(OsError::SchedStopped);
        }

        self.state = SchedState::Running;
        crate::info!("[SCHEDULER] starting with {} tasks", self.tasks.len());

        while self.status.is_running() {
            self.tick();
            self.clock.sleep_ms(self.idle_ms);
        }

        self.state = SchedState::Stopped;
        crate::info!("[SCHEDULER] shutdown after {} passes", self.passes);
        Ok(())
    }

    /// Override the idle sleep between passes (ignored if zero)
    pub fn set_idle_interval(&mut self, ms: Millis) {
        if ms > 0 {
            self.idle_ms = ms;
        }
    }

    #[inline(always)]
    pub fn idle_interval(&self) -> Millis {
        self.idle_ms
    }

    #[inline(always)]
    pub fn state(&self) -> SchedState {
        self.state
    }

    #[inline(always)]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Completed passes (diagnostic watchdog counter)
    #[inline(always)]
    pub fn pass_count(&self) -> u32 {
        self.passes
    }

    /// Registered tasks, in registration order
    #[inline(always)]
    pub fn tasks(&self) -> &[TaskDescriptor<'a>] {
        &self.tasks
    }

    /// Diagnostic view of every registered task, in registration order
    pub fn task_infos(&self) -> Vec<TaskInfo, CFG_MAX_TASKS> {
        self.tasks.iter().map(TaskDescriptor::info).collect()
    }

    /// Look up a task by name
    pub fn find_task(&self, name: &str) -> Option<TaskInfo> {
        self.tasks.iter().find(|t| t.name == name).map(TaskDescriptor::info)
    }

    /// Status register holding the running flag
    #[inline(always)]
    pub fn status(&self) -> &'a StatusRegister {
        self.status
    }

    #[inline(always)]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
