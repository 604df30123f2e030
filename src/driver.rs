//! Controller-side lifecycle driver
//!
//! Starts the scheduler's dispatch loop on a worker thread, watches the
//! status register from the calling thread, and on shutdown clears the
//! running flag and joins the worker. Once `Driver::run` returns, no task
//! callback is executing or will execute again.

use std::boxed::Box;
use std::thread;
use std::time::{Duration, Instant};

use heapless::Vec;

use crate::config::{CFG_DRIVER_POLL_MS, CFG_MAX_TASKS};
use crate::error::{OsError, OsResult};
use crate::sched::Scheduler;
use crate::status::StatusSnapshot;
use crate::task::TaskInfo;
use crate::time::Clock;

/// When the controller stops the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownTrigger {
    /// Stop after the given wall time
    After(Duration),
    /// Run until the running flag is cleared by someone else
    OnRequest,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownCause {
    /// The `After` duration elapsed
    Elapsed,
    /// The running flag was cleared elsewhere (task or critical error)
    Requested,
    /// The worker returned on its own
    WorkerExited,
}

impl ShutdownCause {
    pub const fn as_str(self) -> &'static str {
        match self {
            ShutdownCause::Elapsed => "elapsed",
            ShutdownCause::Requested => "requested",
            ShutdownCause::WorkerExited => "worker exited",
        }
    }
}

/// Outcome of a driven run
#[derive(Debug, Clone)]
pub struct DriverReport {
    pub cause: ShutdownCause,
    /// Scheduler passes completed
    pub passes: u32,
    /// Per-task diagnostics after the worker stopped
    pub tasks: Vec<TaskInfo, CFG_MAX_TASKS>,
    /// Status register after the join
    pub final_status: StatusSnapshot,
    /// Wall time from start to join
    pub elapsed: Duration,
    /// Wall time from clearing the running flag to the join
    pub shutdown_latency: Duration,
}

type Monitor<'m> = Box<dyn FnMut(StatusSnapshot) + 'm>;

/// Runs a scheduler on a dedicated thread until a shutdown trigger fires
pub struct Driver<'m> {
    trigger: ShutdownTrigger,
    poll_interval: Duration,
    monitor: Option<Monitor<'m>>,
}

impl<'m> Driver<'m> {
    pub fn new(trigger: ShutdownTrigger) -> Self {
        Self {
            trigger,
            poll_interval: Duration::from_millis(CFG_DRIVER_POLL_MS),
            monitor: None,
        }
    }

    /// How often the controller thread checks for shutdown
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Observe the status register on every controller poll
    pub fn on_poll<F>(mut self, f: F) -> Self
    where
        F: FnMut(StatusSnapshot) + 'm,
    {
        self.monitor = Some(Box::new(f));
        self
    }

    /// Start the scheduler and block until it has stopped
    ///
    /// # Returns
    /// * `Ok(report)` - Worker joined after shutdown
    /// * `Err(OsError::WorkerPanicked)` - A task panicked on the worker
    /// * `Err(OsError::SchedStopped)` - The scheduler had already stopped
    pub fn run<C>(mut self, mut scheduler: Scheduler<'_, C>) -> OsResult<DriverReport>
    where
        C: Clock + Send,
    {
        let status = scheduler.status();
        let started = Instant::now();

        thread::scope(|s| {
            let worker = s.spawn(move || {
                let result = scheduler.run();
                (scheduler, result)
            });

            let cause = loop {
                if !status.is_running() {
                    break ShutdownCause::Requested;
                }
                if worker.is_finished() {
                    break ShutdownCause::WorkerExited;
                }
                if let ShutdownTrigger::After(limit) = self.trigger {
                    if started.elapsed() >= limit {
                        break ShutdownCause::Elapsed;
                    }
                }
                if let Some(monitor) = self.monitor.as_mut() {
                    monitor(status.snapshot());
                }
                thread::sleep(self.poll_interval);
            };

            crate::info!("[SYSTEM] shutdown signal received ({})", cause.as_str());
            status.request_shutdown();
            let stop_requested = Instant::now();

            let (scheduler, result) = worker.join().map_err(|_| {
                crate::error!("[SYSTEM] scheduler thread panicked");
                OsError::WorkerPanicked
            })?;
            let shutdown_latency = stop_requested.elapsed();
            result?;

            crate::info!(
                "[SYSTEM] scheduler joined {} ms after shutdown request",
                shutdown_latency.as_millis() as u64
            );

            Ok(DriverReport {
                cause,
                passes: scheduler.pass_count(),
                tasks: scheduler.task_infos(),
                final_status: status.snapshot(),
                elapsed: started.elapsed(),
                shutdown_latency,
            })
        })
    }
}
