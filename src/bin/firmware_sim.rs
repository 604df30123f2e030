//! Firmware simulation on the host
//!
//! Boots the simulated board, registers the standard task set, runs the
//! scheduler on a worker thread and shuts down after a fixed time.
//!
//! Usage: cargo run --bin firmware_sim [seconds]

use std::time::Duration;

use coopos::app::register_default_tasks;
use coopos::driver::{Driver, ShutdownTrigger};
use coopos::hal::SimHal;
use coopos::kernel::enter_low_power_mode;
use coopos::{system_init, Scheduler, StdClock, SystemContext};

const DEFAULT_RUN_SECS: u64 = 15;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    let run_secs = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_RUN_SECS);

    let clock = StdClock::new();
    let ctx = SystemContext::new();
    let hal = SimHal::new(clock);

    if !system_init(&ctx, &hal) {
        log::error!("boot aborted");
        std::process::exit(1);
    }

    let mut scheduler = Scheduler::new(clock, &ctx.status);
    if let Err(e) = register_default_tasks(&mut scheduler, &ctx, &hal) {
        log::error!("task registration failed: {}", e);
        std::process::exit(1);
    }

    let buffers = [64usize, 128]
        .into_iter()
        .filter_map(|size| match ctx.pool.allocate(size) {
            Ok(addr) => Some((addr, size)),
            Err(e) => {
                log::warn!("demo allocation of {} bytes failed: {}", size, e);
                None
            }
        })
        .collect::<Vec<_>>();

    log::info!("running for {} s", run_secs);
    let report = Driver::new(ShutdownTrigger::After(Duration::from_secs(run_secs)))
        .run(scheduler);

    match report {
        Ok(report) => {
            log::info!(
                "stopped ({}) after {} passes, shutdown latency {} ms",
                report.cause.as_str(),
                report.passes,
                report.shutdown_latency.as_millis()
            );
            for task in report.tasks.iter() {
                log::info!(
                    "  {:<16} {:>5} ms {:<8} ran {} times",
                    task.name,
                    task.period_ms,
                    task.priority.as_str(),
                    task.run_count
                );
            }
        }
        Err(e) => log::error!("scheduler failed: {}", e),
    }

    enter_low_power_mode(&clock);

    for (addr, size) in buffers {
        let _ = ctx.pool.deallocate(addr, size);
    }

    log::info!("firmware shutdown complete");
}
