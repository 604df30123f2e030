//! Lifecycle tests for the threaded driver
//!
//! These run the scheduler on a real worker thread against the host clock.
//! Timing bounds are deliberately loose to tolerate loaded CI machines.

#[cfg(test)]
mod driver_tests {
    use std::cell::Cell;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;
    use std::time::Duration;

    use coopos::app::register_default_tasks;
    use coopos::driver::{Driver, ShutdownCause, ShutdownTrigger};
    use coopos::error::OsError;
    use coopos::hal::SimHal;
    use coopos::kernel::{system_init, SystemContext};
    use coopos::sched::Scheduler;
    use coopos::status::StatusRegister;
    use coopos::types::TaskPriority;
    use coopos::StdClock;

    #[test]
    fn test_elapsed_shutdown_joins_worker() {
        let status = StatusRegister::new();
        let runs = AtomicU32::new(0);
        let mut sched = Scheduler::new(StdClock::new(), &status);
        sched
            .add_task(|| { runs.fetch_add(1, Ordering::Relaxed); }, 20, TaskPriority::Medium, "work")
            .unwrap();

        let report = Driver::new(ShutdownTrigger::After(Duration::from_millis(200)))
            .run(sched)
            .unwrap();

        assert_eq!(report.cause, ShutdownCause::Elapsed);
        assert!(!report.final_status.running);
        assert!(report.passes > 0);
        assert!(report.shutdown_latency < Duration::from_millis(500));
        assert!(report.elapsed >= Duration::from_millis(200));

        let after_join = runs.load(Ordering::Relaxed);
        assert!(after_join > 0);
        assert_eq!(report.tasks[0].run_count, after_join);

        // Nothing runs once the driver has returned
        thread::sleep(Duration::from_millis(60));
        assert_eq!(runs.load(Ordering::Relaxed), after_join);
    }

    #[test]
    fn test_task_requested_shutdown() {
        let status = StatusRegister::new();
        let runs = AtomicU32::new(0);
        let mut sched = Scheduler::new(StdClock::new(), &status);
        sched
            .add_task(
                || {
                    if runs.fetch_add(1, Ordering::Relaxed) + 1 == 5 {
                        status.critical_error();
                    }
                },
                10,
                TaskPriority::Critical,
                "fault",
            )
            .unwrap();

        let report = Driver::new(ShutdownTrigger::OnRequest).run(sched).unwrap();

        assert_eq!(report.cause, ShutdownCause::Requested);
        assert_eq!(runs.load(Ordering::Relaxed), 5);
        assert!(!status.is_running());
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let status = StatusRegister::new();
        let mut sched = Scheduler::new(StdClock::new(), &status);
        sched
            .add_task(|| panic!("task fault"), 10, TaskPriority::High, "panics")
            .unwrap();

        let result = Driver::new(ShutdownTrigger::After(Duration::from_secs(5))).run(sched);

        assert_eq!(result.unwrap_err(), OsError::WorkerPanicked);
        assert!(!status.is_running());
    }

    #[test]
    fn test_monitor_observes_status() {
        let status = StatusRegister::new();
        let polls = Cell::new(0u32);
        let mut sched = Scheduler::new(StdClock::new(), &status);
        sched
            .add_task(|| status.set_sensor_value(42), 10, TaskPriority::Low, "sensor")
            .unwrap();

        let last_seen = Cell::new(0u16);
        Driver::new(ShutdownTrigger::After(Duration::from_millis(150)))
            .poll_interval(Duration::from_millis(5))
            .on_poll(|snap| {
                polls.set(polls.get() + 1);
                last_seen.set(snap.sensor_value);
            })
            .run(sched)
            .unwrap();

        assert!(polls.get() > 1);
        assert_eq!(last_seen.get(), 42);
    }

    #[test]
    fn test_firmware_lifecycle() {
        let clock = StdClock::new();
        let ctx = SystemContext::new();
        let hal = SimHal::new(clock);
        assert!(system_init(&ctx, &hal));

        let buf = ctx.pool.allocate(64).unwrap();
        let mut sched = Scheduler::new(clock, &ctx.status);
        register_default_tasks(&mut sched, &ctx, &hal).unwrap();

        let report = Driver::new(ShutdownTrigger::After(Duration::from_millis(600)))
            .run(sched)
            .unwrap();

        let button = report.tasks.iter().find(|t| t.name == "BUTTON_HANDLER").unwrap();
        assert!(button.run_count >= 1);
        // Button reads pressed during the first two seconds
        assert_eq!(report.final_status.button_press_count, 1);
        assert_ne!(report.final_status.sensor_value, 0);

        ctx.pool.deallocate(buf, 64).unwrap();
        assert_eq!(ctx.pool.used(), 0);
    }
}
