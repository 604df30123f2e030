//! Firmware application tasks
//!
//! Each factory returns a closure that owns its private state (edge
//! detectors, counters) and borrows the shared context and HAL.

mod tasks;

pub use tasks::{
    button_handler_task, led_blink_task, sensor_read_task, system_monitor_task,
};

use crate::error::OsResult;
use crate::hal::Hal;
use crate::kernel::SystemContext;
use crate::sched::Scheduler;
use crate::time::Clock;
use crate::types::{Millis, TaskPriority};

pub const LED_BLINK_PERIOD_MS: Millis = 500;
pub const SENSOR_READ_PERIOD_MS: Millis = 200;
pub const BUTTON_HANDLER_PERIOD_MS: Millis = 50;
pub const SYSTEM_MONITOR_PERIOD_MS: Millis = 500;

/// Register the standard firmware task set
///
/// | Task           | Period | Priority |
/// |----------------|--------|----------|
/// | LED_BLINK      | 500 ms | Low      |
/// | SENSOR_READ    | 200 ms | Medium   |
/// | BUTTON_HANDLER | 50 ms  | High     |
/// | SYSTEM_MONITOR | 500 ms | Low      |
pub fn register_default_tasks<'a, C, H>(
    sched: &mut Scheduler<'a, C>,
    ctx: &'a SystemContext,
    hal: &'a H,
) -> OsResult<()>
where
    C: Clock,
    H: Hal + ?Sized,
{
    sched.add_task(
        led_blink_task(ctx, hal),
        LED_BLINK_PERIOD_MS,
        TaskPriority::Low,
        "LED_BLINK",
    )?;
    sched.add_task(
        sensor_read_task(ctx, hal),
        SENSOR_READ_PERIOD_MS,
        TaskPriority::Medium,
        "SENSOR_READ",
    )?;
    sched.add_task(
        button_handler_task(ctx, hal),
        BUTTON_HANDLER_PERIOD_MS,
        TaskPriority::High,
        "BUTTON_HANDLER",
    )?;
    sched.add_task(
        system_monitor_task(ctx, SYSTEM_MONITOR_PERIOD_MS),
        SYSTEM_MONITOR_PERIOD_MS,
        TaskPriority::Low,
        "SYSTEM_MONITOR",
    )?;
    Ok(())
}
