use crate::config::{
    CFG_HEARTBEAT_REPORT_BLINKS, CFG_MONITOR_REPORT_RUNS, CFG_SENSOR_MAX, CFG_SENSOR_MIN,
};
use crate::hal::{Hal, BUTTON_PIN, LED_PIN};
use crate::kernel::SystemContext;
use crate::types::Millis;

/// Toggle the status LED and report a heartbeat every few blinks
pub fn led_blink_task<'a, H>(ctx: &'a SystemContext, hal: &'a H) -> impl FnMut() + Send + 'a
where
    H: Hal + ?Sized,
{
    let mut blinks: u32 = 0;
    move || {
        let on = ctx.status.toggle_led();
        hal.digital_write(LED_PIN, on);

        blinks = blinks.wrapping_add(1);
        if blinks % CFG_HEARTBEAT_REPORT_BLINKS == 0 {
            crate::info!("[LED] heartbeat blink count: {}", blinks);
        }
    }
}

/// Publish the latest ADC reading, warning when it leaves the normal band
pub fn sensor_read_task<'a, H>(ctx: &'a SystemContext, hal: &'a H) -> impl FnMut() + Send + 'a
where
    H: Hal + ?Sized,
{
    move || {
        let value = hal.analog_read();
        ctx.status.set_sensor_value(value);

        if !(CFG_SENSOR_MIN..=CFG_SENSOR_MAX).contains(&value) {
            crate::warn!("[SENSOR] reading out of range: {}", value);
        }
    }
}

/// Count rising edges on the button input
pub fn button_handler_task<'a, H>(
    ctx: &'a SystemContext,
    hal: &'a H,
) -> impl FnMut() + Send + 'a
where
    H: Hal + ?Sized,
{
    let mut last_pressed = false;
    move || {
        let pressed = hal.digital_read(BUTTON_PIN);
        if pressed && !last_pressed {
            let count = ctx.status.record_button_press();
            crate::info!("[BUTTON] pressed, count {}", count);
            crate::info!("[SYSTEM] toggling LED blink rate");
        }
        last_pressed = pressed;
    }
}

/// Report the status register every `CFG_MONITOR_REPORT_RUNS` runs
///
/// Uptime is estimated as runs times `period_ms`.
pub fn system_monitor_task<'a>(
    ctx: &'a SystemContext,
    period_ms: Millis,
) -> impl FnMut() + Send + 'a {
    let mut runs: u32 = 0;
    move || {
        runs = runs.wrapping_add(1);
        if runs % CFG_MONITOR_REPORT_RUNS == 0 {
            let status = ctx.status.snapshot();
            crate::info!(
                "[MONITOR] led {} sensor {} presses {} uptime {} ms pool used {} bytes",
                if status.led_state { "ON" } else { "OFF" },
                status.sensor_value,
                status.button_press_count,
                runs.wrapping_mul(period_ms),
                ctx.pool.used()
            );
        }
    }
}
