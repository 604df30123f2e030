//! System context and boot sequence
//!
//! The status register and memory pool live in one explicitly owned
//! context, constructed once at startup and lent to the scheduler and task
//! closures by reference.

use crate::config::{CFG_LOW_POWER_MS, FIRMWARE_VERSION};
use crate::hal::Hal;
use crate::status::StatusRegister;
use crate::sync::SharedPool;
use crate::time::Clock;

/// Firmware-wide shared state
pub struct SystemContext {
    pub status: StatusRegister,
    pub pool: SharedPool,
}

impl SystemContext {
    pub const fn new() -> Self {
        Self {
            status: StatusRegister::new(),
            pool: SharedPool::new(),
        }
    }

    /// Check that the context is in its freshly booted state
    pub fn self_test(&self) -> bool {
        self.status.is_running() && self.pool.used() == 0
    }
}

impl Default for SystemContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Boot sequence
///
/// Brings up the HAL and runs the self-test. Must complete before any task
/// is registered.
///
/// # Returns
/// Result of the self-test
pub fn system_init<H: Hal + ?Sized>(ctx: &SystemContext, hal: &H) -> bool {
    crate::info!("[BOOT] firmware boot sequence");

    hal.init_gpio();
    hal.init_adc();
    hal.init_timer();

    crate::info!("[BOOT] running self-tests");
    let ok = ctx.self_test();
    if ok {
        crate::info!("[BOOT] all systems operational");
    } else {
        crate::error!("[BOOT] self-test failed");
    }
    crate::info!("[BOOT] firmware version {}", FIRMWARE_VERSION);

    ok
}

/// Simulated low power mode
///
/// Sleeps `CFG_LOW_POWER_MS` through `clock`.
pub fn enter_low_power_mode(clock: &impl Clock) {
    crate::info!("[POWER] entering low power mode");
    clock.sleep_ms(CFG_LOW_POWER_MS);
    crate::info!("[POWER] waking up from low power mode");
}
