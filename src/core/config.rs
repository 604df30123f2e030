//! Compile-time configuration
//!
//! These constants control the behavior and resource limits of the firmware
//! core.

/// Maximum number of registered tasks
pub const CFG_MAX_TASKS: usize = 10;

/// Memory pool capacity in bytes
pub const CFG_POOL_SIZE: usize = 1024;

/// Idle sleep between scheduler passes in milliseconds
pub const CFG_IDLE_SLEEP_MS: u32 = 10;

/// Scheduler passes between watchdog "alive" reports
pub const CFG_WATCHDOG_REPORT_PASSES: u32 = 1000;

/// Monitor task runs between status reports
pub const CFG_MONITOR_REPORT_RUNS: u32 = 20;

/// LED blinks between heartbeat reports
pub const CFG_HEARTBEAT_REPORT_BLINKS: u32 = 10;

/// Lower bound of the normal sensor band
pub const CFG_SENSOR_MIN: u16 = 200;

/// Upper bound of the normal sensor band
pub const CFG_SENSOR_MAX: u16 = 800;

/// Time spent in simulated low power mode in milliseconds
pub const CFG_LOW_POWER_MS: u32 = 100;

/// Controller poll interval in milliseconds
pub const CFG_DRIVER_POLL_MS: u64 = 10;

/// Firmware version reported at boot
pub const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");
