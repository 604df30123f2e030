//! Shared status register
//!
//! Each field is independently atomic. There is no cross-field invariant and
//! no lock: writers publish the latest value, readers see the latest value,
//! and a reader may miss intermediate writes between its reads.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

/// Process-wide firmware status
pub struct StatusRegister {
    led_state: AtomicBool,
    running: AtomicBool,
    sensor_value: AtomicU16,
    button_press_count: AtomicU32,
}

/// Point-in-time copy of the status fields
///
/// Each field is read separately; the copy is not a consistent snapshot
/// across fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    pub led_state: bool,
    pub running: bool,
    pub sensor_value: u16,
    pub button_press_count: u32,
}

impl StatusRegister {
    /// New register with the system marked running
    pub const fn new() -> Self {
        Self {
            led_state: AtomicBool::new(false),
            running: AtomicBool::new(true),
            sensor_value: AtomicU16::new(0),
            button_press_count: AtomicU32::new(0),
        }
    }

    // ============ LED ============

    #[inline(always)]
    pub fn led_state(&self) -> bool {
        self.led_state.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn set_led_state(&self, on: bool) {
        self.led_state.store(on, Ordering::Relaxed);
    }

    /// Flip the LED flag and return the new state
    #[inline]
    pub fn toggle_led(&self) -> bool {
        !self.led_state.fetch_xor(true, Ordering::Relaxed)
    }

    // ============ Running flag ============

    /// Check if the system should keep running
    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ask the scheduler loop to exit at its next suspension point
    #[inline(always)]
    pub fn request_shutdown(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Simulated critical-error interrupt: emergency shutdown
    pub fn critical_error(&self) {
        crate::error!("[ISR] critical error detected - emergency shutdown");
        self.request_shutdown();
    }

    // ============ Sensor ============

    #[inline(always)]
    pub fn sensor_value(&self) -> u16 {
        self.sensor_value.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn set_sensor_value(&self, value: u16) {
        self.sensor_value.store(value, Ordering::Relaxed);
    }

    // ============ Button ============

    #[inline(always)]
    pub fn button_press_count(&self) -> u32 {
        self.button_press_count.load(Ordering::Relaxed)
    }

    /// Count one button press and return the new total
    #[inline]
    pub fn record_button_press(&self) -> u32 {
        self.button_press_count.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Read every field
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            led_state: self.led_state(),
            running: self.is_running(),
            sensor_value: self.sensor_value(),
            button_press_count: self.button_press_count(),
        }
    }
}

impl Default for StatusRegister {
    fn default() -> Self {
        Self::new()
    }
}
