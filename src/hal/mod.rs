//! Hardware abstraction layer
//!
//! The boundary between the firmware core and the board. Implementations are
//! assumed infallible; every call succeeds from the core's point of view.

mod sim;

pub use sim::SimHal;

/// Status LED output pin
pub const LED_PIN: u8 = 13;

/// User button input pin
pub const BUTTON_PIN: u8 = 2;

/// Board I/O used by the firmware tasks
///
/// Methods take `&self` so one HAL can be shared by several task closures.
pub trait Hal: Sync {
    /// One-time GPIO bring-up
    fn init_gpio(&self);

    /// One-time ADC bring-up
    fn init_adc(&self);

    /// One-time timer bring-up
    fn init_timer(&self);

    /// Drive an output pin
    fn digital_write(&self, pin: u8, state: bool);

    /// Sample an input pin
    fn digital_read(&self, pin: u8) -> bool;

    /// Sample the ADC
    fn analog_read(&self) -> u16;
}
