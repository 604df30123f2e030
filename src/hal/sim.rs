//! Simulated board
//!
//! Stands in for real registers on a host: the ADC walks through a fixed
//! sawtooth, the button reads pressed for the first two seconds of every ten
//! second window, and output pins land in an observable latch.

use portable_atomic::{AtomicU16, AtomicU32, AtomicU8, Ordering};

use super::{Hal, BUTTON_PIN};
use crate::time::{elapsed_ms, Clock};
use crate::types::Millis;

/// ADC value before the first sample
const ADC_START: u16 = 512;
/// ADC step per sample
const ADC_STEP: u16 = 17;
/// ADC full scale (exclusive)
const ADC_RANGE: u16 = 1024;

/// Button press window length
const BUTTON_WINDOW_MS: Millis = 10_000;
/// Pressed portion at the start of each window
const BUTTON_PRESSED_MS: Millis = 2_000;

const INIT_GPIO: u8 = 1 << 0;
const INIT_ADC: u8 = 1 << 1;
const INIT_TIMER: u8 = 1 << 2;

/// Simulated HAL driven by a [`Clock`]
pub struct SimHal<C: Clock> {
    clock: C,
    start_ms: Millis,
    adc: AtomicU16,
    outputs: AtomicU32,
    init: AtomicU8,
}

impl<C: Clock> SimHal<C> {
    pub fn new(clock: C) -> Self {
        let start_ms = clock.now_ms();
        Self {
            clock,
            start_ms,
            adc: AtomicU16::new(ADC_START),
            outputs: AtomicU32::new(0),
            init: AtomicU8::new(0),
        }
    }

    /// Last level written to an output pin
    pub fn output_state(&self, pin: u8) -> bool {
        pin < 32 && self.outputs.load(Ordering::Acquire) & (1 << pin) != 0
    }

    /// Check that GPIO, ADC and timer were all brought up
    pub fn is_initialized(&self) -> bool {
        self.init.load(Ordering::Acquire) == INIT_GPIO | INIT_ADC | INIT_TIMER
    }

    fn button_pressed(&self) -> bool {
        let elapsed = elapsed_ms(self.clock.now_ms(), self.start_ms);
        elapsed % BUTTON_WINDOW_MS < BUTTON_PRESSED_MS
    }
}

impl<C: Clock + Sync> Hal for SimHal<C> {
    fn init_gpio(&self) {
        self.init.fetch_or(INIT_GPIO, Ordering::AcqRel);
        crate::info!("[HAL] GPIO initialized");
    }

    fn init_adc(&self) {
        self.init.fetch_or(INIT_ADC, Ordering::AcqRel);
        crate::info!("[HAL] ADC initialized");
    }

    fn init_timer(&self) {
        self.init.fetch_or(INIT_TIMER, Ordering::AcqRel);
        crate::info!("[HAL] timer initialized");
    }

    fn digital_write(&self, pin: u8, state: bool) {
        if pin < 32 {
            if state {
                self.outputs.fetch_or(1 << pin, Ordering::AcqRel);
            } else {
                self.outputs.fetch_and(!(1 << pin), Ordering::AcqRel);
            }
        }
        crate::trace!("[HAL] pin {} set to {}", pin, if state { "HIGH" } else { "LOW" });
    }

    fn digital_read(&self, pin: u8) -> bool {
        if pin == BUTTON_PIN {
            self.button_pressed()
        } else {
            self.output_state(pin)
        }
    }

    fn analog_read(&self) -> u16 {
        let prev = self
            .adc
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| {
                Some((v + ADC_STEP) % ADC_RANGE)
            })
            .unwrap_or_else(|v| v);
        (prev + ADC_STEP) % ADC_RANGE
    }
}
