//! Modem hardware reset line.
//!
//! The FONA's RST input is active-low with an internal pull-up.  A clean
//! reset is: hold high 10 ms, pull low 100 ms, release high.  Any
//! `embedded-hal` output pin and delay source can drive it, so the same
//! code runs on `esp_idf_hal::gpio::PinDriver` and on test doubles.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

const SETTLE_MS: u32 = 10;
const PULSE_MS: u32 = 100;

pub struct ResetLine<P, D> {
    pin: P,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> ResetLine<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// Run the reset pulse and leave the line released.
    pub fn pulse(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()?;
        self.delay.delay_ms(SETTLE_MS);
        self.pin.set_low()?;
        self.delay.delay_ms(PULSE_MS);
        self.pin.set_high()?;
        Ok(())
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
