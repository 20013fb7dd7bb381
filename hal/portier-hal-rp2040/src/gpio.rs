//! GPIO outputs
//!
//! `embassy_rp::gpio::Output` already fixes the pin direction when it is
//! constructed; this wrapper only adapts it to [`portier_hal::OutputPin`].

use embassy_rp::gpio::Output;
use portier_hal::OutputPin;

/// RP2040 push-pull output
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap an already configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
