//! GPIO pin abstractions
//!
//! The terminal only drives outputs: four display data lines, the display
//! register-select and enable lines, and the lock relay. Pin direction is
//! fixed when the chip HAL hands out an output, so there is no runtime
//! direction switching here.

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl Level {
    /// Level of a single bit in `value`
    pub const fn of_bit(value: u8, bit: u8) -> Self {
        if (value >> bit) & 0x01 != 0 {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital output pin
///
/// Writes are infallible: the terminal has no way to sense a stuck line,
/// so implementations swallow whatever the chip reports.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to `level`
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(bool);

    impl OutputPin for Line {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_level_of_bit() {
        assert_eq!(Level::of_bit(0b1000_0000, 7), Level::High);
        assert_eq!(Level::of_bit(0b1000_0000, 6), Level::Low);
        assert_eq!(Level::of_bit(0x01, 0), Level::High);
    }

    #[test]
    fn test_set_level() {
        let mut line = Line(false);
        line.set_level(Level::High);
        assert!(line.is_set_high());
        line.set_level(Level::from(false));
        assert!(!line.is_set_high());
    }

    #[test]
    fn test_borrowed_pin_drives_owner() {
        fn drive<P: OutputPin>(mut pin: P) {
            pin.set_high();
        }

        let mut line = Line(false);
        drive(&mut line);
        assert!(line.0);
    }
}
