//! Relay lock output
//!
//! Door strike or magnetic lock switched through a relay on one GPIO line.
//! The line is active-high: high releases the door, low locks it.

use portier_core::traits::LockActuator;
use portier_hal::OutputPin;

/// Relay-driven door lock
pub struct RelayLock<P> {
    pin: P,
    /// Current logical state (true = door released)
    engaged: bool,
}

impl<P: OutputPin> RelayLock<P> {
    /// Take the relay line and drive it low (locked)
    pub fn new(pin: P) -> Self {
        let mut lock = Self {
            pin,
            engaged: false,
        };
        lock.drive(false);
        lock
    }

    fn drive(&mut self, engaged: bool) {
        self.engaged = engaged;

        if engaged {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

impl<P: OutputPin> LockActuator for RelayLock<P> {
    fn engage(&mut self) {
        self.drive(true);
    }

    fn disengage(&mut self) {
        self.drive(false);
    }

    fn is_engaged(&self) -> bool {
        self.engaged
    }
}
