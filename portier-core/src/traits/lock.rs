//! Lock actuator trait

/// Door lock output
///
/// Engaged means the door is released (relay energised). The terminal keeps
/// the lock disengaged except during the unlock dwell.
pub trait LockActuator {
    /// Release the door
    fn engage(&mut self);

    /// Lock the door
    fn disengage(&mut self);

    /// Check if the door is currently released
    fn is_engaged(&self) -> bool;
}
