//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Peripherals configured, splash shown, idle prompt up
    BootComplete,
    /// Ten accepted characters assembled into an identifier
    TagComplete,
    /// Grant or refusal sequence finished, idle prompt restored
    EvaluationFinished,
}
