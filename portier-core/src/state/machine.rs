//! State machine definition
//!
//! The terminal alternates between waiting for a badge and acting on one.
//! There is no terminal state and no error state: a refused badge is a
//! normal outcome, and line faults never reach this level.

use super::events::Event;

/// Terminal states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on configuration and boot splash
    Boot,
    /// Collecting tag characters from the reader
    AwaitingScan,
    /// Checking a complete tag and running the grant/refuse sequence
    Evaluating,
}

impl State {
    /// Check if received bytes are being collected in this state
    pub fn accepts_input(&self) -> bool {
        matches!(self, State::AwaitingScan)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Boot, BootComplete) => AwaitingScan,
            (AwaitingScan, TagComplete) => Evaluating,
            (Evaluating, EvaluationFinished) => AwaitingScan,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_to_awaiting_scan() {
        let state = State::Boot;
        let next = state.transition(Event::BootComplete);
        assert_eq!(next, State::AwaitingScan);
    }

    #[test]
    fn test_scan_cycle() {
        let scanning = State::AwaitingScan;

        let evaluating = scanning.transition(Event::TagComplete);
        assert_eq!(evaluating, State::Evaluating);

        let back = evaluating.transition(Event::EvaluationFinished);
        assert_eq!(back, State::AwaitingScan);
    }

    #[test]
    fn test_boot_ignores_scan_events() {
        assert_eq!(State::Boot.transition(Event::TagComplete), State::Boot);
        assert_eq!(
            State::Boot.transition(Event::EvaluationFinished),
            State::Boot
        );
    }

    #[test]
    fn test_no_reentry_into_boot() {
        for state in [State::AwaitingScan, State::Evaluating] {
            assert_ne!(state.transition(Event::BootComplete), State::Boot);
        }
    }

    #[test]
    fn test_evaluation_cannot_be_interrupted_by_a_new_tag() {
        assert_eq!(
            State::Evaluating.transition(Event::TagComplete),
            State::Evaluating
        );
    }

    #[test]
    fn test_input_gating() {
        assert!(State::AwaitingScan.accepts_input());
        assert!(!State::Evaluating.accepts_input());
        assert!(!State::Boot.accepts_input());
    }
}
