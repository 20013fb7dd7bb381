//! Fixed user-facing durations
//!
//! These are part of the terminal's observable behavior, not tuning knobs.

/// How long the boot splash stays up before the idle prompt
pub const SPLASH_MS: u32 = 2000;

/// How long the lock stays engaged after a match
pub const UNLOCK_DWELL_MS: u32 = 3000;

/// How long the refusal message stays up after a non-match
pub const DENIED_MS: u32 = 2000;
