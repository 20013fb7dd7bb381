//! Display messages
//!
//! Exact strings shown on the 16x2 display. Each must fit on one line.

use super::hardware::DISPLAY_COLUMNS;

/// One-time boot splash
pub const SPLASH: &str = "Systeme Securite";

/// Idle prompt shown whenever the terminal waits for a badge
pub const IDLE_PROMPT: &str = "Scan Badge...";

/// Shown while the lock is engaged
pub const ACCESS_GRANTED: &str = "Acces Autorise";

/// Shown after a badge is refused
pub const ACCESS_DENIED: &str = "Acces Refuse";

const fn fits(message: &str) -> bool {
    message.len() <= DISPLAY_COLUMNS
}

const _: () = assert!(
    fits(SPLASH) && fits(IDLE_PROMPT) && fits(ACCESS_GRANTED) && fits(ACCESS_DENIED)
);
