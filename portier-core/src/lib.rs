//! Board-agnostic core logic for the badge access terminal
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Badge identifiers and the in-line tag assembler
//! - Access policy (exact-match allow-list)
//! - Verification state machine
//! - The terminal: scan, evaluate, drive display and lock
//! - Capability traits the drivers implement
//! - Fixed timing, message and hardware constants

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod identifier;
pub mod policy;
pub mod state;
pub mod terminal;
pub mod traits;

pub use identifier::{Identifier, IdentifierError, TagAssembler, TAG_LEN};
pub use policy::{AccessPolicy, Decision};
pub use terminal::Terminal;
