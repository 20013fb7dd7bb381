//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the capability traits
//! defined in portier-core, written against the portier-hal traits:
//!
//! - HD44780 character display (4-bit parallel bus)
//! - Badge reader serial channel with line-fault recovery
//! - Relay-driven door lock

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod lock;
pub mod serial;

pub use display::{Hd44780, Hd44780Pins};
pub use lock::RelayLock;
pub use serial::SerialChannel;
