//! Portier Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the access terminal
//! drivers are written against. Chip-specific HALs implement them, and host
//! tests implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  portier-drivers / portier-firmware     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  portier-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ portier-hal-  │       │  host test    │
//! │    rp2040     │       │   doubles     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (display bus, lock relay)
//! - [`uart::UartRx`], [`uart::UartTx`] - Polled serial communication
//!
//! Blocking delays are not abstracted here: drivers use
//! `embedded_hal::delay::DelayNs` directly.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{Level, OutputPin};
pub use uart::{BaudDivisor, LineError, UartConfig, UartRx, UartTx};
