//! RP2040-specific HAL for the access terminal firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `portier-hal` traits on top of `embassy-rp` blocking peripherals:
//!
//! - Push-pull outputs for the display bus and lock relay
//! - Polled UART receive/transmit with line-error mapping

#![no_std]

pub mod gpio;
pub mod uart;

pub use gpio::RpOutput;
pub use uart::{uart_config, RpUartRx, RpUartTx};

// Re-export shared traits from portier-hal for convenience
pub use portier_hal::{OutputPin, UartRx, UartTx};
