//! Hardware capability traits
//!
//! These traits define the interface between the terminal logic
//! and hardware-specific implementations.

pub mod display;
pub mod lock;
pub mod serial;

pub use display::{CharacterDisplay, DisplayExt};
pub use lock::LockActuator;
pub use serial::ByteSource;
