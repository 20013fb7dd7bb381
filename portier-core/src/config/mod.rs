//! Compile-time configuration
//!
//! Everything here is fixed at build time. The authorized tag list is not:
//! it is supplied by the firmware build (see `portier-firmware/access.toml`).

pub mod hardware;
pub mod messages;
pub mod timing;

pub use hardware::*;
pub use messages::*;
pub use timing::*;
