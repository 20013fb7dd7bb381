//! Serial link drivers

pub mod channel;

pub use channel::SerialChannel;
