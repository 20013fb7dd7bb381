//! Door lock actuators

pub mod relay;

pub use relay::RelayLock;
