//! Badge reader input trait

/// Blocking source of received bytes
///
/// Implementations deal with line faults themselves: a call returns only
/// once a good byte has arrived.
pub trait ByteSource {
    fn read_byte(&mut self) -> u8;
}
