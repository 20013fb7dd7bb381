//! UART serial communication abstractions
//!
//! Polled, blocking serial traits. The badge reader link is receive-driven:
//! the receiver is read one byte at a time and every call spins until the
//! hardware has something to hand over.

/// Receive fault reported by the UART alongside (instead of) a data byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Stop bit not where expected
    Framing,
    /// Receive FIFO/holding register overflowed
    Overrun,
    /// Parity bit mismatch
    Parity,
    /// Line held low for longer than a frame
    Break,
}

/// UART receiver
pub trait UartRx {
    /// Block until the receiver has a byte or flags a fault
    ///
    /// A returned [`LineError`] means the byte that raised it is gone; the
    /// caller decides whether to [`restart_receiver`](Self::restart_receiver).
    fn read_byte(&mut self) -> Result<u8, LineError>;

    /// Reset and re-enable the receive circuitry after a fault
    fn restart_receiver(&mut self);
}

/// UART transmitter
pub trait UartTx {
    /// Block until the transmit shift register is empty, then load `byte`
    fn write_byte(&mut self, byte: u8);

    /// Block until everything queued has left the wire
    fn flush(&mut self);
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

/// Largest integer divisor the baud generator accepts
const MAX_INTEGER_DIVISOR: u32 = 0xFFFF;

/// Baud generator setting for a 16x oversampling UART
///
/// `integer + fraction / 64` is the number of peripheral clock cycles per
/// oversample tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaudDivisor {
    /// Integer part of the divisor
    pub integer: u16,
    /// Fractional part in 1/64 steps (0-63)
    pub fraction: u8,
}

impl BaudDivisor {
    /// Baud rate the generator produces from `clock_hz`
    pub const fn actual_baudrate(&self, clock_hz: u32) -> u32 {
        let sixty_fourths = (self.integer as u64) * 64 + self.fraction as u64;
        ((clock_hz as u64 * 4) / sixty_fourths) as u32
    }
}

impl UartConfig {
    /// Standard 8N1 framing at `baudrate`
    pub const fn new_8n1(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }

    /// Compute the baud generator divisor for a peripheral clock
    ///
    /// Rounds the fractional part to the nearest 1/64 and clamps to the
    /// generator's range.
    pub const fn divisor(&self, clock_hz: u32) -> BaudDivisor {
        // Divisor in 1/128 steps so the 1/64 fraction can be rounded
        let div = (8 * clock_hz as u64) / self.baudrate as u64;
        let integer = (div >> 7) as u32;

        if integer == 0 {
            BaudDivisor {
                integer: 1,
                fraction: 0,
            }
        } else if integer >= MAX_INTEGER_DIVISOR {
            BaudDivisor {
                integer: MAX_INTEGER_DIVISOR as u16,
                fraction: 0,
            }
        } else {
            BaudDivisor {
                integer: integer as u16,
                fraction: (((div & 0x7F) + 1) / 2) as u8,
            }
        }
    }

    /// Deviation of the achieved baud rate from the target, in parts per thousand
    pub const fn baud_error_permille(&self, clock_hz: u32) -> u32 {
        let actual = self.divisor(clock_hz).actual_baudrate(clock_hz);
        let diff = if actual > self.baudrate {
            actual - self.baudrate
        } else {
            self.baudrate - actual
        };
        ((diff as u64 * 1000) / self.baudrate as u64) as u32
    }
}
