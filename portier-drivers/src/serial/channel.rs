//! Badge reader serial channel
//!
//! Wraps a UART pair and hides line faults from the terminal. A framing,
//! overrun, parity or break condition restarts the receiver and drops the
//! affected byte; callers only ever see good bytes.

use portier_core::traits::ByteSource;
use portier_hal::{BaudDivisor, UartConfig, UartRx, UartTx};

/// Serial link to the badge reader
pub struct SerialChannel<R, W> {
    rx: R,
    tx: W,
    /// Line faults recovered since the last `initialize`
    line_errors: u32,
}

impl<R: UartRx, W: UartTx> SerialChannel<R, W> {
    pub fn new(rx: R, tx: W) -> Self {
        Self {
            rx,
            tx,
            line_errors: 0,
        }
    }

    /// Restart the receiver from a clean state
    ///
    /// The UART itself is opened by the platform with `config`; this works
    /// out the divisor that configuration lands on at `clock_hz`, reports
    /// it, and returns it.
    pub fn initialize(&mut self, config: &UartConfig, clock_hz: u32) -> BaudDivisor {
        let divisor = config.divisor(clock_hz);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "UART {} baud: divisor {}+{}/64, actual {} baud ({}/1000 off)",
            config.baudrate,
            divisor.integer,
            divisor.fraction,
            divisor.actual_baudrate(clock_hz),
            config.baud_error_permille(clock_hz)
        );

        self.rx.restart_receiver();
        self.line_errors = 0;
        divisor
    }

    /// Block until a good byte arrives
    pub fn read_byte(&mut self) -> u8 {
        loop {
            match self.rx.read_byte() {
                Ok(byte) => return byte,
                Err(_error) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("UART line error: {}", _error);

                    self.line_errors = self.line_errors.saturating_add(1);
                    self.rx.restart_receiver();
                }
            }
        }
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.tx.write_byte(byte);
    }

    pub fn write_text(&mut self, text: &str) {
        for byte in text.bytes() {
            self.write_byte(byte);
        }
    }

    /// Block until everything written has left the wire
    pub fn flush(&mut self) {
        self.tx.flush();
    }

    /// Line faults recovered so far
    pub fn line_errors(&self) -> u32 {
        self.line_errors
    }
}

impl<R: UartRx, W: UartTx> ByteSource for SerialChannel<R, W> {
    fn read_byte(&mut self) -> u8 {
        SerialChannel::read_byte(self)
    }
}
