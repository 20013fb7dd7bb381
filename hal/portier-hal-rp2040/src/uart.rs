//! Polled UART on the RP2040 PL011
//!
//! The badge reader link runs on a blocking (non-DMA, non-interrupt) UART.
//! Every read spins on the receive FIFO, every write spins on the transmit
//! FIFO, matching the single foreground loop the terminal runs.

use embassy_rp::uart::{self, Blocking};
use portier_hal::uart::{DataBits, Parity, StopBits};
use portier_hal::{LineError, UartConfig, UartRx, UartTx};

#[cfg(feature = "defmt")]
use defmt::trace;

/// Translate a shared [`UartConfig`] into the embassy-rp configuration
///
/// embassy-rp programs the integer/fractional baud divisor from this when
/// the UART is constructed.
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

fn line_error(e: uart::Error) -> LineError {
    #[allow(unreachable_patterns)]
    match e {
        uart::Error::Framing => LineError::Framing,
        uart::Error::Overrun => LineError::Overrun,
        uart::Error::Parity => LineError::Parity,
        uart::Error::Break => LineError::Break,
        _ => LineError::Framing,
    }
}

/// Receive half of the badge reader UART
pub struct RpUartRx<'d> {
    rx: uart::UartRx<'d, Blocking>,
}

impl<'d> RpUartRx<'d> {
    pub fn new(rx: uart::UartRx<'d, Blocking>) -> Self {
        Self { rx }
    }
}

impl UartRx for RpUartRx<'_> {
    fn read_byte(&mut self) -> Result<u8, LineError> {
        let mut buf = [0u8; 1];
        self.rx.blocking_read(&mut buf).map_err(line_error)?;
        Ok(buf[0])
    }

    fn restart_receiver(&mut self) {
        // The PL011 queues error flags with each FIFO entry, and the faulted
        // entry was popped by the read that reported it. The receiver keeps
        // running, so there is nothing left to re-enable.
        #[cfg(feature = "defmt")]
        trace!("UART receiver resynchronised");
    }
}

/// Transmit half of the badge reader UART
pub struct RpUartTx<'d> {
    tx: uart::UartTx<'d, Blocking>,
}

impl<'d> RpUartTx<'d> {
    pub fn new(tx: uart::UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for RpUartTx<'_> {
    fn write_byte(&mut self, byte: u8) {
        // Wait for the shift register to drain, not just for FIFO space.
        // Blocking TX on the PL011 has no fault to report, so the results
        // carry nothing.
        self.tx.blocking_flush().ok();
        self.tx.blocking_write(&[byte]).ok();
    }

    fn flush(&mut self) {
        self.tx.blocking_flush().ok();
    }
}
