//! Board wiring
//!
//! Pin assignments for the reference RP2040 board:
//!
//! | Signal        | GPIO      |
//! |---------------|-----------|
//! | UART0 TX / RX | 0 / 1     |
//! | Lock relay    | 2         |
//! | LCD RS        | 3         |
//! | LCD EN        | 4         |
//! | LCD D4..D7    | 6..9      |

use defmt::*;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::uart::Uart;
use embassy_rp::Peripherals;
use embassy_time::Delay;

use portier_core::config::SERIAL_BAUDRATE;
use portier_drivers::{Hd44780, Hd44780Pins, RelayLock, SerialChannel};
use portier_hal::UartConfig;
use portier_hal_rp2040::{uart_config, RpOutput, RpUartRx, RpUartTx};

/// UART reference clock (clk_peri) after `embassy_rp::init` defaults
pub const PERI_CLOCK_HZ: u32 = 125_000_000;

pub type BoardSerial = SerialChannel<RpUartRx<'static>, RpUartTx<'static>>;
pub type BoardDisplay = Hd44780<RpOutput<'static>, Delay>;
pub type BoardLock = RelayLock<RpOutput<'static>>;

/// Peripherals the terminal takes ownership of
pub struct Board {
    pub serial: BoardSerial,
    pub display: BoardDisplay,
    pub lock: BoardLock,
}

fn output(pin: Output<'static>) -> RpOutput<'static> {
    RpOutput::new(pin)
}

/// Configure every pin and bring up the display and serial link
///
/// The relay line comes up low, so the door is locked before anything else
/// happens.
pub fn init(p: Peripherals) -> Board {
    let lock = RelayLock::new(output(Output::new(p.PIN_2, Level::Low)));
    info!("Lock relay on GPIO2, locked");

    let pins = Hd44780Pins {
        rs: output(Output::new(p.PIN_3, Level::Low)),
        en: output(Output::new(p.PIN_4, Level::Low)),
        d4: output(Output::new(p.PIN_6, Level::Low)),
        d5: output(Output::new(p.PIN_7, Level::Low)),
        d6: output(Output::new(p.PIN_8, Level::Low)),
        d7: output(Output::new(p.PIN_9, Level::Low)),
    };
    let mut display = Hd44780::new(pins, Delay);
    display.initialize();
    info!("Display initialized");

    let config = UartConfig::new_8n1(SERIAL_BAUDRATE);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&config));
    let (tx, rx) = uart.split();

    let mut serial = SerialChannel::new(RpUartRx::new(rx), RpUartTx::new(tx));
    serial.initialize(&config, PERI_CLOCK_HZ);
    info!("Badge reader UART initialized");

    Board {
        serial,
        display,
        lock,
    }
}
