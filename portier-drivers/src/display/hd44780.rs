//! HD44780 character display driver (4-bit mode)
//!
//! Drives a 16x2 HD44780-compatible LCD through six output lines: register
//! select (RS), enable (EN) and the upper data lines D4..D7. The R/W line is
//! tied low, so the busy flag cannot be read; every transfer is followed by
//! a fixed settle time instead.
//!
//! # Bus protocol
//!
//! Each 8-bit value goes out as two nibbles, high nibble first. RS selects
//! the instruction register (low) or data register (high), and the device
//! latches D4..D7 on the falling edge of EN:
//!
//! ```text
//! RS  ──┐___________________________________ (command) / ‾‾‾ (data)
//! EN  ____┌‾┐_________┌‾┐____________________
//! D7..4  [ high ]    [ low ]
//!           1µs  1µs   1µs  100µs / 40µs
//! ```

use embedded_hal::delay::DelayNs;
use portier_core::traits::CharacterDisplay;
use portier_hal::{Level, OutputPin};

/// HD44780 instructions used by the terminal
pub mod cmd {
    /// Clear display, cursor home
    pub const CLEAR: u8 = 0x01;
    /// Cursor home; sent right after power-on it also drops the bus to 4 bits
    pub const ENTER_4BIT: u8 = 0x02;
    /// Entry mode: increment cursor, no display shift
    pub const ENTRY_INCREMENT: u8 = 0x06;
    /// Display on, cursor hidden, no blink
    pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
    /// Function set: 4-bit bus, 2 lines, 5x7 font
    pub const FUNCTION_4BIT_2LINE_5X7: u8 = 0x28;
}

/// Fixed bus timings
pub mod timing {
    /// Wait after power-on before the first instruction (ms)
    pub const POWER_ON_MS: u32 = 15;
    /// Minimum EN high time (µs)
    pub const ENABLE_PULSE_US: u32 = 1;
    /// Gap between the high and low nibble (µs)
    pub const NIBBLE_GAP_US: u32 = 1;
    /// Settle after an instruction (µs)
    pub const COMMAND_SETTLE_US: u32 = 100;
    /// Settle after a data write (µs)
    pub const DATA_SETTLE_US: u32 = 40;
    /// Settle after a clear, which rewrites all of DDRAM (ms)
    pub const CLEAR_SETTLE_MS: u32 = 2;
}

/// Instruction sequence sent by [`Hd44780::initialize`] (clear follows)
const INIT_SEQUENCE: [u8; 4] = [
    cmd::ENTER_4BIT,
    cmd::FUNCTION_4BIT_2LINE_5X7,
    cmd::DISPLAY_ON_CURSOR_OFF,
    cmd::ENTRY_INCREMENT,
];

/// Output lines wired to the display
pub struct Hd44780Pins<P> {
    pub rs: P,
    pub en: P,
    pub d4: P,
    pub d5: P,
    pub d6: P,
    pub d7: P,
}

/// HD44780 driver
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4, D5, D6, D7
    data: [P; 4],
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Take the display lines and park RS and EN low
    ///
    /// Call [`initialize`](Self::initialize) before writing anything.
    pub fn new(pins: Hd44780Pins<P>, delay: D) -> Self {
        let Hd44780Pins {
            mut rs,
            mut en,
            d4,
            d5,
            d6,
            d7,
        } = pins;

        rs.set_low();
        en.set_low();

        Self {
            rs,
            en,
            data: [d4, d5, d6, d7],
            delay,
        }
    }

    /// Bring the display up in 4-bit, 2-line mode with a blank screen
    pub fn initialize(&mut self) {
        self.delay.delay_ms(timing::POWER_ON_MS);

        for instruction in INIT_SEQUENCE {
            self.write_command(instruction);
        }

        self.clear();
    }

    /// Send an instruction
    pub fn write_command(&mut self, command: u8) {
        self.write_byte(command, Level::Low, timing::COMMAND_SETTLE_US);
    }

    /// Write one character at the cursor
    pub fn write_char(&mut self, ch: u8) {
        self.write_byte(ch, Level::High, timing::DATA_SETTLE_US);
    }

    /// Write `text` byte by byte
    pub fn write_string(&mut self, text: &str) {
        for ch in text.bytes() {
            self.write_char(ch);
        }
    }

    /// Blank the display and home the cursor
    pub fn clear(&mut self) {
        self.write_command(cmd::CLEAR);
        self.delay.delay_ms(timing::CLEAR_SETTLE_MS);
    }

    fn write_byte(&mut self, value: u8, register: Level, settle_us: u32) {
        self.rs.set_level(register);

        self.write_nibble(value >> 4);
        self.delay.delay_us(timing::NIBBLE_GAP_US);

        self.write_nibble(value & 0x0F);
        self.delay.delay_us(settle_us);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, line) in self.data.iter_mut().enumerate() {
            line.set_level(Level::of_bit(nibble, bit as u8));
        }

        self.en.set_high();
        self.delay.delay_us(timing::ENABLE_PULSE_US);
        self.en.set_low();
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) {
        Hd44780::clear(self);
    }

    fn write_text(&mut self, text: &str) {
        self.write_string(text);
    }
}
