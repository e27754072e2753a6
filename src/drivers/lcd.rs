//! HD44780 character LCD driver, 4-bit parallel bus.
//!
//! ## Hardware
//!
//! Six push-pull outputs: RS (register select), EN (enable strobe) and
//! D4–D7.  R/W is tied to ground, so the driver never reads the busy flag
//! and waits out the datasheet execution times instead.
//!
//! Generic over [`embedded_hal::digital::OutputPin`] and
//! [`embedded_hal::delay::DelayNs`] so it runs against raw ESP-IDF GPIO on
//! the device and against recording mocks on the host.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

// Instructions
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM_ADDR: u8 = 0x80;

// Flags
const ENTRY_INCREMENT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const FUNCTION_2_LINE: u8 = 0x08;

/// DDRAM start address of each row.
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Character display operations the display adapter needs.
pub trait CharDisplay {
    type Error: fmt::Debug;

    /// Bring the panel from power-on into a blank, ready state.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Blank the whole screen and home the cursor.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor to `col`, `row` (both zero-based).
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write ASCII text at the cursor.
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// A pin write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdError<E> {
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for LcdError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "LCD pin write failed: {e:?}"),
        }
    }
}

/// HD44780 on a 4-bit bus.  `P` is shared by all six control lines.
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    data: [P; 4],
    delay: D,
    rows: u8,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// `data` is ordered D4, D5, D6, D7.
    pub fn new(rs: P, en: P, data: [P; 4], delay: D, rows: u8) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            rows: rows.clamp(1, ROW_OFFSETS.len() as u8),
        }
    }

    /// Power-on initialisation ("initialising by instruction" sequence).
    fn power_on(&mut self) -> Result<(), LcdError<P::Error>> {
        self.delay.delay_ms(50);
        self.rs.set_low().map_err(LcdError::Pin)?;
        self.en.set_low().map_err(LcdError::Pin)?;

        // Three 8-bit "function set" nibbles force a known state, then
        // switch to 4-bit mode.
        for wait_us in [4_500, 4_500, 150] {
            self.write_nibble(0x03)?;
            self.delay.delay_us(wait_us);
        }
        self.write_nibble(0x02)?;

        let lines = if self.rows > 1 { FUNCTION_2_LINE } else { 0 };
        self.command(CMD_FUNCTION_SET | lines)?;
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear_screen()?;
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT)
    }

    fn clear_screen(&mut self) -> Result<(), LcdError<P::Error>> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(2_000);
        Ok(())
    }

    fn command(&mut self, value: u8) -> Result<(), LcdError<P::Error>> {
        self.rs.set_low().map_err(LcdError::Pin)?;
        self.write_byte(value)
    }

    fn data_byte(&mut self, value: u8) -> Result<(), LcdError<P::Error>> {
        self.rs.set_high().map_err(LcdError::Pin)?;
        self.write_byte(value)
    }

    fn write_byte(&mut self, value: u8) -> Result<(), LcdError<P::Error>> {
        self.write_nibble(value >> 4)?;
        self.write_nibble(value & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), LcdError<P::Error>> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin.set_high().map_err(LcdError::Pin)?;
            } else {
                pin.set_low().map_err(LcdError::Pin)?;
            }
        }
        self.pulse_enable()
    }

    fn pulse_enable(&mut self) -> Result<(), LcdError<P::Error>> {
        self.en.set_low().map_err(LcdError::Pin)?;
        self.delay.delay_us(1);
        self.en.set_high().map_err(LcdError::Pin)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(LcdError::Pin)?;
        // Commands need > 37us to settle.
        self.delay.delay_us(100);
        Ok(())
    }
}

impl<P, D> CharDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    type Error = LcdError<P::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.power_on()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clear_screen()
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error> {
        let row = row.min(self.rows - 1);
        // 40 DDRAM cells per line.
        let col = col.min(39);
        self.command(CMD_SET_DDRAM_ADDR | (ROW_OFFSETS[row as usize] + col))
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        for byte in text.bytes() {
            // The character ROM is ASCII-compatible in 0x20..=0x7D only.
            let glyph = if (0x20..=0x7D).contains(&byte) { byte } else { b'?' };
            self.data_byte(glyph)?;
        }
        Ok(())
    }
}
