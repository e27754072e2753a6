//! Character-LCD display adapter.
//!
//! Implements [`DisplaySink`] on top of any [`CharDisplay`] (the HD44780
//! driver on the device, a recording mock in tests).
//!
//! ```text
//! ┌────────────────┐      ┌────────────────┐
//! │RED TEAM:  3    │      │RESET SCORES    │
//! │BLUE TEAM: 1    │      │                │
//! └────────────────┘      └────────────────┘
//!   Screen::Scores          Screen::ResetNotice
//! ```
//!
//! Lines are padded to the full panel width so old characters are always
//! overwritten, and a row is only rewritten when its text changed.  Write
//! failures are logged and retried on the next render; they never reach
//! the scoring core.

use core::fmt::Write as _;

use log::warn;

use crate::app::ports::{DisplaySink, Screen};
use crate::drivers::lcd::CharDisplay;
use crate::error::{Error, Result};
use crate::game::Team;
use crate::pins::LCD_COLUMNS;

/// One rendered, space-padded display row.
pub type Line = heapless::String<LCD_COLUMNS>;

const ROWS: usize = 2;

/// Turn a [`Screen`] into the two rows of text to show.
pub fn layout(screen: &Screen) -> [Line; ROWS] {
    match screen {
        Screen::Scores { snapshot } => [
            score_line(Team::Red, snapshot.team(Team::Red).score),
            score_line(Team::Blue, snapshot.team(Team::Blue).score),
        ],
        Screen::ResetNotice => [padded("RESET SCORES"), padded("")],
    }
}

fn score_line(team: Team, score: i32) -> Line {
    let label = match team {
        Team::Red => "RED TEAM:",
        Team::Blue => "BLUE TEAM:",
    };
    // Pad the label so both scores start in the same column.
    let mut wide: heapless::String<32> = heapless::String::new();
    let _ = write!(wide, "{label:<11}{score}");
    if wide.len() <= LCD_COLUMNS {
        return padded(&wide);
    }

    let mut compact: heapless::String<32> = heapless::String::new();
    let initial = &team.label()[..1];
    let _ = write!(compact, "{}: {}", initial, score);
    padded(&compact)
}

fn padded(text: &str) -> Line {
    let mut line = Line::new();
    for ch in text.chars().take(LCD_COLUMNS) {
        let _ = line.push(ch);
    }
    while line.len() < LCD_COLUMNS {
        let _ = line.push(' ');
    }
    line
}

/// [`DisplaySink`] that drives a character LCD.
pub struct LcdDisplay<L> {
    lcd: L,
    shown: [Option<Line>; ROWS],
    write_failures: u32,
}

impl<L: CharDisplay> LcdDisplay<L> {
    /// Take ownership of a freshly powered panel and initialise it.
    pub fn start(mut lcd: L) -> Result<Self> {
        lcd.init().map_err(|e| {
            warn!("LCD init failed: {:?}", e);
            Error::Display("LCD init failed")
        })?;
        Ok(Self {
            lcd,
            shown: [None, None],
            write_failures: 0,
        })
    }

    /// Borrow the underlying panel.
    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    /// Number of renders that hit a write error.
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    fn draw_row(&mut self, row: usize, line: &Line) -> core::result::Result<(), L::Error> {
        self.lcd.set_cursor(0, row as u8)?;
        self.lcd.write_str(line)
    }
}

impl<L: CharDisplay> DisplaySink for LcdDisplay<L> {
    fn render(&mut self, screen: &Screen) {
        let lines = layout(screen);

        for (row, line) in lines.iter().enumerate() {
            if self.shown[row].as_ref() == Some(line) {
                continue;
            }
            match self.draw_row(row, line) {
                Ok(()) => self.shown[row] = Some(line.clone()),
                Err(e) => {
                    // Forget what is on the panel so the next render redraws.
                    self.shown[row] = None;
                    self.write_failures = self.write_failures.saturating_add(1);
                    warn!("LCD write failed on row {}: {:?}", row, e);
                }
            }
        }
    }
}
