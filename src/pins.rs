//! GPIO / peripheral pin assignments for the scoreboard controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Buttons (active-high momentary switches, internal pull-down)
// ---------------------------------------------------------------------------

/// Red team scoring button.
pub const RED_BUTTON_GPIO: i32 = 4;
/// Blue team scoring button.
pub const BLUE_BUTTON_GPIO: i32 = 5;
/// Match reset button.
pub const RESET_BUTTON_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Character LCD (HD44780, 4-bit bus, R/W tied to GND)
// ---------------------------------------------------------------------------

pub const LCD_RS_GPIO: i32 = 9;
pub const LCD_EN_GPIO: i32 = 10;
pub const LCD_D4_GPIO: i32 = 11;
pub const LCD_D5_GPIO: i32 = 12;
pub const LCD_D6_GPIO: i32 = 13;
pub const LCD_D7_GPIO: i32 = 14;

/// Visible columns on the fitted panel.
pub const LCD_COLUMNS: usize = 16;
/// Visible rows on the fitted panel.
pub const LCD_ROWS: u8 = 2;

pub const BUTTON_GPIOS: [i32; 3] = [RED_BUTTON_GPIO, BLUE_BUTTON_GPIO, RESET_BUTTON_GPIO];

pub const LCD_GPIOS: [i32; 6] = [
    LCD_RS_GPIO,
    LCD_EN_GPIO,
    LCD_D4_GPIO,
    LCD_D5_GPIO,
    LCD_D6_GPIO,
    LCD_D7_GPIO,
];
