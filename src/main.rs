//! Scoreboard firmware main entry point.
//!
//! Single cooperative polling loop; no interrupts, no threads.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  SystemClock   GpioButtons   LcdDisplay   LogDebugSink   │
//! │  (Clock)       (ButtonInput) (Display)    (DebugSink)    │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ───────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │         Scoreboard (pure logic)                │      │
//! │  │  Buttons · ScoringEngine · Reset banner        │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A JSON config override can be baked in with the `SCOREBOARD_CONFIG`
//! environment variable at build time.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::{Ets, FreeRtos};
use log::{error, info};

use scoreboard::adapters::display::LcdDisplay;
use scoreboard::adapters::hardware::{GpioButtons, GpioOutput};
use scoreboard::adapters::log_sink::LogDebugSink;
use scoreboard::adapters::time::SystemClock;
use scoreboard::app::service::Scoreboard;
use scoreboard::config::ScoreboardConfig;
use scoreboard::drivers::hw_init;
use scoreboard::drivers::lcd::Hd44780;
use scoreboard::error::Error;
use scoreboard::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Scoreboard v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(|e| {
        error!("HAL init failed: {}", e);
        Error::from(e)
    })?;

    // ── 3. Configuration ──────────────────────────────────────
    let config = ScoreboardConfig::load_or_default(option_env!("SCOREBOARD_CONFIG"));
    let poll_interval_ms = config.poll_interval_ms;

    // ── 4. Adapters ───────────────────────────────────────────
    let clock = SystemClock::new();
    let mut buttons = GpioButtons::new();

    let lcd = Hd44780::new(
        GpioOutput::new(pins::LCD_RS_GPIO),
        GpioOutput::new(pins::LCD_EN_GPIO),
        [
            GpioOutput::new(pins::LCD_D4_GPIO),
            GpioOutput::new(pins::LCD_D5_GPIO),
            GpioOutput::new(pins::LCD_D6_GPIO),
            GpioOutput::new(pins::LCD_D7_GPIO),
        ],
        Ets,
        pins::LCD_ROWS,
    );
    let mut display = LcdDisplay::start(lcd)?;
    let mut sink = LogDebugSink::new();

    // ── 5. Service ────────────────────────────────────────────
    let mut board = Scoreboard::new(config);
    board.start(&mut sink);

    // ── 6. Polling loop ───────────────────────────────────────
    loop {
        board.tick(&clock, &mut buttons, &mut display, &mut sink);
        FreeRtos::delay_ms(poll_interval_ms);
    }
}
