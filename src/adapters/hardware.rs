//! Hardware adapter: bridges real GPIO to domain port traits.
//!
//! [`GpioButtons`] is the Input Source behind [`ButtonInput`];
//! [`GpioOutput`] exposes a raw output pin through
//! [`embedded_hal::digital::OutputPin`] so the LCD driver stays generic.
//! On non-espidf targets `hw_init` provides simulation stubs.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::app::ports::{ButtonInput, ButtonLevels};
use crate::drivers::hw_init;
use crate::pins;

/// The three scoreboard buttons, read directly from GPIO.
pub struct GpioButtons {
    red: i32,
    blue: i32,
    reset: i32,
}

impl GpioButtons {
    pub fn new() -> Self {
        Self {
            red: pins::RED_BUTTON_GPIO,
            blue: pins::BLUE_BUTTON_GPIO,
            reset: pins::RESET_BUTTON_GPIO,
        }
    }
}

impl Default for GpioButtons {
    fn default() -> Self {
        Self::new()
    }
}

// ── ButtonInput implementation ────────────────────────────────

impl ButtonInput for GpioButtons {
    fn read(&mut self) -> ButtonLevels {
        ButtonLevels {
            red: hw_init::gpio_read(self.red),
            blue: hw_init::gpio_read(self.blue),
            reset: hw_init::gpio_read(self.reset),
        }
    }
}

// ── OutputPin over raw GPIO ───────────────────────────────────

/// A GPIO already configured as output by `hw_init`.
pub struct GpioOutput {
    gpio: i32,
}

impl GpioOutput {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// GPIO number this pin drives.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.gpio, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.gpio, true);
        Ok(())
    }
}
