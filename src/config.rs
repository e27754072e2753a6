//! System configuration parameters
//!
//! All tunable parameters for the scoreboard.
//! Defaults are the standard game rules; a JSON override can be baked in
//! at build time (see `main.rs`) or pushed at runtime via
//! [`AppCommand::UpdateConfig`](crate::app::commands::AppCommand).

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::policy::EarlyPressPolicy;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    // --- Scoring ---
    /// Minimum interval between a team's scoring presses (milliseconds)
    pub timer_delay_ms: u32,
    /// What an early press does
    pub early_press_policy: EarlyPressPolicy,

    // --- Buttons ---
    /// Dead-time after a handled press of the same button (milliseconds)
    pub press_cooldown_ms: u32,
    /// Level must stay HIGH this long before a press counts (milliseconds)
    pub debounce_ms: u32,

    // --- Display ---
    /// How long "RESET SCORES" stays up after a reset (milliseconds)
    pub reset_banner_ms: u32,

    // --- Timing ---
    /// Polling loop period (milliseconds)
    pub poll_interval_ms: u32,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            // Scoring
            timer_delay_ms: 10_000,
            early_press_policy: EarlyPressPolicy::ResetTimer,

            // Buttons
            press_cooldown_ms: 150,
            debounce_ms: 20,

            // Display
            reset_banner_ms: 2_500,

            // Timing
            poll_interval_ms: 5, // 200 Hz
        }
    }
}

impl ScoreboardConfig {
    /// Upper bound on the timer delay: one hour.
    pub const MAX_TIMER_DELAY_MS: u32 = 3_600_000;

    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=Self::MAX_TIMER_DELAY_MS).contains(&self.timer_delay_ms) {
            return Err(ConfigError::ValidationFailed(
                "timer_delay_ms must be 1–3600000",
            ));
        }
        if self.press_cooldown_ms >= self.timer_delay_ms {
            return Err(ConfigError::ValidationFailed(
                "press_cooldown_ms must be below timer_delay_ms",
            ));
        }
        if self.debounce_ms > 1_000 {
            return Err(ConfigError::ValidationFailed("debounce_ms must be 0–1000"));
        }
        if self.reset_banner_ms > 60_000 {
            return Err(ConfigError::ValidationFailed(
                "reset_banner_ms must be 0–60000",
            ));
        }
        if !(1..=1_000).contains(&self.poll_interval_ms) {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms must be 1–1000",
            ));
        }
        Ok(())
    }

    /// Parse a JSON document (missing fields take their defaults) and
    /// validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Resolve an optional override document, falling back to defaults
    /// when it is absent or unusable.
    pub fn load_or_default(source: Option<&str>) -> Self {
        let Some(json) = source else {
            info!("No config override, using defaults");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(cfg) => {
                info!("Config override loaded");
                cfg
            }
            Err(e) => {
                warn!("Config override rejected ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
