//! Scoreboard service, the hexagonal core.
//!
//! [`Scoreboard`] owns the scoring engine, one button driver per physical
//! button, and the reset-banner timer.  It exposes a hardware-agnostic
//! API.  All I/O flows through port traits injected at call sites, making
//! the entire service testable with mock adapters.
//!
//! ```text
//!       Clock ──▶ ┌────────────────────────┐ ──▶ DisplaySink
//!                 │       Scoreboard        │
//! ButtonInput ──▶ │ Buttons · Engine · View │ ──▶ DebugSink
//!                 └────────────────────────┘
//! ```
//!
//! The service never sleeps.  The binary paces calls to [`Scoreboard::tick`]
//! with `poll_interval_ms`.

use log::{debug, warn};

use crate::config::ScoreboardConfig;
use crate::drivers::button::{ButtonDriver, ButtonEvent};
use crate::error::ConfigError;
use crate::game::engine::ScoringEngine;
use crate::game::{GameSnapshot, Team};

use super::commands::AppCommand;
use super::events::{AppEvent, StateRecord};
use super::ports::{ButtonInput, Clock, DebugSink, DisplaySink, Screen};

/// Index of the reset button; the scoring buttons use [`Team::index`].
const RESET_BUTTON: usize = Team::COUNT;

// ───────────────────────────────────────────────────────────────
// Scoreboard
// ───────────────────────────────────────────────────────────────

/// The scoreboard service orchestrates all domain logic.
pub struct Scoreboard {
    engine: ScoringEngine,
    config: ScoreboardConfig,
    /// Red, Blue, Reset.
    buttons: [ButtonDriver; Team::COUNT + 1],
    /// Set while the "RESET SCORES" banner is showing.
    reset_banner_since: Option<u32>,
}

impl Scoreboard {
    /// Construct the service from configuration.
    ///
    /// The configuration is trusted here; runtime updates go through
    /// [`AppCommand::UpdateConfig`], which validates first.
    pub fn new(config: ScoreboardConfig) -> Self {
        let engine = ScoringEngine::new(config.timer_delay_ms, config.early_press_policy);
        let button = ButtonDriver::new(config.debounce_ms, config.press_cooldown_ms);

        Self {
            engine,
            buttons: [button.clone(), button.clone(), button],
            config,
            reset_banner_since: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the active rules.  Call once before the first tick.
    pub fn start(&mut self, sink: &mut impl DebugSink) {
        sink.emit(&AppEvent::Started {
            timer_delay_ms: self.engine.timer_delay_ms(),
            policy: self.engine.early_press_policy(),
        });
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one polling-loop iteration: read clock and buttons → engine →
    /// debug record (on change) → display (always).
    ///
    /// Returns `true` if the match state changed.
    pub fn tick(
        &mut self,
        clock: &impl Clock,
        input: &mut impl ButtonInput,
        display: &mut impl DisplaySink,
        sink: &mut impl DebugSink,
    ) -> bool {
        // 1. Sample inputs exactly once
        let now_ms = clock.now_ms();
        let levels = input.read();

        // 2. Scoring buttons
        let mut changed = false;
        for team in Team::ALL {
            let level = match team {
                Team::Red => levels.red,
                Team::Blue => levels.blue,
            };
            if let Some(ButtonEvent::Pressed { at_ms }) =
                self.buttons[team.index()].tick(level, now_ms)
            {
                sink.emit(&AppEvent::ButtonPressed(team));
                changed |= self.handle_command(AppCommand::Press { team, at_ms }, sink);
            }
        }

        // 3. Reset button
        if let Some(ButtonEvent::Pressed { at_ms }) =
            self.buttons[RESET_BUTTON].tick(levels.reset, now_ms)
        {
            changed |= self.handle_command(AppCommand::ResetMatch { at_ms }, sink);
        }

        // 4. Structured state record, only when something moved
        if changed {
            sink.emit(&AppEvent::State(StateRecord::new(now_ms, &self.snapshot())));
        }

        // 5. Display, every iteration
        self.expire_reset_banner(now_ms);
        display.render(&self.screen(now_ms));

        changed
    }

    // ── Command handling ──────────────────────────────────────

    /// Process a command.  Returns `true` if the match state changed.
    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl DebugSink) -> bool {
        match cmd {
            AppCommand::Press { team, at_ms } => {
                let result = self.engine.handle_press(team, at_ms);
                sink.emit(&AppEvent::Press(result));
                let changed = result.outcome.changed_state();
                if changed {
                    self.reset_banner_since = None;
                }
                changed
            }
            AppCommand::ResetMatch { at_ms } => {
                self.engine.reset_match();
                self.reset_banner_since = Some(at_ms);
                sink.emit(&AppEvent::MatchReset);
                true
            }
            AppCommand::UpdateConfig(new_config) => {
                match new_config.validate() {
                    Ok(()) => self.apply_config(new_config, sink),
                    Err(e) => {
                        warn!("Configuration update rejected: {}", e);
                        let reason = match e {
                            ConfigError::ValidationFailed(msg) => msg,
                            ConfigError::Malformed => "malformed config",
                        };
                        sink.emit(&AppEvent::ConfigRejected(reason));
                    }
                }
                false
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// What the display should show at `now_ms`.
    pub fn screen(&self, now_ms: u32) -> Screen {
        if self.banner_active(now_ms) {
            Screen::ResetNotice
        } else {
            Screen::Scores {
                snapshot: self.snapshot(),
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_config(&mut self, config: ScoreboardConfig, sink: &mut impl DebugSink) {
        self.engine.set_timer_delay(config.timer_delay_ms);
        self.engine.set_early_press_policy(config.early_press_policy);
        for button in &mut self.buttons {
            button.set_timing(config.debounce_ms, config.press_cooldown_ms);
        }
        sink.emit(&AppEvent::ConfigUpdated {
            timer_delay_ms: config.timer_delay_ms,
            policy: config.early_press_policy,
        });
        debug!("Configuration updated at runtime: {:?}", config);
        self.config = config;
    }

    fn banner_active(&self, now_ms: u32) -> bool {
        self.reset_banner_since
            .is_some_and(|since| now_ms.wrapping_sub(since) < self.config.reset_banner_ms)
    }

    /// Drop the banner once it has run its course so a later counter wrap
    /// cannot bring it back.
    fn expire_reset_banner(&mut self, now_ms: u32) {
        if !self.banner_active(now_ms) {
            self.reset_banner_since = None;
        }
    }
}
