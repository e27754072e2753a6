//! Scoring engine: turns a team's button press into a score/timer change.
//!
//! Decision rule, evaluated in order against the pressing team's state:
//!
//! 1. **Never pressed** (`last_press_ms == 0`): `score += 1`,
//!    `last_press_ms = now` → [`Outcome::ScoredFirst`].
//! 2. **Elapsed** (`now - last_press_ms >= timer_delay`, wrapping): same
//!    mutation → [`Outcome::ScoredOnTime`].
//! 3. **Early**: delegated to the configured [`EarlyPressPolicy`].
//!
//! Both operations are total; there is no error path.

use log::debug;

use super::policy::EarlyPressPolicy;
use super::{GameSnapshot, GameState, Team, TeamState};

/// How a single press was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// First press since start or reset; scored.
    ScoredFirst,
    /// Timer delay had elapsed; scored.
    ScoredOnTime,
    /// Early press; timer restarted, score unchanged.
    TimerReset,
    /// Early press; one point deducted.
    Penalized,
    /// Early press; nothing changed.
    Ignored,
}

impl Outcome {
    /// `true` if the press added a point.
    pub const fn scored(self) -> bool {
        matches!(self, Self::ScoredFirst | Self::ScoredOnTime)
    }

    /// `true` if the press updated `last_press_ms` (an "accepted" press).
    pub const fn accepted(self) -> bool {
        matches!(self, Self::ScoredFirst | Self::ScoredOnTime | Self::TimerReset)
    }

    /// `true` if the team's state was mutated at all.
    pub const fn changed_state(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Result of [`ScoringEngine::handle_press`]: the outcome plus the team's
/// new state, forwarded unchanged to the display and debug observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressResult {
    pub team: Team,
    pub outcome: Outcome,
    pub score: i32,
    pub last_press_ms: u32,
    /// How long until this team's next press would score; `0` if it
    /// would score right away.
    pub next_score_in_ms: u32,
}

/// Owns the match state and applies the scoring rules.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    state: GameState,
    timer_delay_ms: u32,
    early_press: EarlyPressPolicy,
}

impl ScoringEngine {
    /// Default minimum interval between a team's scoring presses.
    pub const DEFAULT_TIMER_DELAY_MS: u32 = 10_000;

    pub fn new(timer_delay_ms: u32, early_press: EarlyPressPolicy) -> Self {
        Self {
            state: GameState::new(),
            timer_delay_ms,
            early_press,
        }
    }

    /// Classify and apply a press by `team` observed at `now_ms`.
    ///
    /// Only the pressing team's state is touched.
    pub fn handle_press(&mut self, team: Team, now_ms: u32) -> PressResult {
        let delay = self.timer_delay_ms;
        let policy = self.early_press;
        let state = self.state.team_mut(team);

        let outcome = if !state.has_pressed() {
            state.score = state.score.saturating_add(1);
            state.last_press_ms = now_ms;
            // A first press at boot time 0 cannot start a timer.
            state.pressed = now_ms != TeamState::NEVER_PRESSED;
            Outcome::ScoredFirst
        } else if state.elapsed_since_press(now_ms) >= delay {
            state.score = state.score.saturating_add(1);
            state.last_press_ms = now_ms;
            Outcome::ScoredOnTime
        } else {
            policy.apply(state, now_ms)
        };

        debug!(
            "press {} @{}ms -> {:?} (score={}, last={})",
            team, now_ms, outcome, state.score, state.last_press_ms
        );

        let (score, last_press_ms) = (state.score, state.last_press_ms);
        PressResult {
            team,
            outcome,
            score,
            last_press_ms,
            next_score_in_ms: self.remaining_ms(team, now_ms),
        }
    }

    /// Zero both teams and restore the "never pressed" sentinel.
    pub fn reset_match(&mut self) {
        self.state.reset();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn timer_delay_ms(&self) -> u32 {
        self.timer_delay_ms
    }

    pub fn set_timer_delay(&mut self, timer_delay_ms: u32) {
        self.timer_delay_ms = timer_delay_ms;
    }

    pub fn early_press_policy(&self) -> EarlyPressPolicy {
        self.early_press
    }

    pub fn set_early_press_policy(&mut self, policy: EarlyPressPolicy) {
        self.early_press = policy;
    }

    /// Milliseconds until `team` can score again; `0` when a press at
    /// `now_ms` would score.
    pub fn remaining_ms(&self, team: Team, now_ms: u32) -> u32 {
        let state = self.state.team(team);
        if !state.has_pressed() {
            return 0;
        }
        self.timer_delay_ms
            .saturating_sub(state.elapsed_since_press(now_ms))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMER_DELAY_MS, EarlyPressPolicy::default())
    }
}
