//! Match state for a two-team timed scoring game.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  GameState                                   │
//! │  ┌──────┬─────────┬────────────────────────┐ │
//! │  │ Team │ score   │ last_press_ms │ pressed│ │
//! │  ├──────┼─────────┼───────────────┼────────┤ │
//! │  │ Red  │ i32     │ u32           │ bool   │ │
//! │  │ Blue │ i32     │ u32           │ bool   │ │
//! │  └──────┴─────────┴───────────────┴────────┘ │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! `last_press_ms` reads 0 until the first accepted press, but "never
//! pressed" is tracked by its own flag: an accepted press that lands on
//! the counter wrapping through 0 keeps the team's timer running.
//!
//! The two rows are fully independent: every mutation goes through the
//! [`engine::ScoringEngine`] and touches exactly one row, except for an
//! explicit match reset which clears both.

pub mod engine;
pub mod policy;

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Team identity
// ---------------------------------------------------------------------------

/// One of the two scoring participants.  Used to index per-team state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Team {
    Red = 0,
    Blue = 1,
}

impl Team {
    /// Total number of teams; sizes the per-team arrays.
    pub const COUNT: usize = 2;

    /// Every team, in display order.
    pub const ALL: [Team; Team::COUNT] = [Team::Red, Team::Blue];

    /// Array index for this team.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case label used on the display and in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Blue => "BLUE",
        }
    }

    /// The opposing team.
    pub const fn other(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Per-team state
// ---------------------------------------------------------------------------

/// Score and timer state for a single team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    /// Current score.  Signed: the penalty policy can drive it negative.
    pub score: i32,
    /// Timestamp (ms) of the last accepted press, or
    /// [`TeamState::NEVER_PRESSED`] before the first one.
    pub last_press_ms: u32,
    /// Set by the first accepted press; only a match reset clears it.
    pub pressed: bool,
}

impl TeamState {
    /// `last_press_ms` of a team with no accepted press yet.
    pub const NEVER_PRESSED: u32 = 0;

    /// Fresh state: zero score, never pressed.
    pub const fn new() -> Self {
        Self {
            score: 0,
            last_press_ms: Self::NEVER_PRESSED,
            pressed: false,
        }
    }

    /// A team whose last accepted press was at `last_press_ms`.
    pub const fn pressed_at(score: i32, last_press_ms: u32) -> Self {
        Self {
            score,
            last_press_ms,
            pressed: true,
        }
    }

    /// `true` once a press has been accepted (and no reset happened since).
    pub const fn has_pressed(&self) -> bool {
        self.pressed
    }

    /// Milliseconds since the last accepted press, wraparound-safe.
    pub const fn elapsed_since_press(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_press_ms)
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// Match state
// ---------------------------------------------------------------------------

/// The whole match: one [`TeamState`] per [`Team`].
///
/// Constructible and resettable so tests can run independent games side
/// by side; the firmware owns exactly one for its whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    teams: [TeamState; Team::COUNT],
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            teams: [TeamState::new(); Team::COUNT],
        }
    }

    pub fn team(&self, team: Team) -> &TeamState {
        &self.teams[team.index()]
    }

    pub(crate) fn team_mut(&mut self, team: Team) -> &mut TeamState {
        &mut self.teams[team.index()]
    }

    /// Zero both scores and restore the "never pressed" sentinel.
    pub fn reset(&mut self) {
        for state in &mut self.teams {
            state.clear();
        }
    }

    /// Immutable copy handed to display and debug observers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            red: *self.team(Team::Red),
            blue: *self.team(Team::Blue),
        }
    }
}

/// A point-in-time copy of both teams' state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub red: TeamState,
    pub blue: TeamState,
}

impl GameSnapshot {
    pub fn team(&self, team: Team) -> &TeamState {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }
}
