//! Outbound application events.
//!
//! The [`Scoreboard`](super::service::Scoreboard) emits these through the
//! [`DebugSink`](super::ports::DebugSink) port.  Adapters on the other
//! side decide what to do with them.

use serde::Serialize;

use crate::game::engine::PressResult;
use crate::game::policy::EarlyPressPolicy;
use crate::game::{GameSnapshot, Team};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the active scoring rules).
    Started {
        timer_delay_ms: u32,
        policy: EarlyPressPolicy,
    },

    /// A scoring button produced a clean press.
    ButtonPressed(Team),

    /// The scoring engine classified a press.
    Press(PressResult),

    /// Both teams were zeroed.
    MatchReset,

    /// Internal state after a state-changing iteration.
    State(StateRecord),

    /// A runtime configuration update was applied.
    ConfigUpdated {
        timer_delay_ms: u32,
        policy: EarlyPressPolicy,
    },

    /// A runtime configuration update failed validation.
    ConfigRejected(&'static str),
}

/// Structured debug record: one per state-changing iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub current_time: u32,
    pub red_last_press_time: u32,
    pub blue_last_press_time: u32,
    pub red_score: i32,
    pub blue_score: i32,
}

impl StateRecord {
    pub fn new(now_ms: u32, snapshot: &GameSnapshot) -> Self {
        Self {
            current_time: now_ms,
            red_last_press_time: snapshot.red.last_press_ms,
            blue_last_press_time: snapshot.blue.last_press_ms,
            red_score: snapshot.red.score,
            blue_score: snapshot.blue.score,
        }
    }
}
