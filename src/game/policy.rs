//! Early-press policy: what happens when a team presses before its
//! timer delay has elapsed.
//!
//! | Policy       | Score    | `last_press_ms` | Outcome      |
//! |--------------|----------|-----------------|--------------|
//! | `ResetTimer` | unchanged| `now`           | `TimerReset` |
//! | `Penalize`   | `-1`     | unchanged       | `Penalized`  |
//! | `Ignore`     | unchanged| unchanged       | `Ignored`    |

use serde::{Deserialize, Serialize};

use super::TeamState;
use super::engine::Outcome;

/// Rule applied to a press that is neither a first press nor on time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyPressPolicy {
    /// Restart the team's timer without touching the score.
    #[default]
    ResetTimer,
    /// Deduct one point; the timer keeps running from the last accepted press.
    Penalize,
    /// Do nothing.
    Ignore,
}

impl EarlyPressPolicy {
    /// Apply the rule to `state` for an early press observed at `now_ms`.
    pub fn apply(self, state: &mut TeamState, now_ms: u32) -> Outcome {
        match self {
            Self::ResetTimer => {
                state.last_press_ms = now_ms;
                Outcome::TimerReset
            }
            Self::Penalize => {
                state.score = state.score.saturating_sub(1);
                Outcome::Penalized
            }
            Self::Ignore => Outcome::Ignored,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ResetTimer => "reset-timer",
            Self::Penalize => "penalize",
            Self::Ignore => "ignore",
        }
    }
}
