//! Inbound commands to the scoreboard service.
//!
//! The polling loop translates button edges into these; tests and any
//! future serial console can inject them directly through
//! [`Scoreboard::handle_command`](super::service::Scoreboard::handle_command).

use crate::config::ScoreboardConfig;
use crate::game::Team;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// A team's scoring button was pressed at `at_ms`.
    Press { team: Team, at_ms: u32 },

    /// The reset button was pressed at `at_ms`.
    ResetMatch { at_ms: u32 },

    /// Hot-reload configuration.  Rejected unless it validates.
    UpdateConfig(ScoreboardConfig),
}
