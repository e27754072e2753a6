//! Log-based debug sink adapter.
//!
//! Implements [`DebugSink`] by writing application events to the logger
//! (UART / USB-CDC on the device, whatever `log` backend a test installs
//! on the host).  State records go out as one JSON object per line so a
//! host tool can parse the stream.

use log::{info, warn};

use crate::app::events::{AppEvent, StateRecord};
use crate::app::ports::DebugSink;
use crate::game::engine::Outcome;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogDebugSink;

impl LogDebugSink {
    pub fn new() -> Self {
        Self
    }
}

/// One-word summary of a press for the log.
pub fn verdict(outcome: Outcome) -> &'static str {
    if outcome.scored() {
        "scored"
    } else if outcome.accepted() {
        "timer-restarted"
    } else if outcome.changed_state() {
        "penalized"
    } else {
        "ignored"
    }
}

/// Render a state record as a single-line JSON object.
pub fn state_json(record: &StateRecord) -> Option<String> {
    match serde_json::to_string(record) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("STATE | serialisation failed: {}", e);
            None
        }
    }
}

impl DebugSink for LogDebugSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                timer_delay_ms,
                policy,
            } => {
                info!(
                    "START | timer_delay={}ms early_press={}",
                    timer_delay_ms,
                    policy.name()
                );
            }
            AppEvent::ButtonPressed(team) => {
                info!("BUTTON | {} pressed", team);
            }
            AppEvent::Press(result) => {
                info!(
                    "PRESS | team={} {} score={} last_press={} next_score_in={}ms",
                    result.team,
                    verdict(result.outcome),
                    result.score,
                    result.last_press_ms,
                    result.next_score_in_ms
                );
            }
            AppEvent::MatchReset => {
                info!("RESET | scores cleared");
            }
            AppEvent::State(record) => {
                if let Some(json) = state_json(record) {
                    info!("STATE | {}", json);
                }
            }
            AppEvent::ConfigUpdated {
                timer_delay_ms,
                policy,
            } => {
                info!(
                    "CONFIG | applied timer_delay={}ms early_press={}",
                    timer_delay_ms,
                    policy.name()
                );
            }
            AppEvent::ConfigRejected(reason) => {
                warn!("CONFIG | rejected: {}", reason);
            }
        }
    }
}
