//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Scoreboard (domain)
//! ```
//!
//! Driven adapters (clock, buttons, display, debug log) implement these
//! traits.  The [`Scoreboard`](super::service::Scoreboard) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Sinks are fire-and-forget: the core never depends on a render or log
//! write succeeding to keep its own state consistent.

use crate::game::GameSnapshot;

// ───────────────────────────────────────────────────────────────
// Clock source (driven adapter: hardware timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter.  Allowed to wrap at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Input source (driven adapter: GPIO → domain)
// ───────────────────────────────────────────────────────────────

/// Raw levels of the three buttons at one instant (`true` = HIGH).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLevels {
    pub red: bool,
    pub blue: bool,
    pub reset: bool,
}

/// Read-side port: the domain calls this once per loop iteration.
pub trait ButtonInput {
    fn read(&mut self) -> ButtonLevels;
}

// ───────────────────────────────────────────────────────────────
// Display sink (driven adapter: domain → LCD / panel)
// ───────────────────────────────────────────────────────────────

/// What the display should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Normal scoreboard.
    Scores { snapshot: GameSnapshot },
    /// Feedback shown for a fixed time after a match reset.
    ResetNotice,
}

/// Renders the current [`Screen`].  Called on every loop iteration;
/// implementations should skip redundant redraws themselves.
pub trait DisplaySink {
    fn render(&mut self, screen: &Screen);
}

// ───────────────────────────────────────────────────────────────
// Debug sink (driven adapter: domain → serial log)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait DebugSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
