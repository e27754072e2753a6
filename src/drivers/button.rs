//! Debounced, edge-triggered button driver with per-button dead-time.
//!
//! ## Hardware
//!
//! Active-high momentary switch with pull-down.  The main loop samples the
//! level once per iteration and feeds it to [`ButtonDriver::tick`] together
//! with the current monotonic time; the driver runs the debounce + edge
//! state machine and reports a press at most once per physical press.
//!
//! ## Press detection
//!
//! | State        | Condition                                  | Next / Event           |
//! |--------------|--------------------------------------------|------------------------|
//! | `Released`   | level HIGH                                 | `Debouncing`           |
//! | `Debouncing` | level LOW                                  | `Released` (bounce)    |
//! | `Debouncing` | HIGH for `debounce_ms`, dead-time over     | `Held`, `Pressed`      |
//! | `Debouncing` | HIGH for `debounce_ms`, inside dead-time   | `Held` (swallowed)     |
//! | `Held`       | level LOW                                  | `Released`             |
//!
//! Holding a button down never produces a second press.  All time math is
//! wrapping so a millisecond counter overflow is harmless.

/// Button events emitted after debounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// A clean rising edge, stamped with the tick that confirmed it.
    Pressed { at_ms: u32 },
}

/// Internal state machine for press detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressState {
    Released,
    Debouncing { since_ms: u32 },
    Held,
}

#[derive(Debug, Clone)]
pub struct ButtonDriver {
    state: PressState,
    debounce_ms: u32,
    cooldown_ms: u32,
    last_fire_ms: Option<u32>,
}

impl ButtonDriver {
    pub fn new(debounce_ms: u32, cooldown_ms: u32) -> Self {
        Self {
            state: PressState::Released,
            debounce_ms,
            cooldown_ms,
            last_fire_ms: None,
        }
    }

    /// Call from the main loop once per iteration.
    /// `pressed` is the raw level (HIGH = `true`); `now_ms` is the current
    /// monotonic time in milliseconds.
    pub fn tick(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        match self.state {
            PressState::Released => {
                if pressed {
                    self.state = PressState::Debouncing { since_ms: now_ms };
                    return self.confirm(now_ms, now_ms);
                }
                None
            }

            PressState::Debouncing { since_ms } => {
                if !pressed {
                    self.state = PressState::Released;
                    return None;
                }
                self.confirm(since_ms, now_ms)
            }

            PressState::Held => {
                if !pressed {
                    self.state = PressState::Released;
                }
                None
            }
        }
    }

    /// Retune timing (takes effect on the next tick).
    pub fn set_timing(&mut self, debounce_ms: u32, cooldown_ms: u32) {
        self.debounce_ms = debounce_ms;
        self.cooldown_ms = cooldown_ms;
    }

    fn confirm(&mut self, since_ms: u32, now_ms: u32) -> Option<ButtonEvent> {
        if now_ms.wrapping_sub(since_ms) < self.debounce_ms {
            return None;
        }
        self.state = PressState::Held;

        let cooled = self
            .last_fire_ms
            .is_none_or(|t| now_ms.wrapping_sub(t) >= self.cooldown_ms);
        if !cooled {
            return None;
        }

        self.last_fire_ms = Some(now_ms);
        Some(ButtonEvent::Pressed { at_ms: now_ms })
    }
}
