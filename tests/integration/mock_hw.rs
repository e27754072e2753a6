//! Mock adapters for integration tests.
//!
//! A settable clock, scripted button levels, and recording display/debug
//! sinks so tests can drive the polling loop tick by tick and assert on
//! everything it produced.

use std::cell::Cell;

use scoreboard::app::events::AppEvent;
use scoreboard::app::ports::{ButtonInput, ButtonLevels, Clock, DebugSink, DisplaySink, Screen};

// ── Clock ─────────────────────────────────────────────────────

pub struct MockClock {
    now: Cell<u32>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn at(now_ms: u32) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

// ── Buttons ───────────────────────────────────────────────────

/// Button levels the test sets directly; every read is counted.
#[derive(Default)]
pub struct MockButtons {
    pub levels: ButtonLevels,
    pub reads: u32,
}

#[allow(dead_code)]
impl MockButtons {
    pub fn release_all(&mut self) {
        self.levels = ButtonLevels::default();
    }
}

impl ButtonInput for MockButtons {
    fn read(&mut self) -> ButtonLevels {
        self.reads += 1;
        self.levels
    }
}

// ── Display ───────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDisplay {
    pub frames: Vec<Screen>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn last(&self) -> Option<&Screen> {
        self.frames.last()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&mut self, screen: &Screen) {
        self.frames.push(*screen);
    }
}

// ── Debug sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct VecDebugSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl VecDebugSink {
    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DebugSink for VecDebugSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
