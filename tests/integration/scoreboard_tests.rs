//! Integration tests for the polling loop: buttons → Scoreboard → sinks.
//!
//! Every test drives [`Scoreboard::tick`] with mock adapters, sample by
//! sample, the way the firmware main loop does.

use scoreboard::app::commands::AppCommand;
use scoreboard::app::events::AppEvent;
use scoreboard::app::ports::Screen;
use scoreboard::app::service::Scoreboard;
use scoreboard::config::ScoreboardConfig;
use scoreboard::game::engine::Outcome;
use scoreboard::game::policy::EarlyPressPolicy;
use scoreboard::game::{Team, TeamState};

use crate::mock_hw::{MockButtons, MockClock, RecordingDisplay, VecDebugSink};

struct Rig {
    board: Scoreboard,
    clock: MockClock,
    buttons: MockButtons,
    display: RecordingDisplay,
    sink: VecDebugSink,
}

impl Rig {
    fn new(config: ScoreboardConfig) -> Self {
        let mut sink = VecDebugSink::default();
        let mut board = Scoreboard::new(config);
        board.start(&mut sink);
        Self {
            board,
            clock: MockClock::at(0),
            buttons: MockButtons::default(),
            display: RecordingDisplay::default(),
            sink,
        }
    }

    /// Debounce off so a single HIGH sample is a press.
    fn instant() -> Self {
        Self::new(ScoreboardConfig {
            debounce_ms: 0,
            ..ScoreboardConfig::default()
        })
    }

    fn tick_at(&mut self, now_ms: u32) -> bool {
        self.clock.set(now_ms);
        self.board.tick(
            &self.clock,
            &mut self.buttons,
            &mut self.display,
            &mut self.sink,
        )
    }

    /// Press a button at `at_ms` and release it 50 ms later.
    fn tap(&mut self, button: &str, at_ms: u32) {
        self.set(button, true);
        self.tick_at(at_ms);
        self.set(button, false);
        self.tick_at(at_ms.wrapping_add(50));
    }

    fn set(&mut self, button: &str, level: bool) {
        match button {
            "red" => self.buttons.levels.red = level,
            "blue" => self.buttons.levels.blue = level,
            "reset" => self.buttons.levels.reset = level,
            other => panic!("unknown button {other}"),
        }
    }

    fn press_outcomes(&self) -> Vec<(Team, Outcome)> {
        self.sink
            .events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Press(r) => Some((r.team, r.outcome)),
                _ => None,
            })
            .collect()
    }

    fn state_records(&self) -> usize {
        self.sink.count(|e| matches!(e, AppEvent::State(_)))
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_announces_rules() {
    let rig = Rig::instant();
    assert_eq!(
        rig.sink.events.first(),
        Some(&AppEvent::Started {
            timer_delay_ms: 10_000,
            policy: EarlyPressPolicy::ResetTimer,
        })
    );
}

// ── Press detection ───────────────────────────────────────────

#[test]
fn held_button_scores_once() {
    let mut rig = Rig::instant();
    rig.set("red", true);
    for t in (1_000..30_000).step_by(5) {
        rig.tick_at(t);
    }
    assert_eq!(rig.press_outcomes(), vec![(Team::Red, Outcome::ScoredFirst)]);
    assert_eq!(rig.board.snapshot().red, TeamState::pressed_at(1, 1_000));
}

#[test]
fn default_debounce_confirms_after_twenty_ms() {
    let mut rig = Rig::new(ScoreboardConfig::default());
    rig.set("red", true);
    assert!(!rig.tick_at(1_000));
    assert!(!rig.tick_at(1_010));
    assert!(rig.tick_at(1_020));
    assert_eq!(rig.board.snapshot().red.last_press_ms, 1_020);
}

#[test]
fn bounce_shorter_than_debounce_is_ignored() {
    let mut rig = Rig::new(ScoreboardConfig::default());
    rig.set("blue", true);
    rig.tick_at(1_000);
    rig.set("blue", false);
    rig.tick_at(1_005);
    rig.tick_at(1_100);
    assert!(rig.press_outcomes().is_empty());
    assert_eq!(rig.board.snapshot().blue, TeamState::new());
}

#[test]
fn repress_inside_dead_time_is_swallowed() {
    let mut rig = Rig::instant();
    rig.tap("red", 1_000);
    rig.tap("red", 1_100);
    assert_eq!(rig.press_outcomes().len(), 1);
    assert_eq!(rig.board.snapshot().red.last_press_ms, 1_000);

    // Past the 150 ms dead-time the next tap is an early press.
    rig.tap("red", 1_300);
    assert_eq!(
        rig.press_outcomes().last(),
        Some(&(Team::Red, Outcome::TimerReset))
    );
}

#[test]
fn teams_have_independent_dead_time() {
    let mut rig = Rig::instant();
    rig.set("red", true);
    rig.tick_at(1_000);
    rig.set("blue", true);
    rig.tick_at(1_001);
    assert_eq!(
        rig.press_outcomes(),
        vec![
            (Team::Red, Outcome::ScoredFirst),
            (Team::Blue, Outcome::ScoredFirst)
        ]
    );
}

#[test]
fn simultaneous_presses_are_both_processed_red_first() {
    let mut rig = Rig::instant();
    rig.buttons.levels.red = true;
    rig.buttons.levels.blue = true;
    assert!(rig.tick_at(2_000));
    assert_eq!(
        rig.press_outcomes(),
        vec![
            (Team::Red, Outcome::ScoredFirst),
            (Team::Blue, Outcome::ScoredFirst)
        ]
    );
    // One record for the whole iteration.
    assert_eq!(rig.state_records(), 1);
}

// ── Debug records ─────────────────────────────────────────────

#[test]
fn state_record_only_when_something_changed() {
    let mut rig = Rig::instant();
    for t in (0..1_000).step_by(5) {
        rig.tick_at(t);
    }
    assert_eq!(rig.state_records(), 0);

    rig.set("red", true);
    rig.tick_at(1_000);
    let record = rig.sink.events.iter().find_map(|e| match e {
        AppEvent::State(r) => Some(*r),
        _ => None,
    });
    let record = record.expect("state record after press");
    assert_eq!(record.current_time, 1_000);
    assert_eq!(record.red_score, 1);
    assert_eq!(record.red_last_press_time, 1_000);
    assert_eq!(record.blue_last_press_time, 0);
}

#[test]
fn ignored_press_emits_no_state_record() {
    let mut rig = Rig::new(ScoreboardConfig {
        debounce_ms: 0,
        early_press_policy: EarlyPressPolicy::Ignore,
        ..ScoreboardConfig::default()
    });
    rig.tap("red", 1_000);
    assert_eq!(rig.state_records(), 1);
    rig.tap("red", 2_000);
    assert_eq!(rig.state_records(), 1);
    assert_eq!(
        rig.press_outcomes().last(),
        Some(&(Team::Red, Outcome::Ignored))
    );
}

// ── Display ───────────────────────────────────────────────────

#[test]
fn display_is_rendered_every_tick() {
    let mut rig = Rig::instant();
    for t in 0..50 {
        rig.tick_at(t * 5);
    }
    assert_eq!(rig.display.frames.len(), 50);
    assert_eq!(rig.buttons.reads, 50);
    assert!(rig.display.frames.iter().all(|f| matches!(f, Screen::Scores { .. })));
}

#[test]
fn reset_button_shows_banner_then_zeroed_scores() {
    let mut rig = Rig::instant();
    rig.tap("red", 1_000);
    rig.tap("blue", 2_000);

    rig.set("reset", true);
    assert!(rig.tick_at(5_000));
    assert_eq!(rig.display.last(), Some(&Screen::ResetNotice));
    assert_eq!(rig.sink.events.iter().filter(|e| **e == AppEvent::MatchReset).count(), 1);

    // Holding reset does not re-trigger.
    rig.tick_at(6_000);
    rig.set("reset", false);
    rig.tick_at(7_499);
    assert_eq!(rig.display.last(), Some(&Screen::ResetNotice));

    rig.tick_at(7_500);
    match rig.display.last() {
        Some(Screen::Scores { snapshot }) => {
            assert_eq!(snapshot.red, TeamState::new());
            assert_eq!(snapshot.blue, TeamState::new());
        }
        other => panic!("expected scores, got {other:?}"),
    }
}

#[test]
fn scoring_press_cuts_banner_short() {
    let mut rig = Rig::instant();
    rig.tap("reset", 5_000);
    assert_eq!(rig.display.last(), Some(&Screen::ResetNotice));

    rig.set("red", true);
    rig.tick_at(5_500);
    match rig.display.last() {
        Some(Screen::Scores { snapshot }) => assert_eq!(snapshot.red.score, 1),
        other => panic!("expected scores, got {other:?}"),
    }
}

#[test]
fn banner_expires_across_counter_wrap() {
    let mut rig = Rig::instant();
    rig.set("reset", true);
    rig.tick_at(u32::MAX - 999);
    rig.set("reset", false);
    rig.tick_at(1_000); // 2000 ms later
    assert_eq!(rig.display.last(), Some(&Screen::ResetNotice));
    rig.tick_at(1_600); // 2600 ms later
    assert!(matches!(rig.display.last(), Some(Screen::Scores { .. })));
}

// ── Runtime configuration ─────────────────────────────────────

#[test]
fn config_update_changes_rules_live() {
    let mut rig = Rig::instant();
    let faster = ScoreboardConfig {
        timer_delay_ms: 1_000,
        early_press_policy: EarlyPressPolicy::Penalize,
        debounce_ms: 0,
        ..ScoreboardConfig::default()
    };
    let changed = rig.board.handle_command(AppCommand::UpdateConfig(faster), &mut rig.sink);
    assert!(!changed);
    assert!(matches!(
        rig.sink.events.last(),
        Some(AppEvent::ConfigUpdated {
            timer_delay_ms: 1_000,
            policy: EarlyPressPolicy::Penalize
        })
    ));

    rig.tap("red", 10_000);
    rig.tap("red", 11_000);
    rig.tap("red", 11_500);
    assert_eq!(
        rig.press_outcomes(),
        vec![
            (Team::Red, Outcome::ScoredFirst),
            (Team::Red, Outcome::ScoredOnTime),
            (Team::Red, Outcome::Penalized)
        ]
    );
    assert_eq!(rig.board.snapshot().red.score, 1);
}

#[test]
fn rejected_config_keeps_old_rules() {
    let mut rig = Rig::instant();
    let bad = ScoreboardConfig {
        press_cooldown_ms: 20_000,
        ..ScoreboardConfig::default()
    };
    rig.board.handle_command(AppCommand::UpdateConfig(bad), &mut rig.sink);
    let unchanged = ScoreboardConfig {
        debounce_ms: 0,
        ..ScoreboardConfig::default()
    };
    assert_eq!(rig.board.config(), &unchanged);
    assert!(matches!(
        rig.sink.events.last(),
        Some(AppEvent::ConfigRejected(_))
    ));
}
