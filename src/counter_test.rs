use super::*;

fn run_to_end(run: &mut CounterRun) -> Vec<u32> {
    let mut shown = Vec::new();
    while let Some(value) = run.tick() {
        shown.push(value);
    }
    shown
}

// =============================================================
// CounterPlan
// =============================================================

#[test]
fn plan_interval_is_floor_of_duration_over_target() {
    let plan = CounterPlan::new(50, 2000, 10);
    assert_eq!(plan.interval_ms, 40);
    assert_eq!(plan.total_ms(), 2000);

    let plan = CounterPlan::new(3, 2000, 10);
    assert_eq!(plan.interval_ms, 666);
}

#[test]
fn plan_interval_never_drops_below_minimum_tick() {
    let plan = CounterPlan::new(1500, 2000, 10);
    assert_eq!(plan.interval_ms, 10);
    assert_eq!(plan.total_ms(), 15_000);
}

#[test]
fn plan_from_attribute_parses_target() {
    let plan = CounterPlan::from_attribute(Some(" 120 "), 2000, 10).expect("plan");
    assert_eq!(plan.target, 120);
    assert_eq!(plan.interval_ms, 16);
}

#[test]
fn plan_from_attribute_rejects_bad_targets() {
    for raw in [None, Some(""), Some("abc"), Some("0"), Some("-5"), Some("1.5")] {
        assert!(CounterPlan::from_attribute(raw, 2000, 10).is_none(), "{raw:?}");
    }
}

// =============================================================
// CounterRun
// =============================================================

#[test]
fn counter_reaches_exactly_target_and_stops() {
    let mut run = CounterRun::new(CounterPlan::new(50, 2000, 10));
    let shown = run_to_end(&mut run);
    assert_eq!(shown.len(), 50);
    assert_eq!(shown.first(), Some(&1));
    assert_eq!(shown.last(), Some(&50));
    assert!(run.is_finished());
    assert_eq!(run.tick(), None);
    assert_eq!(run.count(), 50);
}

#[test]
fn small_targets_finish_exactly() {
    for target in 1..=7 {
        let mut run = CounterRun::new(CounterPlan::new(target, 2000, 10));
        assert_eq!(run_to_end(&mut run).last(), Some(&target));
    }
}

// =============================================================
// CounterBoard
// =============================================================

const VH: f64 = 1000.0;

fn visible() -> Option<Bounds> {
    Some(Bounds { top: 300.0, bottom: 600.0 })
}

fn below_fold() -> Option<Bounds> {
    Some(Bounds { top: 1500.0, bottom: 1800.0 })
}

#[test]
fn board_starts_once_when_section_visible() {
    let mut board = CounterBoard::new(3, 0.8);
    assert!(!board.should_start(below_fold(), VH));
    assert!(!board.has_started());
    assert!(board.should_start(visible(), VH));
    assert!(board.has_started());
}

/// One scroll event as the host handles it: a started board launches a
/// fresh run per counter.
fn on_scroll(board: &mut CounterBoard, runs: &mut Vec<CounterRun>, section: Option<Bounds>) {
    if board.should_start(section, VH) {
        runs.push(CounterRun::new(CounterPlan::new(50, 2000, 10)));
    }
}

#[test]
fn retriggering_after_completion_does_not_restart() {
    let mut board = CounterBoard::new(1, 0.8);
    let mut runs = Vec::new();

    on_scroll(&mut board, &mut runs, visible());
    assert_eq!(runs.len(), 1);
    assert_eq!(run_to_end(&mut runs[0]).last(), Some(&50));

    // Scroll away and back.
    on_scroll(&mut board, &mut runs, below_fold());
    on_scroll(&mut board, &mut runs, visible());

    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].count(), 50);
    assert!(runs[0].tick().is_none());
}

#[test]
fn board_without_section_or_counters_never_starts() {
    let mut board = CounterBoard::new(2, 0.8);
    assert!(!board.should_start(None, VH));

    let mut empty = CounterBoard::new(0, 0.8);
    assert!(!empty.should_start(visible(), VH));
}
