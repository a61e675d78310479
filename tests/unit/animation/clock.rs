use super::*;

#[test]
fn ticker_reports_deltas_from_manual_clock() {
    let clock = ManualClock::new();
    let mut ticker = FrameTicker::new();
    assert_eq!(ticker.tick(&clock), Duration::ZERO);

    clock.advance(Duration::from_millis(16));
    assert_eq!(ticker.tick(&clock), Duration::from_millis(16));

    clock.advance(Duration::from_millis(17));
    assert_eq!(ticker.tick(&clock), Duration::from_millis(17));
    assert_eq!(ticker.tick(&clock), Duration::ZERO);
}

#[test]
fn ticker_ignores_backwards_clock() {
    let clock = ManualClock::new();
    clock.set(Duration::from_secs(5));
    let mut ticker = FrameTicker::new();
    ticker.tick(&clock);
    clock.set(Duration::from_secs(1));
    assert_eq!(ticker.tick(&clock), Duration::ZERO);
}

#[test]
fn reset_restarts_from_zero_delta() {
    let clock = ManualClock::new();
    let mut ticker = FrameTicker::new();
    ticker.tick(&clock);
    clock.advance(Duration::from_millis(40));
    ticker.reset();
    assert_eq!(ticker.tick(&clock), Duration::ZERO);
}

#[test]
fn monotonic_clock_does_not_go_backwards() {
    let clock = MonotonicClock::new();
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}
