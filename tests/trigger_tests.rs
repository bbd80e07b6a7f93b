// Host-side tests for viewport trigger bookkeeping and counter scheduling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/trigger.rs"]
mod trigger;
#[path = "../src/core/counter.rs"]
mod counter;

use counter::{CounterTiming, TargetError};
use trigger::*;

fn run_to_end(plan: &CounterPlan) -> Option<String> {
    let mut anim = plan.animation.as_ref().ok()?.clone();
    loop {
        let frame = anim.tick();
        if frame.finished {
            return Some(frame.text);
        }
    }
}

#[test]
fn observer_options_match_page_tuning() {
    assert_eq!(ViewportTrigger::REVEAL.threshold, 0.1);
    assert_eq!(ViewportTrigger::REVEAL.root_margin(), "0px 0px -50px 0px");
    assert_eq!(ViewportTrigger::COUNTERS.threshold, 0.5);
    assert_eq!(ViewportTrigger::COUNTERS.root_margin(), "0px 0px 0px 0px");
}

#[test]
fn one_shot_fires_exactly_once() {
    let mut once = OneShot::default();
    assert!(!once.has_fired());
    assert!(once.fire());
    assert!(!once.fire());
    assert!(!once.fire());
    assert!(once.has_fired());
}

#[test]
fn intersecting_indices_keep_delivery_order() {
    let entries = vec![(4, true), (1, false), (2, true), (0, true)];
    assert_eq!(intersecting_indices(entries), vec![4, 2, 0]);
    assert!(intersecting_indices(Vec::<(usize, bool)>::new()).is_empty());
}

#[test]
fn three_counters_start_at_0_200_400ms() {
    let mut trigger = CounterTrigger::new(CounterTiming::default());
    let plans = trigger.plan([
        (Some("469"), None),
        (Some("250"), None),
        (Some("4.0"), Some("decimal")),
    ]);
    let schedule: Vec<(usize, u32)> = plans.iter().map(|p| (p.index, p.delay_ms)).collect();
    assert_eq!(schedule, vec![(0, 0), (1, 200), (2, 400)]);
    assert!(plans.iter().all(|p| p.animation.is_ok()));
}

#[test]
fn container_schedules_children_only_once() {
    let mut trigger = CounterTrigger::new(CounterTiming::default());
    assert!(!trigger.has_fired());
    let items = [(Some("469"), None), (Some("250"), None)];
    assert_eq!(trigger.plan(items).len(), 2);
    assert!(trigger.has_fired());
    // Scroll away and back past the threshold.
    assert!(trigger.plan(items).is_empty());
    assert!(trigger.plan(items).is_empty());
}

#[test]
fn malformed_target_is_skipped_without_shifting_siblings() {
    let mut trigger = CounterTrigger::new(CounterTiming::default());
    let plans = trigger.plan([
        (Some("469"), None),
        (None, None),
        (Some("4.0"), Some("decimal")),
        (Some("fast"), None),
        (Some("250"), None),
    ]);
    assert_eq!(plans.len(), 5);
    assert_eq!(plans[1].animation.as_ref().err(), Some(&TargetError::Missing));
    assert_eq!(
        plans[3].animation.as_ref().err(),
        Some(&TargetError::NotNumeric("fast".to_string()))
    );
    // Siblings keep their own slot in the stagger.
    assert_eq!(plans[4].delay_ms, 800);
    let finals: Vec<Option<String>> = plans.iter().map(run_to_end).collect();
    assert_eq!(
        finals,
        vec![
            Some("469".to_string()),
            None,
            Some("4.0".to_string()),
            None,
            Some("250".to_string()),
        ]
    );
}

#[test]
fn empty_container_still_consumes_the_trigger() {
    let mut trigger = CounterTrigger::default();
    assert!(trigger.plan(Vec::<(Option<&str>, Option<&str>)>::new()).is_empty());
    assert!(trigger.has_fired());
}
