// Host-side tests for the stat counter animation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/counter.rs"]
mod counter;

use counter::*;

/// Run an animation to completion, returning every displayed frame.
fn run(target: f64, format: CounterFormat) -> Vec<CounterFrame> {
    let timing = CounterTiming::default();
    let mut anim = CounterAnimation::new(target, format, timing);
    let mut frames = Vec::new();
    for _ in 0..timing.total_ticks() * 2 {
        let frame = anim.tick();
        let done = frame.finished;
        frames.push(frame);
        if done {
            break;
        }
    }
    frames
}

#[test]
fn timing_defaults_reach_target_in_125_ticks() {
    let t = CounterTiming::default();
    assert_eq!(t.duration_ms, 2000);
    assert_eq!(t.tick_ms, 16);
    assert_eq!(t.total_ticks(), 125);
}

#[test]
fn stagger_is_200ms_per_index() {
    let t = CounterTiming::default();
    let delays: Vec<u32> = (0..3).map(|i| t.stagger_delay(i)).collect();
    assert_eq!(delays, vec![0, 200, 400]);
}

#[test]
fn counter_reaches_exact_target_at_duration() {
    let timing = CounterTiming::default();
    for target in [1.0, 4.0, 250.0, 469.0, 650.0, 1825.0, 0.3] {
        let mut anim = CounterAnimation::new(target, CounterFormat::Integer, timing);
        let mut last = CounterFrame { text: String::new(), finished: false };
        for _ in 0..timing.total_ticks() {
            last = anim.tick();
        }
        assert!(last.finished, "target {target} not finished at 2000ms");
        assert_eq!(anim.value(), target);
        assert!(anim.is_finished());
    }
}

#[test]
fn counter_does_not_finish_early() {
    let timing = CounterTiming::default();
    let mut anim = CounterAnimation::new(469.0, CounterFormat::Integer, timing);
    for _ in 0..timing.total_ticks() - 1 {
        assert!(!anim.tick().finished);
    }
    assert!(anim.value() < 469.0);
}

#[test]
fn counter_is_monotonic() {
    let timing = CounterTiming::default();
    for target in [4.0, 469.0, 7.5] {
        let mut anim = CounterAnimation::new(target, CounterFormat::OneDecimal, timing);
        let mut prev = 0.0;
        for _ in 0..timing.total_ticks() {
            anim.tick();
            assert!(anim.value() >= prev);
            assert!(anim.value() <= target);
            prev = anim.value();
        }
    }
}

#[test]
fn decimal_counter_renders_one_fraction_digit() {
    let frames = run(4.0, CounterFormat::OneDecimal);
    let texts: Vec<&str> = frames.iter().map(|f| f.text.as_str()).collect();
    assert!(texts.contains(&"2.3"));
    assert_eq!(texts.last(), Some(&"4.0"));
    assert!(texts.iter().all(|t| t.split('.').nth(1).map(str::len) == Some(1)));
}

#[test]
fn integer_counter_renders_floored_integers() {
    let frames = run(469.0, CounterFormat::Integer);
    assert!(frames.iter().all(|f| f.text.parse::<i64>().is_ok()));
    assert_eq!(frames.last().map(|f| f.text.as_str()), Some("469"));
    // 469 * 1 / 125 = 3.752 floors to 3.
    assert_eq!(frames[0].text, "3");
}

#[test]
fn integer_counter_never_rounds_up_early() {
    let frames = run(4.0, CounterFormat::Integer);
    let before_last = &frames[frames.len() - 2];
    assert_eq!(before_last.text, "3");
    assert_eq!(frames.last().map(|f| f.text.as_str()), Some("4"));
}

#[test]
fn non_positive_targets_finish_immediately() {
    for target in [0.0, -5.0] {
        let frames = run(target, CounterFormat::Integer);
        assert_eq!(frames.len(), 1);
        assert!(frames[0].finished);
    }
    assert_eq!(run(0.0, CounterFormat::Integer)[0].text, "0");
}

#[test]
fn format_flag_is_explicit_per_item() {
    assert_eq!(CounterFormat::from_attr(Some("decimal")), CounterFormat::OneDecimal);
    assert_eq!(CounterFormat::from_attr(Some(" Decimal ")), CounterFormat::OneDecimal);
    assert_eq!(CounterFormat::from_attr(Some("integer")), CounterFormat::Integer);
    assert_eq!(CounterFormat::from_attr(None), CounterFormat::Integer);
}

#[test]
fn format_value_floors_or_keeps_one_digit() {
    assert_eq!(format_value(468.99, CounterFormat::Integer), "468");
    assert_eq!(format_value(2.304, CounterFormat::OneDecimal), "2.3");
    assert_eq!(format_value(4.0, CounterFormat::OneDecimal), "4.0");
}

#[test]
fn parse_target_accepts_numbers() {
    assert_eq!(parse_target(Some("469")), Ok(469.0));
    assert_eq!(parse_target(Some(" 4.0 ")), Ok(4.0));
    assert_eq!(parse_target(Some("1e3")), Ok(1000.0));
}

#[test]
fn parse_target_rejects_missing_and_malformed() {
    assert_eq!(parse_target(None), Err(TargetError::Missing));
    assert_eq!(parse_target(Some("   ")), Err(TargetError::Missing));
    assert_eq!(
        parse_target(Some("fast")),
        Err(TargetError::NotNumeric("fast".to_string()))
    );
    assert!(parse_target(Some("NaN")).is_err());
    assert!(parse_target(Some("inf")).is_err());
    assert!(parse_target(Some("469hp")).is_err());
}

#[test]
fn target_error_messages_are_descriptive() {
    assert_eq!(TargetError::Missing.to_string(), "counter target attribute is missing");
    assert!(TargetError::NotNumeric("x".into()).to_string().contains("\"x\""));
}
