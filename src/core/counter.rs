//! Numeric counter animation: 0 → target over a fixed duration at a fixed
//! tick, with per-item stagger and per-item display format.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTiming {
    pub duration_ms: u32,
    pub tick_ms: u32,
    /// Delay added per item index before a counter starts.
    pub stagger_ms: u32,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 16,
            stagger_ms: 200,
        }
    }
}

impl CounterTiming {
    /// Number of ticks needed to reach the target (never zero).
    #[inline]
    pub fn total_ticks(&self) -> u32 {
        (self.duration_ms / self.tick_ms.max(1)).max(1)
    }

    #[inline]
    pub fn stagger_delay(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.stagger_ms)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CounterFormat {
    /// Floored integer text.
    #[default]
    Integer,
    /// One fractional digit, e.g. "4.0".
    OneDecimal,
}

impl CounterFormat {
    /// Read the per-item format flag (`data-format`). Only `"decimal"` selects
    /// one fractional digit.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("decimal") => CounterFormat::OneDecimal,
            _ => CounterFormat::Integer,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TargetError {
    #[error("counter target attribute is missing")]
    Missing,
    #[error("counter target {0:?} is not a finite number")]
    NotNumeric(String),
}

pub fn parse_target(raw: Option<&str>) -> Result<f64, TargetError> {
    let raw = raw.ok_or(TargetError::Missing)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TargetError::Missing);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TargetError::NotNumeric(raw.to_string())),
    }
}

pub fn format_value(value: f64, format: CounterFormat) -> String {
    match format {
        CounterFormat::Integer => format!("{}", value.floor() as i64),
        CounterFormat::OneDecimal => format!("{:.1}", value),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    format: CounterFormat,
    ticks: u32,
    total_ticks: u32,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, format: CounterFormat, timing: CounterTiming) -> Self {
        Self {
            target,
            format,
            ticks: 0,
            total_ticks: timing.total_ticks(),
            current: 0.0,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current >= self.target && self.ticks > 0
    }

    /// Advance one tick and return the text to display.
    ///
    /// The value is computed from the tick count rather than accumulated so
    /// the last tick lands on the target exactly.
    pub fn tick(&mut self) -> CounterFrame {
        self.ticks = self.ticks.saturating_add(1);
        let next = if self.ticks >= self.total_ticks {
            self.target
        } else {
            self.target * f64::from(self.ticks) / f64::from(self.total_ticks)
        };
        let finished = next >= self.target;
        self.current = if finished { self.target } else { next };
        CounterFrame {
            text: format_value(self.current, self.format),
            finished,
        }
    }
}
