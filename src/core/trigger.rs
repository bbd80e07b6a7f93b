//! Viewport trigger bookkeeping shared by the reveal and counter observers.

use super::counter::{
    parse_target, CounterAnimation, CounterFormat, CounterTiming, TargetError,
};

/// Intersection options: visible fraction plus a bottom root margin in px
/// (negative shrinks the viewport so the trigger fires before the edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTrigger {
    pub threshold: f64,
    pub bottom_margin_px: i32,
}

impl ViewportTrigger {
    /// Reveal markers: 10% visible, 50px early.
    pub const REVEAL: ViewportTrigger = ViewportTrigger {
        threshold: 0.1,
        bottom_margin_px: -50,
    };
    /// Stat counters container: half visible.
    pub const COUNTERS: ViewportTrigger = ViewportTrigger {
        threshold: 0.5,
        bottom_margin_px: 0,
    };

    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

/// Latch that reports `true` from [`OneShot::fire`] exactly once.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    #[inline]
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Indices of intersecting entries, in delivery order.
pub fn intersecting_indices<I>(entries: I) -> Vec<usize>
where
    I: IntoIterator<Item = (usize, bool)>,
{
    entries
        .into_iter()
        .filter_map(|(i, hit)| hit.then_some(i))
        .collect()
}

/// One stat counter to start `delay_ms` after the container first shows.
/// `animation` is the parse error when the item's target is unusable.
#[derive(Debug)]
pub struct CounterPlan {
    pub index: usize,
    pub delay_ms: u32,
    pub animation: Result<CounterAnimation, TargetError>,
}

/// Container-level trigger for the stat counters: the first intersection
/// plans every child, later ones plan nothing.
#[derive(Clone, Debug, Default)]
pub struct CounterTrigger {
    once: OneShot,
    timing: CounterTiming,
}

impl CounterTrigger {
    pub fn new(timing: CounterTiming) -> Self {
        Self {
            once: OneShot::default(),
            timing,
        }
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.once.has_fired()
    }

    /// `items` are the children's `(target, format)` attributes in document
    /// order. Returns an empty plan once the trigger has fired.
    pub fn plan<'a, I>(&mut self, items: I) -> Vec<CounterPlan>
    where
        I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
    {
        if !self.once.fire() {
            return Vec::new();
        }
        let timing = self.timing;
        items
            .into_iter()
            .enumerate()
            .map(|(index, (target, format))| CounterPlan {
                index,
                delay_ms: timing.stagger_delay(index),
                animation: parse_target(target).map(|t| {
                    CounterAnimation::new(t, CounterFormat::from_attr(format), timing)
                }),
            })
            .collect()
    }
}
