use crate::constants::{
    COUNTER_CONTAINER_SELECTOR, COUNTER_FORMAT_ATTR, COUNTER_ITEM_SELECTOR,
    COUNTER_NUMBER_SELECTOR, COUNTER_TARGET_ATTR,
};
use crate::core::{
    CounterAnimation, CounterPlan, CounterTiming, CounterTrigger, ViewportTrigger,
};
use crate::dom;
use crate::observer::ViewportObserver;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type IntervalSlot = Rc<RefCell<Option<Interval>>>;

#[derive(Default)]
struct Timers {
    pending: Vec<Timeout>,
    running: Vec<IntervalSlot>,
}

impl Timers {
    fn cancel_all(&mut self) {
        self.pending.clear();
        for slot in self.running.drain(..) {
            // Breaks the slot -> interval -> closure -> slot cycle.
            drop(slot.borrow_mut().take());
        }
    }
}

/// Staggered stat counters in the about section, started once when the
/// container first becomes half visible.
pub struct CounterAnimator {
    timers: Rc<RefCell<Timers>>,
    _observer: ViewportObserver,
}

impl CounterAnimator {
    pub fn install(document: &web::Document, timing: CounterTiming) -> Option<Self> {
        let Some(container) = dom::query_one(document, COUNTER_CONTAINER_SELECTOR) else {
            log::info!(
                "[counter] {} not found; counters disabled",
                COUNTER_CONTAINER_SELECTOR
            );
            return None;
        };
        let timers = Rc::new(RefCell::new(Timers::default()));

        let observer = {
            let timers = timers.clone();
            let mut trigger = CounterTrigger::new(timing);
            ViewportObserver::new(ViewportTrigger::COUNTERS, move |entries, observer| {
                for entry in entries.iter().filter(|e| e.is_intersecting()) {
                    let target = entry.target();
                    if !trigger.has_fired() {
                        schedule_counters(&target, &mut trigger, timing, &timers);
                    }
                    observer.unobserve(&target);
                }
            })
        };
        let observer = match observer {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[counter] IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(&container);
        log::info!("[counter] waiting for {}", COUNTER_CONTAINER_SELECTOR);
        Some(Self {
            timers,
            _observer: observer,
        })
    }
}

impl Drop for CounterAnimator {
    fn drop(&mut self) {
        self.timers.borrow_mut().cancel_all();
    }
}

fn schedule_counters(
    container: &web::Element,
    trigger: &mut CounterTrigger,
    timing: CounterTiming,
    timers: &Rc<RefCell<Timers>>,
) {
    let numbers: Vec<Option<web::Element>> = dom::query_all(container, COUNTER_ITEM_SELECTOR)
        .iter()
        .map(|item| item.query_selector(COUNTER_NUMBER_SELECTOR).ok().flatten())
        .collect();
    let attrs: Vec<(Option<String>, Option<String>)> = numbers
        .iter()
        .map(|n| match n {
            Some(n) => (
                n.get_attribute(COUNTER_TARGET_ATTR),
                n.get_attribute(COUNTER_FORMAT_ATTR),
            ),
            None => (None, None),
        })
        .collect();
    let plans = trigger.plan(attrs.iter().map(|(t, f)| (t.as_deref(), f.as_deref())));
    log::info!("[counter] container visible; scheduling {} counters", plans.len());

    for (plan, number) in plans.into_iter().zip(numbers) {
        let CounterPlan {
            index,
            delay_ms,
            animation,
        } = plan;
        let (anim, number) = match (animation, number) {
            (Ok(anim), Some(number)) => (anim, number),
            (Err(e), _) => {
                log::warn!("[counter] item {} skipped: {}", index, e);
                continue;
            }
            (Ok(_), None) => continue,
        };
        let timers_for_start = timers.clone();
        let timeout = Timeout::new(delay_ms, move || {
            start_counter(index, number, anim, timing, &timers_for_start);
        });
        timers.borrow_mut().pending.push(timeout);
    }
}

fn start_counter(
    index: usize,
    number: web::Element,
    mut anim: CounterAnimation,
    timing: CounterTiming,
    timers: &Rc<RefCell<Timers>>,
) {
    let slot: IntervalSlot = Rc::new(RefCell::new(None));
    let slot_for_tick = slot.clone();
    let interval = Interval::new(timing.tick_ms, move || {
        let frame = anim.tick();
        number.set_text_content(Some(&frame.text));
        if frame.finished {
            log::debug!("[counter] item {} reached {}", index, frame.text);
            // Self-cancel; wasm-bindgen defers freeing the running closure.
            let finished = slot_for_tick.borrow_mut().take();
            drop(finished);
        }
    });
    *slot.borrow_mut() = Some(interval);
    timers.borrow_mut().running.push(slot);
}
