use crate::constants::{REVEAL_CLASS, REVEAL_SELECTOR};
use crate::core::{intersecting_indices, ViewportTrigger};
use crate::dom;
use crate::observer::ViewportObserver;
use web_sys as web;

/// Adds the reveal marker class to sections, cards, stats and spec rows as
/// they scroll into view. Targets stay observed; re-marking is a no-op.
pub struct RevealAnimator {
    observed: usize,
    _observer: ViewportObserver,
}

impl RevealAnimator {
    pub fn install(document: &web::Document) -> Option<Self> {
        let targets = dom::query_all_in_document(document, REVEAL_SELECTOR);

        let observer = ViewportObserver::new(ViewportTrigger::REVEAL, move |entries, _| {
            let hits = intersecting_indices(
                entries
                    .iter()
                    .enumerate()
                    .map(|(i, e)| (i, e.is_intersecting())),
            );
            for &i in &hits {
                _ = entries[i].target().class_list().add_1(REVEAL_CLASS);
            }
            if !hits.is_empty() {
                log::debug!("[reveal] {} of {} entries in view", hits.len(), entries.len());
            }
        });
        let observer = match observer {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };

        for el in &targets {
            observer.observe(el);
        }
        log::info!("[reveal] observing {} elements", targets.len());
        Some(Self {
            observed: targets.len(),
            _observer: observer,
        })
    }

    #[inline]
    pub fn observed(&self) -> usize {
        self.observed
    }
}
