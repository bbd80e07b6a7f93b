use crate::constants::{
    FEATURE_CARD_SELECTOR, FEATURE_INDEX_ATTR, MODAL_DETAILS_SELECTOR, MODAL_DISMISS_SELECTOR,
    MODAL_ID, MODAL_IMAGE_SELECTOR, MODAL_OPEN_CLASS, MODAL_TITLE_SELECTOR,
};
use crate::core::content::{self, Feature};
use crate::core::ViewState;
use crate::dom;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feature gallery detail view. Opening locks page scroll; closing restores it.
pub struct FeatureModal {
    _listeners: Vec<EventListener>,
}

impl FeatureModal {
    pub fn install(document: &web::Document, view: &Rc<RefCell<ViewState>>) -> Option<Self> {
        let modal = document.get_element_by_id(MODAL_ID)?;
        let mut listeners = Vec::new();

        for card in dom::query_all_in_document(document, FEATURE_CARD_SELECTOR) {
            let Some(index) = card
                .get_attribute(FEATURE_INDEX_ATTR)
                .and_then(|s| s.trim().parse::<usize>().ok())
            else {
                continue;
            };
            let doc = document.clone();
            let modal = modal.clone();
            let view = view.clone();
            listeners.push(EventListener::new(&card, "click", move |_| {
                let Some(feature) = content::feature(index) else {
                    log::warn!("[modal] no feature at index {}", index);
                    return;
                };
                view.borrow_mut().open_modal(index);
                show(&doc, &modal, feature);
            }));
        }

        for dismiss in dom::query_all(&modal, MODAL_DISMISS_SELECTOR) {
            let doc = document.clone();
            let modal = modal.clone();
            let view = view.clone();
            listeners.push(EventListener::new(&dismiss, "click", move |_| {
                if view.borrow_mut().close_modal().is_some() {
                    hide(&doc, &modal);
                }
            }));
        }

        log::info!("[modal] installed {} listeners", listeners.len());
        Some(Self {
            _listeners: listeners,
        })
    }
}

fn show(document: &web::Document, modal: &web::Element, feature: &Feature) {
    if let Ok(Some(el)) = modal.query_selector(MODAL_TITLE_SELECTOR) {
        el.set_text_content(Some(feature.title));
    }
    if let Ok(Some(el)) = modal.query_selector(MODAL_DETAILS_SELECTOR) {
        el.set_text_content(Some(feature.details));
    }
    if let Ok(Some(el)) = modal.query_selector(MODAL_IMAGE_SELECTOR) {
        _ = el.set_attribute("src", feature.image);
        _ = el.set_attribute("alt", feature.title);
    }
    dom::set_class(modal, MODAL_OPEN_CLASS, true);
    lock_body_scroll(document, true);
}

fn hide(document: &web::Document, modal: &web::Element) {
    dom::set_class(modal, MODAL_OPEN_CLASS, false);
    lock_body_scroll(document, false);
}

fn lock_body_scroll(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        dom::set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}
