use crate::constants::{SPLASH_HIDDEN_CLASS, SPLASH_HIDE_AFTER_MS, SPLASH_SELECTOR};
use crate::core::ViewState;
use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    dom::set_class(el, SPLASH_HIDDEN_CLASS, false);
}

#[inline]
pub fn hide(el: &web::Element) {
    dom::set_class(el, SPLASH_HIDDEN_CLASS, true);
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    el.class_list().contains(SPLASH_HIDDEN_CLASS)
}

/// Loading overlay that fades out a fixed time after install.
pub struct LoadingSplash {
    _hide_timer: Timeout,
}

impl LoadingSplash {
    pub fn install(document: &web::Document, view: &Rc<RefCell<ViewState>>) -> Option<Self> {
        let overlay = dom::query_one(document, SPLASH_SELECTOR)?;
        if is_hidden(&overlay) {
            show(&overlay);
        }
        let view = view.clone();
        let timer = Timeout::new(SPLASH_HIDE_AFTER_MS, move || {
            if view.borrow_mut().finish_loading() {
                hide(&overlay);
                log::info!("[splash] hidden after {}ms", SPLASH_HIDE_AFTER_MS);
            }
        });
        Some(Self { _hide_timer: timer })
    }
}
