use crate::constants::{
    HEADER_ID, HEADER_SCROLLED_CLASS, MENU_OPEN_CLASS, MENU_TOGGLE_ID, NAV_MENU_ID,
    SECTION_LINK_ATTR, SECTION_LINK_SELECTOR,
};
use crate::core::ViewState;
use crate::dom;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Compact header on scroll, mobile menu toggle, smooth in-page links.
pub struct NavController {
    _listeners: Vec<EventListener>,
}

impl NavController {
    pub fn install(document: &web::Document, view: &Rc<RefCell<ViewState>>) -> Option<Self> {
        let window = web::window()?;
        let mut listeners = Vec::new();

        if let Some(header) = document.get_element_by_id(HEADER_ID) {
            let view = view.clone();
            let win = window.clone();
            listeners.push(EventListener::new(&window, "scroll", move |_| {
                let y = win.scroll_y().unwrap_or(0.0);
                let mut v = view.borrow_mut();
                if v.set_scroll_y(y) {
                    dom::set_class(&header, HEADER_SCROLLED_CLASS, v.scrolled);
                }
            }));
        }

        let doc = document.clone();
        let view_for_toggle = view.clone();
        if let Some(l) = dom::click_listener(document, MENU_TOGGLE_ID, move || {
            let open = view_for_toggle.borrow_mut().toggle_menu();
            sync_menu(&doc, open);
            log::debug!("[nav] menu open={}", open);
        }) {
            listeners.push(l);
        }

        for link in dom::query_all_in_document(document, SECTION_LINK_SELECTOR) {
            let Some(section_id) = link.get_attribute(SECTION_LINK_ATTR) else {
                continue;
            };
            let doc = document.clone();
            let view = view.clone();
            listeners.push(EventListener::new(&link, "click", move |ev| {
                if scroll_to_section(&doc, &section_id) {
                    ev.prevent_default();
                    view.borrow_mut().close_menu();
                    sync_menu(&doc, false);
                }
            }));
        }

        log::info!("[nav] installed {} listeners", listeners.len());
        Some(Self {
            _listeners: listeners,
        })
    }
}

fn sync_menu(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id(NAV_MENU_ID) {
        dom::set_class(&menu, MENU_OPEN_CLASS, open);
    }
}

/// Smooth-scroll to the element with `section_id`. Returns `false` when it
/// does not exist.
pub fn scroll_to_section(document: &web::Document, section_id: &str) -> bool {
    let Some(section) = document.get_element_by_id(section_id) else {
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
