use crate::constants::{SPEC_POINT_ACTIVE_CLASS, SPEC_POINT_SELECTOR};
use crate::core::content::{spec_point_position, SPECIFICATIONS};
use crate::core::ViewState;
use crate::dom;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spec hotspots over the car image: placed from the content table, then
/// highlighted while the pointer rests on one.
pub struct SpecHotspots {
    _listeners: Vec<EventListener>,
}

impl SpecHotspots {
    pub fn install(document: &web::Document, view: &Rc<RefCell<ViewState>>) -> Option<Self> {
        let points: Rc<Vec<web::HtmlElement>> = Rc::new(
            dom::query_all_in_document(document, SPEC_POINT_SELECTOR)
                .into_iter()
                .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
                .collect(),
        );
        if points.is_empty() {
            return None;
        }

        let mut listeners = Vec::with_capacity(points.len() * 2);
        for (i, el) in points.iter().enumerate() {
            place(i, el);

            let view_enter = view.clone();
            let points_enter = points.clone();
            listeners.push(EventListener::new(el, "mouseenter", move |_| {
                let previous = view_enter.borrow_mut().hover_spec(i);
                if let Some(prev) = previous.and_then(|p| points_enter.get(p)) {
                    dom::set_class(prev, SPEC_POINT_ACTIVE_CLASS, false);
                }
                if let Some(el) = points_enter.get(i) {
                    dom::set_class(el, SPEC_POINT_ACTIVE_CLASS, true);
                }
            }));

            let view_leave = view.clone();
            let points_leave = points.clone();
            listeners.push(EventListener::new(el, "mouseleave", move |_| {
                if view_leave.borrow_mut().leave_spec(i) {
                    if let Some(el) = points_leave.get(i) {
                        dom::set_class(el, SPEC_POINT_ACTIVE_CLASS, false);
                    }
                }
            }));
        }

        log::info!("[spec] placed {} hotspots", points.len());
        Some(Self {
            _listeners: listeners,
        })
    }
}

fn place(index: usize, el: &web::HtmlElement) {
    let p = spec_point_position(index);
    dom::set_style(el, "left", &format!("{}%", p.x));
    dom::set_style(el, "top", &format!("{}%", p.y));
    if let Some(row) = SPECIFICATIONS.get(index) {
        el.set_title(&format!("{}: {}", row.label, row.value));
    }
}
