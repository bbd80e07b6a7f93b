use crate::constants::CUBE_ID;
use crate::core::content::CUBE_FACES;
use crate::core::{CubeRotation, CubeTuning, Cursor};
use crate::dom;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag-to-rotate plus idle auto-rotate for the hero cube.
///
/// Move and release are listened for on the document so a drag that leaves
/// the cube still tracks and completes. Dropping the controller removes every
/// listener and stops the auto-rotate interval.
pub struct CubeController {
    rotation: Rc<RefCell<CubeRotation>>,
    _listeners: Vec<EventListener>,
    _auto_rotate: Interval,
}

impl CubeController {
    /// Returns `None` (nothing attached) when the cube element is absent.
    pub fn install(document: &web::Document, tuning: CubeTuning) -> Option<Self> {
        let Some(cube) = dom::html_element_by_id(document, CUBE_ID) else {
            log::info!("[cube] #{} not found; interaction disabled", CUBE_ID);
            return None;
        };
        paint_faces(&cube);
        let rotation = Rc::new(RefCell::new(CubeRotation::new(tuning)));

        let listeners = vec![
            wire_mousedown(&cube, &rotation),
            wire_mousemove(document, &cube, &rotation),
            wire_mouseup(document, &cube, &rotation),
            wire_touchstart(&cube, &rotation),
            wire_touchmove(&cube, &rotation),
            wire_touchend(&cube, &rotation, "touchend"),
            wire_touchend(&cube, &rotation, "touchcancel"),
        ];

        let auto_rotate = {
            let cube = cube.clone();
            let rotation = rotation.clone();
            Interval::new(tuning.auto_rotate_interval_ms, move || {
                let mut r = rotation.borrow_mut();
                if r.idle_tick().is_some() {
                    apply_transform(&cube, &r);
                }
            })
        };

        log::info!(
            "[cube] interaction installed (sensitivity={}, step={}deg/{}ms)",
            tuning.drag_sensitivity,
            tuning.auto_rotate_step_deg,
            tuning.auto_rotate_interval_ms
        );
        Some(Self {
            rotation,
            _listeners: listeners,
            _auto_rotate: auto_rotate,
        })
    }

    pub fn angle(&self) -> f64 {
        self.rotation.borrow().angle()
    }
}

// Face elements carry the face name as a class: `.front`, `.back`, ...
fn paint_faces(cube: &web::HtmlElement) {
    for (face, url) in CUBE_FACES.iter() {
        let Ok(Some(el)) = cube.query_selector(&format!(".{}", face)) else {
            continue;
        };
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            dom::set_style(&el, "background-image", &format!("url(\"{}\")", url));
        }
    }
}

#[inline]
fn apply_transform(cube: &web::HtmlElement, rotation: &CubeRotation) {
    dom::set_style(cube, "transform", &rotation.transform());
}

#[inline]
fn apply_cursor(cube: &web::HtmlElement, cursor: Cursor) {
    dom::set_style(cube, "cursor", cursor.as_css());
}

fn first_touch_x(ev: &web::Event) -> Option<f64> {
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn wire_mousedown(cube: &web::HtmlElement, rotation: &Rc<RefCell<CubeRotation>>) -> EventListener {
    let cube_for_cb = cube.clone();
    let rotation = rotation.clone();
    EventListener::new(cube, "mousedown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let cursor = rotation.borrow_mut().begin_drag(f64::from(ev.client_x()));
        apply_cursor(&cube_for_cb, cursor);
    })
}

fn wire_mousemove(
    document: &web::Document,
    cube: &web::HtmlElement,
    rotation: &Rc<RefCell<CubeRotation>>,
) -> EventListener {
    let cube = cube.clone();
    let rotation = rotation.clone();
    EventListener::new(document, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let mut r = rotation.borrow_mut();
        if r.drag_to(f64::from(ev.client_x())).is_some() {
            apply_transform(&cube, &r);
        }
    })
}

fn wire_mouseup(
    document: &web::Document,
    cube: &web::HtmlElement,
    rotation: &Rc<RefCell<CubeRotation>>,
) -> EventListener {
    let cube = cube.clone();
    let rotation = rotation.clone();
    EventListener::new(document, "mouseup", move |_| {
        let cursor = rotation.borrow_mut().end_drag();
        apply_cursor(&cube, cursor);
    })
}

fn wire_touchstart(cube: &web::HtmlElement, rotation: &Rc<RefCell<CubeRotation>>) -> EventListener {
    let cube_for_cb = cube.clone();
    let rotation = rotation.clone();
    EventListener::new(cube, "touchstart", move |ev| {
        if let Some(x) = first_touch_x(ev) {
            let cursor = rotation.borrow_mut().begin_drag(x);
            apply_cursor(&cube_for_cb, cursor);
        }
    })
}

fn wire_touchmove(cube: &web::HtmlElement, rotation: &Rc<RefCell<CubeRotation>>) -> EventListener {
    let cube_for_cb = cube.clone();
    let rotation = rotation.clone();
    // Non-passive so preventDefault can suppress page scroll during a drag.
    EventListener::new_with_options(
        cube,
        "touchmove",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            let mut r = rotation.borrow_mut();
            if !r.is_dragging() {
                return;
            }
            ev.prevent_default();
            let Some(x) = first_touch_x(ev) else {
                return;
            };
            if r.drag_to(x).is_some() {
                apply_transform(&cube_for_cb, &r);
            }
        },
    )
}

fn wire_touchend(
    cube: &web::HtmlElement,
    rotation: &Rc<RefCell<CubeRotation>>,
    event_type: &'static str,
) -> EventListener {
    let cube_for_cb = cube.clone();
    let rotation = rotation.clone();
    EventListener::new(cube, event_type, move |_| {
        let cursor = rotation.borrow_mut().end_drag();
        apply_cursor(&cube_for_cb, cursor);
    })
}
