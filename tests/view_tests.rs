// Host-side tests for page view state and static content.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/view.rs"]
mod view;
#[path = "../src/core/content.rs"]
mod content;

use content::*;
use view::*;

#[test]
fn header_compacts_past_50px() {
    let mut v = ViewState::default();
    assert!(!v.set_scroll_y(50.0));
    assert!(!v.scrolled);
    assert!(v.set_scroll_y(51.0));
    assert!(v.scrolled);
    assert!(!v.set_scroll_y(400.0));
    assert!(v.set_scroll_y(0.0));
    assert!(!v.scrolled);
}

#[test]
fn menu_toggles_and_closes() {
    let mut v = ViewState::default();
    assert!(v.toggle_menu());
    assert!(!v.toggle_menu());
    v.toggle_menu();
    v.close_menu();
    assert!(!v.menu_open);
}

#[test]
fn modal_open_and_close() {
    let mut v = ViewState::default();
    assert_eq!(v.close_modal(), None);
    v.open_modal(2);
    assert_eq!(v.modal, Some(2));
    assert_eq!(v.close_modal(), Some(2));
    assert_eq!(v.modal, None);
}

#[test]
fn hovering_a_new_hotspot_releases_the_old_one() {
    let mut v = ViewState::default();
    assert_eq!(v.hovered_spec, None);
    assert_eq!(v.hover_spec(1), None);
    assert_eq!(v.hovered_spec, Some(1));
    // Re-entering the same hotspot has nothing to clear.
    assert_eq!(v.hover_spec(1), None);
    assert_eq!(v.hover_spec(4), Some(1));
    assert_eq!(v.hovered_spec, Some(4));
}

#[test]
fn stale_leave_keeps_current_hover() {
    let mut v = ViewState::default();
    assert!(!v.leave_spec(0));
    v.hover_spec(2);
    v.hover_spec(3);
    // mouseleave for 2 arriving after mouseenter for 3.
    assert!(!v.leave_spec(2));
    assert_eq!(v.hovered_spec, Some(3));
    assert!(v.leave_spec(3));
    assert_eq!(v.hovered_spec, None);
}

#[test]
fn loading_finishes_once() {
    let mut v = ViewState::default();
    assert!(v.loading);
    assert!(v.finish_loading());
    assert!(!v.finish_loading());
    assert!(!v.loading);
}

#[test]
fn features_are_complete() {
    assert_eq!(FEATURES.len(), 6);
    for f in FEATURES {
        assert!(!f.title.is_empty());
        assert!(!f.details.is_empty());
        assert!(f.image.starts_with("https://"));
    }
    assert_eq!(feature(0).map(|f| f.title), Some("V8 Engine"));
    assert!(feature(FEATURES.len()).is_none());
}

#[test]
fn spec_points_cover_every_row_with_fallback() {
    assert_eq!(SPECIFICATIONS.len(), 10);
    assert_eq!(spec_point_position(3), SpecPoint { x: 50.0, y: 15.0 });
    assert_eq!(spec_point_position(SPECIFICATIONS.len()), SpecPoint { x: 50.0, y: 50.0 });
    for i in 0..SPECIFICATIONS.len() {
        let p = spec_point_position(i);
        assert!((0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y));
    }
}

#[test]
fn cube_faces_list_six_faces() {
    let faces: Vec<&str> = CUBE_FACES.iter().map(|(face, _)| face).collect();
    assert_eq!(faces, vec!["front", "back", "right", "left", "top", "bottom"]);
}
