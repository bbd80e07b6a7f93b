use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements under `root` matching `selector`, in document order.
/// An invalid selector yields an empty list.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

pub fn query_all_in_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_nodes(document.query_selector_all(selector).ok())
}

fn collect_nodes(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Add or remove `class` depending on `on`.
#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Click listener on the element with `element_id`; `None` if it is absent.
pub fn click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(EventListener::new(&el, "click", move |_| handler()))
}
