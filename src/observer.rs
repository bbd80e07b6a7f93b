use crate::core::ViewportTrigger;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// `IntersectionObserver` that owns its JS callback and disconnects on drop.
pub struct ViewportObserver {
    observer: web::IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    /// `on_entries` receives the delivered entries in platform order together
    /// with the observer, so it can unobserve targets from inside the callback.
    pub fn new(
        trigger: ViewportTrigger,
        mut on_entries: impl FnMut(Vec<web::IntersectionObserverEntry>, &web::IntersectionObserver)
            + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let entries: Vec<web::IntersectionObserverEntry> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .collect();
                on_entries(entries, &observer);
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(trigger.threshold));
        init.set_root_margin(&trigger.root_margin());
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    #[inline]
    pub fn observe(&self, target: &web::Element) {
        self.observer.observe(target);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
