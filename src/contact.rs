use crate::constants::{CONTACT_FORM_SELECTOR, CONTACT_THANKS_MESSAGE};
use crate::dom;
use gloo_events::{EventListener, EventListenerOptions};
use web_sys as web;

/// Contact form stand-in: there is no backend, so submission is swallowed and
/// acknowledged with an alert.
pub struct ContactForm {
    _submit: EventListener,
}

impl ContactForm {
    pub fn install(document: &web::Document) -> Option<Self> {
        let form = dom::query_one(document, CONTACT_FORM_SELECTOR)?;
        let submit = EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |ev| {
                ev.prevent_default();
                log::info!("[contact] form submitted");
                let Some(window) = web::window() else {
                    return;
                };
                if let Err(e) = window.alert_with_message(CONTACT_THANKS_MESSAGE) {
                    log::warn!("[contact] alert failed: {:?}", e);
                }
            },
        );
        log::info!("[contact] listening on {}", CONTACT_FORM_SELECTOR);
        Some(Self { _submit: submit })
    }
}
