#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod contact;
mod core;
mod counters;
mod cube;
mod dom;
mod hotspots;
mod modal;
mod nav;
mod observer;
mod page;
mod reveal;
mod splash;

use page::PageController;

thread_local! {
    // One page per document; `teardown` empties the slot.
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("c63-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = PageController::setup(&document);
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    if let Some(previous) = previous {
        log::warn!("[page] replacing an existing page controller");
        previous.teardown();
    }
    Ok(())
}

/// Release every listener, timer and observer attached by the page.
/// Safe to call more than once.
#[wasm_bindgen]
pub fn teardown() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(page) = page {
        page.teardown();
    }
}

/// Play the engine sound on demand (e.g. from host-page script).
#[wasm_bindgen]
pub fn play_engine_sound() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow().as_ref() {
            page.play_engine_sound();
        }
    });
}
