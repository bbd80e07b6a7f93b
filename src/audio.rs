use crate::constants::{ENGINE_SOUND_SOURCES, ENGINE_SOUND_STOP_AFTER_MS, ENGINE_SOUND_VOLUME};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Short engine-sound clip played on load and on demand.
///
/// Sources are tried in order; the next one is loaded only when playback of
/// the current one is rejected. Playback pauses after a fixed time.
pub struct EngineSound {
    audio: web::HtmlAudioElement,
    stop_timer: Rc<RefCell<Option<Timeout>>>,
}

fn create_audio(src: &str) -> Result<web::HtmlAudioElement, JsValue> {
    let audio = web::HtmlAudioElement::new_with_src(src)?;
    audio.set_volume(ENGINE_SOUND_VOLUME);
    audio.set_loop(true);
    Ok(audio)
}

impl EngineSound {
    pub fn new() -> Option<Self> {
        let primary = ENGINE_SOUND_SOURCES.first()?;
        match create_audio(primary) {
            Ok(audio) => Some(Self {
                audio,
                stop_timer: Rc::new(RefCell::new(None)),
            }),
            Err(e) => {
                log::warn!("[audio] could not create audio element: {:?}", e);
                None
            }
        }
    }

    pub fn play(&self) {
        self.audio.set_current_time(0.0);
        let audio = self.audio.clone();
        spawn_local(async move {
            play_with_fallback(&audio, ENGINE_SOUND_SOURCES).await;
        });

        // Replacing the slot cancels a stop pending from an earlier play.
        let audio = self.audio.clone();
        let timeout = Timeout::new(ENGINE_SOUND_STOP_AFTER_MS, move || {
            _ = audio.pause();
        });
        *self.stop_timer.borrow_mut() = Some(timeout);
    }
}

impl Drop for EngineSound {
    fn drop(&mut self) {
        self.stop_timer.borrow_mut().take();
        _ = self.audio.pause();
    }
}

async fn try_play(audio: &web::HtmlAudioElement) -> Result<(), JsValue> {
    let promise = audio.play()?;
    JsFuture::from(promise).await.map(|_| ())
}

async fn play_with_fallback(audio: &web::HtmlAudioElement, sources: &[&str]) {
    for (i, src) in sources.iter().enumerate() {
        if i > 0 {
            audio.set_src(src);
        }
        match try_play(audio).await {
            Ok(()) => {
                log::info!("[audio] playing source {}", i);
                return;
            }
            Err(e) => log::warn!("[audio] playback of source {} failed: {:?}", i, e),
        }
    }
    log::warn!("[audio] all {} sources failed", sources.len());
}
