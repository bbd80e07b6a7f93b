use crate::audio::EngineSound;
use crate::constants::ENGINE_SOUND_BUTTON_ID;
use crate::contact::ContactForm;
use crate::core::{CounterTiming, CubeTuning, ViewState};
use crate::counters::CounterAnimator;
use crate::cube::CubeController;
use crate::dom;
use crate::hotspots::SpecHotspots;
use crate::modal::FeatureModal;
use crate::nav::NavController;
use crate::reveal::RevealAnimator;
use crate::splash::LoadingSplash;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the page attaches to the DOM, owned for one page lifetime.
///
/// Each part is optional: a missing element disables only its own controller.
/// Dropping the controller releases every listener, timer and observer.
pub struct PageController {
    pub view: Rc<RefCell<ViewState>>,
    sound: Option<Rc<EngineSound>>,
    cube: Option<CubeController>,
    reveal: Option<RevealAnimator>,
    _counters: Option<CounterAnimator>,
    _nav: Option<NavController>,
    _modal: Option<FeatureModal>,
    _hotspots: Option<SpecHotspots>,
    _contact: Option<ContactForm>,
    _splash: Option<LoadingSplash>,
    _sound_button: Option<EventListener>,
}

impl PageController {
    pub fn setup(document: &web::Document) -> Self {
        let view = Rc::new(RefCell::new(ViewState::default()));

        let sound = EngineSound::new().map(Rc::new);
        let sound_button = sound.as_ref().and_then(|s| {
            let s = s.clone();
            dom::click_listener(document, ENGINE_SOUND_BUTTON_ID, move || s.play())
        });

        let page = Self {
            _splash: LoadingSplash::install(document, &view),
            cube: CubeController::install(document, CubeTuning::default()),
            reveal: RevealAnimator::install(document),
            _counters: CounterAnimator::install(document, CounterTiming::default()),
            _nav: NavController::install(document, &view),
            _modal: FeatureModal::install(document, &view),
            _hotspots: SpecHotspots::install(document, &view),
            _contact: ContactForm::install(document),
            _sound_button: sound_button,
            sound,
            view,
        };

        page.play_engine_sound();
        log::info!("[page] setup complete");
        page
    }

    pub fn play_engine_sound(&self) {
        match &self.sound {
            Some(s) => s.play(),
            None => log::warn!("[audio] engine sound unavailable"),
        }
    }

    /// Explicit teardown; equivalent to dropping.
    pub fn teardown(self) {
        let angle = self.cube.as_ref().map(CubeController::angle);
        let observed = self.reveal.as_ref().map(RevealAnimator::observed);
        drop(self);
        log::info!(
            "[page] torn down (cube angle={:?}, observed={:?})",
            angle,
            observed
        );
    }
}
