/// DOM hooks and page-level tuning.
///
/// The markup is owned by the host page; these names are the contract between
/// it and the controllers. Timings and audio settings sit alongside so magic
/// values stay out of the wiring code.
// Hero cube
pub const CUBE_ID: &str = "cube";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = "section, .feature-card, .stat-item, .spec-row";
pub const REVEAL_CLASS: &str = "animate-in";

// Stat counters
pub const COUNTER_CONTAINER_SELECTOR: &str = ".about-section";
pub const COUNTER_ITEM_SELECTOR: &str = ".stat-item";
pub const COUNTER_NUMBER_SELECTOR: &str = ".stat-number";
pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const COUNTER_FORMAT_ATTR: &str = "data-format";

// Header and navigation
pub const HEADER_ID: &str = "site-header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const MENU_OPEN_CLASS: &str = "open";
pub const SECTION_LINK_SELECTOR: &str = "[data-section]";
pub const SECTION_LINK_ATTR: &str = "data-section";

// Spec hotspots over the car image, one per specification row
pub const SPEC_POINT_SELECTOR: &str = ".spec-point";
pub const SPEC_POINT_ACTIVE_CLASS: &str = "active";

// Contact form
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const CONTACT_THANKS_MESSAGE: &str = "Thank you for your message!";

// Feature modal
pub const FEATURE_CARD_SELECTOR: &str = ".feature-card[data-feature]";
pub const FEATURE_INDEX_ATTR: &str = "data-feature";
pub const MODAL_ID: &str = "feature-modal";
pub const MODAL_OPEN_CLASS: &str = "open";
pub const MODAL_TITLE_SELECTOR: &str = ".modal-title";
pub const MODAL_DETAILS_SELECTOR: &str = ".modal-details";
pub const MODAL_IMAGE_SELECTOR: &str = ".modal-image";
pub const MODAL_DISMISS_SELECTOR: &str = ".modal-close, .modal-backdrop";

// Loading splash
pub const SPLASH_SELECTOR: &str = ".loading-overlay";
pub const SPLASH_HIDDEN_CLASS: &str = "hidden";
pub const SPLASH_HIDE_AFTER_MS: u32 = 1000;

// Engine sound
pub const ENGINE_SOUND_BUTTON_ID: &str = "engine-sound";
pub const ENGINE_SOUND_SOURCES: &[&str] = &[
    "https://www.sound-fishing.net/mp3/mercedes-c63-amg-engine-sound.mp3",
    "https://www.soundjay.com/mechanical/sounds/engine-starting-01.mp3",
];
pub const ENGINE_SOUND_VOLUME: f64 = 0.5;
pub const ENGINE_SOUND_STOP_AFTER_MS: u32 = 5000;
