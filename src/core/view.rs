//! In-memory view state for the page chrome: header, menu, modal, splash.

/// Scroll offset (px) past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub scrolled: bool,
    pub menu_open: bool,
    /// Index of the feature shown in the modal, if open.
    pub modal: Option<usize>,
    /// Spec hotspot under the pointer, if any.
    pub hovered_spec: Option<usize>,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            modal: None,
            hovered_spec: None,
            loading: true,
        }
    }
}

impl ViewState {
    /// Returns `true` when the scrolled flag flipped.
    pub fn set_scroll_y(&mut self, y: f64) -> bool {
        let scrolled = y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn open_modal(&mut self, index: usize) {
        self.modal = Some(index);
    }

    pub fn close_modal(&mut self) -> Option<usize> {
        self.modal.take()
    }

    /// Mark `index` as hovered. Returns the previously hovered hotspot when it
    /// was a different one, so its highlight can be cleared.
    pub fn hover_spec(&mut self, index: usize) -> Option<usize> {
        self.hovered_spec.replace(index).filter(|&prev| prev != index)
    }

    /// Clear the hover when the pointer leaves `index`. A stale leave for a
    /// hotspot that is no longer hovered is ignored.
    pub fn leave_spec(&mut self, index: usize) -> bool {
        if self.hovered_spec == Some(index) {
            self.hovered_spec = None;
            true
        } else {
            false
        }
    }

    /// Returns `true` only on the first call.
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }
}
