//! Drag-to-rotate state for the hero cube.
//!
//! Pure state machine with no DOM access: the browser layer feeds it pointer
//! x-coordinates and idle ticks, then applies [`CubeRotation::transform`] to
//! the element whenever an operation reports a new angle.

/// Tuned interaction constants. Treated as configuration, not derived values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeTuning {
    /// Degrees of rotation per CSS pixel of horizontal drag.
    pub drag_sensitivity: f64,
    /// Fixed X-axis tilt applied with every transform.
    pub tilt_deg: f64,
    /// Degrees added per idle tick.
    pub auto_rotate_step_deg: f64,
    pub auto_rotate_interval_ms: u32,
}

impl Default for CubeTuning {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.5,
            tilt_deg: 10.0,
            auto_rotate_step_deg: 0.5,
            auto_rotate_interval_ms: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub current_angle: f64,
    pub is_dragging: bool,
    pub last_pointer_x: f64,
}

/// Cursor affordance shown over the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CubeRotation {
    state: RotationState,
    tuning: CubeTuning,
}

impl CubeRotation {
    pub fn new(tuning: CubeTuning) -> Self {
        Self {
            state: RotationState::default(),
            tuning,
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.state.current_angle
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    pub fn begin_drag(&mut self, x: f64) -> Cursor {
        self.state.last_pointer_x = x;
        self.state.is_dragging = true;
        Cursor::Grabbing
    }

    /// Apply a pointer move. Returns the new angle, or `None` when no drag is
    /// in progress (the move is ignored).
    pub fn drag_to(&mut self, x: f64) -> Option<f64> {
        if !self.state.is_dragging {
            return None;
        }
        let delta = x - self.state.last_pointer_x;
        self.state.current_angle += delta * self.tuning.drag_sensitivity;
        self.state.last_pointer_x = x;
        Some(self.state.current_angle)
    }

    pub fn end_drag(&mut self) -> Cursor {
        self.state.is_dragging = false;
        Cursor::Grab
    }

    /// Idle auto-rotate step. Skips (returns `None`) while a drag holds the
    /// angle.
    pub fn idle_tick(&mut self) -> Option<f64> {
        if self.state.is_dragging {
            return None;
        }
        self.state.current_angle += self.tuning.auto_rotate_step_deg;
        Some(self.state.current_angle)
    }

    pub fn transform(&self) -> String {
        format!(
            "rotateY({}deg) rotateX({}deg)",
            self.state.current_angle, self.tuning.tilt_deg
        )
    }
}
