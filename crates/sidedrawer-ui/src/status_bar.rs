//! Status bar visibility while the drawer is out.

/// Duration of the status bar refresh animation, in seconds.
pub const STATUS_BAR_ANIMATION_DURATION: f32 = 0.33;

/// How the host animates a status bar visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusBarAnimation {
    None,
    Fade,
    #[default]
    Slide,
}

/// A request to re-evaluate the status bar, sent to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBarUpdate {
    pub hidden: bool,
    pub animation: StatusBarAnimation,
    /// Seconds.
    pub duration: f32,
}

/// Status bar policy plus the per-gesture batching flag.
///
/// The flag is raised when a drag begins and consumed by the first frame
/// that actually moves the top surface, so one drag sends one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBarSync {
    hide_when_open: bool,
    pending: bool,
}

impl StatusBarSync {
    pub fn new(hide_when_open: bool) -> Self {
        Self {
            hide_when_open,
            pending: false,
        }
    }

    pub fn hide_when_open(&self) -> bool {
        self.hide_when_open
    }

    pub fn set_hide_when_open(&mut self, hide: bool) {
        self.hide_when_open = hide;
    }

    pub fn mark_pending(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clear the flag, returning whether it was set.
    pub fn take_pending(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Hidden exactly when hiding is enabled and the top surface is displaced.
    pub fn prefers_hidden(&self, offset: f32) -> bool {
        self.hide_when_open && offset > 0.0
    }

    pub fn preferred_animation(&self) -> StatusBarAnimation {
        StatusBarAnimation::Slide
    }

    pub fn update_for(&self, offset: f32) -> StatusBarUpdate {
        StatusBarUpdate {
            hidden: self.prefers_hidden(offset),
            animation: self.preferred_animation(),
            duration: STATUS_BAR_ANIMATION_DURATION,
        }
    }
}

impl Default for StatusBarSync {
    fn default() -> Self {
        Self::new(true)
    }
}
