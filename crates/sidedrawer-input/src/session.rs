/// Lifecycle of a single drag.
///
/// `begin` opens the session, `reject` marks it as yielded to other content
/// (no further movement is applied), `end` closes it. Nothing carries over
/// between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    active: bool,
    rejected: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.active = true;
        self.rejected = false;
    }

    /// Reject the running session.
    ///
    /// Returns `false` if there was nothing to reject (inactive or already
    /// rejected).
    pub fn reject(&mut self) -> bool {
        if !self.active || self.rejected {
            return false;
        }
        self.rejected = true;
        true
    }

    /// Close the session, returning its final state.
    pub fn end(&mut self) -> DragSession {
        std::mem::take(self)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    /// Whether movement should still be applied.
    pub fn accepts_movement(&self) -> bool {
        self.active && !self.rejected
    }
}
