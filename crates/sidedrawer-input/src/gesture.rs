//! Gesture recognizers and the gesture callbacks they produce.

use sidedrawer_core::math::Vec2;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_RECOGNIZER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a recognizer, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecognizerId(u64);

impl RecognizerId {
    fn next() -> Self {
        Self(NEXT_RECOGNIZER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Create an id from a raw value (for recognizers owned by other code).
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecognizerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecognizerId({})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    Tap,
    Pan,
}

/// A gesture recognizer as seen by the surface it is attached to.
///
/// Disabled recognizers deliver nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureRecognizer {
    id: RecognizerId,
    kind: RecognizerKind,
    enabled: bool,
}

impl GestureRecognizer {
    pub fn new(kind: RecognizerKind, enabled: bool) -> Self {
        Self {
            id: RecognizerId::next(),
            kind,
            enabled,
        }
    }

    /// A tap recognizer, initially disabled.
    pub fn tap() -> Self {
        Self::new(RecognizerKind::Tap, false)
    }

    /// A pan recognizer, initially enabled.
    pub fn pan() -> Self {
        Self::new(RecognizerKind::Pan, true)
    }

    pub fn id(&self) -> RecognizerId {
        self.id
    }

    pub fn kind(&self) -> RecognizerKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::trace!("{:?} recognizer {} enabled={}", self.kind, self.id, enabled);
        }
        self.enabled = enabled;
    }
}

/// Phase of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureState {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GestureState {
    /// `Ended` or `Cancelled`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GestureState::Ended | GestureState::Cancelled)
    }
}

/// One pan callback: phase plus translation since the gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    pub state: GestureState,
    pub translation: Vec2,
}

impl PanGesture {
    pub fn new(state: GestureState, translation: Vec2) -> Self {
        Self { state, translation }
    }

    pub fn began() -> Self {
        Self::new(GestureState::Began, Vec2::ZERO)
    }

    pub fn changed(dx: f32, dy: f32) -> Self {
        Self::new(GestureState::Changed, Vec2::new(dx, dy))
    }

    pub fn ended(dx: f32, dy: f32) -> Self {
        Self::new(GestureState::Ended, Vec2::new(dx, dy))
    }

    pub fn cancelled(dx: f32, dy: f32) -> Self {
        Self::new(GestureState::Cancelled, Vec2::new(dx, dy))
    }
}

/// A recognized tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapGesture {
    pub location: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Pan(PanGesture),
    Tap(TapGesture),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizer_ids_are_unique() {
        let a = GestureRecognizer::pan();
        let b = GestureRecognizer::pan();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_default_enabled_flags() {
        assert!(!GestureRecognizer::tap().is_enabled());
        assert!(GestureRecognizer::pan().is_enabled());
    }

    #[test]
    fn test_terminal_states() {
        assert!(GestureState::Ended.is_terminal());
        assert!(GestureState::Cancelled.is_terminal());
        assert!(!GestureState::Began.is_terminal());
        assert!(!GestureState::Changed.is_terminal());
    }
}
