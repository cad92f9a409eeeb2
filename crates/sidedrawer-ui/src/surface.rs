//! Hosted surfaces: the top (main) content and the left drawer content.
//!
//! The controller only moves a surface's frame, toggles its shadow and
//! forwards lifecycle and recognizer registration calls. Everything else
//! about a surface belongs to the caller.

use crate::surface_id::SurfaceId;
use sidedrawer_core::geometry::Rect;
use sidedrawer_core::math::{Vec2, Vec4};
use sidedrawer_input::{GestureRecognizer, RecognizerId};

/// Position rectangle of a surface in container coordinates.
pub type Frame = Rect<f32>;

/// Drop shadow drawn along the top surface's leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Linear RGBA.
    pub color: Vec4,
    pub opacity: f32,
    pub radius: f32,
    pub offset: Vec2,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            opacity: 0.4,
            radius: 6.0,
            offset: Vec2::new(-2.0, 0.0),
        }
    }
}

/// A surface the drawer controller can host.
///
/// Only `id`, `frame` and `set_frame` are required; the lifecycle and
/// recognizer hooks default to no-ops.
pub trait Surface {
    fn id(&self) -> SurfaceId;

    fn frame(&self) -> Frame;

    fn set_frame(&mut self, frame: Frame);

    fn set_shadow(&mut self, _shadow: Option<Shadow>) {}

    /// Registered as a child of the controller.
    fn will_move_to_parent(&mut self) {}

    /// Attachment finished: positioned and inserted in the hierarchy.
    fn did_move_to_parent(&mut self) {}

    /// Detached from the controller (replaced by another surface).
    fn removed_from_parent(&mut self) {}

    fn add_gesture_recognizer(&mut self, _recognizer: &GestureRecognizer) {}

    fn remove_gesture_recognizer(&mut self, _recognizer: RecognizerId) {}
}

/// A plain in-memory surface.
///
/// Useful for headless hosts and tests; keeps track of everything the
/// controller tells it.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicSurface {
    id: SurfaceId,
    frame: Frame,
    shadow: Option<Shadow>,
    recognizers: Vec<RecognizerId>,
    attached: bool,
}

impl BasicSurface {
    pub fn new(key: &str) -> Self {
        Self {
            id: SurfaceId::new(key),
            frame: Frame::ZERO,
            shadow: None,
            recognizers: Vec::new(),
            attached: false,
        }
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    pub fn recognizers(&self) -> &[RecognizerId] {
        &self.recognizers
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Surface for BasicSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn frame(&self) -> Frame {
        self.frame
    }

    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.shadow = shadow;
    }

    fn did_move_to_parent(&mut self) {
        self.attached = true;
    }

    fn removed_from_parent(&mut self) {
        self.attached = false;
    }

    fn add_gesture_recognizer(&mut self, recognizer: &GestureRecognizer) {
        if !self.recognizers.contains(&recognizer.id()) {
            self.recognizers.push(recognizer.id());
        }
    }

    fn remove_gesture_recognizer(&mut self, recognizer: RecognizerId) {
        self.recognizers.retain(|id| *id != recognizer);
    }
}
