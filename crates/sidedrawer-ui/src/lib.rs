//! Sidedrawer UI - a slide-out drawer container controller.
//!
//! The controller hosts two surfaces:
//! - a **top** surface with the main content, which slides right
//! - a **left** surface with the drawer content, which stays put underneath
//!
//! It is driven by the host toolkit:
//! - lifecycle: [`DrawerController::view_will_appear`] / [`DrawerController::view_will_disappear`]
//! - gestures: [`DrawerController::handle_pan`] / [`DrawerController::handle_tap`]
//! - time: [`DrawerController::update`] once per frame
//!
//! and reports back through [`DrawerHost`] (hierarchy, status bar) and
//! transition observers registered with [`DrawerController::subscribe`].

pub mod animation;
pub mod config;
pub mod drawer;
pub mod error;
pub mod event;
pub mod host;
pub mod status_bar;
pub mod surface;
pub mod surface_id;

pub use animation::{Animation, AnimationState};
pub use config::{DEFAULT_DRAWER_WIDTH, DrawerConfig, default_drawer_width, set_default_drawer_width};
pub use drawer::DrawerController;
pub use error::{DrawerError, DrawerResult};
pub use event::{DrawerTransitionEvent, DrawerTransitionState, ObserverId, TransitionObservers};
pub use host::{DrawerHost, ViewStack};
pub use status_bar::{STATUS_BAR_ANIMATION_DURATION, StatusBarAnimation, StatusBarSync, StatusBarUpdate};
pub use surface::{BasicSurface, Frame, Shadow, Surface};
pub use surface_id::SurfaceId;

// Re-export the gesture vocabulary used by the controller's API.
pub use sidedrawer_input::{
    AlwaysSimultaneous, DragSession, GestureEvent, GestureRecognizer, GestureState, PanGesture,
    RecognizerId, SimultaneousRecognition, TapGesture,
};
