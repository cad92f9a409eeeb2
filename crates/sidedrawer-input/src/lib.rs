//! Sidedrawer input handling.
//!
//! Gesture vocabulary shared by the drawer controller and its hosts:
//!
//! - [`GestureRecognizer`] - an enable-able tap or pan recognizer
//! - [`PanGesture`] / [`TapGesture`] - callbacks delivered to the controller
//! - [`DragSession`] - explicit two-phase state of one drag
//! - [`SimultaneousRecognition`] - conflict policy against nested scroll content
//! - [`GestureTracker`] - raw pointer events to gestures, for hosts without
//!   a native recognizer system

pub mod gesture;
pub mod policy;
pub mod session;
pub mod tracker;

pub use gesture::{
    GestureEvent, GestureRecognizer, GestureState, PanGesture, RecognizerId, RecognizerKind,
    TapGesture,
};
pub use policy::{AlwaysSimultaneous, SimultaneousRecognition};
pub use session::DragSession;
pub use tracker::{GestureTracker, PAN_SLOP, PointerEvent};
