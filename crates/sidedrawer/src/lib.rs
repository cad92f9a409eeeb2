//! Sidedrawer - a slide-out drawer container
//!
//! A top (main) surface slides right over a left (drawer) surface when
//! dragged, snaps fully open or closed on release and closes on tap.
//!
//! - **Controller**: [`DrawerController`] with drag, tap and animated
//!   transitions, transition events and status bar coordination
//! - **Input**: tap/pan recognizers, drag sessions and a pointer tracker for
//!   hosts without native gestures
//! - **Driver**: [`DrawerDriver`] ties pointer events, frame ticks and async
//!   completions together on one thread
//!
//! # Quick Start
//!
//! ```
//! use sidedrawer::prelude::*;
//! use std::time::Duration;
//!
//! let host = ViewStack::new(Frame::new(0.0, 0.0, 375.0, 667.0));
//! let mut controller = DrawerController::with_surfaces(
//!     host,
//!     BasicSurface::new("main"),
//!     BasicSurface::new("menu"),
//! );
//! controller.view_will_appear();
//!
//! let mut driver = DrawerDriver::new(controller);
//! driver.pointer(PointerEvent::Down(Vec2::new(10.0, 200.0)));
//! driver.pointer(PointerEvent::Moved(Vec2::new(40.0, 200.0)));
//! driver.pointer(PointerEvent::Moved(Vec2::new(240.0, 205.0)));
//! driver.pointer(PointerEvent::Up(Vec2::new(240.0, 205.0)));
//! driver.settle(Duration::from_millis(16));
//!
//! assert!(driver.controller().is_open());
//! assert!(driver.close_and_settle(Duration::from_millis(16)));
//! ```
//!
//! # Features
//!
//! - `ui` (default) - the controller, hosts and the driver
//! - `input` - gesture types only
//! - `profiling` (default) - puffin scopes in the animation path

pub mod clock;
#[cfg(feature = "ui")]
pub mod driver;

// Re-export core types
pub use sidedrawer_core as core;
pub use sidedrawer_core::{logging, math};

#[cfg(feature = "input")]
pub use sidedrawer_input as input;

#[cfg(feature = "ui")]
pub use sidedrawer_ui as ui;

pub use clock::FrameClock;

#[cfg(feature = "ui")]
pub use driver::DrawerDriver;

#[cfg(feature = "ui")]
pub use sidedrawer_ui::{
    BasicSurface, DrawerConfig, DrawerController, DrawerError, DrawerHost, DrawerResult,
    DrawerTransitionEvent, DrawerTransitionState, Frame, Shadow, Surface, SurfaceId, ViewStack,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::FrameClock;

    // Core math types
    pub use sidedrawer_core::math::{Vec2, Vec4};

    #[cfg(feature = "input")]
    pub use sidedrawer_input::{
        GestureEvent, GestureRecognizer, GestureState, GestureTracker, PanGesture, PointerEvent,
        RecognizerId, SimultaneousRecognition, TapGesture,
    };

    #[cfg(feature = "ui")]
    pub use crate::driver::DrawerDriver;

    #[cfg(feature = "ui")]
    pub use sidedrawer_ui::{
        BasicSurface, DrawerConfig, DrawerController, DrawerError, DrawerHost,
        DrawerTransitionEvent, DrawerTransitionState, Frame, Shadow, StatusBarAnimation,
        StatusBarUpdate, Surface, SurfaceId, ViewStack,
    };
}
