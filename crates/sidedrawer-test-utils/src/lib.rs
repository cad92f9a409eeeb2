//! Test utilities for sidedrawer.
//!
//! Recording mocks of the two collaborators the drawer controller talks to:
//!
//! - `MockSurface` - a [`Surface`](sidedrawer_ui::Surface) whose clones share
//!   state, so a test can keep a handle after handing one to the controller
//! - `MockHost` - a [`DrawerHost`](sidedrawer_ui::DrawerHost) recording every
//!   hierarchy and status bar call
//!
//! Both require the `mock` feature.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use sidedrawer_test_utils::{MockHost, MockSurface, SurfaceCall};
//! use sidedrawer_ui::{DrawerController, Frame};
//!
//! let top = MockSurface::new("top");
//! let host = MockHost::new(Frame::new(0.0, 0.0, 320.0, 480.0));
//! let mut drawer = DrawerController::new(host);
//!
//! drawer.set_top_surface(top.clone());
//!
//! assert_eq!(top.frame(), Frame::new(0.0, 0.0, 320.0, 480.0));
//! assert!(top.calls().contains(&SurfaceCall::DidMoveToParent));
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_host;
#[cfg(feature = "mock")]
pub mod mock_surface;

#[cfg(feature = "mock")]
pub use mock_host::*;
#[cfg(feature = "mock")]
pub use mock_surface::*;
