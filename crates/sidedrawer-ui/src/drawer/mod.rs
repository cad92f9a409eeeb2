//! The drawer container controller.
//!
//! A [`DrawerController`] hosts a top (main) surface and a left (drawer)
//! surface. Dragging the top surface to the right reveals the drawer; on
//! release it snaps fully open or fully closed depending on whether it
//! passed half the drawer width. A tap on the open top surface closes it.
//!
//! # Example
//!
//! ```
//! use sidedrawer_ui::{BasicSurface, DrawerController, Frame, PanGesture, ViewStack};
//!
//! let host = ViewStack::new(Frame::new(0.0, 0.0, 375.0, 667.0));
//! let mut drawer = DrawerController::with_surfaces(
//!     host,
//!     BasicSurface::new("main"),
//!     BasicSurface::new("menu"),
//! );
//! drawer.view_will_appear();
//!
//! drawer.handle_pan(PanGesture::began());
//! drawer.handle_pan(PanGesture::changed(250.0, 4.0));
//! drawer.handle_pan(PanGesture::ended(250.0, 4.0));
//! drawer.update(0.1);
//!
//! assert!(drawer.is_open());
//! assert!(drawer.tap_recognizer().is_enabled());
//! ```

mod pan;
mod transition;

use crate::config::{self, DrawerConfig};
use crate::error::DrawerResult;
use crate::event::{DrawerTransitionEvent, DrawerTransitionState, ObserverId, TransitionObservers};
use crate::host::DrawerHost;
use crate::status_bar::{StatusBarAnimation, StatusBarSync};
use crate::surface::{Frame, Surface};
use sidedrawer_input::{AlwaysSimultaneous, DragSession, GestureEvent, GestureRecognizer};

use transition::FrameAnimation;

/// Slide-out drawer container.
///
/// All methods run on the caller's thread; gesture callbacks, animation
/// ticks ([`update`](Self::update)) and completions are never concurrent.
pub struct DrawerController<H: DrawerHost> {
    host: H,
    config: DrawerConfig,
    top: Option<Box<dyn Surface>>,
    left: Option<Box<dyn Surface>>,
    tap: GestureRecognizer,
    pan: GestureRecognizer,
    policy: AlwaysSimultaneous,
    session: DragSession,
    status_bar: StatusBarSync,
    observers: TransitionObservers,
    animation: Option<FrameAnimation>,
    visible: bool,
}

impl<H: DrawerHost> DrawerController<H> {
    /// An empty controller using [`DrawerConfig::default`].
    pub fn new(host: H) -> Self {
        Self::from_valid_config(host, DrawerConfig::default())
    }

    pub fn with_config(host: H, config: DrawerConfig) -> DrawerResult<Self> {
        if let Err(err) = config.validate() {
            tracing::warn!("rejected drawer config: {}", err);
            return Err(err);
        }
        Ok(Self::from_valid_config(host, config))
    }

    /// A controller with both surfaces already attached.
    pub fn with_surfaces(
        host: H,
        top: impl Surface + 'static,
        left: impl Surface + 'static,
    ) -> Self {
        let mut controller = Self::new(host);
        controller.set_top_surface(top);
        controller.set_left_surface(left);
        controller
    }

    fn from_valid_config(host: H, config: DrawerConfig) -> Self {
        let status_bar = StatusBarSync::new(config.hide_status_bar_when_open);
        Self {
            host,
            config,
            top: None,
            left: None,
            tap: GestureRecognizer::tap(),
            pan: GestureRecognizer::pan(),
            policy: AlwaysSimultaneous,
            session: DragSession::new(),
            status_bar,
            observers: TransitionObservers::new(),
            animation: None,
            visible: false,
        }
    }

    // ------------------------------------------------------------------
    // Surfaces
    // ------------------------------------------------------------------

    /// Attach the top (main) surface at the closed frame.
    ///
    /// Returns the previously attached top surface, detached.
    pub fn set_top_surface(&mut self, surface: impl Surface + 'static) -> Option<Box<dyn Surface>> {
        self.interrupt_animation();
        let displaced = self.offset() > 0.0;
        let previous = self.detach_top();

        let mut surface: Box<dyn Surface> = Box::new(surface);
        surface.will_move_to_parent();
        surface.set_frame(self.closed_frame());
        surface.set_shadow(self.config.shadow);
        self.host.add_subview(surface.id());
        if self.visible {
            surface.add_gesture_recognizer(&self.tap);
            surface.add_gesture_recognizer(&self.pan);
        }
        surface.did_move_to_parent();
        tracing::debug!("top surface {} attached", surface.id());

        self.top = Some(surface);
        self.tap.set_enabled(false);

        // The replacement starts closed.
        if displaced {
            self.emit(DrawerTransitionState::Closed);
            self.update_status_bar_appearance();
        }
        previous
    }

    /// Attach the left (drawer) surface beneath the top surface.
    ///
    /// Returns the previously attached left surface, detached.
    pub fn set_left_surface(&mut self, surface: impl Surface + 'static) -> Option<Box<dyn Surface>> {
        let previous = self.left.take().map(|mut old| {
            self.host.remove_subview(old.id());
            old.removed_from_parent();
            old
        });

        let mut surface: Box<dyn Surface> = Box::new(surface);
        surface.will_move_to_parent();
        surface.set_frame(self.host.screen_bounds());

        let top_id = self
            .top
            .as_ref()
            .map(|top| top.id())
            .filter(|id| self.host.contains_subview(*id));
        match top_id {
            Some(top_id) => self.host.insert_subview_below(surface.id(), top_id),
            None => self.host.add_subview(surface.id()),
        }
        surface.did_move_to_parent();
        tracing::debug!("left surface {} attached", surface.id());

        self.left = Some(surface);
        previous
    }

    fn detach_top(&mut self) -> Option<Box<dyn Surface>> {
        let mut old = self.top.take()?;
        if self.visible {
            old.remove_gesture_recognizer(self.tap.id());
            old.remove_gesture_recognizer(self.pan.id());
        }
        self.host.remove_subview(old.id());
        old.removed_from_parent();
        tracing::debug!("top surface {} detached", old.id());
        Some(old)
    }

    pub fn top_surface(&self) -> Option<&dyn Surface> {
        self.top.as_deref()
    }

    pub fn left_surface(&self) -> Option<&dyn Surface> {
        self.left.as_deref()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// The container is about to become visible: register recognizers on
    /// the top surface.
    pub fn view_will_appear(&mut self) {
        self.visible = true;
        if let Some(top) = self.top.as_mut() {
            top.add_gesture_recognizer(&self.tap);
            top.add_gesture_recognizer(&self.pan);
        }
    }

    /// The container is about to be hidden: unregister recognizers.
    pub fn view_will_disappear(&mut self) {
        self.visible = false;
        if let Some(top) = self.top.as_mut() {
            top.remove_gesture_recognizer(self.tap.id());
            top.remove_gesture_recognizer(self.pan.id());
        }
    }

    /// Route a gesture produced by a [`GestureTracker`](sidedrawer_input::GestureTracker)
    /// or a native host.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Pan(pan) => self.handle_pan(pan),
            GestureEvent::Tap(_) => self.handle_tap(),
        }
    }

    /// Tap recognizer action: close when the tap recognizer is enabled.
    pub fn handle_tap(&mut self) {
        if !self.tap.is_enabled() {
            tracing::trace!("tap ignored, recognizer disabled");
            return;
        }
        self.close_drawer();
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    /// Top surface frame when closed: the full screen bounds.
    pub fn closed_frame(&self) -> Frame {
        self.host.screen_bounds()
    }

    /// Top surface frame when open.
    pub fn open_frame(&self) -> Frame {
        self.closed_frame().offset_x(self.config.drawer_width)
    }

    /// Horizontal displacement of the top surface; zero without one.
    pub fn offset(&self) -> f32 {
        self.top
            .as_ref()
            .map_or(0.0, |top| top.frame().x - self.closed_frame().x)
    }

    /// True only when the top surface sits exactly at the open frame.
    pub fn is_open(&self) -> bool {
        self.top
            .as_ref()
            .is_some_and(|top| top.frame() == self.open_frame())
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn drawer_width(&self) -> f32 {
        self.config.drawer_width
    }

    /// Change the drawer width.
    ///
    /// An open drawer follows the new width; otherwise the top surface is
    /// pulled back if it now sits past the open frame. An in-flight
    /// animation stops where it stands and completes as interrupted, once
    /// the surface is inside the new width.
    pub fn set_drawer_width(&mut self, width: f32) -> DrawerResult<()> {
        config::validate_width(width)?;
        let was_open = self.is_open();
        let interrupted = self.animation.take();
        self.config.drawer_width = width;

        let moved = was_open || self.offset() > width;
        if moved {
            self.set_top_offset(width);
        }

        match interrupted {
            Some(animation) => self.complete_interrupted(animation),
            None if moved => {
                self.tap.set_enabled(self.is_open());
                self.update_status_bar_appearance();
            }
            None => {}
        }
        Ok(())
    }

    pub fn hide_status_bar_when_open(&self) -> bool {
        self.status_bar.hide_when_open()
    }

    pub fn set_hide_status_bar_when_open(&mut self, hide: bool) {
        self.config.hide_status_bar_when_open = hide;
        self.status_bar.set_hide_when_open(hide);
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn tap_recognizer(&self) -> &GestureRecognizer {
        &self.tap
    }

    pub fn pan_recognizer(&self) -> &GestureRecognizer {
        &self.pan
    }

    /// Policy for the pan recognizer against nested content recognizers.
    pub fn gesture_policy(&self) -> &AlwaysSimultaneous {
        &self.policy
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ------------------------------------------------------------------
    // Status bar
    // ------------------------------------------------------------------

    pub fn prefers_status_bar_hidden(&self) -> bool {
        self.top.is_some() && self.status_bar.prefers_hidden(self.offset())
    }

    pub fn preferred_status_bar_update_animation(&self) -> StatusBarAnimation {
        self.status_bar.preferred_animation()
    }

    fn update_status_bar_appearance(&mut self) {
        let update = self.status_bar.update_for(self.offset());
        tracing::trace!("status bar hidden={}", update.hidden);
        self.host.set_needs_status_bar_appearance_update(update);
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Register a transition observer.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&DrawerTransitionEvent) + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn emit(&mut self, state: DrawerTransitionState) {
        tracing::debug!("drawer {:?}", state);
        self.observers.emit(DrawerTransitionEvent::new(state));
    }

    /// Move the top surface horizontally, keeping its vertical origin.
    fn set_top_offset(&mut self, offset: f32) {
        let x = self.closed_frame().x + offset;
        if let Some(top) = self.top.as_mut() {
            let frame = top.frame().with_x(x);
            top.set_frame(frame);
        }
    }
}
