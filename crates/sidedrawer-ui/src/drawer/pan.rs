//! Horizontal pan handling.
//!
//! A drag only ever moves the top surface to the right of its closed
//! position. Leftward or mostly-vertical movement rejects the session so
//! the hosted content (lists, scroll views) keeps the gesture.

use super::DrawerController;
use crate::event::DrawerTransitionState;
use crate::host::DrawerHost;
use sidedrawer_core::math::Vec2;
use sidedrawer_core::profiling::profile_function;
use sidedrawer_input::{GestureState, PanGesture};

impl<H: DrawerHost> DrawerController<H> {
    /// Pan recognizer action.
    pub fn handle_pan(&mut self, gesture: PanGesture) {
        profile_function!();

        if self.top.is_none() {
            tracing::trace!("pan {:?} ignored without a top surface", gesture.state);
            if gesture.state.is_terminal() {
                self.pan.set_enabled(true);
                self.session.end();
            }
            return;
        }

        match gesture.state {
            GestureState::Began => {
                tracing::debug!("drag began at offset {}", self.offset());
                self.session.begin();
                self.status_bar.mark_pending();
            }
            GestureState::Changed => self.pan_changed(gesture.translation),
            GestureState::Ended | GestureState::Cancelled => self.pan_finished(gesture.state),
        }
    }

    fn pan_changed(&mut self, translation: Vec2) {
        if !self.session.accepts_movement() {
            return;
        }

        // Leftward, or more vertical than horizontal: not ours.
        if translation.x < 0.0 || translation.y.abs() > translation.x {
            self.reject_drag(translation);
            return;
        }

        self.interrupt_animation();
        self.set_top_offset(translation.x.min(self.config.drawer_width));
        self.tap.set_enabled(false);
        tracing::trace!("drag offset {}", self.offset());

        if self.status_bar.take_pending() {
            self.emit(DrawerTransitionState::Transitioning);
            self.update_status_bar_appearance();
        }
    }

    /// Yield the current drag: disable the pan recognizer and settle the
    /// session right away as cancelled.
    fn reject_drag(&mut self, translation: Vec2) {
        if !self.session.reject() {
            return;
        }
        tracing::debug!("drag rejected at translation {:?}", translation);
        self.pan.set_enabled(false);
        self.pan_finished(GestureState::Cancelled);
    }

    fn pan_finished(&mut self, state: GestureState) {
        self.pan.set_enabled(true);

        let session = self.session.end();
        if !session.is_active() {
            return;
        }

        // Nothing moved this session.
        if self.status_bar.take_pending() {
            tracing::debug!("drag {:?} without displacement", state);
            return;
        }

        self.snap_to_nearest();
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::SNAP_DURATION;
    use crate::event::DrawerTransitionState;
    use crate::host::ViewStack;
    use crate::surface::{BasicSurface, Frame};
    use crate::DrawerController;
    use sidedrawer_input::PanGesture;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<DrawerTransitionState>>>;

    fn controller() -> (DrawerController<ViewStack>, Log) {
        let host = ViewStack::new(Frame::new(0.0, 0.0, 375.0, 667.0));
        let mut drawer =
            DrawerController::with_surfaces(host, BasicSurface::new("top"), BasicSurface::new("left"));
        drawer.view_will_appear();

        let log = Log::default();
        let sink = log.clone();
        drawer.subscribe(move |event| sink.borrow_mut().push(event.state()));
        (drawer, log)
    }

    fn drag(drawer: &mut DrawerController<ViewStack>, dx: f32, dy: f32) {
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(dx, dy));
        drawer.handle_pan(PanGesture::ended(dx, dy));
        drawer.update(SNAP_DURATION);
    }

    #[test]
    fn test_release_past_half_opens() {
        let (mut drawer, log) = controller();
        drag(&mut drawer, 250.0, 0.0);

        assert_eq!(drawer.offset(), 300.0);
        assert!(drawer.is_open());
        assert!(drawer.tap_recognizer().is_enabled());
        assert_eq!(
            *log.borrow(),
            vec![DrawerTransitionState::Transitioning, DrawerTransitionState::Open]
        );
    }

    #[test]
    fn test_release_before_half_closes() {
        let (mut drawer, log) = controller();
        drag(&mut drawer, 120.0, 10.0);

        assert_eq!(drawer.offset(), 0.0);
        assert!(!drawer.is_open());
        assert!(!drawer.tap_recognizer().is_enabled());
        assert_eq!(
            *log.borrow(),
            vec![DrawerTransitionState::Transitioning, DrawerTransitionState::Closed]
        );
    }

    #[test]
    fn test_exact_half_closes() {
        let (mut drawer, _) = controller();
        drag(&mut drawer, 150.0, 0.0);
        assert_eq!(drawer.offset(), 0.0);
    }

    #[test]
    fn test_drag_is_clamped_to_drawer_width() {
        let (mut drawer, _) = controller();
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(360.0, 0.0));

        assert_eq!(drawer.offset(), 300.0);
        assert!(!drawer.tap_recognizer().is_enabled());
    }

    #[test]
    fn test_drag_keeps_vertical_origin() {
        let (mut drawer, _) = controller();
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(80.0, 30.0));

        let frame = drawer.top_surface().map(|top| top.frame());
        assert_eq!(frame, Some(Frame::new(80.0, 0.0, 375.0, 667.0)));
    }

    #[test]
    fn test_vertical_drag_is_rejected() {
        let (mut drawer, log) = controller();
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(20.0, 45.0));

        assert_eq!(drawer.offset(), 0.0);
        assert!(!drawer.drag_session().is_active());
        assert!(drawer.pan_recognizer().is_enabled());

        // Later movement of the same touch is ignored.
        drawer.handle_pan(PanGesture::changed(200.0, 45.0));
        drawer.handle_pan(PanGesture::ended(200.0, 45.0));
        drawer.update(SNAP_DURATION);

        assert_eq!(drawer.offset(), 0.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_leftward_drag_is_rejected() {
        let (mut drawer, log) = controller();
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(-15.0, 0.0));

        assert_eq!(drawer.offset(), 0.0);
        assert!(drawer.pan_recognizer().is_enabled());
        assert!(!drawer.is_animating());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_reversal_after_movement_snaps_closed() {
        let (mut drawer, log) = controller();
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(100.0, 0.0));
        drawer.handle_pan(PanGesture::changed(-5.0, 0.0));

        assert!(drawer.is_animating());
        drawer.update(SNAP_DURATION);

        assert_eq!(drawer.offset(), 0.0);
        assert_eq!(
            *log.borrow(),
            vec![DrawerTransitionState::Transitioning, DrawerTransitionState::Closed]
        );
    }

    #[test]
    fn test_release_without_movement_does_not_animate() {
        let (mut drawer, log) = controller();
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::cancelled(0.0, 0.0));

        assert!(!drawer.is_animating());
        assert!(log.borrow().is_empty());
        assert_eq!(drawer.host().status_bar_requests(), 0);
    }

    #[test]
    fn test_one_status_bar_refresh_per_drag() {
        let (mut drawer, _) = controller();
        drawer.handle_pan(PanGesture::began());
        for dx in [10.0, 40.0, 90.0, 140.0] {
            drawer.handle_pan(PanGesture::changed(dx, 0.0));
        }

        assert_eq!(drawer.host().status_bar_requests(), 1);
        assert!(drawer.prefers_status_bar_hidden());
    }

    #[test]
    fn test_drag_interrupts_running_snap() {
        let (mut drawer, log) = controller();
        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(200.0, 0.0));
        drawer.handle_pan(PanGesture::ended(200.0, 0.0));
        assert!(drawer.is_animating());

        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(50.0, 0.0));

        assert!(!drawer.is_animating());
        assert_eq!(drawer.offset(), 50.0);
        assert_eq!(
            *log.borrow(),
            vec![
                DrawerTransitionState::Transitioning,
                DrawerTransitionState::Closed,
                DrawerTransitionState::Transitioning,
            ]
        );
    }

    #[test]
    fn test_pan_without_top_surface_is_noop() {
        let host = ViewStack::new(Frame::new(0.0, 0.0, 375.0, 667.0));
        let mut drawer = DrawerController::new(host);

        drawer.handle_pan(PanGesture::began());
        drawer.handle_pan(PanGesture::changed(200.0, 0.0));
        drawer.handle_pan(PanGesture::ended(200.0, 0.0));

        assert!(!drawer.is_animating());
        assert!(drawer.pan_recognizer().is_enabled());
    }
}
