//! Animated open/close transitions of the top surface.

use super::DrawerController;
use crate::animation::{Animation, SNAP_DURATION, TOGGLE_DURATION};
use crate::event::DrawerTransitionState;
use crate::host::DrawerHost;
use crate::surface::Frame;
use futures::channel::oneshot;
use sidedrawer_core::profiling::profile_function;
use std::future::Future;

/// What to do once an animation ends.
///
/// Either way the emitted state is the one the surface ends up in.
pub(super) enum Completion {
    Close {
        notify: Option<oneshot::Sender<bool>>,
    },
    Settle,
}

/// The in-flight animation of the top surface.
pub(super) struct FrameAnimation {
    animation: Animation,
    target: Frame,
    completion: Completion,
}

impl<H: DrawerHost> DrawerController<H> {
    /// Slide the top surface back over the drawer.
    ///
    /// The tap recognizer is disabled immediately. On completion a
    /// [`Closed`](DrawerTransitionState::Closed) event is emitted and the
    /// status bar re-evaluated. Closing an already closed drawer still runs
    /// the animation and emits the event.
    pub fn close_drawer(&mut self) {
        self.start_close(None);
    }

    /// [`close_drawer`](Self::close_drawer), resolving when the animation
    /// completes.
    ///
    /// The side effects happen before this returns; the future only waits.
    /// It yields `true` if the animation ran to the end and `false` if it
    /// was interrupted, had nothing to animate, or the controller was
    /// dropped first.
    pub fn close_drawer_async(&mut self) -> impl Future<Output = bool> + use<H> {
        let (sender, receiver) = oneshot::channel();
        self.start_close(Some(sender));
        async move { receiver.await.unwrap_or(false) }
    }

    /// Slide the top surface out to the open frame.
    pub fn open_drawer(&mut self) {
        if self.top.is_none() {
            tracing::debug!("open_drawer without a top surface");
            return;
        }
        self.tap.set_enabled(false);
        let target = self.open_frame();
        self.animate_top_to(target, TOGGLE_DURATION, Completion::Settle);
    }

    /// Advance the in-flight animation by `delta_seconds`.
    ///
    /// Call once per frame from the host's loop.
    pub fn update(&mut self, delta_seconds: f32) {
        profile_function!();

        let Some(current) = self.animation.as_mut() else {
            return;
        };
        let running = current.animation.update(delta_seconds);
        if let Some(top) = self.top.as_mut() {
            let frame = if running {
                top.frame().with_x(current.animation.value())
            } else {
                current.target
            };
            top.set_frame(frame);
        }

        if !running {
            if let Some(finished) = self.animation.take() {
                self.finish_transition(finished.completion, true);
            }
        }
    }

    pub(super) fn snap_to_nearest(&mut self) {
        let target = if self.offset() > self.config.drawer_width / 2.0 {
            self.open_frame()
        } else {
            self.closed_frame()
        };
        tracing::debug!("snapping to x={}", target.x);
        self.animate_top_to(target, SNAP_DURATION, Completion::Settle);
    }

    /// End the in-flight animation where it stands, running its completion
    /// as unfinished.
    pub(super) fn interrupt_animation(&mut self) {
        if let Some(interrupted) = self.animation.take() {
            self.complete_interrupted(interrupted);
        }
    }

    /// Run the completion of an animation already taken out of flight.
    pub(super) fn complete_interrupted(&mut self, interrupted: FrameAnimation) {
        tracing::debug!("animation to x={} interrupted", interrupted.target.x);
        self.finish_transition(interrupted.completion, false);
    }

    fn start_close(&mut self, notify: Option<oneshot::Sender<bool>>) {
        self.tap.set_enabled(false);

        if self.top.is_none() {
            tracing::debug!("close_drawer without a top surface");
            if let Some(sender) = notify {
                let _ = sender.send(false);
            }
            return;
        }

        let target = self.closed_frame();
        self.animate_top_to(target, TOGGLE_DURATION, Completion::Close { notify });
    }

    fn animate_top_to(&mut self, target: Frame, duration: f32, completion: Completion) {
        self.interrupt_animation();

        let Some(from) = self.top.as_ref().map(|top| top.frame().x) else {
            self.finish_transition(completion, false);
            return;
        };

        self.animation = Some(FrameAnimation {
            animation: Animation::new(from, target.x, duration),
            target,
            completion,
        });
    }

    fn finish_transition(&mut self, completion: Completion, finished: bool) {
        let open = self.is_open();
        self.tap.set_enabled(open);

        let notify = match completion {
            Completion::Close { notify } => notify,
            Completion::Settle => None,
        };

        self.emit(if open {
            DrawerTransitionState::Open
        } else {
            DrawerTransitionState::Closed
        });
        self.update_status_bar_appearance();

        if let Some(sender) = notify {
            let _ = sender.send(finished);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ViewStack;
    use crate::surface::BasicSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller() -> DrawerController<ViewStack> {
        let host = ViewStack::new(Frame::new(0.0, 0.0, 375.0, 667.0));
        DrawerController::with_surfaces(host, BasicSurface::new("top"), BasicSurface::new("left"))
    }

    fn record(controller: &mut DrawerController<ViewStack>) -> Rc<RefCell<Vec<DrawerTransitionState>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        controller.subscribe(move |event| sink.borrow_mut().push(event.state()));
        log
    }

    #[test]
    fn test_open_then_close() {
        let mut drawer = controller();
        let log = record(&mut drawer);

        drawer.open_drawer();
        assert!(drawer.is_animating());
        drawer.update(TOGGLE_DURATION);
        assert!(drawer.is_open());
        assert!(drawer.tap_recognizer().is_enabled());

        drawer.close_drawer();
        assert!(!drawer.tap_recognizer().is_enabled());
        drawer.update(TOGGLE_DURATION / 2.0);
        assert!(drawer.offset() > 0.0 && drawer.offset() < 300.0);
        drawer.update(TOGGLE_DURATION);

        assert_eq!(drawer.offset(), 0.0);
        assert!(!drawer.is_animating());
        assert_eq!(
            *log.borrow(),
            vec![DrawerTransitionState::Open, DrawerTransitionState::Closed]
        );
    }

    #[test]
    fn test_second_close_interrupts_first() {
        let mut drawer = controller();
        drawer.open_drawer();
        drawer.update(TOGGLE_DURATION);
        let log = record(&mut drawer);

        let first = drawer.close_drawer_async();
        drawer.update(0.05);
        let second = drawer.close_drawer_async();
        drawer.update(TOGGLE_DURATION);

        assert!(!pollster::block_on(first));
        assert!(pollster::block_on(second));
        assert_eq!(drawer.offset(), 0.0);
        assert_eq!(
            *log.borrow(),
            vec![DrawerTransitionState::Closed, DrawerTransitionState::Closed]
        );
    }

    #[test]
    fn test_async_close_resolves_false_when_dropped() {
        let mut drawer = controller();
        let pending = drawer.close_drawer_async();
        drop(drawer);
        assert!(!pollster::block_on(pending));
    }

    #[test]
    fn test_update_without_animation_is_noop() {
        let mut drawer = controller();
        drawer.update(1.0);
        assert_eq!(drawer.offset(), 0.0);
        assert_eq!(drawer.host().status_bar_requests(), 0);
    }
}
