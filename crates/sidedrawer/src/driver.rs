//! Single-threaded driver for hosts without native gesture recognizers.
//!
//! [`DrawerDriver`] owns a [`DrawerController`], turns raw pointer events into
//! gestures with a [`GestureTracker`], ticks animations from a [`FrameClock`]
//! and runs futures awaiting drawer completions on a local executor, so the
//! whole drawer stays on the thread that owns it.

use std::future::Future;
use std::time::Duration;

use async_executor::{LocalExecutor, Task};
use futures_lite::future;
use sidedrawer_core::profiling::{self, profile_function};
use sidedrawer_input::{
    AlwaysSimultaneous, GestureEvent, GestureTracker, PointerEvent, RecognizerId,
    SimultaneousRecognition,
};
use sidedrawer_ui::{DrawerController, DrawerHost};

use crate::clock::FrameClock;

/// Upper bound on frames stepped by [`DrawerDriver::settle`].
const MAX_SETTLE_FRAMES: u64 = 10_000;

/// Drives a drawer controller from pointer events and frame ticks.
pub struct DrawerDriver<H: DrawerHost + 'static, P = AlwaysSimultaneous> {
    controller: DrawerController<H>,
    tracker: GestureTracker<P>,
    clock: FrameClock,
    executor: LocalExecutor<'static>,
}

impl<H: DrawerHost + 'static> DrawerDriver<H, AlwaysSimultaneous> {
    pub fn new(controller: DrawerController<H>) -> Self {
        Self::with_policy(controller, AlwaysSimultaneous)
    }
}

impl<H: DrawerHost + 'static, P: SimultaneousRecognition> DrawerDriver<H, P> {
    /// A driver whose tracker resolves conflicts with `policy`.
    pub fn with_policy(controller: DrawerController<H>, policy: P) -> Self {
        Self {
            controller,
            tracker: GestureTracker::with_policy(policy),
            clock: FrameClock::new(),
            executor: LocalExecutor::new(),
        }
    }

    pub fn controller(&self) -> &DrawerController<H> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawerController<H> {
        &mut self.controller
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub fn tracker(&self) -> &GestureTracker<P> {
        &self.tracker
    }

    /// Feed a pointer event over the top surface.
    ///
    /// Returns the gesture delivered to the controller, if any.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<GestureEvent> {
        let gesture = self.tracker.handle(
            event,
            self.controller.pan_recognizer(),
            self.controller.tap_recognizer(),
        )?;
        self.controller.handle_gesture(gesture);
        Some(gesture)
    }

    /// Another recognizer (nested content) claimed the pointer.
    pub fn claimed_by(&mut self, other: RecognizerId) -> Option<GestureEvent> {
        let gesture = self
            .tracker
            .claimed_by(other, self.controller.pan_recognizer())?;
        self.controller.handle_gesture(gesture);
        Some(gesture)
    }

    /// Sample the wall clock and run one frame.
    pub fn tick(&mut self) {
        self.clock.update();
        self.run_frame();
    }

    /// Run one frame of exactly `delta`.
    pub fn step(&mut self, delta: Duration) {
        self.clock.advance(delta);
        self.run_frame();
    }

    /// Step frames of `frame` until no animation is in flight.
    ///
    /// Returns the number of frames stepped.
    pub fn settle(&mut self, frame: Duration) -> u64 {
        if frame.is_zero() {
            tracing::warn!("settle called with a zero frame duration");
            return 0;
        }

        let mut frames = 0;
        while self.controller.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.step(frame);
            frames += 1;
        }
        frames
    }

    /// Spawn a future on the driver's executor.
    ///
    /// It makes progress on every frame.
    pub fn spawn<T: 'static>(&self, future: impl Future<Output = T> + 'static) -> Task<T> {
        self.executor.spawn(future)
    }

    /// Start closing the drawer; the task resolves like
    /// [`DrawerController::close_drawer_async`].
    pub fn close(&mut self) -> Task<bool> {
        let closing = self.controller.close_drawer_async();
        self.executor.spawn(closing)
    }

    /// Close the drawer and step frames of `frame` until it has settled.
    ///
    /// Returns whether the close ran to completion.
    pub fn close_and_settle(&mut self, frame: Duration) -> bool {
        let task = self.close();
        self.settle(frame);
        future::block_on(self.executor.run(task))
    }

    fn run_frame(&mut self) {
        profiling::new_frame();
        profile_function!();

        self.controller.update(self.clock.delta_seconds());
        while self.executor.try_tick() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidedrawer_core::math::Vec2;
    use sidedrawer_ui::{BasicSurface, DrawerTransitionState, Frame, GestureState, ViewStack};
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn driver() -> DrawerDriver<ViewStack> {
        let host = ViewStack::new(Frame::new(0.0, 0.0, 375.0, 667.0));
        let mut controller =
            DrawerController::with_surfaces(host, BasicSurface::new("main"), BasicSurface::new("menu"));
        controller.view_will_appear();
        DrawerDriver::new(controller)
    }

    fn drag(driver: &mut DrawerDriver<ViewStack>, to: Vec2) {
        let from = Vec2::new(10.0, 100.0);
        driver.pointer(PointerEvent::Down(from));
        driver.pointer(PointerEvent::Moved(from + Vec2::new(20.0, 0.0)));
        driver.pointer(PointerEvent::Moved(to));
        driver.pointer(PointerEvent::Up(to));
    }

    #[test]
    fn test_pointer_drag_opens() {
        let mut driver = driver();
        drag(&mut driver, Vec2::new(260.0, 104.0));

        assert!(driver.controller().is_animating());
        let frames = driver.settle(FRAME);
        assert!(frames > 0);
        assert!(driver.controller().is_open());
    }

    #[test]
    fn test_pointer_tap_closes_open_drawer() {
        let mut driver = driver();
        drag(&mut driver, Vec2::new(260.0, 104.0));
        driver.settle(FRAME);

        driver.pointer(PointerEvent::Down(Vec2::new(320.0, 50.0)));
        let tap = driver.pointer(PointerEvent::Up(Vec2::new(321.0, 50.0)));
        assert!(matches!(tap, Some(GestureEvent::Tap(_))));

        driver.settle(FRAME);
        assert_eq!(driver.controller().offset(), 0.0);
        assert!(!driver.controller().tap_recognizer().is_enabled());
    }

    #[test]
    fn test_tap_on_closed_drawer_is_not_delivered() {
        let mut driver = driver();
        driver.pointer(PointerEvent::Down(Vec2::new(100.0, 100.0)));
        let tap = driver.pointer(PointerEvent::Up(Vec2::new(100.0, 100.0)));

        assert_eq!(tap, None);
        assert!(!driver.controller().is_animating());
    }

    #[test]
    fn test_close_task_resolves_after_frames() {
        let mut driver = driver();
        driver.controller_mut().open_drawer();
        driver.settle(FRAME);
        assert!(driver.controller().is_open());

        let task = driver.close();
        driver.step(Duration::from_millis(50));
        assert!(!task.is_finished());

        driver.settle(FRAME);
        assert!(task.is_finished());
        assert!(pollster::block_on(task));
    }

    #[test]
    fn test_close_and_settle() {
        let mut driver = driver();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        driver
            .controller_mut()
            .subscribe(move |event| sink.borrow_mut().push(event.state()));

        assert!(driver.close_and_settle(FRAME));
        assert_eq!(*events.borrow(), vec![DrawerTransitionState::Closed]);
    }

    #[test]
    fn test_claimed_pointer_cancels_drag() {
        struct Exclusive;
        impl SimultaneousRecognition for Exclusive {
            fn should_recognize_simultaneously(
                &self,
                _: &sidedrawer_ui::GestureRecognizer,
                _: RecognizerId,
            ) -> bool {
                false
            }
        }

        let host = ViewStack::new(Frame::new(0.0, 0.0, 375.0, 667.0));
        let mut controller =
            DrawerController::with_surfaces(host, BasicSurface::new("main"), BasicSurface::new("menu"));
        controller.view_will_appear();
        let mut driver = DrawerDriver::with_policy(controller, Exclusive);

        driver.pointer(PointerEvent::Down(Vec2::new(10.0, 100.0)));
        driver.pointer(PointerEvent::Moved(Vec2::new(30.0, 100.0)));
        driver.pointer(PointerEvent::Moved(Vec2::new(100.0, 100.0)));
        assert_eq!(driver.controller().offset(), 90.0);

        let cancelled = driver.claimed_by(RecognizerId::from_raw(999));
        assert!(matches!(
            cancelled,
            Some(GestureEvent::Pan(pan)) if pan.state == GestureState::Cancelled
        ));

        // Later movement of the claimed pointer is not delivered.
        assert_eq!(driver.pointer(PointerEvent::Moved(Vec2::new(200.0, 100.0))), None);

        assert!(driver.controller().is_animating());
        driver.settle(FRAME);
        assert_eq!(driver.controller().offset(), 0.0);
    }

    #[test]
    fn test_settle_with_zero_frame() {
        let mut driver = driver();
        driver.controller_mut().open_drawer();
        assert_eq!(driver.settle(Duration::ZERO), 0);
        assert!(driver.controller().is_animating());
    }
}
