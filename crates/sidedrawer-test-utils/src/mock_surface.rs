//! Mock implementation of `Surface` for testing.

use parking_lot::Mutex;
use sidedrawer_ui::{Frame, GestureRecognizer, RecognizerId, Shadow, Surface, SurfaceId};
use std::sync::Arc;

/// Records a surface call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetFrame(Frame),
    SetShadow(Option<Shadow>),
    WillMoveToParent,
    DidMoveToParent,
    RemovedFromParent,
    AddGestureRecognizer(RecognizerId),
    RemoveGestureRecognizer(RecognizerId),
}

#[derive(Debug, Default)]
struct MockSurfaceState {
    frame: Frame,
    shadow: Option<Shadow>,
    recognizers: Vec<RecognizerId>,
    calls: Vec<SurfaceCall>,
}

/// Mock surface.
///
/// # Interior Mutability
///
/// The controller takes ownership of the surface it is given, so tests keep a
/// clone. Clones share one `Arc<Mutex<_>>`, which makes every call visible
/// from the test's handle.
#[derive(Debug, Clone)]
pub struct MockSurface {
    id: SurfaceId,
    state: Arc<Mutex<MockSurfaceState>>,
}

impl MockSurface {
    pub fn new(key: &str) -> Self {
        Self {
            id: SurfaceId::new(key),
            state: Arc::new(Mutex::new(MockSurfaceState::default())),
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn frame(&self) -> Frame {
        self.state.lock().frame
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.state.lock().shadow
    }

    /// Recognizers currently attached.
    pub fn recognizers(&self) -> Vec<RecognizerId> {
        self.state.lock().recognizers.clone()
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.state.lock().calls.clone()
    }

    /// Every frame the surface was moved to, in order.
    pub fn frames(&self) -> Vec<Frame> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::SetFrame(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    fn record(&self, call: SurfaceCall) {
        self.state.lock().calls.push(call);
    }
}

impl Surface for MockSurface {
    fn id(&self) -> SurfaceId {
        MockSurface::id(self)
    }

    fn frame(&self) -> Frame {
        MockSurface::frame(self)
    }

    fn set_frame(&mut self, frame: Frame) {
        let mut state = self.state.lock();
        state.frame = frame;
        state.calls.push(SurfaceCall::SetFrame(frame));
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        let mut state = self.state.lock();
        state.shadow = shadow;
        state.calls.push(SurfaceCall::SetShadow(shadow));
    }

    fn will_move_to_parent(&mut self) {
        self.record(SurfaceCall::WillMoveToParent);
    }

    fn did_move_to_parent(&mut self) {
        self.record(SurfaceCall::DidMoveToParent);
    }

    fn removed_from_parent(&mut self) {
        self.record(SurfaceCall::RemovedFromParent);
    }

    fn add_gesture_recognizer(&mut self, recognizer: &GestureRecognizer) {
        let mut state = self.state.lock();
        state.recognizers.push(recognizer.id());
        state.calls.push(SurfaceCall::AddGestureRecognizer(recognizer.id()));
    }

    fn remove_gesture_recognizer(&mut self, recognizer: RecognizerId) {
        let mut state = self.state.lock();
        state.recognizers.retain(|id| *id != recognizer);
        state.calls.push(SurfaceCall::RemoveGestureRecognizer(recognizer));
    }
}
