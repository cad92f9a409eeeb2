//! Pointer tracking for hosts that only deliver raw pointer events.
//!
//! The tracker follows a single pointer. A press that travels further than
//! [`PAN_SLOP`] becomes a pan; a press released inside the slop is a tap.
//! Translations are always measured from the press point.

use crate::gesture::{
    GestureEvent, GestureRecognizer, GestureState, PanGesture, RecognizerId, TapGesture,
};
use crate::policy::{AlwaysSimultaneous, SimultaneousRecognition};
use sidedrawer_core::math::Vec2;

/// Distance a press must travel before it counts as a pan.
pub const PAN_SLOP: f32 = 10.0;

/// Raw pointer input in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Moved(Vec2),
    Up(Vec2),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TrackState {
    Idle,
    Pressed { origin: Vec2 },
    Panning { origin: Vec2, last: Vec2 },
    /// The pointer is still down but the pan was cancelled; wait for release.
    Yielded,
}

/// Turns pointer events into tap and pan gestures.
#[derive(Debug)]
pub struct GestureTracker<P = AlwaysSimultaneous> {
    policy: P,
    state: TrackState,
}

impl GestureTracker<AlwaysSimultaneous> {
    pub fn new() -> Self {
        Self::with_policy(AlwaysSimultaneous)
    }
}

impl Default for GestureTracker<AlwaysSimultaneous> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SimultaneousRecognition> GestureTracker<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            state: TrackState::Idle,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Whether a pan is currently being reported.
    pub fn is_panning(&self) -> bool {
        matches!(self.state, TrackState::Panning { .. })
    }

    /// Feed one pointer event.
    ///
    /// `pan` and `tap` are the recognizers attached to the surface under the
    /// pointer; disabled recognizers produce no gestures.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        pan: &GestureRecognizer,
        tap: &GestureRecognizer,
    ) -> Option<GestureEvent> {
        match (event, self.state) {
            (PointerEvent::Down(position), _) => {
                self.state = TrackState::Pressed { origin: position };
                None
            }
            (PointerEvent::Moved(position), TrackState::Pressed { origin }) => {
                if position.distance(origin) <= PAN_SLOP || !pan.is_enabled() {
                    return None;
                }
                tracing::trace!("pan began at {:?}", origin);
                self.state = TrackState::Panning {
                    origin,
                    last: position,
                };
                Some(GestureEvent::Pan(PanGesture::new(
                    GestureState::Began,
                    position - origin,
                )))
            }
            (PointerEvent::Moved(position), TrackState::Panning { origin, .. }) => {
                self.state = TrackState::Panning {
                    origin,
                    last: position,
                };
                Some(GestureEvent::Pan(PanGesture::new(
                    GestureState::Changed,
                    position - origin,
                )))
            }
            (PointerEvent::Up(position), TrackState::Pressed { .. }) => {
                self.state = TrackState::Idle;
                tap.is_enabled()
                    .then_some(GestureEvent::Tap(TapGesture { location: position }))
            }
            (PointerEvent::Up(position), TrackState::Panning { origin, .. }) => {
                self.state = TrackState::Idle;
                Some(GestureEvent::Pan(PanGesture::new(
                    GestureState::Ended,
                    position - origin,
                )))
            }
            (PointerEvent::Cancelled, TrackState::Panning { origin, last }) => {
                self.state = TrackState::Idle;
                Some(GestureEvent::Pan(PanGesture::new(
                    GestureState::Cancelled,
                    last - origin,
                )))
            }
            (PointerEvent::Up(_) | PointerEvent::Cancelled, _) => {
                self.state = TrackState::Idle;
                None
            }
            (PointerEvent::Moved(_), TrackState::Idle | TrackState::Yielded) => None,
        }
    }

    /// Another recognizer has claimed the pointer.
    ///
    /// Keeps panning when the policy allows simultaneous recognition,
    /// otherwise cancels the running pan.
    pub fn claimed_by(&mut self, other: RecognizerId, pan: &GestureRecognizer) -> Option<GestureEvent> {
        if self.policy.should_recognize_simultaneously(pan, other) {
            return None;
        }

        match self.state {
            TrackState::Panning { origin, last } => {
                tracing::debug!("pan yielded to {}", other);
                self.state = TrackState::Yielded;
                Some(GestureEvent::Pan(PanGesture::new(
                    GestureState::Cancelled,
                    last - origin,
                )))
            }
            TrackState::Pressed { .. } => {
                self.state = TrackState::Yielded;
                None
            }
            TrackState::Idle | TrackState::Yielded => None,
        }
    }
}
