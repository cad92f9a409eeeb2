//! Drawer transition notifications.
//!
//! Observers are plain closures, called synchronously in registration order
//! every time the controller emits an event. There is no buffering: an
//! observer registered after an emission never sees it.

use indexmap::IndexMap;
use sidedrawer_core::alloc::RandomState;

/// Where the drawer is, or that it is on its way somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerTransitionState {
    Open,
    Closed,
    Transitioning,
}

/// Emitted when the drawer starts moving or settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawerTransitionEvent {
    state: DrawerTransitionState,
}

impl DrawerTransitionEvent {
    pub const fn new(state: DrawerTransitionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> DrawerTransitionState {
        self.state
    }
}

/// Handle returned by [`TransitionObservers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&DrawerTransitionEvent)>;

/// Registered transition observers.
#[derive(Default)]
pub struct TransitionObservers {
    next_id: u64,
    observers: IndexMap<ObserverId, Observer, RandomState>,
}

impl TransitionObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&DrawerTransitionEvent) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    pub fn emit(&mut self, event: DrawerTransitionEvent) {
        for observer in self.observers.values_mut() {
            observer(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

impl std::fmt::Debug for TransitionObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionObservers")
            .field("observers", &self.observers.len())
            .finish()
    }
}
