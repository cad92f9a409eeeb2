//! The container the drawer lives in.
//!
//! [`DrawerHost`] is what the controller needs from the surrounding toolkit:
//! screen bounds, a z-ordered subview list and status bar control.
//! [`ViewStack`] is a self-contained implementation.

use crate::status_bar::StatusBarUpdate;
use crate::surface::Frame;
use crate::surface_id::SurfaceId;

pub trait DrawerHost {
    /// Full screen bounds; the closed frame of both surfaces.
    fn screen_bounds(&self) -> Frame;

    /// Append on top of every other subview.
    fn add_subview(&mut self, surface: SurfaceId);

    /// Insert directly below `sibling`.
    fn insert_subview_below(&mut self, surface: SurfaceId, sibling: SurfaceId);

    fn remove_subview(&mut self, surface: SurfaceId);

    fn contains_subview(&self, surface: SurfaceId) -> bool;

    fn set_needs_status_bar_appearance_update(&mut self, update: StatusBarUpdate);
}

/// In-memory host keeping subviews bottom to top.
#[derive(Debug, Clone)]
pub struct ViewStack {
    bounds: Frame,
    subviews: Vec<SurfaceId>,
    status_bar: Option<StatusBarUpdate>,
    status_bar_requests: usize,
}

impl ViewStack {
    pub fn new(bounds: Frame) -> Self {
        Self {
            bounds,
            subviews: Vec::new(),
            status_bar: None,
            status_bar_requests: 0,
        }
    }

    pub fn set_bounds(&mut self, bounds: Frame) {
        self.bounds = bounds;
    }

    /// Subviews from bottom to top.
    pub fn subviews(&self) -> &[SurfaceId] {
        &self.subviews
    }

    pub fn topmost(&self) -> Option<SurfaceId> {
        self.subviews.last().copied()
    }

    /// The last status bar state requested by the controller.
    pub fn status_bar(&self) -> Option<StatusBarUpdate> {
        self.status_bar
    }

    pub fn is_status_bar_hidden(&self) -> bool {
        self.status_bar.is_some_and(|update| update.hidden)
    }

    pub fn status_bar_requests(&self) -> usize {
        self.status_bar_requests
    }

    fn index_of(&self, surface: SurfaceId) -> Option<usize> {
        self.subviews.iter().position(|id| *id == surface)
    }
}

impl DrawerHost for ViewStack {
    fn screen_bounds(&self) -> Frame {
        self.bounds
    }

    fn add_subview(&mut self, surface: SurfaceId) {
        self.remove_subview(surface);
        self.subviews.push(surface);
    }

    fn insert_subview_below(&mut self, surface: SurfaceId, sibling: SurfaceId) {
        self.remove_subview(surface);
        match self.index_of(sibling) {
            Some(index) => self.subviews.insert(index, surface),
            None => {
                tracing::warn!("{} is not a subview, appending {}", sibling, surface);
                self.subviews.push(surface);
            }
        }
    }

    fn remove_subview(&mut self, surface: SurfaceId) {
        self.subviews.retain(|id| *id != surface);
    }

    fn contains_subview(&self, surface: SurfaceId) -> bool {
        self.index_of(surface).is_some()
    }

    fn set_needs_status_bar_appearance_update(&mut self, update: StatusBarUpdate) {
        self.status_bar = Some(update);
        self.status_bar_requests += 1;
    }
}
