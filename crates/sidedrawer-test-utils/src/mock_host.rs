//! Mock implementation of `DrawerHost` for testing.

use sidedrawer_ui::{DrawerHost, Frame, StatusBarUpdate, SurfaceId};

/// Records a host call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    AddSubview(SurfaceId),
    InsertSubviewBelow {
        surface: SurfaceId,
        sibling: SurfaceId,
    },
    RemoveSubview(SurfaceId),
    StatusBarUpdate(StatusBarUpdate),
}

/// Mock host keeping a bottom-to-top subview list and a call log.
///
/// The controller owns its host, so tests read it back through
/// `DrawerController::host`.
#[derive(Debug, Clone)]
pub struct MockHost {
    bounds: Frame,
    subviews: Vec<SurfaceId>,
    calls: Vec<HostCall>,
}

impl MockHost {
    pub fn new(bounds: Frame) -> Self {
        Self {
            bounds,
            subviews: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Subviews from bottom to top.
    pub fn subviews(&self) -> &[SurfaceId] {
        &self.subviews
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn status_bar_updates(&self) -> Vec<StatusBarUpdate> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::StatusBarUpdate(update) => Some(*update),
                _ => None,
            })
            .collect()
    }

    pub fn count_status_bar_updates(&self) -> usize {
        self.status_bar_updates().len()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl DrawerHost for MockHost {
    fn screen_bounds(&self) -> Frame {
        self.bounds
    }

    fn add_subview(&mut self, surface: SurfaceId) {
        self.calls.push(HostCall::AddSubview(surface));
        self.subviews.retain(|id| *id != surface);
        self.subviews.push(surface);
    }

    fn insert_subview_below(&mut self, surface: SurfaceId, sibling: SurfaceId) {
        self.calls.push(HostCall::InsertSubviewBelow { surface, sibling });
        self.subviews.retain(|id| *id != surface);
        let index = self
            .subviews
            .iter()
            .position(|id| *id == sibling)
            .unwrap_or(self.subviews.len());
        self.subviews.insert(index, surface);
    }

    fn remove_subview(&mut self, surface: SurfaceId) {
        self.calls.push(HostCall::RemoveSubview(surface));
        self.subviews.retain(|id| *id != surface);
    }

    fn contains_subview(&self, surface: SurfaceId) -> bool {
        self.subviews.contains(&surface)
    }

    fn set_needs_status_bar_appearance_update(&mut self, update: StatusBarUpdate) {
        self.calls.push(HostCall::StatusBarUpdate(update));
    }
}
