//! Drawer configuration.

use crate::error::{DrawerError, DrawerResult};
use crate::surface::Shadow;
use std::sync::atomic::{AtomicU32, Ordering};

/// Width used when nothing else is configured.
pub const DEFAULT_DRAWER_WIDTH: f32 = 300.0;

/// Process-wide default width, stored as `f32` bits.
static SHARED_DRAWER_WIDTH: AtomicU32 = AtomicU32::new(DEFAULT_DRAWER_WIDTH.to_bits());

/// The width new configurations start from.
pub fn default_drawer_width() -> f32 {
    f32::from_bits(SHARED_DRAWER_WIDTH.load(Ordering::Relaxed))
}

/// Change the width new configurations start from.
///
/// Existing controllers keep their own width.
pub fn set_default_drawer_width(width: f32) -> DrawerResult<()> {
    validate_width(width)?;
    SHARED_DRAWER_WIDTH.store(width.to_bits(), Ordering::Relaxed);
    tracing::debug!("default drawer width set to {}", width);
    Ok(())
}

pub(crate) fn validate_width(width: f32) -> DrawerResult<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(DrawerError::InvalidDrawerWidth(width))
    }
}

/// Configuration for a [`DrawerController`](crate::DrawerController).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    /// How far the top surface slides when open.
    pub drawer_width: f32,
    /// Hide the status bar whenever the top surface is displaced.
    pub hide_status_bar_when_open: bool,
    /// Shadow applied to the top surface on attachment.
    pub shadow: Option<Shadow>,
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self {
            drawer_width: default_drawer_width(),
            hide_status_bar_when_open: true,
            shadow: None,
        }
    }

    pub fn drawer_width(mut self, width: f32) -> Self {
        self.drawer_width = width;
        self
    }

    pub fn hide_status_bar_when_open(mut self, hide: bool) -> Self {
        self.hide_status_bar_when_open = hide;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn validate(&self) -> DrawerResult<()> {
        validate_width(self.drawer_width)
    }
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self::new()
    }
}
