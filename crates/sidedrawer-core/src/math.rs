/// Vector math for gesture translations and decorations.
///
/// This module re-exports the [`glam`] crate. Gesture translations are
/// [`Vec2`], colors are [`Vec4`] in linear RGBA.
///
/// # Examples
///
/// ```
/// use sidedrawer_core::math::Vec2;
///
/// let start = Vec2::new(10.0, 20.0);
/// let current = Vec2::new(130.0, 25.0);
/// let translation = current - start;
/// assert_eq!(translation.x, 120.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
