/// An axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Copy> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Same size and vertical origin, new horizontal origin.
    pub fn with_x(self, x: T) -> Self {
        Rect { x, ..self }
    }
}

impl Rect<f32> {
    pub const ZERO: Rect<f32> = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Shift horizontally by `dx`.
    pub fn offset_x(self, dx: f32) -> Self {
        self.with_x(self.x + dx)
    }
}
