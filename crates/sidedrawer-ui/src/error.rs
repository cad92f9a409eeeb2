/// Errors returned by drawer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerError {
    /// Drawer width must be finite and greater than zero.
    InvalidDrawerWidth(f32),
}

impl std::fmt::Display for DrawerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerError::InvalidDrawerWidth(width) => {
                write!(f, "Invalid drawer width: {} (must be finite and > 0)", width)
            }
        }
    }
}

impl std::error::Error for DrawerError {}

/// Result type for drawer operations.
pub type DrawerResult<T> = Result<T, DrawerError>;
