//! Conflict policy between the drawer's pan recognizer and recognizers owned
//! by hosted content (scroll views, lists).

use crate::gesture::{GestureRecognizer, RecognizerId};

/// Decides whether `gesture` keeps recognizing while `other` is also active.
pub trait SimultaneousRecognition {
    fn should_recognize_simultaneously(
        &self,
        gesture: &GestureRecognizer,
        other: RecognizerId,
    ) -> bool;
}

/// Always lets the drawer pan run alongside nested content gestures.
///
/// Arbitration happens later, in the drawer's direction checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysSimultaneous;

impl SimultaneousRecognition for AlwaysSimultaneous {
    fn should_recognize_simultaneously(
        &self,
        _gesture: &GestureRecognizer,
        _other: RecognizerId,
    ) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_allows() {
        let pan = GestureRecognizer::pan();
        let policy = AlwaysSimultaneous;
        assert!(policy.should_recognize_simultaneously(&pan, RecognizerId::from_raw(9000)));
        assert!(policy.should_recognize_simultaneously(&pan, pan.id()));
    }
}
