//! Time-based interpolation of the top surface's horizontal origin.
//!
//! # Example
//!
//! ```
//! use sidedrawer_ui::animation::{Animation, AnimationState};
//!
//! let mut slide = Animation::new(0.0, 300.0, 0.2);
//! slide.update(0.1);
//! assert!(slide.value() > 0.0 && slide.value() < 300.0);
//!
//! slide.update(0.1);
//! assert_eq!(slide.value(), 300.0);
//! assert_eq!(slide.state(), AnimationState::Completed);
//! ```

/// Duration of `close_drawer` / `open_drawer`, in seconds.
pub const TOGGLE_DURATION: f32 = 0.2;

/// Duration of the snap after a drag is released, in seconds.
pub const SNAP_DURATION: f32 = 0.1;

/// Ease in and out (slow start and end) over normalized time `t`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Completed,
}

/// A single scalar animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    state: AnimationState,
}

impl Animation {
    /// Animate from `from` to `to` over `duration` seconds, easing in and out.
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            state: AnimationState::Running,
        }
    }

    /// Normalized progress (0.0 to 1.0). Zero-length animations are always done.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Get the current value.
    pub fn value(&self) -> f32 {
        if self.state == AnimationState::Completed {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(self.progress())
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Update the animation by delta time.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed += delta_time.max(0.0);

        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_is_symmetric_and_bounded() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(2.0), 1.0);
        assert_eq!(ease_in_out(0.25), 1.0 - ease_in_out(0.75));

        for step in 0..=20 {
            let v = ease_in_out(step as f32 / 20.0);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_animation_update() {
        let mut anim = Animation::new(0.0, 100.0, 1.0);

        // At start
        assert_eq!(anim.value(), 0.0);

        // Halfway
        assert!(anim.update(0.5));
        assert_eq!(anim.progress(), 0.5);
        assert!((anim.value() - 50.0).abs() < 0.01);

        // Complete - should return false when done
        assert!(!anim.update(0.5));
        assert_eq!(anim.value(), 100.0);
        assert_eq!(anim.state(), AnimationState::Completed);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut anim = Animation::new(300.0, 0.0, 0.0);
        assert_eq!(anim.progress(), 1.0);
        assert!(!anim.update(0.0));
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn test_overshooting_tick_lands_on_target() {
        let mut anim = Animation::new(120.0, 300.0, SNAP_DURATION);
        assert!(!anim.update(1.0));
        assert_eq!(anim.value(), 300.0);
        assert!(!anim.update(1.0));
    }
}
