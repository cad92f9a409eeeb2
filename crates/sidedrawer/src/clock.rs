use std::time::{Duration, Instant};

use sidedrawer_core::profiling::profile_function;

/// Frame timing for the drawer's animation ticks.
///
/// Either sampled from the wall clock with [`update`](Self::update) or
/// stepped by a fixed amount with [`advance`](Self::advance) (headless hosts,
/// tests).
///
/// # Example
/// ```
/// use sidedrawer::FrameClock;
/// use std::time::Duration;
///
/// let mut clock = FrameClock::new();
/// clock.advance(Duration::from_millis(16));
/// assert_eq!(clock.frame_count(), 1);
/// assert!((clock.delta_seconds() - 0.016).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Total time elapsed since the clock started
    elapsed: Duration,
    /// Time elapsed since last frame
    delta: Duration,
    frame_count: u64,
    /// Multiplier applied to `delta_seconds` (1.0 = normal, 0.0 = paused)
    time_scale: f32,
    /// Longest frame reported; a stalled host must not skip animations
    max_delta: Duration,
    last_frame_time: Instant,
}

impl FrameClock {
    /// A clock with a 100ms delta cap and normal speed.
    pub fn new() -> Self {
        Self {
            elapsed: Duration::ZERO,
            delta: Duration::ZERO,
            frame_count: 0,
            time_scale: 1.0,
            max_delta: Duration::from_millis(100),
            last_frame_time: Instant::now(),
        }
    }

    /// Sample the wall clock for a new frame.
    pub fn update(&mut self) {
        profile_function!();
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.record(raw_delta);
    }

    /// Step the clock by `delta` without looking at the wall clock.
    pub fn advance(&mut self, delta: Duration) {
        self.last_frame_time = Instant::now();
        self.record(delta);
    }

    fn record(&mut self, raw_delta: Duration) {
        self.delta = raw_delta.min(self.max_delta);
        self.elapsed += self.delta;
        self.frame_count += 1;
    }

    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Scaled delta in seconds, as passed to `DrawerController::update`.
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32() * self.time_scale
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Slow down (< 1.0) or speed up (> 1.0) drawer animations.
    #[inline]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    #[inline]
    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }

    pub fn set_max_delta(&mut self, max_delta: Duration) {
        self.max_delta = max_delta;
    }

    #[inline]
    pub fn pause(&mut self) {
        self.time_scale = 0.0;
    }

    #[inline]
    pub fn resume(&mut self) {
        self.time_scale = 1.0;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
