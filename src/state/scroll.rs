//! Smooth content scrolling state
//!
//! Scroll offsets ease toward their target instead of jumping, updated on
//! the event loop tick with the caller's clock so the animation stays
//! deterministic under test.

use std::time::{Duration, Instant};

/// Eased scroll position for a section's content area
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    current: f32,
    start: f32,
    target: f32,
    animation_start: Option<Instant>,
}

impl ScrollState {
    /// Duration of the glide toward the target offset
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    pub fn new() -> Self {
        Self::default()
    }

    /// Offset to render at, rounded to whole rows
    pub fn offset(&self) -> u16 {
        self.current.round().max(0.0) as u16
    }

    /// Offset the animation is heading toward
    #[allow(dead_code)]
    pub fn target(&self) -> u16 {
        self.target.round().max(0.0) as u16
    }

    /// Begin gliding toward an absolute offset
    pub fn scroll_to(&mut self, target: u16, now: Instant) {
        self.start = self.current;
        self.target = target as f32;
        self.animation_start = Some(now);
    }

    /// Begin gliding by a relative number of rows, clamped to `[0, max]`
    pub fn scroll_by(&mut self, delta: i32, max: u16, now: Instant) {
        let next = (self.target as i32 + delta).clamp(0, max as i32) as u16;
        self.scroll_to(next, now);
    }

    /// Advance the animation
    pub fn update(&mut self, now: Instant) {
        let Some(started) = self.animation_start else {
            return;
        };

        let elapsed = now.saturating_duration_since(started);
        let progress =
            (elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        let eased = simple_easing::cubic_out(progress);
        self.current = self.start + (self.target - self.start) * eased;

        if progress >= 1.0 {
            self.current = self.target;
            self.animation_start = None;
        }
    }

    /// Whether a glide is still in progress (drives the faster poll rate)
    pub fn is_animating(&self) -> bool {
        self.animation_start.is_some()
    }
}
