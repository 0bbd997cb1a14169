// SPDX-License-Identifier: MPL-2.0
//! Damped-spring transition between two frames and opacities.
//!
//! One [`Transition`] covers one enter or exit animation. It is sampled
//! against explicit instants, so the coordinator (and its tests) fully
//! control time. The curve is an underdamped spring step response; the
//! frame may overshoot its target slightly before settling, the opacity
//! is clamped to `[0, 1]`.

use std::time::{Duration, Instant};

use iced_core::Rectangle;

/// Fixed length of every enter and exit animation.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Damping ratio of the spring. `1.0` would be critically damped.
const DAMPING: f32 = 0.8;

/// Normalized initial velocity, as a fraction of the total distance per
/// transition duration.
const INITIAL_VELOCITY: f32 = 0.65;

/// Natural angular frequency over the normalized `[0, 1]` time range,
/// chosen so the spring has settled (residual < 0.2%) at the end.
const OMEGA: f32 = 8.0;

/// An in-flight animation of frame and opacity.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: Rectangle,
    to: Rectangle,
    from_opacity: f32,
    to_opacity: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// Starts a transition at `now`.
    #[must_use]
    pub fn new(
        from: Rectangle,
        to: Rectangle,
        from_opacity: f32,
        to_opacity: f32,
        now: Instant,
    ) -> Self {
        Self {
            from,
            to,
            from_opacity,
            to_opacity,
            started_at: now,
            duration: TRANSITION_DURATION,
        }
    }

    /// Samples the animated frame and opacity at `now`.
    ///
    /// Before the start instant this returns the starting values; at or
    /// after `started_at + duration` it returns the exact targets.
    #[must_use]
    pub fn sample(&self, now: Instant) -> (Rectangle, f32) {
        let progress = spring_progress(self.normalized_elapsed(now));
        let frame = lerp_rectangle(self.from, self.to, progress);
        let opacity = lerp(self.from_opacity, self.to_opacity, progress).clamp(0.0, 1.0);
        (frame, opacity)
    }

    /// Whether the transition has reached its end instant.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.normalized_elapsed(now) >= 1.0
    }

    /// The frame and opacity the transition is heading toward.
    #[must_use]
    pub fn target(&self) -> (Rectangle, f32) {
        (self.to, self.to_opacity)
    }

    fn normalized_elapsed(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return 1.0;
        }
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }
}

/// Underdamped spring step response over normalized time.
///
/// `x(0) = 0`, `x'(0) = v0`, settling to `1` at `t = 1`. Values slightly
/// above `1` mid-curve are the spring's overshoot.
fn spring_progress(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let zeta_omega = DAMPING * OMEGA;
    let omega_d = OMEGA * (1.0 - DAMPING * DAMPING).sqrt();
    let envelope = (-zeta_omega * t).exp();
    let phase = (zeta_omega - INITIAL_VELOCITY) / omega_d;

    1.0 - envelope * ((omega_d * t).cos() + phase * (omega_d * t).sin())
}

fn lerp(a: f32, b: f32, progress: f32) -> f32 {
    a + (b - a) * progress
}

fn lerp_rectangle(a: Rectangle, b: Rectangle, progress: f32) -> Rectangle {
    Rectangle {
        x: lerp(a.x, b.x, progress),
        y: lerp(a.y, b.y, progress),
        width: lerp(a.width, b.width, progress),
        height: lerp(a.height, b.height, progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_relative_eq, F32_EPSILON};
    use iced_core::{Point, Size};

    fn rect(x: f32, y: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(280.0, 40.0))
    }

    #[test]
    fn sample_at_start_returns_starting_values() {
        let start = Instant::now();
        let transition = Transition::new(rect(-280.0, 100.0), rect(60.0, 100.0), 0.0, 1.0, start);

        let (frame, opacity) = transition.sample(start);
        assert_relative_eq!(frame.x, -280.0, epsilon = F32_EPSILON);
        assert_relative_eq!(opacity, 0.0, epsilon = F32_EPSILON);
        assert!(!transition.is_complete(start));
    }

    #[test]
    fn sample_at_end_returns_exact_targets() {
        let start = Instant::now();
        let transition = Transition::new(rect(-280.0, 100.0), rect(60.0, 100.0), 0.0, 1.0, start);

        let end = start + TRANSITION_DURATION;
        let (frame, opacity) = transition.sample(end);
        assert_relative_eq!(frame.x, 60.0, epsilon = F32_EPSILON);
        assert_relative_eq!(opacity, 1.0, epsilon = F32_EPSILON);
        assert!(transition.is_complete(end));
    }

    #[test]
    fn sample_past_end_stays_at_targets() {
        let start = Instant::now();
        let transition = Transition::new(rect(0.0, 0.0), rect(100.0, 0.0), 1.0, 0.0, start);

        let late = start + TRANSITION_DURATION * 3;
        let (frame, opacity) = transition.sample(late);
        assert_relative_eq!(frame.x, 100.0, epsilon = F32_EPSILON);
        assert_relative_eq!(opacity, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn midway_sample_is_between_endpoints() {
        let start = Instant::now();
        let transition = Transition::new(rect(0.0, 0.0), rect(100.0, 0.0), 0.0, 1.0, start);

        let (frame, opacity) = transition.sample(start + TRANSITION_DURATION / 2);
        assert!(frame.x > 0.0);
        // The spring may overshoot the frame, but never below the start.
        assert!(opacity > 0.0 && opacity <= 1.0);
    }

    #[test]
    fn spring_curve_is_anchored_and_bounded() {
        assert_relative_eq!(spring_progress(0.0), 0.0, epsilon = F32_EPSILON);
        assert_relative_eq!(spring_progress(1.0), 1.0, epsilon = F32_EPSILON);

        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let x = spring_progress(t);
            assert!(x >= -F32_EPSILON, "progress dipped below zero at t={t}");
            assert!(x < 1.3, "progress overshot unreasonably at t={t}");
        }
    }

    #[test]
    fn spring_is_past_halfway_by_mid_transition() {
        assert!(spring_progress(0.5) > 0.5);
    }

    #[test]
    fn opacity_is_clamped_despite_overshoot() {
        let start = Instant::now();
        let transition = Transition::new(rect(0.0, 0.0), rect(100.0, 0.0), 0.0, 1.0, start);

        for i in 0..=30u32 {
            let at = start + TRANSITION_DURATION * i / 30;
            let (_, opacity) = transition.sample(at);
            assert!((0.0..=1.0).contains(&opacity));
        }
    }
}
