// SPDX-License-Identifier: MPL-2.0
//! Spring animation parameters and sampling.
//!
//! Entrance and exit share the same spring (duration, damping, initial
//! velocity) and differ only in their [`Curve`]: the entrance runs the
//! spring on linear time so it overshoots and bounces, the exit feeds
//! ease-in time into the spring so it starts slowly and settles.

use crate::domain::DampingRatio;
use std::time::{Duration, Instant};

/// Envelope amplitude left when the animation duration has elapsed.
const SETTLE_THRESHOLD: f32 = 0.001;

/// Easing applied on top of the spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// Plain spring on linear time.
    Spring,
    /// Spring on quadratically eased-in time.
    EaseIn,
}

/// A spring-driven transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub duration: Duration,
    pub damping: DampingRatio,
    /// Initial velocity as a fraction of the total distance per second.
    pub initial_velocity: f32,
    pub curve: Curve,
}

impl Animation {
    /// Creates an animation with the given spring parameters.
    #[must_use]
    pub fn new(
        duration: Duration,
        damping: DampingRatio,
        initial_velocity: f32,
        curve: Curve,
    ) -> Self {
        Self {
            duration,
            damping,
            initial_velocity,
            curve,
        }
    }

    /// Returns the same spring with another curve.
    #[must_use]
    pub fn with_curve(self, curve: Curve) -> Self {
        Self { curve, ..self }
    }

    /// Returns the progress of the animation after `elapsed`.
    ///
    /// The result is `0.0` at the start and exactly `1.0` once `elapsed`
    /// reaches the duration. In between it may overshoot `1.0`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }

        let fraction = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = match self.curve {
            Curve::Spring => fraction,
            Curve::EaseIn => fraction * fraction,
        };

        spring_progress(
            eased * self.duration.as_secs_f32(),
            self.duration.as_secs_f32(),
            self.damping,
            self.initial_velocity,
        )
    }

    /// Returns whether the animation is still running at `elapsed`.
    #[must_use]
    pub fn is_running(&self, elapsed: Duration) -> bool {
        elapsed < self.duration
    }
}

/// Damped oscillator moving from 0 to 1.
///
/// The natural frequency is chosen so that the envelope has decayed to
/// [`SETTLE_THRESHOLD`] at `duration`.
fn spring_progress(t: f32, duration: f32, damping: DampingRatio, velocity: f32) -> f32 {
    let zeta = damping.value();
    let omega = -SETTLE_THRESHOLD.ln() / (zeta * duration);

    // Displacement from target starts at 1 and moves towards it at `velocity`.
    let displacement = if damping.is_critical() {
        (-omega * t).exp() * (1.0 + (omega - velocity) * t)
    } else {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        let b = (zeta * omega - velocity) / omega_d;
        envelope * ((omega_d * t).cos() + b * (omega_d * t).sin())
    };

    1.0 - displacement
}

/// An offset moving between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub from: f32,
    pub to: f32,
    pub started_at: Instant,
    /// `None` for an immediate jump to `to`.
    pub animation: Option<Animation>,
}

impl Track {
    /// A track resting at `value`.
    #[must_use]
    pub fn fixed(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            animation: None,
        }
    }

    /// Returns the interpolated value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        match self.animation {
            None => self.to,
            Some(animation) => {
                let progress = animation.sample(now.saturating_duration_since(self.started_at));
                self.from + (self.to - self.from) * progress
            }
        }
    }

    /// Returns whether the track is still moving at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .is_some_and(|a| a.is_running(now.saturating_duration_since(self.started_at)))
    }

    /// Retargets the track from its current value at `now`.
    #[must_use]
    pub fn retarget(&self, to: f32, now: Instant, animation: Option<Animation>) -> Self {
        Self {
            from: self.value_at(now),
            to,
            started_at: now,
            animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spring(curve: Curve) -> Animation {
        Animation::new(
            Duration::from_millis(500),
            DampingRatio::new(0.7),
            5.0,
            curve,
        )
    }

    #[test]
    fn sample_starts_at_zero() {
        assert!(spring(Curve::Spring).sample(Duration::ZERO).abs() < 1e-6);
        assert!(spring(Curve::EaseIn).sample(Duration::ZERO).abs() < 1e-6);
    }

    #[test]
    fn sample_is_exactly_one_after_duration() {
        let animation = spring(Curve::Spring);
        assert_eq!(animation.sample(Duration::from_millis(500)), 1.0);
        assert_eq!(animation.sample(Duration::from_secs(3)), 1.0);
    }

    #[test]
    fn sample_is_near_target_just_before_duration() {
        let animation = spring(Curve::Spring);
        let late = animation.sample(Duration::from_millis(499));
        assert!((late - 1.0).abs() < 0.01, "late sample was {late}");
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let animation = spring(Curve::Spring);
        let peak = (1..50)
            .map(|ms| animation.sample(Duration::from_millis(ms * 10)))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "peak was {peak}");
    }

    #[test]
    fn ease_in_lags_behind_spring_early_on() {
        let early = Duration::from_millis(100);
        assert!(spring(Curve::EaseIn).sample(early) < spring(Curve::Spring).sample(early));
    }

    #[test]
    fn critical_spring_does_not_overshoot_without_velocity() {
        let animation = Animation::new(
            Duration::from_millis(500),
            DampingRatio::new(1.0),
            0.0,
            Curve::Spring,
        );
        for ms in 0..=50 {
            let value = animation.sample(Duration::from_millis(ms * 10));
            assert!(value <= 1.0 + 1e-6, "value {value} at {ms}0ms");
        }
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let animation = Animation::new(Duration::ZERO, DampingRatio::default(), 0.0, Curve::Spring);
        assert_eq!(animation.sample(Duration::ZERO), 1.0);
        assert!(!animation.is_running(Duration::ZERO));
    }

    #[test]
    fn track_interpolates_and_settles() {
        let start = Instant::now();
        let track = Track {
            from: 100.0,
            to: -16.0,
            started_at: start,
            animation: Some(spring(Curve::Spring)),
        };

        assert!((track.value_at(start) - 100.0).abs() < 1e-3);
        assert!(track.is_animating(start + Duration::from_millis(250)));
        assert_eq!(track.value_at(start + Duration::from_millis(600)), -16.0);
        assert!(!track.is_animating(start + Duration::from_millis(600)));
    }

    #[test]
    fn fixed_track_never_animates() {
        let now = Instant::now();
        let track = Track::fixed(42.0, now);
        assert_eq!(track.value_at(now), 42.0);
        assert!(!track.is_animating(now));
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let start = Instant::now();
        let track = Track::fixed(10.0, start);
        let moved = track.retarget(50.0, start, Some(spring(Curve::EaseIn)));
        assert_eq!(moved.from, 10.0);
        assert_eq!(moved.to, 50.0);
    }
}
