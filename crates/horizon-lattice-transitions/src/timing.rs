//! Timing specifications.
//!
//! A [`TimingSpec`] tells the animation driver how the progress value of a
//! transition advances over time: either along an easing curve for a fixed
//! duration, or by a spring that runs until it settles.

use std::time::Duration;

use crate::easing::{Easing, ease};

/// Which advance algorithm the animation driver should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingMode {
    /// Fixed-duration advance along an easing curve.
    Timing,
    /// Spring physics, runs until settled.
    Spring,
}

/// Spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// How much the spring overshoots. 0 means no bounce.
    pub bounciness: f32,
    /// How quickly the spring settles.
    pub speed: f32,
}

/// The curve half of a [`TimingSpec`]. The variant is the mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingCurve {
    /// Timing mode with an easing curve.
    Eased(Easing),
    /// Spring mode.
    Spring(SpringParams),
}

/// How an animation progress value evolves over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSpec {
    duration: Duration,
    curve: TimingCurve,
}

impl TimingSpec {
    /// Create a timing-mode spec.
    pub const fn timing(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            curve: TimingCurve::Eased(easing),
        }
    }

    /// Create a spring-mode spec.
    ///
    /// The duration is carried along for drivers that need an upper bound; a
    /// spring itself runs until it settles.
    pub const fn spring(duration_ms: u64, bounciness: f32, speed: f32) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            curve: TimingCurve::Spring(SpringParams { bounciness, speed }),
        }
    }

    /// Get the duration.
    #[inline]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Get the duration in whole milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }

    /// Get the curve.
    #[inline]
    pub const fn curve(&self) -> TimingCurve {
        self.curve
    }

    /// Get the advance mode.
    #[inline]
    pub const fn mode(&self) -> TimingMode {
        match self.curve {
            TimingCurve::Eased(_) => TimingMode::Timing,
            TimingCurve::Spring(_) => TimingMode::Spring,
        }
    }

    /// Get the easing curve, if this is a timing-mode spec.
    pub const fn easing(&self) -> Option<Easing> {
        match self.curve {
            TimingCurve::Eased(easing) => Some(easing),
            TimingCurve::Spring(_) => None,
        }
    }

    /// Get the spring parameters, if this is a spring-mode spec.
    pub const fn spring_params(&self) -> Option<SpringParams> {
        match self.curve {
            TimingCurve::Eased(_) => None,
            TimingCurve::Spring(params) => Some(params),
        }
    }

    /// Eased progress after `elapsed` time.
    ///
    /// Returns `None` for spring-mode specs, whose progress depends on the
    /// driver's physics step.
    pub fn progress_at(&self, elapsed: Duration) -> Option<f32> {
        let TimingCurve::Eased(easing) = self.curve else {
            return None;
        };

        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        Some(ease(easing, raw_progress))
    }
}
