//! Easing curves for timed transitions.
//!
//! An easing maps a linear progress value (0.0 to 1.0) to a transformed value.
//! Curves are described as a base [`Curve`] (the ease-in shape) combined with
//! a direction: [`Easing::In`] uses the base as-is, [`Easing::Out`] mirrors it
//! so the animation decelerates, and [`Easing::InOut`] joins both halves.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Base shape of an easing curve, expressed as its ease-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic, `t^2`.
    Quad,
    /// Cubic, `t^3`.
    Cubic,
    /// Polynomial of arbitrary order, `t^n`.
    Poly(u32),
    /// Sinusoidal.
    Sine,
}

impl Curve {
    /// Highest polynomial order accepted from configuration.
    pub const MAX_POLY_ORDER: u32 = 64;

    /// Evaluate the ease-in form of this curve at `t`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Curve::Linear => t,
            Curve::Quad => t * t,
            Curve::Cubic => t * t * t,
            Curve::Poly(n) => t.powi(i32::try_from(n).unwrap_or(i32::MAX)),
            Curve::Sine => 1.0 - ((t * PI) / 2.0).cos(),
        }
    }
}

/// A directed easing curve.
///
/// ```
/// use horizon_lattice_transitions::{ease, Curve, Easing};
///
/// // Decelerate: fast at the start, slow at the end
/// assert!(ease(Easing::Out(Curve::Poly(5)), 0.5) > 0.5);
///
/// // Accelerate: slow at the start
/// assert!(ease(Easing::In(Curve::Poly(4)), 0.5) < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Starts slow, accelerates.
    In(Curve),
    /// Starts fast, decelerates.
    Out(Curve),
    /// Slow at both ends.
    InOut(Curve),
}

impl Easing {
    /// No easing.
    pub const LINEAR: Easing = Easing::In(Curve::Linear);

    /// The base curve this easing is built from.
    #[inline]
    pub const fn curve(self) -> Curve {
        match self {
            Easing::In(curve) | Easing::Out(curve) | Easing::InOut(curve) => curve,
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Returns
///
/// The eased value, typically in the range 0.0 to 1.0.
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::In(curve) => curve.apply(t),
        Easing::Out(curve) => 1.0 - curve.apply(1.0 - t),
        Easing::InOut(curve) => {
            if t < 0.5 {
                curve.apply(t * 2.0) / 2.0
            } else {
                1.0 - curve.apply((1.0 - t) * 2.0) / 2.0
            }
        }
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}
