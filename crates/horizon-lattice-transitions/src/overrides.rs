//! User overrides for the selected transition.
//!
//! An application can replace parts of the default transition: the fields it
//! sets win over the selected catalog entry (see
//! [`TransitionConfig::merged`](crate::TransitionConfig::merged)). Overrides
//! are built in code or loaded from TOML:
//!
//! ```toml
//! style_interpolator = "vertical"
//!
//! [timing]
//! mode = "timing"
//! duration_ms = 300
//! easing = { out = { poly = 3 } }
//! ```
//!
//! A spring is written as `mode = "spring"` with `bounciness` and `speed`;
//! its `duration_ms` defaults to the default timing spec's.

use std::path::Path;

use serde::Deserialize;

use crate::catalog::DEFAULT_TIMING_SPEC;
use crate::easing::{Curve, Easing};
use crate::error::{Error, Result};
use crate::interpolator::StyleInterpolator;
use crate::targets;
use crate::timing::TimingSpec;

/// Partial transition config whose present fields replace the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionOverrides {
    /// Replacement timing spec.
    pub timing_spec: Option<TimingSpec>,
    /// Replacement style interpolator.
    pub style_interpolator: Option<StyleInterpolator>,
}

impl TransitionOverrides {
    /// Set the replacement timing spec.
    pub fn with_timing_spec(mut self, timing_spec: TimingSpec) -> Self {
        self.timing_spec = Some(timing_spec);
        self
    }

    /// Set the replacement style interpolator.
    pub fn with_style_interpolator(mut self, style_interpolator: StyleInterpolator) -> Self {
        self.style_interpolator = Some(style_interpolator);
        self
    }

    /// Check if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.timing_spec.is_none() && self.style_interpolator.is_none()
    }

    /// Parse overrides from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawOverrides = toml::from_str(source)?;
        let overrides = raw.validate()?;
        tracing::debug!(
            target: targets::OVERRIDES,
            timing = ?overrides.timing_spec,
            style_interpolator = ?overrides.style_interpolator,
            "loaded transition overrides"
        );
        Ok(overrides)
    }

    /// Read overrides from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOverrides {
    style_interpolator: Option<StyleInterpolator>,
    timing: Option<RawTiming>,
}

// Each mode has its own field set; keys from the other mode are rejected.
#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum RawTiming {
    Timing(RawEased),
    Spring(RawSpring),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEased {
    duration_ms: u64,
    #[serde(default)]
    easing: Easing,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpring {
    #[serde(default = "default_spring_duration_ms")]
    duration_ms: u64,
    bounciness: f32,
    speed: f32,
}

fn default_spring_duration_ms() -> u64 {
    DEFAULT_TIMING_SPEC.duration_ms()
}

impl RawOverrides {
    fn validate(self) -> Result<TransitionOverrides> {
        let timing_spec = self.timing.map(RawTiming::validate).transpose()?;
        Ok(TransitionOverrides {
            timing_spec,
            style_interpolator: self.style_interpolator,
        })
    }
}

impl RawTiming {
    fn validate(self) -> Result<TimingSpec> {
        match self {
            RawTiming::Timing(RawEased {
                duration_ms,
                easing,
            }) => {
                if let Curve::Poly(order) = easing.curve() {
                    if order == 0 || order > Curve::MAX_POLY_ORDER {
                        return Err(rejected(
                            "timing.easing",
                            format!(
                                "polynomial order must be between 1 and {}, got {order}",
                                Curve::MAX_POLY_ORDER
                            ),
                        ));
                    }
                }
                Ok(TimingSpec::timing(duration_ms, easing))
            }
            RawTiming::Spring(RawSpring {
                duration_ms,
                bounciness,
                speed,
            }) => {
                if !bounciness.is_finite() || bounciness < 0.0 {
                    return Err(rejected(
                        "timing.bounciness",
                        format!("expected a non-negative number, got {bounciness}"),
                    ));
                }
                if !speed.is_finite() || speed <= 0.0 {
                    return Err(rejected(
                        "timing.speed",
                        format!("expected a positive number, got {speed}"),
                    ));
                }
                Ok(TimingSpec::spring(duration_ms, bounciness, speed))
            }
        }
    }
}

fn rejected(field: &str, message: impl Into<String>) -> Error {
    let err = Error::invalid_value(field, message);
    tracing::warn!(target: targets::OVERRIDES, "{err}");
    err
}
