//! Screen stack transitions for Horizon Lattice.
//!
//! This crate decides *which* transition a screen stack plays when it moves
//! from one screen to another:
//!
//! - **Catalog**: the built-in transitions (iOS push, iOS modal, Android
//!   enter, Android exit) and the default timing spec
//! - **Selector**: [`default_transition_config`], a pure function from
//!   platform, navigation states and modality to a catalog entry
//! - **Timing**: [`TimingSpec`] and [`Easing`], the parameters handed to the
//!   animation driver
//! - **Overrides**: [`TransitionOverrides`], application-supplied
//!   replacements merged over the selected entry
//!
//! Running the animation and computing screen styles belong to the renderer.
//! A config only names its style interpolator; the renderer implements
//! [`ScreenInterpolators`].
//!
//! # Example
//!
//! ```
//! use horizon_lattice_transitions::{
//!     default_transition_config, NavigationState, Platform, StyleInterpolator, TimingMode,
//! };
//!
//! let config = default_transition_config(
//!     Platform::Ios,
//!     &NavigationState::new(1),
//!     Some(&NavigationState::new(0)),
//!     false,
//! );
//!
//! assert_eq!(config.style_interpolator(), Some(StyleInterpolator::Horizontal));
//! // No timing of its own, so the default spring applies
//! assert_eq!(config.timing_spec_or_default().mode(), TimingMode::Spring);
//! ```
//!
//! # Logging
//!
//! Selection is traced with the `tracing` crate under [`targets::SELECT`];
//! override loading logs under [`targets::OVERRIDES`].

mod catalog;
mod easing;
pub mod error;
mod interpolator;
mod overrides;
mod platform;
mod selector;
mod timing;

pub use catalog::{
    DEFAULT_TIMING_SPEC, FADE_IN_FROM_BOTTOM_ANDROID, FADE_OUT_TO_BOTTOM_ANDROID,
    MODAL_SLIDE_FROM_BOTTOM_IOS, SLIDE_FROM_RIGHT_IOS, TransitionConfig,
};
pub use easing::{Curve, Easing, ease, lerp_eased};
pub use error::{Error, Result};
pub use interpolator::{ScreenInterpolators, StyleInterpolator};
pub use overrides::TransitionOverrides;
pub use platform::Platform;
pub use selector::{Direction, NavigationState, StackIndex, default_transition_config};
pub use timing::{SpringParams, TimingCurve, TimingMode, TimingSpec};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Transition selection.
    pub const SELECT: &str = "horizon_lattice_transitions::select";
    /// Override loading and validation.
    pub const OVERRIDES: &str = "horizon_lattice_transitions::overrides";
}
