//! The built-in transition catalog.
//!
//! Every entry is a `static`, so selecting one hands out a reference to the
//! same object for the lifetime of the process.

use std::borrow::Cow;

use crate::easing::{Curve, Easing};
use crate::interpolator::StyleInterpolator;
use crate::overrides::TransitionOverrides;
use crate::timing::TimingSpec;

/// Describes a visual transition from one screen to another.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionConfig {
    name: &'static str,
    /// Basic properties of the animation, such as duration and easing.
    timing_spec: Option<TimingSpec>,
    /// How to animate position and opacity of the screen from the progress
    /// value the timing spec produces.
    style_interpolator: Option<StyleInterpolator>,
}

impl TransitionConfig {
    /// Create a transition config.
    pub const fn new(
        name: &'static str,
        timing_spec: Option<TimingSpec>,
        style_interpolator: Option<StyleInterpolator>,
    ) -> Self {
        Self {
            name,
            timing_spec,
            style_interpolator,
        }
    }

    /// Get the config name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the timing spec, if this config sets its own.
    #[inline]
    pub const fn timing_spec(&self) -> Option<&TimingSpec> {
        self.timing_spec.as_ref()
    }

    /// Get the timing spec the driver should run: this config's own, or
    /// [`DEFAULT_TIMING_SPEC`].
    pub fn timing_spec_or_default(&self) -> &TimingSpec {
        self.timing_spec.as_ref().unwrap_or(&DEFAULT_TIMING_SPEC)
    }

    /// Get the style interpolator. `None` means the screen snaps into place.
    #[inline]
    pub const fn style_interpolator(&self) -> Option<StyleInterpolator> {
        self.style_interpolator
    }

    /// Apply user overrides on top of this config.
    ///
    /// Fields present in `overrides` win. Returns the catalog entry itself
    /// when there is nothing to override.
    pub fn merged(&'static self, overrides: &TransitionOverrides) -> Cow<'static, TransitionConfig> {
        if overrides.is_empty() {
            return Cow::Borrowed(self);
        }

        Cow::Owned(TransitionConfig {
            name: self.name,
            timing_spec: overrides.timing_spec.or(self.timing_spec),
            style_interpolator: overrides.style_interpolator.or(self.style_interpolator),
        })
    }
}

static_assertions::assert_impl_all!(TransitionConfig: Send, Sync);

/// Used for all animations unless overridden. Mimics iOS navigation.
pub static DEFAULT_TIMING_SPEC: TimingSpec = TimingSpec::spring(250, 0.0, 9.0);

/// Standard iOS navigation transition.
pub static SLIDE_FROM_RIGHT_IOS: TransitionConfig = TransitionConfig::new(
    "SlideFromRightIOS",
    None,
    Some(StyleInterpolator::Horizontal),
);

/// Standard iOS navigation transition for modals.
pub static MODAL_SLIDE_FROM_BOTTOM_IOS: TransitionConfig = TransitionConfig::new(
    "ModalSlideFromBottomIOS",
    None,
    Some(StyleInterpolator::Vertical),
);

/// Standard Android transition when opening an activity.
///
/// Matches the platform's `activity_open_enter` animation.
pub static FADE_IN_FROM_BOTTOM_ANDROID: TransitionConfig = TransitionConfig::new(
    "FadeInFromBottomAndroid",
    // decelerate
    Some(TimingSpec::timing(350, Easing::Out(Curve::Poly(5)))),
    Some(StyleInterpolator::FadeFromBottomAndroid),
);

/// Standard Android transition when closing an activity.
///
/// Matches the platform's `activity_close_exit` animation.
pub static FADE_OUT_TO_BOTTOM_ANDROID: TransitionConfig = TransitionConfig::new(
    "FadeOutToBottomAndroid",
    // accelerate
    Some(TimingSpec::timing(230, Easing::In(Curve::Poly(4)))),
    Some(StyleInterpolator::FadeFromBottomAndroid),
);
