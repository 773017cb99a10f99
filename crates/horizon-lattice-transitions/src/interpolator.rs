//! Style interpolator references.
//!
//! A style interpolator maps a transition's progress value plus scene geometry
//! to concrete visual properties of a screen. The interpolators themselves
//! live with the renderer; a [`TransitionConfig`](crate::TransitionConfig)
//! only names which one to use, and [`StyleInterpolator::interpolate`]
//! dispatches that name to the renderer's [`ScreenInterpolators`].

use serde::{Deserialize, Serialize};

/// Names a screen style interpolator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleInterpolator {
    /// Card slides in horizontally from the trailing edge.
    Horizontal,
    /// Card slides up from the bottom edge.
    Vertical,
    /// Screen fades in while rising slightly from the bottom.
    FadeFromBottomAndroid,
}

impl StyleInterpolator {
    /// The capability key the renderer registers this interpolator under.
    pub const fn key(self) -> &'static str {
        match self {
            StyleInterpolator::Horizontal => "forHorizontal",
            StyleInterpolator::Vertical => "forVertical",
            StyleInterpolator::FadeFromBottomAndroid => "forFadeFromBottomAndroid",
        }
    }

    /// Run the named interpolator from `interpolators` on `props`.
    pub fn interpolate<I>(self, interpolators: &I, props: &I::SceneProps) -> I::Style
    where
        I: ScreenInterpolators + ?Sized,
    {
        match self {
            StyleInterpolator::Horizontal => interpolators.for_horizontal(props),
            StyleInterpolator::Vertical => interpolators.for_vertical(props),
            StyleInterpolator::FadeFromBottomAndroid => {
                interpolators.for_fade_from_bottom_android(props)
            }
        }
    }
}

/// The renderer-owned implementations of the catalog's style interpolators.
pub trait ScreenInterpolators {
    /// Progress value and scene geometry handed to an interpolator.
    type SceneProps;
    /// Visual properties produced for the screen.
    type Style;

    /// Horizontal card slide.
    fn for_horizontal(&self, props: &Self::SceneProps) -> Self::Style;

    /// Vertical card slide.
    fn for_vertical(&self, props: &Self::SceneProps) -> Self::Style;

    /// Fade in from the bottom.
    fn for_fade_from_bottom_android(&self, props: &Self::SceneProps) -> Self::Style;
}
