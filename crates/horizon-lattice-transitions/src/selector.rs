//! Picks the transition for a navigation change.
//!
//! Android transitions depend on the direction of travel and ignore
//! modality: the platform has no full-screen modals, only dialogs. iOS and
//! every other platform branch on modality alone.

use crate::catalog::{
    FADE_IN_FROM_BOTTOM_ANDROID, FADE_OUT_TO_BOTTOM_ANDROID, MODAL_SLIDE_FROM_BOTTOM_IOS,
    SLIDE_FROM_RIGHT_IOS, TransitionConfig,
};
use crate::platform::Platform;
use crate::targets;

/// Anything with a position in the screen stack.
pub trait StackIndex {
    /// Index of the active screen.
    fn index(&self) -> usize;
}

impl StackIndex for usize {
    #[inline]
    fn index(&self) -> usize {
        *self
    }
}

/// Snapshot of the navigation state on one side of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Index of the active screen in the stack.
    pub index: usize,
}

impl NavigationState {
    /// Create a state with the given active index.
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl StackIndex for NavigationState {
    #[inline]
    fn index(&self) -> usize {
        self.index
    }
}

/// Direction of travel through the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Pushing, or staying at the same index.
    Forward,
    /// Popping back to a lower index.
    Backward,
}

impl Direction {
    /// Infer the direction from the new and previous states.
    ///
    /// Equal indices count as forward.
    pub fn between<S>(new_state: &S, previous_state: &S) -> Self
    where
        S: StackIndex + ?Sized,
    {
        if new_state.index() < previous_state.index() {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// Select the default transition for a navigation change.
///
/// # Arguments
///
/// * `platform` - The platform to select for, usually [`Platform::current`]
/// * `new_state` - State of the incoming screen
/// * `previous_state` - State of the outgoing screen, `None` for the first
///   screen on the stack
/// * `is_modal` - Whether the incoming screen is presented as a modal
///
/// # Returns
///
/// One of the catalog's static configs. The same inputs always return the
/// same reference.
///
/// # Example
///
/// ```
/// use horizon_lattice_transitions::{
///     default_transition_config, NavigationState, Platform, FADE_OUT_TO_BOTTOM_ANDROID,
/// };
///
/// let config = default_transition_config(
///     Platform::Android,
///     &NavigationState::new(1),
///     Some(&NavigationState::new(2)),
///     false,
/// );
/// assert!(std::ptr::eq(config, &FADE_OUT_TO_BOTTOM_ANDROID));
/// ```
pub fn default_transition_config<S>(
    platform: Platform,
    new_state: &S,
    previous_state: Option<&S>,
    is_modal: bool,
) -> &'static TransitionConfig
where
    S: StackIndex + ?Sized,
{
    let direction = previous_state.map(|previous| Direction::between(new_state, previous));

    // First matching row wins.
    let config = match (platform, direction, is_modal) {
        (Platform::Android, None, _) => &FADE_IN_FROM_BOTTOM_ANDROID,
        (Platform::Android, Some(Direction::Backward), _) => &FADE_OUT_TO_BOTTOM_ANDROID,
        (Platform::Android, Some(Direction::Forward), _) => &FADE_IN_FROM_BOTTOM_ANDROID,
        (_, _, true) => &MODAL_SLIDE_FROM_BOTTOM_IOS,
        (_, _, false) => &SLIDE_FROM_RIGHT_IOS,
    };

    tracing::trace!(
        target: targets::SELECT,
        %platform,
        ?direction,
        is_modal,
        config = config.name(),
        "selected transition"
    );

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(
        platform: Platform,
        new_index: usize,
        previous_index: Option<usize>,
        is_modal: bool,
    ) -> &'static TransitionConfig {
        default_transition_config(
            platform,
            &NavigationState::new(new_index),
            previous_index.map(NavigationState::new).as_ref(),
            is_modal,
        )
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(&1usize, &2usize), Direction::Backward);
        assert_eq!(Direction::between(&2usize, &1usize), Direction::Forward);
        assert_eq!(Direction::between(&3usize, &3usize), Direction::Forward);
    }

    #[test]
    fn test_android_first_screen() {
        for is_modal in [false, true] {
            let config = select(Platform::Android, 0, None, is_modal);
            assert!(std::ptr::eq(config, &FADE_IN_FROM_BOTTOM_ANDROID));
        }
    }

    #[test]
    fn test_android_back() {
        let config = select(Platform::Android, 1, Some(2), false);
        assert!(std::ptr::eq(config, &FADE_OUT_TO_BOTTOM_ANDROID));
    }

    #[test]
    fn test_android_forward() {
        let config = select(Platform::Android, 2, Some(1), false);
        assert!(std::ptr::eq(config, &FADE_IN_FROM_BOTTOM_ANDROID));
    }

    #[test]
    fn test_android_equal_index_is_forward() {
        let config = select(Platform::Android, 1, Some(1), false);
        assert!(std::ptr::eq(config, &FADE_IN_FROM_BOTTOM_ANDROID));
    }

    #[test]
    fn test_android_ignores_modal() {
        assert!(std::ptr::eq(
            select(Platform::Android, 1, Some(2), true),
            &FADE_OUT_TO_BOTTOM_ANDROID
        ));
        assert!(std::ptr::eq(
            select(Platform::Android, 2, Some(1), true),
            &FADE_IN_FROM_BOTTOM_ANDROID
        ));
    }

    #[test]
    fn test_ios_modal() {
        for previous in [None, Some(0), Some(5)] {
            let config = select(Platform::Ios, 1, previous, true);
            assert!(std::ptr::eq(config, &MODAL_SLIDE_FROM_BOTTOM_IOS));
        }
    }

    #[test]
    fn test_ios_push_and_pop() {
        for previous in [None, Some(0), Some(5)] {
            let config = select(Platform::Ios, 1, previous, false);
            assert!(std::ptr::eq(config, &SLIDE_FROM_RIGHT_IOS));
        }
    }

    #[test]
    fn test_other_platforms_use_ios_branch() {
        for platform in Platform::ALL.into_iter().filter(|p| !p.is_android()) {
            assert!(std::ptr::eq(
                select(platform, 0, Some(1), true),
                &MODAL_SLIDE_FROM_BOTTOM_IOS
            ));
            assert!(std::ptr::eq(
                select(platform, 0, Some(1), false),
                &SLIDE_FROM_RIGHT_IOS
            ));
        }
    }

    #[test]
    fn test_plain_indices() {
        let config = default_transition_config(Platform::Android, &0usize, Some(&3usize), false);
        assert!(std::ptr::eq(config, &FADE_OUT_TO_BOTTOM_ANDROID));
    }
}
