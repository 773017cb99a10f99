//! Platform identity.
//!
//! The transition selector branches on the platform family because iOS-style
//! and Android-style navigation present screens differently. The platform is
//! passed explicitly so selection stays a pure function; use
//! [`Platform::current`] to get the identity of the running process.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The platform a transition is selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android.
    Android,
    /// iOS and iPadOS.
    Ios,
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Linux and other Unix desktops.
    Linux,
    /// WebAssembly in a browser.
    Web,
    /// Anything else.
    Other,
}

impl Platform {
    /// All known platforms.
    pub const ALL: [Platform; 7] = [
        Platform::Android,
        Platform::Ios,
        Platform::MacOs,
        Platform::Windows,
        Platform::Linux,
        Platform::Web,
        Platform::Other,
    ];

    /// The platform this process was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else {
            Platform::Other
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Web => "web",
            Platform::Other => "other",
        }
    }

    /// Check if this is Android.
    #[inline]
    pub const fn is_android(self) -> bool {
        matches!(self, Platform::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|platform| platform.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::unknown_platform(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for platform in Platform::ALL {
            assert_eq!(platform.name().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert_eq!(" Android ".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("MacOS".parse::<Platform>().unwrap(), Platform::MacOs);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "symbian".parse::<Platform>().unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform { ref name } if name == "symbian"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Platform::Ios.to_string(), "ios");
        assert_eq!(Platform::Android.to_string(), "android");
    }

    #[test]
    fn test_current_is_stable() {
        assert_eq!(Platform::current(), Platform::current());
        #[cfg(target_os = "linux")]
        assert_eq!(Platform::current(), Platform::Linux);
        #[cfg(target_os = "android")]
        assert!(Platform::current().is_android());
    }

    #[test]
    fn test_is_android() {
        assert!(Platform::Android.is_android());
        assert!(!Platform::Ios.is_android());
        assert!(!Platform::Other.is_android());
    }
}
