//! Platform and browser families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavigatorError;

/// Broad operating system category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlatformFamily {
    #[serde(rename = "win")]
    Windows,
    #[serde(rename = "mac")]
    MacOs,
    #[serde(rename = "linux")]
    Linux,
}

impl PlatformFamily {
    /// Every declared platform, in declaration order.
    pub const ALL: [PlatformFamily; 3] = [
        PlatformFamily::Windows,
        PlatformFamily::MacOs,
        PlatformFamily::Linux,
    ];

    /// Canonical short name as it appears in navigator records.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformFamily::Windows => "win",
            PlatformFamily::MacOs => "mac",
            PlatformFamily::Linux => "linux",
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformFamily {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" | "windows" => Ok(PlatformFamily::Windows),
            "mac" | "macos" | "osx" => Ok(PlatformFamily::MacOs),
            "linux" => Ok(PlatformFamily::Linux),
            _ => Err(NavigatorError::InvalidArgument(format!(
                "Option platform has invalid value: {s}"
            ))),
        }
    }
}

/// Browser engine lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserFamily {
    Firefox,
    Chrome,
}

impl BrowserFamily {
    /// Every declared browser, in declaration order.
    pub const ALL: [BrowserFamily; 2] = [BrowserFamily::Firefox, BrowserFamily::Chrome];

    pub fn as_str(self) -> &'static str {
        match self {
            BrowserFamily::Firefox => "firefox",
            BrowserFamily::Chrome => "chrome",
        }
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserFamily {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "firefox" | "ff" => Ok(BrowserFamily::Firefox),
            "chrome" | "chromium" => Ok(BrowserFamily::Chrome),
            _ => Err(NavigatorError::InvalidArgument(format!(
                "Option navigator has invalid value: {s}"
            ))),
        }
    }
}

/// Families that can be enumerated and parsed, i.e. valid filter targets.
pub trait Family: Copy + Eq + fmt::Display + FromStr<Err = NavigatorError> + 'static {
    /// Every member of the family, in declaration order.
    fn all() -> &'static [Self];
}

impl Family for PlatformFamily {
    fn all() -> &'static [Self] {
        &Self::ALL
    }
}

impl Family for BrowserFamily {
    fn all() -> &'static [Self] {
        &Self::ALL
    }
}
