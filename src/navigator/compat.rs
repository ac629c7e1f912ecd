//! Which browsers run on which platforms.
//!
//! Both lookup directions are derived from [`SUPPORTED_PAIRS`] and
//! cross-checked when the matrix is built.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::family::{BrowserFamily, PlatformFamily};
use crate::error::{NavigatorError, Result};

/// Every supported (platform, browser) combination.
pub const SUPPORTED_PAIRS: &[(PlatformFamily, BrowserFamily)] = &[
    (PlatformFamily::Windows, BrowserFamily::Chrome),
    (PlatformFamily::Windows, BrowserFamily::Firefox),
    (PlatformFamily::MacOs, BrowserFamily::Firefox),
    (PlatformFamily::Linux, BrowserFamily::Chrome),
    (PlatformFamily::Linux, BrowserFamily::Firefox),
];

static MATRIX: LazyLock<Result<CompatibilityMatrix>> = LazyLock::new(|| {
    let matrix = CompatibilityMatrix::from_pairs(SUPPORTED_PAIRS);
    matrix.validate().inspect_err(|e| {
        tracing::error!(error = %e, "compatibility tables out of sync");
    })?;
    Ok(matrix)
});

/// Bidirectional compatibility lookup.
#[derive(Debug, Clone)]
pub struct CompatibilityMatrix {
    platform_browsers: BTreeMap<PlatformFamily, Vec<BrowserFamily>>,
    browser_platforms: BTreeMap<BrowserFamily, Vec<PlatformFamily>>,
}

impl CompatibilityMatrix {
    /// The process-wide matrix built from [`SUPPORTED_PAIRS`].
    pub fn global() -> Result<&'static CompatibilityMatrix> {
        MATRIX.as_ref().map_err(Clone::clone)
    }

    pub fn from_pairs(pairs: &[(PlatformFamily, BrowserFamily)]) -> Self {
        let mut platform_browsers: BTreeMap<PlatformFamily, Vec<BrowserFamily>> = BTreeMap::new();
        let mut browser_platforms: BTreeMap<BrowserFamily, Vec<PlatformFamily>> = BTreeMap::new();

        for &(platform, browser) in pairs {
            let browsers = platform_browsers.entry(platform).or_default();
            if !browsers.contains(&browser) {
                browsers.push(browser);
            }
            let platforms = browser_platforms.entry(browser).or_default();
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }

        Self {
            platform_browsers,
            browser_platforms,
        }
    }

    /// Browsers available on `platform`.
    pub fn browsers_for(&self, platform: PlatformFamily) -> &[BrowserFamily] {
        self.platform_browsers
            .get(&platform)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Platforms supported by `browser`.
    pub fn platforms_for(&self, browser: BrowserFamily) -> &[PlatformFamily] {
        self.browser_platforms
            .get(&browser)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn supports(&self, platform: PlatformFamily, browser: BrowserFamily) -> bool {
        self.browsers_for(platform).contains(&browser)
    }

    /// Check that both directions agree and that no family is left without
    /// a partner.
    pub fn validate(&self) -> Result<()> {
        for (&browser, platforms) in &self.browser_platforms {
            for &platform in platforms {
                if !self.browsers_for(platform).contains(&browser) {
                    return Err(NavigatorError::InconsistentTables(format!(
                        "{browser} lists {platform} but {platform} does not list {browser}"
                    )));
                }
            }
        }
        for (&platform, browsers) in &self.platform_browsers {
            for &browser in browsers {
                if !self.platforms_for(browser).contains(&platform) {
                    return Err(NavigatorError::InconsistentTables(format!(
                        "{platform} lists {browser} but {browser} does not list {platform}"
                    )));
                }
            }
        }
        if let Some(platform) = PlatformFamily::ALL
            .iter()
            .find(|p| self.browsers_for(**p).is_empty())
        {
            return Err(NavigatorError::InconsistentTables(format!(
                "platform {platform} has no browsers"
            )));
        }
        if let Some(browser) = BrowserFamily::ALL
            .iter()
            .find(|b| self.platforms_for(**b).is_empty())
        {
            return Err(NavigatorError::InconsistentTables(format!(
                "browser {browser} has no platforms"
            )));
        }
        Ok(())
    }
}
