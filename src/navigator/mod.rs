//! Navigator Generation
//!
//! Generates random, internally consistent browser navigator configs and
//! matching User-Agent headers.
//!
//! Header layouts follow:
//! - <https://developer.mozilla.org/en-US/docs/Web/HTTP/Gecko_user_agent_string_reference>
//! - <https://developer.chrome.com/multidevice/user-agent>

pub mod compat;
pub mod family;
pub mod filter;
pub mod render;
pub mod resolve;
pub mod sample;
pub mod tables;


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub use compat::CompatibilityMatrix;
pub use family::{BrowserFamily, Family, PlatformFamily};
pub use filter::Filter;
pub use render::render;
pub use resolve::resolve;
pub use sample::{sample_browser_version, sample_platform_details, PlatformDetails};

use crate::error::Result;

/// Generated navigator config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorRecord {
    /// Browser family, `firefox` or `chrome`
    pub name: BrowserFamily,
    pub version: String,
    /// Platform family, `win`, `mac` or `linux`
    pub os: PlatformFamily,
    /// `navigator.platform`
    pub platform: String,
    /// `navigator.oscpu`
    pub oscpu: String,
    pub user_agent: String,
    /// `navigator.appVersion` prefix
    pub appversion: String,
}

/// Generate a navigator config using `rng` for every random draw.
pub fn generate_navigator_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    platform: &Filter<PlatformFamily>,
    browser: &Filter<BrowserFamily>,
) -> Result<NavigatorRecord> {
    let (os, name) = resolve(platform, browser, rng)?;
    let details = sample_platform_details(os, rng);
    let version = sample_browser_version(name, rng);
    let user_agent = render(name, &details.os_string, &version);

    Ok(NavigatorRecord {
        name,
        version,
        os,
        platform: details.platform_token,
        oscpu: details.oscpu,
        user_agent,
        appversion: tables::APP_VERSION.to_string(),
    })
}

/// Generate a navigator config.
///
/// ```
/// use navgen::{generate_navigator, BrowserFamily, PlatformFamily};
///
/// let nav = generate_navigator(PlatformFamily::Linux, BrowserFamily::Firefox).unwrap();
/// assert_eq!(nav.os, PlatformFamily::Linux);
/// assert!(nav.user_agent.contains("Firefox/"));
/// ```
pub fn generate_navigator(
    platform: impl Into<Filter<PlatformFamily>>,
    browser: impl Into<Filter<BrowserFamily>>,
) -> Result<NavigatorRecord> {
    generate_navigator_with_rng(&mut rand::thread_rng(), &platform.into(), &browser.into())
}

/// Generate only the User-Agent header, using `rng` for every random draw.
pub fn generate_user_agent_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    platform: &Filter<PlatformFamily>,
    browser: &Filter<BrowserFamily>,
) -> Result<String> {
    generate_navigator_with_rng(rng, platform, browser).map(|nav| nav.user_agent)
}

/// Generate a User-Agent header.
pub fn generate_user_agent(
    platform: impl Into<Filter<PlatformFamily>>,
    browser: impl Into<Filter<BrowserFamily>>,
) -> Result<String> {
    generate_navigator(platform, browser).map(|nav| nav.user_agent)
}

/// Navigator generator owning its random source.
///
/// Seeded generators produce the same sequence of records on every run.
pub struct NavigatorGenerator<R = StdRng> {
    rng: R,
}

impl NavigatorGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed (for reproducibility)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for NavigatorGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> NavigatorGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn navigator(
        &mut self,
        platform: &Filter<PlatformFamily>,
        browser: &Filter<BrowserFamily>,
    ) -> Result<NavigatorRecord> {
        generate_navigator_with_rng(&mut self.rng, platform, browser)
    }

    pub fn user_agent(
        &mut self,
        platform: &Filter<PlatformFamily>,
        browser: &Filter<BrowserFamily>,
    ) -> Result<String> {
        generate_user_agent_with_rng(&mut self.rng, platform, browser)
    }
}
