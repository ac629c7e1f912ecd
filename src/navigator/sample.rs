//! Samples concrete OS strings and browser versions.

use rand::seq::SliceRandom;
use rand::Rng;

use super::family::{BrowserFamily, PlatformFamily};
use super::tables::{
    SubPlatform, CHROME_BUILDS, FIREFOX_VERSIONS, LINUX_OS, LINUX_SUBPLATFORMS, MAC_OS,
    MAC_OS_PREFIX, MAC_SUBPLATFORM, WINDOWS_OS, WINDOWS_SUBPLATFORMS,
};

/// Concrete platform strings for one generated navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDetails {
    /// OS part of the User-Agent, e.g. `Windows NT 6.1; WOW64`.
    pub os_string: String,
    /// `navigator.platform`, e.g. `Win32`.
    pub platform_token: String,
    /// `navigator.oscpu`.
    pub oscpu: String,
}

/// Uniform pick from a static table. Every table is asserted non-empty at
/// compile time in `tables.rs`.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    items.choose(rng).expect("lookup tables are non-empty")
}

/// Sample the OS string, platform token and oscpu for `platform`.
pub fn sample_platform_details<R: Rng + ?Sized>(
    platform: PlatformFamily,
    rng: &mut R,
) -> PlatformDetails {
    let details = match platform {
        PlatformFamily::Windows => {
            let sub: &SubPlatform = pick(rng, WINDOWS_SUBPLATFORMS);
            let name = pick(rng, WINDOWS_OS);
            let os_string = if sub.arch.is_empty() {
                (*name).to_string()
            } else {
                format!("{name}; {}", sub.arch)
            };
            // Windows reports the whole platform string as oscpu
            PlatformDetails {
                oscpu: os_string.clone(),
                os_string,
                platform_token: sub.token.to_string(),
            }
        }
        PlatformFamily::Linux => {
            let sub = pick(rng, LINUX_SUBPLATFORMS);
            let name = pick(rng, LINUX_OS);
            PlatformDetails {
                os_string: format!("{name} {}", sub.arch),
                platform_token: sub.token.to_string(),
                oscpu: sub.token.to_string(),
            }
        }
        PlatformFamily::MacOs => {
            let name = *pick(rng, MAC_OS);
            PlatformDetails {
                os_string: name.to_string(),
                platform_token: MAC_SUBPLATFORM.token.to_string(),
                oscpu: name.strip_prefix(MAC_OS_PREFIX).unwrap_or(name).to_string(),
            }
        }
    };

    tracing::trace!(
        %platform,
        os = %details.os_string,
        token = %details.platform_token,
        "sampled platform"
    );
    details
}

/// Sample a version string for `browser`.
pub fn sample_browser_version<R: Rng + ?Sized>(browser: BrowserFamily, rng: &mut R) -> String {
    let version = match browser {
        BrowserFamily::Firefox => (*pick(rng, FIREFOX_VERSIONS)).to_string(),
        BrowserFamily::Chrome => {
            let build = pick(rng, CHROME_BUILDS);
            format!(
                "{}.0.{}.{}",
                build.major,
                rng.gen_range(build.build_low..=build.build_high),
                rng.gen_range(0..=99),
            )
        }
    };
    tracing::trace!(%browser, %version, "sampled version");
    version
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn windows_oscpu_is_full_os_string() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let details = sample_platform_details(PlatformFamily::Windows, &mut rng);
            assert_eq!(details.oscpu, details.os_string);
            assert_eq!(details.platform_token, "Win32");
            assert!(details.os_string.starts_with("Windows NT "));
            assert!(!details.os_string.ends_with("; "));
        }
    }

    #[test]
    fn windows_covers_bare_and_suffixed_forms() {
        let mut rng = StdRng::seed_from_u64(11);
        let samples: Vec<_> = (0..300)
            .map(|_| sample_platform_details(PlatformFamily::Windows, &mut rng).os_string)
            .collect();
        assert!(samples.iter().any(|s| s.ends_with("; Win64; x64")));
        assert!(samples.iter().any(|s| s.ends_with("; WOW64")));
        assert!(samples.iter().any(|s| WINDOWS_OS.contains(&s.as_str())));
    }

    #[test]
    fn linux_oscpu_is_platform_token() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let details = sample_platform_details(PlatformFamily::Linux, &mut rng);
            assert_eq!(details.oscpu, details.platform_token);
            assert!(
                details.os_string.starts_with("X11; Linux ")
                    || details.os_string.starts_with("X11; Ubuntu; Linux ")
            );
            let arch = details.platform_token.trim_start_matches("Linux ");
            assert!(details.os_string.ends_with(arch));
        }
    }

    #[test]
    fn mac_oscpu_strips_prefix() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let details = sample_platform_details(PlatformFamily::MacOs, &mut rng);
            assert_eq!(details.platform_token, "MacIntel");
            assert!(details.oscpu.starts_with("Mac OS X 10."));
            assert_eq!(format!("Macintosh; Intel {}", details.oscpu), details.os_string);
        }
    }

    #[test]
    fn firefox_version_comes_from_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let version = sample_browser_version(BrowserFamily::Firefox, &mut rng);
            assert!(FIREFOX_VERSIONS.contains(&version.as_str()), "{version}");
        }
    }

    #[test]
    fn chrome_version_within_build_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..500 {
            let version = sample_browser_version(BrowserFamily::Chrome, &mut rng);
            let parts: Vec<u32> = version.split('.').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts.len(), 4, "{version}");
            assert_eq!(parts[1], 0);
            let build = CHROME_BUILDS
                .iter()
                .find(|b| b.major == parts[0])
                .expect("major from table");
            assert!((build.build_low..=build.build_high).contains(&parts[2]));
            assert!(parts[3] <= 99);
        }
    }
}
