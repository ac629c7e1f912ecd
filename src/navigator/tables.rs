//! Static lookup tables.
//!
//! Release history:
//! - <https://en.wikipedia.org/wiki/Firefox_release_history>
//! - <https://en.wikipedia.org/wiki/Google_Chrome_release_history>

/// Windows NT version strings
pub const WINDOWS_OS: &[&str] = &[
    "Windows NT 5.1",  // Windows XP
    "Windows NT 6.1",  // Windows 7
    "Windows NT 6.2",  // Windows 8
    "Windows NT 6.3",  // Windows 8.1
    "Windows NT 10.0", // Windows 10
];

/// macOS strings; each starts with [`MAC_OS_PREFIX`]
pub const MAC_OS: &[&str] = &[
    "Macintosh; Intel Mac OS X 10.8",
    "Macintosh; Intel Mac OS X 10.9",
    "Macintosh; Intel Mac OS X 10.10",
    "Macintosh; Intel Mac OS X 10.11",
];

pub const LINUX_OS: &[&str] = &["X11; Linux", "X11; Ubuntu; Linux"];

/// Part of every macOS string that is not reported in `oscpu`.
pub const MAC_OS_PREFIX: &str = "Macintosh; Intel ";

/// Architecture variant: suffix appended to the OS string, and the
/// `navigator.platform` token it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubPlatform {
    pub arch: &'static str,
    pub token: &'static str,
}

pub const WINDOWS_SUBPLATFORMS: &[SubPlatform] = &[
    SubPlatform { arch: "", token: "Win32" },          // 32bit
    SubPlatform { arch: "Win64; x64", token: "Win32" }, // 64bit
    SubPlatform { arch: "WOW64", token: "Win32" },     // 32bit process on 64bit system
];

pub const LINUX_SUBPLATFORMS: &[SubPlatform] = &[
    SubPlatform { arch: "i686", token: "Linux i686" },
    SubPlatform { arch: "x86_64", token: "Linux x86_64" },
    SubPlatform { arch: "i686 on x86_64", token: "Linux i686 on x86_64" },
];

/// Same token for 32bit and 64bit Macs.
pub const MAC_SUBPLATFORM: SubPlatform = SubPlatform { arch: "", token: "MacIntel" };

pub const FIREFOX_VERSIONS: &[&str] = &[
    "27.0", "28.0", "29.0", "31.0", "33.0", "36.0", "37.0", "38.0", "39.0", "40.0", "41.0",
    "42.0", "43.0",
];

/// Chrome major version with the inclusive range of its build numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeBuild {
    pub major: u32,
    pub build_low: u32,
    pub build_high: u32,
}

const fn chrome(major: u32, build_low: u32, build_high: u32) -> ChromeBuild {
    ChromeBuild {
        major,
        build_low,
        build_high,
    }
}

pub const CHROME_BUILDS: &[ChromeBuild] = &[
    chrome(32, 1700, 1749),
    chrome(33, 1750, 1846),
    chrome(34, 1847, 1915),
    chrome(35, 1916, 1984),
    chrome(36, 1985, 2061),
    chrome(37, 2062, 2124),
    chrome(38, 2125, 2170),
    chrome(39, 2171, 2213),
    chrome(40, 2214, 2271),
    chrome(41, 2272, 2310),
    chrome(42, 2311, 2356),
    chrome(43, 2357, 2402),
    chrome(44, 2403, 2453),
    chrome(45, 2454, 2489),
];

const _: () = {
    assert!(!WINDOWS_OS.is_empty());
    assert!(!MAC_OS.is_empty());
    assert!(!LINUX_OS.is_empty());
    assert!(!WINDOWS_SUBPLATFORMS.is_empty());
    assert!(!LINUX_SUBPLATFORMS.is_empty());
    assert!(!FIREFOX_VERSIONS.is_empty());
    assert!(!CHROME_BUILDS.is_empty());
};

/// Desktop Gecko trail token.
pub const GECKOTRAIL_DESKTOP: &str = "20100101";

/// `navigator.appVersion` prefix reported by every generated browser.
pub const APP_VERSION: &str = "5.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_strings_share_prefix() {
        for os in MAC_OS {
            assert!(os.starts_with(MAC_OS_PREFIX), "{os} lacks mac prefix");
            assert!(os[MAC_OS_PREFIX.len()..].starts_with("Mac OS X "));
        }
    }

    #[test]
    fn linux_arches_never_empty() {
        for sub in LINUX_SUBPLATFORMS {
            assert!(!sub.arch.is_empty());
            assert!(sub.token.ends_with(sub.arch));
        }
    }

    #[test]
    fn chrome_build_ranges_are_ordered() {
        for build in CHROME_BUILDS {
            assert!(build.build_low <= build.build_high, "bad range for {}", build.major);
        }
        for pair in CHROME_BUILDS.windows(2) {
            assert!(pair[0].major < pair[1].major);
            assert!(pair[0].build_high < pair[1].build_low);
        }
    }
}
