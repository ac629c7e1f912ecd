//! Picks a compatible (platform, browser) pair from caller filters.

use rand::seq::SliceRandom;
use rand::Rng;

use super::compat::CompatibilityMatrix;
use super::family::{BrowserFamily, PlatformFamily};
use super::filter::Filter;
use crate::error::{NavigatorError, Result};

/// Resolve filters into one compatible pair.
///
/// A single allowed browser is fixed first and the platform is drawn from
/// the platforms it supports. Otherwise the platform is drawn first and
/// the browser is drawn from those available on it.
pub fn resolve<R: Rng + ?Sized>(
    platform_filter: &Filter<PlatformFamily>,
    browser_filter: &Filter<BrowserFamily>,
    rng: &mut R,
) -> Result<(PlatformFamily, BrowserFamily)> {
    let platforms = platform_filter.allowed()?;
    let browsers = browser_filter.allowed()?;
    let matrix = CompatibilityMatrix::global()?;

    if let [browser] = browsers.as_slice() {
        let candidates: Vec<PlatformFamily> = platforms
            .iter()
            .copied()
            .filter(|p| matrix.platforms_for(*browser).contains(p))
            .collect();
        let platform = candidates
            .choose(rng)
            .copied()
            .ok_or_else(|| NavigatorError::invalid_requirements(&platforms, &browsers))?;
        tracing::debug!(%platform, %browser, "resolved pinned browser");
        return Ok((platform, *browser));
    }

    let platform = *platforms
        .choose(rng)
        .ok_or_else(|| NavigatorError::invalid_requirements(&platforms, &browsers))?;
    let candidates: Vec<BrowserFamily> = browsers
        .iter()
        .copied()
        .filter(|b| matrix.browsers_for(platform).contains(b))
        .collect();
    let browser = candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| NavigatorError::invalid_requirements(&platforms, &browsers))?;
    tracing::debug!(%platform, %browser, "resolved platform first");
    Ok((platform, browser))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mac_with_chrome_is_invalid_requirements() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = resolve(
            &Filter::One(PlatformFamily::MacOs),
            &Filter::One(BrowserFamily::Chrome),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            NavigatorError::InvalidRequirements {
                platforms: vec!["mac".into()],
                browsers: vec!["chrome".into()],
            }
        );
    }

    #[test]
    fn pinned_chrome_never_lands_on_mac() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let (platform, browser) =
                resolve(&Filter::Any, &Filter::One(BrowserFamily::Chrome), &mut rng).unwrap();
            assert_eq!(browser, BrowserFamily::Chrome);
            assert_ne!(platform, PlatformFamily::MacOs);
            if !seen.contains(&platform) {
                seen.push(platform);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn one_element_many_takes_browser_first_path() {
        // mac is allowed, but only linux is compatible with chrome
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let resolved = resolve(
                &Filter::Many(vec![PlatformFamily::MacOs, PlatformFamily::Linux]),
                &Filter::Many(vec![BrowserFamily::Chrome]),
                &mut rng,
            )
            .unwrap();
            assert_eq!(resolved, (PlatformFamily::Linux, BrowserFamily::Chrome));
        }
    }

    #[test]
    fn pinned_mac_falls_back_to_firefox() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let resolved =
                resolve(&Filter::One(PlatformFamily::MacOs), &Filter::Any, &mut rng).unwrap();
            assert_eq!(resolved, (PlatformFamily::MacOs, BrowserFamily::Firefox));
        }
    }

    #[test]
    fn empty_filter_is_invalid_argument() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = resolve(&Filter::Many(Vec::new()), &Filter::Any, &mut rng).unwrap_err();
        assert!(matches!(err, NavigatorError::InvalidArgument(_)));
    }

    #[test]
    fn resolved_pairs_are_always_compatible() {
        let matrix = CompatibilityMatrix::global().unwrap();
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            let (platform, browser) = resolve(&Filter::Any, &Filter::Any, &mut rng).unwrap();
            assert!(matrix.supports(platform, browser));
        }
    }
}
