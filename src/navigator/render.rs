//! User-Agent header templates.

use super::family::BrowserFamily;
use super::tables::GECKOTRAIL_DESKTOP;

/// Render the User-Agent header for `browser` on `os_string`.
///
/// ```
/// use navgen::navigator::{render, BrowserFamily};
///
/// assert_eq!(
///     render(BrowserFamily::Firefox, "X11; Linux x86_64", "43.0"),
///     "Mozilla/5.0 (X11; Linux x86_64; rv:43.0) Gecko/20100101 Firefox/43.0"
/// );
/// ```
pub fn render(browser: BrowserFamily, os_string: &str, version: &str) -> String {
    match browser {
        BrowserFamily::Firefox => format!(
            "Mozilla/5.0 ({os_string}; rv:{version}) Gecko/{GECKOTRAIL_DESKTOP} Firefox/{version}"
        ),
        BrowserFamily::Chrome => format!(
            "Mozilla/5.0 ({os_string}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version} Safari/537.36"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_template() {
        assert_eq!(
            render(BrowserFamily::Chrome, "Windows NT 6.1; WOW64", "45.0.2454.85"),
            "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/45.0.2454.85 Safari/537.36"
        );
    }

    #[test]
    fn firefox_template_repeats_version() {
        let ua = render(BrowserFamily::Firefox, "Macintosh; Intel Mac OS X 10.10", "40.0");
        assert_eq!(
            ua,
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.10; rv:40.0) Gecko/20100101 Firefox/40.0"
        );
    }
}
