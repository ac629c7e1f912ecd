use anyhow::Result;

use navgen::{BrowserFamily, CompatibilityMatrix, PlatformFamily};

/// Print which browsers can be generated for each platform.
pub fn cmd_platforms() -> Result<()> {
    let matrix = CompatibilityMatrix::global()?;

    println!("{:<8} browsers", "platform");
    for platform in PlatformFamily::ALL {
        let browsers: Vec<&str> = matrix
            .browsers_for(platform)
            .iter()
            .map(|b| b.as_str())
            .collect();
        println!("{:<8} {}", platform.as_str(), browsers.join(", "));
    }

    println!();
    println!("{:<8} platforms", "browser");
    for browser in BrowserFamily::ALL {
        let platforms: Vec<&str> = matrix
            .platforms_for(browser)
            .iter()
            .map(|p| p.as_str())
            .collect();
        println!("{:<8} {}", browser.as_str(), platforms.join(", "));
    }
    Ok(())
}
