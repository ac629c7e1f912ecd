//! `navgen` - Random browser navigator profiles
//!
//! # Features
//!
//! - **User-Agent headers**: Firefox and Chrome layouts for Windows, macOS and Linux
//! - **Navigator configs**: `platform`, `oscpu` and `appVersion` that agree with the header
//! - **Filters**: pin or restrict platform and browser families; incompatible
//!   combinations fail with [`NavigatorError::InvalidRequirements`]
//! - **Reproducible**: every entry point has a variant taking any [`rand::Rng`]
//!
//! # Example
//!
//! ```rust
//! use navgen::{generate_user_agent, BrowserFamily, Filter, PlatformFamily};
//!
//! let ua = generate_user_agent(Filter::<PlatformFamily>::Any, BrowserFamily::Chrome).unwrap();
//! assert!(ua.contains("Chrome/"));
//!
//! let err = generate_user_agent(PlatformFamily::MacOs, BrowserFamily::Chrome);
//! assert!(err.is_err());
//! ```

pub mod config;
pub mod error;
pub mod navigator;

pub use error::{NavigatorError, Result};
pub use navigator::{
    generate_navigator, generate_navigator_with_rng, generate_user_agent,
    generate_user_agent_with_rng, BrowserFamily, CompatibilityMatrix, Filter, NavigatorGenerator,
    NavigatorRecord, PlatformFamily,
};

/// Version of navgen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
