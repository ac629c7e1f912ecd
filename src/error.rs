//! Errors raised while generating navigator profiles.

use thiserror::Error;

/// Navigator generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigatorError {
    /// A filter was malformed: an empty collection or an unknown family name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The filters admit no compatible (platform, browser) pair.
    #[error(
        "Could not generate navigator for any combination of [{}] platforms and [{}] navigators",
        .platforms.join(", "),
        .browsers.join(", ")
    )]
    InvalidRequirements {
        platforms: Vec<String>,
        browsers: Vec<String>,
    },

    /// The platform and browser compatibility directions disagree, or a
    /// family has no partner at all.
    #[error("Inconsistent compatibility tables: {0}")]
    InconsistentTables(String),
}

impl NavigatorError {
    pub(crate) fn invalid_requirements<P, B>(platforms: &[P], browsers: &[B]) -> Self
    where
        P: std::fmt::Display,
        B: std::fmt::Display,
    {
        Self::InvalidRequirements {
            platforms: platforms.iter().map(ToString::to_string).collect(),
            browsers: browsers.iter().map(ToString::to_string).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
