//! Caller-supplied restrictions on platform and browser choice.

use std::str::FromStr;

use super::family::Family;
use crate::error::{NavigatorError, Result};

/// Restriction on which members of a family may be generated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T> {
    /// Every member of the family is allowed.
    #[default]
    Any,
    /// Exactly this member.
    One(T),
    /// Any of these members; must not be empty.
    Many(Vec<T>),
}

impl<T: Family> Filter<T> {
    /// Normalize into the ordered, duplicate-free list of allowed members.
    pub fn allowed(&self) -> Result<Vec<T>> {
        match self {
            Filter::Any => Ok(T::all().to_vec()),
            Filter::One(member) => Ok(vec![*member]),
            Filter::Many(members) if members.is_empty() => Err(NavigatorError::InvalidArgument(
                "filter collection must not be empty".into(),
            )),
            Filter::Many(members) => {
                let mut allowed = Vec::with_capacity(members.len());
                for member in members {
                    if !allowed.contains(member) {
                        allowed.push(*member);
                    }
                }
                Ok(allowed)
            }
        }
    }

    /// Build a filter from a non-empty list of names.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let parsed = names
            .iter()
            .map(|name| name.as_ref().parse::<T>())
            .collect::<Result<Vec<T>>>()?;
        Ok(match parsed.as_slice() {
            [] => {
                return Err(NavigatorError::InvalidArgument(
                    "filter collection must not be empty".into(),
                ))
            }
            [one] => Filter::One(*one),
            _ => Filter::Many(parsed),
        })
    }
}

impl<T> From<T> for Filter<T> {
    fn from(member: T) -> Self {
        Filter::One(member)
    }
}

impl<T> From<Vec<T>> for Filter<T> {
    fn from(members: Vec<T>) -> Self {
        Filter::Many(members)
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(member: Option<T>) -> Self {
        member.map_or(Filter::Any, Filter::One)
    }
}

/// Parses `""`, `any` or `all` as [`Filter::Any`], a single name as
/// [`Filter::One`] and a comma-separated list as [`Filter::Many`].
impl<T: Family> FromStr for Filter<T> {
    type Err = NavigatorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("any")
            || trimmed.eq_ignore_ascii_case("all")
        {
            return Ok(Filter::Any);
        }
        if !trimmed.contains(',') {
            return Ok(Filter::One(trimmed.parse()?));
        }
        let members = trimmed
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<T>>>()?;
        if members.is_empty() {
            return Err(NavigatorError::InvalidArgument(format!(
                "filter has no family names: {s}"
            )));
        }
        Ok(Filter::Many(members))
    }
}
