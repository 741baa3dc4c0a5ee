//! PersonName value object and the name validation modes.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static STRICT_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z,-]*$").expect("Failed to compile name regex"));

/// How first and last names are checked before they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameValidation {
    /// Any string is accepted.
    #[default]
    Permissive,

    /// Only ASCII letters, commas and hyphens are accepted.
    Strict,
}

impl NameValidation {
    /// Check a candidate name against this mode.
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            NameValidation::Permissive => true,
            NameValidation::Strict => STRICT_NAME_REGEX.is_match(name),
        }
    }
}

impl FromStr for NameValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(NameValidation::Permissive),
            "strict" => Ok(NameValidation::Strict),
            other => Err(format!(
                "expected 'permissive' or 'strict', got: {}",
                other
            )),
        }
    }
}

/// A first or last name that passed the active [`NameValidation`] mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName under the given validation mode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the mode rejects the name.
    pub fn new(name: impl Into<String>, mode: NameValidation) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();

        if !mode.accepts(trimmed) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
