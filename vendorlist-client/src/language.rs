//! Two-letter language codes.

use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, ClientResult};

/// A two-letter language code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// The language of the published vendor list itself.
    pub const DEFAULT: &'static str = "EN";

    /// Parses a language code, accepting either case.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidLanguage`] unless `code` is exactly two
    /// ASCII letters.
    pub fn parse(code: &str) -> ClientResult<Self> {
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(ClientError::InvalidLanguage(code.to_string()))
        }
    }

    /// The uppercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercase form used in translation file names.
    #[must_use]
    pub fn file_code(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
