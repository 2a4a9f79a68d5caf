//! Where vendor lists and translations are fetched from.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::language::Language;

/// Location and naming of published vendor list files.
///
/// Each [`GlobalVendorList`](crate::GlobalVendorList) carries its own copy,
/// so lists from different hosts can be used side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GvlConfig {
    /// Base URL the file names are resolved against. Required for any fetch.
    pub base_url: Option<String>,
    /// File name of the latest vendor list.
    pub latest_filename: String,
    /// File name of an archived vendor list; `[VERSION]` is replaced.
    pub versioned_filename: String,
    /// File name of a purpose translation; `[LANG]` is replaced.
    pub language_filename: String,
    /// HTTP request timeout for [`HttpFetcher`](crate::HttpFetcher).
    pub request_timeout_secs: u64,
}

impl Default for GvlConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            latest_filename: "vendor-list.json".to_string(),
            versioned_filename: "archives/vendor-list-v[VERSION].json".to_string(),
            language_filename: "purposes-[LANG].json".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl GvlConfig {
    pub const VERSION_TOKEN: &'static str = "[VERSION]";
    pub const LANGUAGE_TOKEN: &'static str = "[LANG]";

    /// Default file names resolved against `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// Defaults overlaid with `GVL_BASE_URL`, `GVL_LATEST_FILENAME`,
    /// `GVL_VERSIONED_FILENAME` and `GVL_LANGUAGE_FILENAME`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`GvlConfig::from_env`], reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup("GVL_BASE_URL") {
            config.base_url = Some(base_url);
        }
        if let Some(name) = lookup("GVL_LATEST_FILENAME") {
            config.latest_filename = name;
        }
        if let Some(name) = lookup("GVL_VERSIONED_FILENAME") {
            config.versioned_filename = name;
        }
        if let Some(name) = lookup("GVL_LANGUAGE_FILENAME") {
            config.language_filename = name;
        }
        config
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// URL of the latest vendor list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrlUnset`] if no base URL is configured.
    pub fn latest_url(&self) -> ClientResult<String> {
        Ok(format!("{}{}", self.base()?, self.latest_filename))
    }

    /// URL of an archived vendor list version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidVersion`] for version 0, or
    /// [`ClientError::BaseUrlUnset`].
    pub fn versioned_url(&self, version: u32) -> ClientResult<String> {
        if version == 0 {
            return Err(ClientError::InvalidVersion(version));
        }
        let file = self
            .versioned_filename
            .replace(Self::VERSION_TOKEN, &version.to_string());
        Ok(format!("{}{file}", self.base()?))
    }

    /// URL of the purpose translation for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrlUnset`] if no base URL is configured.
    pub fn language_url(&self, language: &Language) -> ClientResult<String> {
        let file = self
            .language_filename
            .replace(Self::LANGUAGE_TOKEN, &language.file_code());
        Ok(format!("{}{file}", self.base()?))
    }

    /// The base URL with a trailing slash.
    fn base(&self) -> ClientResult<String> {
        let base = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .ok_or(ClientError::BaseUrlUnset)?;

        if base.ends_with('/') {
            Ok(base.to_string())
        } else {
            Ok(format!("{base}/"))
        }
    }
}
