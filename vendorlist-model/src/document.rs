//! The top-level vendor list envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ModelError, ModelResult};
use crate::{Feature, Purpose, Stack, Vendor};

/// A vendor list document, or a language translation of one.
///
/// Catalog and vendor mappings are keyed by the decimal string form of the
/// entry id, as published. Translation documents leave `vendors` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorListDocument {
    pub gvl_specification_version: u32,
    pub vendor_list_version: u32,
    pub tcf_policy_version: u32,
    /// Publication time, normalized from the ISO-8601 string on load.
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub purposes: HashMap<String, Purpose>,
    #[serde(default)]
    pub special_purposes: HashMap<String, Purpose>,
    #[serde(default)]
    pub features: HashMap<String, Feature>,
    #[serde(default)]
    pub special_features: HashMap<String, Feature>,
    #[serde(default)]
    pub stacks: HashMap<String, Stack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendors: Option<HashMap<String, Vendor>>,
}

impl VendorListDocument {
    /// Parses and structurally checks a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the document shape or if
    /// any mapping key disagrees with its entry id.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let document: Self = serde_json::from_str(json)?;
        document.validate()?;
        Ok(document)
    }

    /// Converts an already parsed JSON value into a checked document.
    ///
    /// # Errors
    ///
    /// Same as [`VendorListDocument::from_json`].
    pub fn from_value(value: serde_json::Value) -> ModelResult<Self> {
        let document: Self = serde_json::from_value(value)?;
        document.validate()?;
        Ok(document)
    }

    /// Returns true if this is a full vendor list rather than a translation.
    #[must_use]
    pub fn is_vendor_list(&self) -> bool {
        self.vendors.is_some()
    }

    /// Checks that every mapping key is a positive integer equal to the id
    /// of the entry it maps to.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidKey`] or [`ModelError::KeyMismatch`] for
    /// the first offending entry.
    pub fn validate(&self) -> ModelResult<()> {
        check_keys("purposes", &self.purposes, |p| p.id)?;
        check_keys("specialPurposes", &self.special_purposes, |p| p.id)?;
        check_keys("features", &self.features, |f| f.id)?;
        check_keys("specialFeatures", &self.special_features, |f| f.id)?;
        check_keys("stacks", &self.stacks, |s| s.id)?;
        if let Some(vendors) = &self.vendors {
            check_keys("vendors", vendors, |v| v.id)?;
        }
        Ok(())
    }
}

/// Returns true if a raw JSON value looks like a full vendor list, that is,
/// an object carrying an object-valued `vendors` field.
#[must_use]
pub fn is_vendor_list_value(value: &serde_json::Value) -> bool {
    value
        .get("vendors")
        .is_some_and(serde_json::Value::is_object)
}

fn check_keys<T>(
    collection: &'static str,
    entries: &HashMap<String, T>,
    id_of: impl Fn(&T) -> u32,
) -> ModelResult<()> {
    for (key, entry) in entries {
        let parsed: u32 = match key.parse() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(ModelError::InvalidKey {
                    collection,
                    key: key.clone(),
                });
            }
        };
        let id = id_of(entry);
        if parsed != id {
            return Err(ModelError::KeyMismatch {
                collection,
                key: key.clone(),
                id,
            });
        }
    }
    Ok(())
}
