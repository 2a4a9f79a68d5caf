use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{FeatureId, PurposeId, VendorId};

/// A vendor entry from the vendor list.
///
/// Every declaration set accepts both the `...Ids` field names and the
/// shorter names used by later list revisions (`purposes`, `features`, ...).
/// Missing sets are empty, except `flexible_purpose_ids`: its absence is
/// recorded as `None` and contributes nothing to any index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,

    /// Purposes declared under the consent legal basis.
    #[serde(alias = "purposes", default)]
    pub purpose_ids: HashSet<PurposeId>,
    /// Purposes declared under the legitimate interest legal basis.
    #[serde(alias = "legIntPurposes", default)]
    pub leg_int_purpose_ids: HashSet<PurposeId>,
    /// Purposes whose legal basis the publisher may choose.
    #[serde(alias = "flexiblePurposes", default, skip_serializing_if = "Option::is_none")]
    pub flexible_purpose_ids: Option<HashSet<PurposeId>>,
    #[serde(alias = "specialPurposes", default)]
    pub special_purpose_ids: HashSet<PurposeId>,
    #[serde(alias = "features", default)]
    pub feature_ids: HashSet<FeatureId>,
    #[serde(alias = "specialFeatures", default)]
    pub special_feature_ids: HashSet<FeatureId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_url: Option<String>,
    /// Set when the vendor has been removed from the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_max_age_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_cookies: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_non_cookie_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_storage_disclosure_url: Option<String>,

    /// Descriptive fields the index does not interpret.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Vendor {
    /// Creates a vendor with the given id and name and no declarations.
    #[must_use]
    pub fn new(id: VendorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            purpose_ids: HashSet::new(),
            leg_int_purpose_ids: HashSet::new(),
            flexible_purpose_ids: None,
            special_purpose_ids: HashSet::new(),
            feature_ids: HashSet::new(),
            special_feature_ids: HashSet::new(),
            policy_url: None,
            deleted_date: None,
            overflow: None,
            cookie_max_age_seconds: None,
            uses_cookies: None,
            cookie_refresh: None,
            uses_non_cookie_access: None,
            device_storage_disclosure_url: None,
            other: serde_json::Map::new(),
        }
    }

    /// Returns true if the vendor has been marked deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_date.is_some()
    }

    /// Returns true if the vendor declares `purpose` under any legal basis.
    #[must_use]
    pub fn declares_purpose(&self, purpose: PurposeId) -> bool {
        self.purpose_ids.contains(&purpose)
            || self.leg_int_purpose_ids.contains(&purpose)
            || self
                .flexible_purpose_ids
                .as_ref()
                .is_some_and(|ids| ids.contains(&purpose))
    }
}

/// HTTP GET request size limit advertised by a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overflow {
    pub http_get_limit: u32,
}
