use serde::{Deserialize, Serialize};

use crate::{FeatureId, PurposeId};

/// A disclosed data-processing purpose. Also used for special purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purpose {
    pub id: PurposeId,
    pub name: String,
    pub description: String,
    /// Legal wording shown alongside the user-facing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_legal: Option<String>,
}

/// A technical capability a vendor may use. Also used for special features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_legal: Option<String>,
}
