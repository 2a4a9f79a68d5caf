use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{FeatureId, PurposeId, StackId};

/// A named bundle of purposes and special features presented together.
///
/// Stacks are display groupings only; vendors are never indexed against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub id: StackId,
    pub name: String,
    pub description: String,
    #[serde(alias = "purposes", default)]
    pub purpose_ids: HashSet<PurposeId>,
    #[serde(alias = "specialFeatures", default, skip_serializing_if = "Option::is_none")]
    pub special_feature_ids: Option<HashSet<FeatureId>>,
}
