use std::collections::HashMap;
use vendorlist_model::{Feature, Purpose, Stack};

/// The text catalogs of a vendor list, keyed by the string form of each id.
///
/// Replaced wholesale by every load, including translation loads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub purposes: HashMap<String, Purpose>,
    pub special_purposes: HashMap<String, Purpose>,
    pub features: HashMap<String, Feature>,
    pub special_features: HashMap<String, Feature>,
    pub stacks: HashMap<String, Stack>,
}
