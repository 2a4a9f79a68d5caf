//! Shared fixtures for index tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use vendorlist_model::{Feature, Purpose, Stack, Vendor, VendorListDocument};

pub fn purpose(id: u32) -> Purpose {
    Purpose {
        id,
        name: format!("Purpose {id}"),
        description: format!("Description of purpose {id}"),
        description_legal: None,
    }
}

pub fn feature(id: u32) -> Feature {
    Feature {
        id,
        name: format!("Feature {id}"),
        description: format!("Description of feature {id}"),
        description_legal: None,
    }
}

pub fn keyed<T>(ids: impl IntoIterator<Item = u32>, make: impl Fn(u32) -> T) -> HashMap<String, T> {
    ids.into_iter().map(|id| (id.to_string(), make(id))).collect()
}

/// A vendor with the given consent and legitimate interest purposes.
pub fn vendor(id: u32, consent: &[u32], leg_int: &[u32]) -> Vendor {
    let mut vendor = Vendor::new(id, format!("Vendor {id}"));
    vendor.purpose_ids = consent.iter().copied().collect();
    vendor.leg_int_purpose_ids = leg_int.iter().copied().collect();
    vendor
}

/// A full vendor list with purposes 1..=10, special purposes 1..=2,
/// features 1..=3 and special features 1..=2.
pub fn document(vendors: Vec<Vendor>) -> VendorListDocument {
    VendorListDocument {
        gvl_specification_version: 2,
        vendor_list_version: 42,
        tcf_policy_version: 2,
        last_updated: Utc.with_ymd_and_hms(2020, 6, 11, 16, 5, 29).unwrap(),
        purposes: keyed(1..=10, purpose),
        special_purposes: keyed(1..=2, purpose),
        features: keyed(1..=3, feature),
        special_features: keyed(1..=2, feature),
        stacks: keyed(1..=1, |id| Stack {
            id,
            name: "Personalised ads".into(),
            description: "Ads and measurement".into(),
            purpose_ids: HashSet::from([2, 3, 4]),
            special_feature_ids: None,
        }),
        vendors: Some(keyed_vendors(vendors)),
    }
}

pub fn keyed_vendors(vendors: Vec<Vendor>) -> HashMap<String, Vendor> {
    vendors.into_iter().map(|v| (v.id.to_string(), v)).collect()
}

/// A translation document for the catalog of [`document`], with names
/// prefixed by `lang`.
pub fn translation(lang: &str) -> VendorListDocument {
    let mut doc = document(Vec::new());
    doc.vendors = None;
    for purpose in doc.purposes.values_mut() {
        purpose.name = format!("[{lang}] {}", purpose.name);
    }
    doc
}

/// Sorted keys of a query result.
pub fn keys<V>(map: &HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}
