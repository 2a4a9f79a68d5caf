//! Shared fixtures for client tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use vendorlist_client::{DocumentFetcher, FetchError};

pub const BASE_URL: &str = "https://vendorlist.test/v2/";

/// Serves canned documents by URL and records every request.
#[derive(Default)]
pub struct MapFetcher {
    documents: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, document: Value) -> Self {
        self.documents.insert(url.to_string(), document);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for MapFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::new(url, "HTTP 404 Not Found"))
    }
}

fn catalog_entry(id: u32, name: &str) -> Value {
    json!({ "id": id, "name": name, "description": format!("{name} description") })
}

fn envelope(version: u32, lang: &str) -> Value {
    json!({
        "gvlSpecificationVersion": 2,
        "vendorListVersion": version,
        "tcfPolicyVersion": 2,
        "lastUpdated": "2020-06-11T16:05:29Z",
        "purposes": {
            "1": catalog_entry(1, &format!("{lang} Store and/or access information on a device")),
            "2": catalog_entry(2, &format!("{lang} Select basic ads"))
        },
        "specialPurposes": {
            "1": catalog_entry(1, &format!("{lang} Ensure security"))
        },
        "features": {
            "1": catalog_entry(1, &format!("{lang} Match and combine offline data sources"))
        },
        "specialFeatures": {
            "1": catalog_entry(1, &format!("{lang} Use precise geolocation data"))
        },
        "stacks": {
            "1": {
                "id": 1,
                "name": format!("{lang} Basic ads"),
                "description": "",
                "purposeIds": [1, 2]
            }
        }
    })
}

/// A full vendor list: vendor 5 (consent 1, leg-int 2), vendor 6 (consent 2,
/// feature 1, special purpose 1) and vendor 7 (flexible 2, special feature 1).
pub fn vendor_list(version: u32) -> Value {
    let mut doc = envelope(version, "EN");
    doc["vendors"] = json!({
        "5": { "id": 5, "name": "Five", "purposeIds": [1], "legIntPurposeIds": [2] },
        "6": {
            "id": 6, "name": "Six", "purposeIds": [2], "featureIds": [1],
            "specialPurposeIds": [1]
        },
        "7": {
            "id": 7, "name": "Seven", "flexiblePurposeIds": [2],
            "specialFeatureIds": [1]
        }
    });
    doc
}

/// A translation document with catalog names prefixed by `lang`.
pub fn translation(version: u32, lang: &str) -> Value {
    envelope(version, lang)
}
