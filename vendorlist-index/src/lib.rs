//! Vendor list indexing engine.
//!
//! [`VendorListIndex`] owns a loaded vendor list and four inverted indexes
//! mapping catalog ids to the vendors that declare them:
//!
//! - purposes, partitioned by legal basis (consent, legitimate interest,
//!   flexible)
//! - special purposes
//! - features
//! - special features
//!
//! Queries are constant-time lookups into these indexes followed by a
//! projection onto the active vendor snapshot. The active snapshot can be
//! narrowed to a subset of the full list; the full list is retained so it
//! can be narrowed again or restored without reloading.
//!
//! # Example
//!
//! ```
//! use vendorlist_index::VendorListIndex;
//! use vendorlist_model::VendorListDocument;
//!
//! let document = VendorListDocument::from_json(r#"{
//!     "gvlSpecificationVersion": 2,
//!     "vendorListVersion": 1,
//!     "tcfPolicyVersion": 2,
//!     "lastUpdated": "2020-04-02T16:00:28Z",
//!     "purposes": { "1": { "id": 1, "name": "Storage", "description": "" } },
//!     "vendors": { "5": { "id": 5, "name": "Five", "purposeIds": [1] } }
//! }"#).unwrap();
//!
//! let index = VendorListIndex::new(document).unwrap();
//! assert!(index.vendors_with_consent_purpose(1).contains_key("5"));
//! ```

mod catalog;
mod error;
mod indexes;
mod vendor_list;

pub use catalog::Catalog;
pub use error::{CatalogKind, IndexError, IndexResult};
pub use indexes::{IndexKind, PurposeVendors, VendorIndexes};
pub use vendor_list::{VendorListIndex, VendorMap};
