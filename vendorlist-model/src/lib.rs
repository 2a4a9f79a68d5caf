//! Typed document model for the Global Vendor List.
//!
//! A vendor list document is the published catalog of:
//! - [`Purpose`]s and special purposes a vendor may declare
//! - [`Feature`]s and special features a vendor may use
//! - [`Stack`]s bundling purposes and special features for disclosure
//! - [`Vendor`]s and the ids they declare under each legal basis
//!
//! Language translation documents share the same envelope but carry no
//! `vendors` field. Both are represented by [`VendorListDocument`].
//!
//! The types here are plain values. The only behavior is the structural
//! check performed when a document crosses into the typed model.

mod document;
mod error;
mod purpose;
mod stack;
mod vendor;

pub use document::{is_vendor_list_value, VendorListDocument};
pub use error::{ModelError, ModelResult};
pub use purpose::{Feature, Purpose};
pub use stack::Stack;
pub use vendor::{Overflow, Vendor};

/// Identifier of a purpose or special purpose.
pub type PurposeId = u32;

/// Identifier of a feature or special feature.
pub type FeatureId = u32;

/// Identifier of a stack.
pub type StackId = u32;

/// Identifier of a vendor.
pub type VendorId = u32;
