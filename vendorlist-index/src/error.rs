//! Error types for the indexing engine.

use std::fmt;
use thiserror::Error;
use vendorlist_model::{ModelError, VendorId};

/// The catalog a vendor declaration refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Purpose,
    SpecialPurpose,
    Feature,
    SpecialFeature,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Purpose => "purpose",
            Self::SpecialPurpose => "special purpose",
            Self::Feature => "feature",
            Self::SpecialFeature => "special feature",
        };
        f.write_str(name)
    }
}

/// Errors raised while loading a document or building indexes.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A full vendor list was required but the document has no vendors.
    #[error("document carries no vendors")]
    MissingVendors,

    /// A vendor declares an id the catalog does not contain.
    #[error("vendor {vendor} references unknown {kind} {id}")]
    UnknownReference {
        vendor: VendorId,
        kind: CatalogKind,
        id: u32,
    },

    /// The document failed its structural checks.
    #[error("invalid document: {0}")]
    Model(#[from] ModelError),
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
