//! The vendor list engine: loaded state, indexes, queries and narrowing.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use vendorlist_model::{
    Feature, FeatureId, Purpose, PurposeId, Stack, Vendor, VendorId, VendorListDocument,
};

use crate::catalog::Catalog;
use crate::error::{CatalogKind, IndexError, IndexResult};
use crate::indexes::{IndexKind, VendorIndexes};

/// Vendors keyed by the string form of their id.
pub type VendorMap = HashMap<String, Arc<Vendor>>;

/// A loaded vendor list with inverted indexes over its active vendors.
///
/// The full vendor snapshot is set by every load that carries vendors and is
/// never modified otherwise. The active snapshot is the full snapshot or a
/// subset of it chosen by [`VendorListIndex::narrow_vendors_to`]. The indexes
/// always describe the active snapshot.
#[derive(Debug, Clone)]
pub struct VendorListIndex {
    gvl_specification_version: u32,
    vendor_list_version: u32,
    tcf_policy_version: u32,
    last_updated: DateTime<Utc>,
    catalog: Catalog,
    full_vendors: VendorMap,
    vendors: VendorMap,
    indexes: VendorIndexes,
}

impl VendorListIndex {
    /// Builds an index from a full vendor list document.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingVendors`] for a translation-only document,
    /// or any error [`VendorListIndex::load`] can return.
    pub fn new(document: VendorListDocument) -> IndexResult<Self> {
        if !document.is_vendor_list() {
            return Err(IndexError::MissingVendors);
        }

        let mut index = Self {
            gvl_specification_version: 0,
            vendor_list_version: 0,
            tcf_policy_version: 0,
            last_updated: document.last_updated,
            catalog: Catalog::default(),
            full_vendors: HashMap::new(),
            vendors: HashMap::new(),
            indexes: VendorIndexes::default(),
        };
        index.load(document)?;
        Ok(index)
    }

    /// Loads a vendor list or translation document.
    ///
    /// Versions, timestamp and text catalogs are always replaced. When the
    /// document carries vendors they become both the full and the active
    /// snapshot and the indexes are rebuilt; a translation leaves vendor
    /// membership and indexes as they were.
    ///
    /// Nothing is replaced unless the whole load succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Model`] if the document fails its structural
    /// checks, or [`IndexError::UnknownReference`] if a vendor declares an id
    /// missing from the document's catalogs.
    pub fn load(&mut self, document: VendorListDocument) -> IndexResult<()> {
        document.validate()?;

        let VendorListDocument {
            gvl_specification_version,
            vendor_list_version,
            tcf_policy_version,
            last_updated,
            purposes,
            special_purposes,
            features,
            special_features,
            stacks,
            vendors,
        } = document;

        let catalog = Catalog {
            purposes,
            special_purposes,
            features,
            special_features,
            stacks,
        };

        let snapshot = match vendors {
            Some(vendors) => {
                let full: VendorMap = vendors
                    .into_iter()
                    .map(|(key, vendor)| (key, Arc::new(vendor)))
                    .collect();
                let indexes =
                    VendorIndexes::build(&catalog, full.values().map(|vendor| &**vendor))?;
                Some((full, indexes))
            }
            None => None,
        };

        self.gvl_specification_version = gvl_specification_version;
        self.vendor_list_version = vendor_list_version;
        self.tcf_policy_version = tcf_policy_version;
        self.last_updated = last_updated;
        self.catalog = catalog;

        match snapshot {
            Some((full, indexes)) => {
                debug!(
                    vendor_list_version,
                    vendors = full.len(),
                    "Loaded vendor list"
                );
                self.vendors = full.clone();
                self.full_vendors = full;
                self.indexes = indexes;
            }
            None => debug!(vendor_list_version, "Loaded translation"),
        }

        Ok(())
    }

    /// Rebuilds all four indexes from the catalogs and the active snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownReference`] if an active vendor declares an
    /// id the current catalogs lack. The previous indexes are kept in that case.
    pub fn rebuild_indexes(&mut self) -> IndexResult<()> {
        self.indexes = VendorIndexes::build(
            &self.catalog,
            self.vendors.values().map(|vendor| &**vendor),
        )?;
        debug!(
            vendors = self.vendors.len(),
            purposes = self.indexes.len(CatalogKind::Purpose),
            features = self.indexes.len(CatalogKind::Feature),
            "Rebuilt vendor indexes"
        );
        Ok(())
    }

    /// Restricts the active snapshot to the vendors of the full snapshot whose
    /// ids appear in `vendor_ids`, then rebuilds the indexes.
    ///
    /// Narrowing always starts from the full snapshot, so successive calls do
    /// not compound. Duplicate and unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`VendorListIndex::rebuild_indexes`]. The active snapshot is
    /// left unchanged on error.
    pub fn narrow_vendors_to(
        &mut self,
        vendor_ids: impl IntoIterator<Item = VendorId>,
    ) -> IndexResult<()> {
        let mut narrowed = VendorMap::new();
        let mut unknown = 0usize;

        for id in vendor_ids {
            let key = id.to_string();
            match self.full_vendors.get(&key) {
                Some(vendor) => {
                    narrowed.insert(key, Arc::clone(vendor));
                }
                None => unknown += 1,
            }
        }

        if unknown > 0 {
            warn!(unknown, "Ignored vendor ids absent from the full vendor list");
        }

        self.replace_active(narrowed)
    }

    /// Makes the full snapshot active again and rebuilds the indexes.
    ///
    /// # Errors
    ///
    /// Same as [`VendorListIndex::rebuild_indexes`].
    pub fn restore_full_vendor_list(&mut self) -> IndexResult<()> {
        self.replace_active(self.full_vendors.clone())
    }

    fn replace_active(&mut self, vendors: VendorMap) -> IndexResult<()> {
        let indexes =
            VendorIndexes::build(&self.catalog, vendors.values().map(|vendor| &**vendor))?;
        debug!(
            active = vendors.len(),
            full = self.full_vendors.len(),
            "Replaced active vendor snapshot"
        );
        self.vendors = vendors;
        self.indexes = indexes;
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Returns the active vendors recorded under `kind` for catalog id `id`.
    ///
    /// An id the catalog does not contain yields an empty map.
    #[must_use]
    pub fn vendors_with(&self, kind: IndexKind, id: u32) -> VendorMap {
        let Some(ids) = self.indexes.vendor_ids(kind, id) else {
            return VendorMap::new();
        };

        ids.iter()
            .filter_map(|vendor_id| {
                let key = vendor_id.to_string();
                let vendor = Arc::clone(self.vendors.get(&key)?);
                Some((key, vendor))
            })
            .collect()
    }

    /// Vendors declaring `purpose` under the consent legal basis.
    #[must_use]
    pub fn vendors_with_consent_purpose(&self, purpose: PurposeId) -> VendorMap {
        self.vendors_with(IndexKind::ConsentPurpose, purpose)
    }

    /// Vendors declaring `purpose` under the legitimate interest legal basis.
    #[must_use]
    pub fn vendors_with_leg_int_purpose(&self, purpose: PurposeId) -> VendorMap {
        self.vendors_with(IndexKind::LegIntPurpose, purpose)
    }

    /// Vendors declaring `purpose` as flexible.
    #[must_use]
    pub fn vendors_with_flexible_purpose(&self, purpose: PurposeId) -> VendorMap {
        self.vendors_with(IndexKind::FlexiblePurpose, purpose)
    }

    #[must_use]
    pub fn vendors_with_special_purpose(&self, special_purpose: PurposeId) -> VendorMap {
        self.vendors_with(IndexKind::SpecialPurpose, special_purpose)
    }

    #[must_use]
    pub fn vendors_with_feature(&self, feature: FeatureId) -> VendorMap {
        self.vendors_with(IndexKind::Feature, feature)
    }

    #[must_use]
    pub fn vendors_with_special_feature(&self, special_feature: FeatureId) -> VendorMap {
        self.vendors_with(IndexKind::SpecialFeature, special_feature)
    }

    // ── Accessors ────────────────────────────────────────────────

    #[must_use]
    pub fn gvl_specification_version(&self) -> u32 {
        self.gvl_specification_version
    }

    #[must_use]
    pub fn vendor_list_version(&self) -> u32 {
        self.vendor_list_version
    }

    #[must_use]
    pub fn tcf_policy_version(&self) -> u32 {
        self.tcf_policy_version
    }

    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    #[must_use]
    pub fn purposes(&self) -> &HashMap<String, Purpose> {
        &self.catalog.purposes
    }

    #[must_use]
    pub fn special_purposes(&self) -> &HashMap<String, Purpose> {
        &self.catalog.special_purposes
    }

    #[must_use]
    pub fn features(&self) -> &HashMap<String, Feature> {
        &self.catalog.features
    }

    #[must_use]
    pub fn special_features(&self) -> &HashMap<String, Feature> {
        &self.catalog.special_features
    }

    #[must_use]
    pub fn stacks(&self) -> &HashMap<String, Stack> {
        &self.catalog.stacks
    }

    /// The active vendor snapshot.
    #[must_use]
    pub fn vendors(&self) -> &VendorMap {
        &self.vendors
    }

    /// The full vendor snapshot from the last load that carried vendors.
    #[must_use]
    pub fn full_vendors(&self) -> &VendorMap {
        &self.full_vendors
    }

    /// Looks up an active vendor by id.
    #[must_use]
    pub fn vendor(&self, id: VendorId) -> Option<&Arc<Vendor>> {
        self.vendors.get(&id.to_string())
    }

    /// Ids of the active vendors in ascending order.
    #[must_use]
    pub fn vendor_ids(&self) -> Vec<VendorId> {
        let mut ids: Vec<VendorId> = self.vendors.values().map(|v| v.id).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns true if the active snapshot is a proper subset of the full one.
    #[must_use]
    pub fn is_narrowed(&self) -> bool {
        self.vendors.len() != self.full_vendors.len()
    }

    /// The current indexes.
    #[must_use]
    pub fn indexes(&self) -> &VendorIndexes {
        &self.indexes
    }

    /// Exports the current state as a document carrying the full vendor
    /// snapshot.
    #[must_use]
    pub fn to_document(&self) -> VendorListDocument {
        let vendors = self
            .full_vendors
            .iter()
            .map(|(key, vendor)| (key.clone(), Vendor::clone(vendor)))
            .collect();

        VendorListDocument {
            gvl_specification_version: self.gvl_specification_version,
            vendor_list_version: self.vendor_list_version,
            tcf_policy_version: self.tcf_policy_version,
            last_updated: self.last_updated,
            purposes: self.catalog.purposes.clone(),
            special_purposes: self.catalog.special_purposes.clone(),
            features: self.catalog.features.clone(),
            special_features: self.catalog.special_features.clone(),
            stacks: self.catalog.stacks.clone(),
            vendors: Some(vendors),
        }
    }
}
