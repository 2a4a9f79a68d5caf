//! Inverted indexes from catalog ids to declaring vendors.

use std::collections::{HashMap, HashSet};
use vendorlist_model::{FeatureId, PurposeId, Vendor, VendorId};

use crate::catalog::Catalog;
use crate::error::{CatalogKind, IndexError, IndexResult};

/// Vendors declaring one purpose, partitioned by legal basis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurposeVendors {
    pub consent: HashSet<VendorId>,
    pub leg_int: HashSet<VendorId>,
    pub flexible: HashSet<VendorId>,
}

/// Selects one of the vendor sets an index query can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    ConsentPurpose,
    LegIntPurpose,
    FlexiblePurpose,
    SpecialPurpose,
    Feature,
    SpecialFeature,
}

impl IndexKind {
    /// All index kinds, in declaration order.
    pub const ALL: [IndexKind; 6] = [
        IndexKind::ConsentPurpose,
        IndexKind::LegIntPurpose,
        IndexKind::FlexiblePurpose,
        IndexKind::SpecialPurpose,
        IndexKind::Feature,
        IndexKind::SpecialFeature,
    ];

    /// The catalog whose ids this kind is keyed by.
    #[must_use]
    pub fn catalog(self) -> CatalogKind {
        match self {
            Self::ConsentPurpose | Self::LegIntPurpose | Self::FlexiblePurpose => {
                CatalogKind::Purpose
            }
            Self::SpecialPurpose => CatalogKind::SpecialPurpose,
            Self::Feature => CatalogKind::Feature,
            Self::SpecialFeature => CatalogKind::SpecialFeature,
        }
    }
}

/// The four inverted indexes over a vendor snapshot.
///
/// Every catalog id has an entry, possibly empty. Indexes are only ever
/// produced whole by [`VendorIndexes::build`]; there is no incremental update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorIndexes {
    by_purpose: HashMap<PurposeId, PurposeVendors>,
    by_special_purpose: HashMap<PurposeId, HashSet<VendorId>>,
    by_feature: HashMap<FeatureId, HashSet<VendorId>>,
    by_special_feature: HashMap<FeatureId, HashSet<VendorId>>,
}

impl VendorIndexes {
    /// Builds indexes for `vendors` against the ids declared in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::UnknownReference`] if a vendor declares an id
    /// that is missing from the corresponding catalog.
    pub fn build<'a>(
        catalog: &Catalog,
        vendors: impl IntoIterator<Item = &'a Vendor>,
    ) -> IndexResult<Self> {
        let mut indexes = Self {
            by_purpose: catalog
                .purposes
                .values()
                .map(|p| (p.id, PurposeVendors::default()))
                .collect(),
            by_special_purpose: seed(catalog.special_purposes.values().map(|p| p.id)),
            by_feature: seed(catalog.features.values().map(|f| f.id)),
            by_special_feature: seed(catalog.special_features.values().map(|f| f.id)),
        };

        for vendor in vendors {
            indexes.fold_vendor(vendor)?;
        }

        Ok(indexes)
    }

    fn fold_vendor(&mut self, vendor: &Vendor) -> IndexResult<()> {
        let id = vendor.id;

        fold_purposes(&mut self.by_purpose, &vendor.purpose_ids, id, |p| {
            &mut p.consent
        })?;
        fold_purposes(&mut self.by_purpose, &vendor.leg_int_purpose_ids, id, |p| {
            &mut p.leg_int
        })?;
        if let Some(flexible) = &vendor.flexible_purpose_ids {
            fold_purposes(&mut self.by_purpose, flexible, id, |p| &mut p.flexible)?;
        }

        fold(
            &mut self.by_special_purpose,
            CatalogKind::SpecialPurpose,
            &vendor.special_purpose_ids,
            id,
        )?;
        fold(
            &mut self.by_feature,
            CatalogKind::Feature,
            &vendor.feature_ids,
            id,
        )?;
        fold(
            &mut self.by_special_feature,
            CatalogKind::SpecialFeature,
            &vendor.special_feature_ids,
            id,
        )
    }

    /// Returns the legal-basis partition for a purpose.
    #[must_use]
    pub fn purpose(&self, id: PurposeId) -> Option<&PurposeVendors> {
        self.by_purpose.get(&id)
    }

    /// Returns the vendor ids recorded under `kind` for catalog id `id`, or
    /// `None` if the catalog has no such id.
    #[must_use]
    pub fn vendor_ids(&self, kind: IndexKind, id: u32) -> Option<&HashSet<VendorId>> {
        match kind {
            IndexKind::ConsentPurpose => self.by_purpose.get(&id).map(|p| &p.consent),
            IndexKind::LegIntPurpose => self.by_purpose.get(&id).map(|p| &p.leg_int),
            IndexKind::FlexiblePurpose => self.by_purpose.get(&id).map(|p| &p.flexible),
            IndexKind::SpecialPurpose => self.by_special_purpose.get(&id),
            IndexKind::Feature => self.by_feature.get(&id),
            IndexKind::SpecialFeature => self.by_special_feature.get(&id),
        }
    }

    /// Returns the number of keyed entries for the catalog `kind`.
    #[must_use]
    pub fn len(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Purpose => self.by_purpose.len(),
            CatalogKind::SpecialPurpose => self.by_special_purpose.len(),
            CatalogKind::Feature => self.by_feature.len(),
            CatalogKind::SpecialFeature => self.by_special_feature.len(),
        }
    }

    /// Returns true if no catalog id is indexed at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_purpose.is_empty()
            && self.by_special_purpose.is_empty()
            && self.by_feature.is_empty()
            && self.by_special_feature.is_empty()
    }
}

fn seed(ids: impl Iterator<Item = u32>) -> HashMap<u32, HashSet<VendorId>> {
    ids.map(|id| (id, HashSet::new())).collect()
}

fn fold(
    index: &mut HashMap<u32, HashSet<VendorId>>,
    kind: CatalogKind,
    declared: &HashSet<u32>,
    vendor: VendorId,
) -> IndexResult<()> {
    for &id in declared {
        index
            .get_mut(&id)
            .ok_or(IndexError::UnknownReference { vendor, kind, id })?
            .insert(vendor);
    }
    Ok(())
}

fn fold_purposes(
    index: &mut HashMap<PurposeId, PurposeVendors>,
    declared: &HashSet<PurposeId>,
    vendor: VendorId,
    partition: impl Fn(&mut PurposeVendors) -> &mut HashSet<VendorId>,
) -> IndexResult<()> {
    for &id in declared {
        let entry = index.get_mut(&id).ok_or(IndexError::UnknownReference {
            vendor,
            kind: CatalogKind::Purpose,
            id,
        })?;
        partition(entry).insert(vendor);
    }
    Ok(())
}
