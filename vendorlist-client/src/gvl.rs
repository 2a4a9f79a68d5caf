//! The vendor list facade: an index plus the means to (re)load it.

use std::future::Future;
use std::sync::Arc;
use tracing::info;
use vendorlist_index::VendorListIndex;
use vendorlist_model::VendorListDocument;

use crate::config::GvlConfig;
use crate::error::{ClientResult, FetchError};
use crate::fetch::DocumentFetcher;
use crate::language::Language;

/// A Global Vendor List with its indexes and active display language.
///
/// Loading operations validate their input synchronously and hand back a
/// future for the fetch. `change_language` borrows the list mutably until
/// its future completes, so loads against one list cannot interleave.
pub struct GlobalVendorList {
    config: GvlConfig,
    fetcher: Arc<dyn DocumentFetcher>,
    index: VendorListIndex,
    language: Language,
}

impl GlobalVendorList {
    /// Wraps an already parsed vendor list. The list is ready immediately and
    /// its language is [`Language::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Index`](crate::ClientError::Index) if the
    /// document cannot be indexed.
    pub fn from_document(
        config: GvlConfig,
        fetcher: Arc<dyn DocumentFetcher>,
        document: VendorListDocument,
    ) -> ClientResult<Self> {
        let index = VendorListIndex::new(document)?;
        Ok(Self {
            config,
            fetcher,
            index,
            language: Language::default(),
        })
    }

    /// Fetches the latest vendor list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrlUnset`](crate::ClientError::BaseUrlUnset)
    /// immediately if no base URL is configured. Fetch and indexing failures
    /// are reported by the returned future.
    pub fn load_latest(
        config: GvlConfig,
        fetcher: Arc<dyn DocumentFetcher>,
    ) -> ClientResult<impl Future<Output = ClientResult<Self>> + Send + 'static> {
        Self::load(config, fetcher, None)
    }

    /// Fetches an archived vendor list version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidVersion`](crate::ClientError::InvalidVersion)
    /// or [`ClientError::BaseUrlUnset`](crate::ClientError::BaseUrlUnset)
    /// immediately. Fetch and indexing failures are reported by the returned
    /// future.
    pub fn load_version(
        config: GvlConfig,
        fetcher: Arc<dyn DocumentFetcher>,
        version: u32,
    ) -> ClientResult<impl Future<Output = ClientResult<Self>> + Send + 'static> {
        Self::load(config, fetcher, Some(version))
    }

    /// Fetches `version`, or the latest list when `None`.
    ///
    /// # Errors
    ///
    /// See [`GlobalVendorList::load_version`].
    pub fn load(
        config: GvlConfig,
        fetcher: Arc<dyn DocumentFetcher>,
        version: Option<u32>,
    ) -> ClientResult<impl Future<Output = ClientResult<Self>> + Send + 'static> {
        let url = match version {
            Some(version) => config.versioned_url(version)?,
            None => config.latest_url()?,
        };

        Ok(async move {
            let document = fetch_document(fetcher.as_ref(), &url).await?;
            let index = VendorListIndex::new(document)?;
            info!(
                "Loaded vendor list v{} with {} vendors",
                index.vendor_list_version(),
                index.full_vendors().len()
            );
            Ok(Self {
                config,
                fetcher,
                index,
                language: Language::default(),
            })
        })
    }

    /// Switches the catalog text to another language.
    ///
    /// Choosing the active language again resolves immediately without a
    /// fetch. Otherwise the translation is fetched and loaded, which replaces
    /// purpose, feature and stack text but never vendor membership. The
    /// active language changes only once the load succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidLanguage`](crate::ClientError::InvalidLanguage)
    /// immediately for a malformed code, and
    /// [`ClientError::BaseUrlUnset`](crate::ClientError::BaseUrlUnset) when a
    /// fetch is needed but no base URL is configured. Fetch and indexing
    /// failures are reported by the returned future.
    pub fn change_language(
        &mut self,
        code: &str,
    ) -> ClientResult<impl Future<Output = ClientResult<()>> + Send + '_> {
        let language = Language::parse(code)?;
        let url = if language == self.language {
            None
        } else {
            Some(self.config.language_url(&language)?)
        };
        let fetcher = Arc::clone(&self.fetcher);

        Ok(async move {
            let Some(url) = url else {
                return Ok(());
            };

            let document = fetch_document(fetcher.as_ref(), &url).await?;
            self.index.load(document)?;
            info!("Vendor list language changed from {} to {}", self.language, language);
            self.language = language;
            Ok(())
        })
    }

    /// The active display language.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub fn config(&self) -> &GvlConfig {
        &self.config
    }

    /// The vendor list index, for queries.
    #[must_use]
    pub fn index(&self) -> &VendorListIndex {
        &self.index
    }

    /// The vendor list index, for narrowing.
    #[must_use]
    pub fn index_mut(&mut self) -> &mut VendorListIndex {
        &mut self.index
    }

    /// Consumes the list, returning its index.
    #[must_use]
    pub fn into_index(self) -> VendorListIndex {
        self.index
    }
}

impl std::fmt::Debug for GlobalVendorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalVendorList")
            .field("config", &self.config)
            .field("language", &self.language)
            .field("vendor_list_version", &self.index.vendor_list_version())
            .field("vendors", &self.index.vendors().len())
            .finish_non_exhaustive()
    }
}

/// Fetches `url` and converts the result into a checked document. A document
/// that does not fit the model is reported as a fetch failure.
async fn fetch_document(
    fetcher: &dyn DocumentFetcher,
    url: &str,
) -> ClientResult<VendorListDocument> {
    let value = fetcher.fetch(url).await?;
    let document = VendorListDocument::from_value(value)
        .map_err(|e| FetchError::new(url, format!("invalid vendor list document: {e}")))?;
    Ok(document)
}
