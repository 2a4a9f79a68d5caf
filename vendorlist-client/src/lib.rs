//! Loading Global Vendor Lists over the network.
//!
//! This crate connects the synchronous [`VendorListIndex`] to a
//! [`DocumentFetcher`] that retrieves vendor list and translation documents:
//!
//! - [`GvlConfig`] holds the base URL and the file name templates
//! - [`Language`] is a validated two-letter language code
//! - [`HttpFetcher`] is the `reqwest` implementation of [`DocumentFetcher`]
//! - [`GlobalVendorList`] owns the index and the active language
//!
//! # Readiness
//!
//! Operations that need a fetch return in two stages. Configuration and
//! argument errors are returned immediately from the call. Otherwise the call
//! returns a future that resolves once the fetched document is loaded, or
//! with the fetch failure. Each call gets its own future.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vendorlist_client::{GlobalVendorList, GvlConfig, HttpFetcher};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GvlConfig::with_base_url("https://vendorlist.example.com/v2/");
//! let fetcher = Arc::new(HttpFetcher::from_config(&config)?);
//!
//! let mut gvl = GlobalVendorList::load_latest(config, fetcher)?.await?;
//! gvl.change_language("fr")?.await?;
//!
//! let consent = gvl.index().vendors_with_consent_purpose(1);
//! println!("{} vendors ask consent for purpose 1", consent.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`VendorListIndex`]: vendorlist_index::VendorListIndex

mod config;
mod error;
mod fetch;
mod gvl;
mod language;

pub use config::GvlConfig;
pub use error::{ClientError, ClientResult, FetchError};
pub use fetch::{DocumentFetcher, HttpFetcher};
pub use gvl::GlobalVendorList;
pub use language::Language;
