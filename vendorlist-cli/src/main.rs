//! Global Vendor List query tool
//!
//! Loads a vendor list from a local file or from the configured host and
//! prints the vendors matching one index query as JSON.
//!
//! Usage:
//!   gvl --base-url https://vendorlist.example.com/v2/ --query consent --id 1
//!   gvl --file vendor-list.json --narrow 5,6,7 --query feature --id 2
//!
//! Without `--query` a summary of the loaded list is printed.

use std::{fs, path::PathBuf, sync::Arc};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use vendorlist_client::{GlobalVendorList, GvlConfig, HttpFetcher};
use vendorlist_index::{IndexKind, VendorListIndex};
use vendorlist_model::VendorListDocument;

#[derive(Parser, Debug)]
#[command(name = "gvl")]
#[command(about = "Query a Global Vendor List by purpose or feature")]
struct Args {
    /// Base URL of the published vendor lists (overrides GVL_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Read the vendor list from a file instead of fetching it
    #[arg(short, long, conflicts_with = "list_version")]
    file: Option<PathBuf>,

    /// Fetch this archived vendor list version instead of the latest
    #[arg(long = "list-version")]
    list_version: Option<u32>,

    /// Two-letter language for purpose and feature text
    #[arg(short, long)]
    language: Option<String>,

    /// Restrict the active vendors to these ids
    #[arg(long, value_delimiter = ',')]
    narrow: Vec<u32>,

    /// Index to query
    #[arg(short, long, requires = "id")]
    query: Option<Query>,

    /// Purpose or feature id to query
    #[arg(long)]
    id: Option<u32>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Query {
    Consent,
    LegInt,
    Flexible,
    SpecialPurpose,
    Feature,
    SpecialFeature,
}

impl From<Query> for IndexKind {
    fn from(query: Query) -> Self {
        match query {
            Query::Consent => IndexKind::ConsentPurpose,
            Query::LegInt => IndexKind::LegIntPurpose,
            Query::Flexible => IndexKind::FlexiblePurpose,
            Query::SpecialPurpose => IndexKind::SpecialPurpose,
            Query::Feature => IndexKind::Feature,
            Query::SpecialFeature => IndexKind::SpecialFeature,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = GvlConfig::from_env();
    if let Some(base_url) = args.base_url.clone() {
        config.base_url = Some(base_url);
    }
    debug!("Using config {:?}", config);

    let fetcher = Arc::new(HttpFetcher::from_config(&config).context("building HTTP client")?);

    let mut gvl = match &args.file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let document = VendorListDocument::from_json(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            GlobalVendorList::from_document(config, fetcher, document)?
        }
        None => GlobalVendorList::load(config, fetcher, args.list_version)?
            .await
            .context("loading vendor list")?,
    };

    if let Some(language) = &args.language {
        gvl.change_language(language)?
            .await
            .with_context(|| format!("loading {language} translation"))?;
    }

    if !args.narrow.is_empty() {
        gvl.index_mut().narrow_vendors_to(args.narrow.iter().copied())?;
        info!("Narrowed to {} vendors", gvl.index().vendors().len());
    }

    let output = match (args.query, args.id) {
        (Some(query), Some(id)) => query_output(gvl.index(), query.into(), id),
        _ => summary_output(&gvl),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn query_output(index: &VendorListIndex, kind: IndexKind, id: u32) -> serde_json::Value {
    let mut vendors: Vec<_> = index
        .vendors_with(kind, id)
        .into_values()
        .map(|v| (v.id, v.name.clone()))
        .collect();
    vendors.sort_unstable();

    json!({
        "vendorListVersion": index.vendor_list_version(),
        "query": format!("{kind:?}"),
        "id": id,
        "vendors": vendors
            .into_iter()
            .map(|(id, name)| json!({ "id": id, "name": name }))
            .collect::<Vec<_>>(),
    })
}

fn summary_output(gvl: &GlobalVendorList) -> serde_json::Value {
    let index = gvl.index();
    json!({
        "gvlSpecificationVersion": index.gvl_specification_version(),
        "vendorListVersion": index.vendor_list_version(),
        "tcfPolicyVersion": index.tcf_policy_version(),
        "lastUpdated": index.last_updated().to_rfc3339(),
        "language": gvl.language().as_str(),
        "purposes": index.purposes().len(),
        "specialPurposes": index.special_purposes().len(),
        "features": index.features().len(),
        "specialFeatures": index.special_features().len(),
        "stacks": index.stacks().len(),
        "vendors": index.vendors().len(),
        "fullVendors": index.full_vendors().len(),
    })
}
