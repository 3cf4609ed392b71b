//! Batch orchestration over all discovered vendor pairs.
//!
//! Each pair is processed in isolation: a failure (missing columns,
//! unreadable workbook) is logged and the pair skipped, so one bad vendor
//! file never aborts the rest of the batch. The aggregate summary covers
//! whichever pairs succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, instrument, warn};

use crate::catalog::tools::discover::{self, FilePair};
use crate::catalog::tools::error::Result;
use crate::catalog::tools::io::excel_read::{
    self, DEACTIVATION_HEADER_ROW, ITEM_CODE_COLUMN, ITEM_NO_COLUMN,
};
use crate::catalog::tools::io::excel_write;
use crate::catalog::tools::matcher;
use crate::catalog::tools::model::{VendorDeactivationSummary, VendorPriceSummary};
use crate::catalog::tools::sizemap::SizeMapConfig;

/// Outcome of a full price-matching batch.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBatchReport {
    /// One entry per vendor pair that processed successfully.
    pub vendors: Vec<VendorPriceSummary>,
    /// The summary workbook, written when at least one pair succeeded.
    pub summary_file: Option<PathBuf>,
}

impl PriceBatchReport {
    pub fn total_items(&self) -> usize {
        self.vendors.iter().map(|vendor| vendor.total).sum()
    }

    pub fn total_matched(&self) -> usize {
        self.vendors.iter().map(|vendor| vendor.matched).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.total_items() - self.total_matched()
    }
}

/// Outcome of a full deactivation batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeactivationBatchReport {
    pub vendors: Vec<VendorDeactivationSummary>,
    pub summary_file: Option<PathBuf>,
}

impl DeactivationBatchReport {
    pub fn total_deactivated(&self) -> usize {
        self.vendors.iter().map(|vendor| vendor.deactivated).sum()
    }
}

/// Runs the price-matching pipeline over every vendor pair found in
/// `input_dir`, writing per-vendor update files and the summary workbook
/// into `output_dir`.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input_dir.display(), output = %output_dir.display())
)]
pub fn run_price_match(
    input_dir: &Path,
    output_dir: &Path,
    config: &SizeMapConfig,
) -> Result<PriceBatchReport> {
    fs::create_dir_all(output_dir)?;

    let pairs = discover::discover_pairs(input_dir)?;
    info!(pair_count = pairs.len(), "discovered vendor file pairs");

    let mut vendors = Vec::new();
    for pair in &pairs {
        match process_price_pair(pair, output_dir, config) {
            Ok(summary) => {
                info!(
                    vendor = %summary.vendor,
                    total = summary.total,
                    matched = summary.matched,
                    removed = summary.removed(),
                    size_mapped = summary.size_mapped,
                    "vendor processed"
                );
                vendors.push(summary);
            }
            Err(error) => warn!(vendor = %pair.vendor, %error, "skipping vendor pair"),
        }
    }

    let summary_file = if vendors.is_empty() {
        None
    } else {
        let path = output_dir.join(timestamped_name("Processing_Summary"));
        excel_write::write_price_summary(&path, &vendors)?;
        info!(file = %path.display(), "summary report written");
        Some(path)
    };

    Ok(PriceBatchReport {
        vendors,
        summary_file,
    })
}

/// Runs the discontinuation sweep over every vendor pair found in
/// `input_dir`, writing per-vendor deactivation files and the summary
/// workbook into `output_dir`.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input_dir.display(), output = %output_dir.display())
)]
pub fn run_deactivation(input_dir: &Path, output_dir: &Path) -> Result<DeactivationBatchReport> {
    fs::create_dir_all(output_dir)?;

    let pairs = discover::discover_pairs(input_dir)?;
    info!(pair_count = pairs.len(), "discovered vendor file pairs");

    let mut vendors = Vec::new();
    for pair in &pairs {
        match process_deactivation_pair(pair, output_dir) {
            Ok(summary) => {
                info!(
                    vendor = %summary.vendor,
                    discontinued = summary.discontinued_listings,
                    deactivated = summary.deactivated,
                    "vendor processed"
                );
                vendors.push(summary);
            }
            Err(error) => warn!(vendor = %pair.vendor, %error, "skipping vendor pair"),
        }
    }

    let summary_file = if vendors.is_empty() {
        None
    } else {
        let path = output_dir.join(timestamped_name("Deactivation_Summary"));
        excel_write::write_deactivation_summary(&path, &vendors)?;
        info!(file = %path.display(), "summary report written");
        Some(path)
    };

    Ok(DeactivationBatchReport {
        vendors,
        summary_file,
    })
}

fn process_price_pair(
    pair: &FilePair,
    output_dir: &Path,
    config: &SizeMapConfig,
) -> Result<VendorPriceSummary> {
    let item_codes = excel_read::read_item_codes(&pair.internal_file, ITEM_NO_COLUMN, 0)?;
    let vendor_rows = excel_read::read_vendor_price_rows(&pair.vendor_file)?;

    let outcome = matcher::match_prices(&item_codes, &vendor_rows, config);

    let output_file = if outcome.matched.is_empty() {
        None
    } else {
        let name = format!("{}_OITM_Updated.xlsx", pair.vendor);
        excel_write::write_price_update(
            &output_dir.join(&name),
            &format!("{}_Updated", pair.vendor),
            &outcome.matched,
        )?;
        Some(name)
    };

    Ok(VendorPriceSummary {
        vendor: pair.vendor.clone(),
        total: outcome.total(),
        matched: outcome.matched.len(),
        size_mapped: outcome.size_mapped(),
        removed_items: outcome.unmatched,
        output_file,
    })
}

fn process_deactivation_pair(pair: &FilePair, output_dir: &Path) -> Result<VendorDeactivationSummary> {
    let item_codes = excel_read::read_item_codes(
        &pair.internal_file,
        ITEM_CODE_COLUMN,
        DEACTIVATION_HEADER_ROW,
    )?;
    let listings = excel_read::read_vendor_listings(&pair.vendor_file)?;

    let outcome = matcher::find_discontinued(&item_codes, &listings);

    let output_file = if outcome.flagged.is_empty() {
        None
    } else {
        let name = format!("{}_DEACTIVATE_DTW.xlsx", pair.vendor);
        excel_write::write_deactivation(&output_dir.join(&name), &outcome.flagged)?;
        Some(name)
    };

    Ok(VendorDeactivationSummary {
        vendor: pair.vendor.clone(),
        total_items: item_codes.len(),
        discontinued_listings: outcome.discontinued_listings,
        deactivated: outcome.flagged.len(),
        output_file,
    })
}

fn timestamped_name(prefix: &str) -> String {
    format!("{prefix}_{}.xlsx", Local::now().format("%Y%m%d_%H%M%S"))
}
