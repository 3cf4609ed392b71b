use serde::{Deserialize, Serialize};

/// A vendor price-list row. Vendor rows are the source of truth for price
/// data; the matcher looks them up but never mutates them.
///
/// The price is carried as an opaque string: the tool propagates vendor
/// prices, it does not validate them. Numeric rendering happens at write
/// time when the value parses as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorPriceRow {
    pub style: String,
    pub color: String,
    pub size: String,
    pub variant: Option<String>,
    pub price: String,
}

/// A vendor catalog listing carrying the descriptive style name that is
/// searched for the discontinuation marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorListing {
    pub style: String,
    pub color: String,
    pub size: String,
    pub variant: Option<String>,
    pub style_name: String,
}

/// An internal item that received a vendor price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPrice {
    pub item_code: String,
    pub price: String,
    /// True when the size mapper rewrote the size before the key matched.
    pub size_mapped: bool,
}

/// An internal item no vendor price could be found for, with the reason
/// reported on the removed-SKUs sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedItem {
    pub item_code: String,
    pub reason: String,
}

/// Result of one price-matching run. Every input item appears in exactly
/// one of the two partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMatchOutcome {
    pub matched: Vec<MatchedPrice>,
    pub unmatched: Vec<UnmatchedItem>,
}

impl PriceMatchOutcome {
    /// Number of items that entered the match.
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// Matched items whose size code was remapped before matching.
    pub fn size_mapped(&self) -> usize {
        self.matched.iter().filter(|item| item.size_mapped).count()
    }
}

/// Result of one discontinuation run: the item codes flagged for
/// deactivation, in item-master order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivationOutcome {
    pub flagged: Vec<String>,
    /// How many vendor listings carried the discontinuation marker.
    pub discontinued_listings: usize,
}

/// Per-vendor summary row for the price-matching report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorPriceSummary {
    pub vendor: String,
    pub total: usize,
    pub matched: usize,
    pub size_mapped: usize,
    pub removed_items: Vec<UnmatchedItem>,
    /// Name of the per-vendor update file, when one was written.
    pub output_file: Option<String>,
}

impl VendorPriceSummary {
    /// Items dropped from the update because no price matched.
    pub fn removed(&self) -> usize {
        self.total - self.matched
    }

    /// Match rate in percent; zero-item vendors rate as 0.
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64 * 100.0
        }
    }
}

/// Per-vendor summary row for the deactivation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorDeactivationSummary {
    pub vendor: String,
    pub total_items: usize,
    pub discontinued_listings: usize,
    pub deactivated: usize,
    pub output_file: Option<String>,
}
