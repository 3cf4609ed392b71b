//! The exact-key joins between the item master and vendor tables.
//!
//! Both entry points are pure functions over their inputs: lookup maps are
//! built fresh per call and nothing outside the returned outcome is
//! touched, so processing runs for different vendors never interact.

use std::collections::{HashMap, HashSet};

use crate::catalog::tools::key::{canonical_key, parse_item_code};
use crate::catalog::tools::model::{
    DeactivationOutcome, MatchedPrice, PriceMatchOutcome, UnmatchedItem, VendorListing,
    VendorPriceRow,
};
use crate::catalog::tools::sizemap::SizeMapConfig;

/// Marker substring identifying discontinued vendor listings, compared
/// case-insensitively against the descriptive style name.
pub const DISCONTINUED_MARKER: &str = "DISCONTINUED";

/// Reason reported for items whose code does not decompose.
pub const REASON_UNPARSEABLE: &str = "Unparseable item code";

/// Reason reported for items with no vendor price on either key tier.
pub const REASON_NO_PRICE: &str = "No matching price found";

/// Joins vendor prices onto internal item codes.
///
/// Vendor rows key two lookup tiers, with and without the variant.
/// Duplicate keys within a tier are last-write-wins (a data-quality
/// condition in the vendor file, not an error). Each internal item is
/// parsed, size-remapped, then resolved against the 4-part tier first and
/// the 3-part tier as fallback. Every input item lands in exactly one of
/// the matched/unmatched partitions.
pub fn match_prices(
    item_codes: &[String],
    vendor_rows: &[VendorPriceRow],
    config: &SizeMapConfig,
) -> PriceMatchOutcome {
    let mut prices_by_key4: HashMap<String, &str> = HashMap::new();
    let mut prices_by_key3: HashMap<String, &str> = HashMap::new();

    for row in vendor_rows {
        let key4 = canonical_key(&row.style, &row.color, &row.size, row.variant.as_deref());
        let key3 = canonical_key(&row.style, &row.color, &row.size, None);
        prices_by_key4.insert(key4, row.price.as_str());
        prices_by_key3.insert(key3, row.price.as_str());
    }

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for code in item_codes {
        let Some(parsed) = parse_item_code(code) else {
            unmatched.push(UnmatchedItem {
                item_code: code.clone(),
                reason: REASON_UNPARSEABLE.to_string(),
            });
            continue;
        };

        let mapped_size = config.map_size(&parsed.style, &parsed.color, &parsed.size);
        let key4 = parsed.key_with_variant(&mapped_size);
        let key3 = parsed.key_without_variant(&mapped_size);

        match prices_by_key4
            .get(&key4)
            .or_else(|| prices_by_key3.get(&key3))
        {
            Some(price) => matched.push(MatchedPrice {
                item_code: code.clone(),
                price: (*price).to_string(),
                size_mapped: mapped_size != parsed.size,
            }),
            None => unmatched.push(UnmatchedItem {
                item_code: code.clone(),
                reason: REASON_NO_PRICE.to_string(),
            }),
        }
    }

    PriceMatchOutcome { matched, unmatched }
}

/// Flags internal items whose vendor listing is marked discontinued.
///
/// Only listings whose style name contains [`DISCONTINUED_MARKER`]
/// participate. Matching is single-tier: each side keys on whatever
/// variant state it carries, no size remapping, and no 4-then-3 fallback.
/// Unparseable item codes are skipped. Output order follows item-master
/// order.
pub fn find_discontinued(
    item_codes: &[String],
    listings: &[VendorListing],
) -> DeactivationOutcome {
    let mut discontinued_keys: HashSet<String> = HashSet::new();
    let mut discontinued_listings = 0usize;

    for listing in listings {
        if !listing
            .style_name
            .to_uppercase()
            .contains(DISCONTINUED_MARKER)
        {
            continue;
        }
        discontinued_listings += 1;
        discontinued_keys.insert(canonical_key(
            &listing.style,
            &listing.color,
            &listing.size,
            listing.variant.as_deref(),
        ));
    }

    let mut flagged = Vec::new();
    if !discontinued_keys.is_empty() {
        for code in item_codes {
            let Some(parsed) = parse_item_code(code) else {
                continue;
            };
            if discontinued_keys.contains(&parsed.key_with_variant(&parsed.size)) {
                flagged.push(code.clone());
            }
        }
    }

    DeactivationOutcome {
        flagged,
        discontinued_listings,
    }
}
