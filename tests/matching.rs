use catalog_tools::key::{canonical_key, parse_item_code};
use catalog_tools::matcher::{self, REASON_NO_PRICE, REASON_UNPARSEABLE};
use catalog_tools::model::{VendorListing, VendorPriceRow};
use catalog_tools::sizemap::{SizeMapConfig, SizeRule};

fn price_row(
    style: &str,
    color: &str,
    size: &str,
    variant: Option<&str>,
    price: &str,
) -> VendorPriceRow {
    VendorPriceRow {
        style: style.to_string(),
        color: color.to_string(),
        size: size.to_string(),
        variant: variant.map(str::to_string),
        price: price.to_string(),
    }
}

fn listing(
    style: &str,
    color: &str,
    size: &str,
    variant: Option<&str>,
    style_name: &str,
) -> VendorListing {
    VendorListing {
        style: style.to_string(),
        color: color.to_string(),
        size: size.to_string(),
        variant: variant.map(str::to_string),
        style_name: style_name.to_string(),
    }
}

fn codes(items: &[&str]) -> Vec<String> {
    items.iter().map(|code| code.to_string()).collect()
}

#[test]
fn three_segment_codes_parse_without_variant() {
    let parsed = parse_item_code("2278-NAVY-L").expect("code parsed");

    assert_eq!(parsed.style, "2278");
    assert_eq!(parsed.color, "NAVY");
    assert_eq!(parsed.size, "L");
    assert_eq!(parsed.variant, None);
}

#[test]
fn four_segment_codes_populate_all_fields() {
    let parsed = parse_item_code("2278-NAVY-L-1").expect("code parsed");

    assert_eq!(parsed.style, "2278");
    assert_eq!(parsed.color, "NAVY");
    assert_eq!(parsed.size, "L");
    assert_eq!(parsed.variant.as_deref(), Some("1"));
}

#[test]
fn long_codes_fold_middle_segments_into_color() {
    let parsed = parse_item_code("10-ROYAL-BLUE-HEATHER-XL-2").expect("code parsed");

    assert_eq!(parsed.style, "10");
    assert_eq!(parsed.color, "ROYAL-BLUE-HEATHER");
    assert_eq!(parsed.size, "XL");
    assert_eq!(parsed.variant.as_deref(), Some("2"));
}

#[test]
fn short_codes_do_not_parse() {
    assert_eq!(parse_item_code("2278-NAVY"), None);
    assert_eq!(parse_item_code("2278"), None);
    assert_eq!(parse_item_code(""), None);
}

#[test]
fn canonical_key_is_idempotent() {
    let key = canonical_key(" 2278 ", "navy", "l", Some("1"));
    assert_eq!(key, "2278|NAVY|L|1");

    let again = canonical_key("2278", "NAVY", "L", Some("1"));
    assert_eq!(key, again);
}

#[test]
fn placeholder_variants_collapse_to_three_part_key() {
    let bare = canonical_key("A", "RED", "M", None);

    assert_eq!(canonical_key("A", "RED", "M", Some("")), bare);
    assert_eq!(canonical_key("A", "RED", "M", Some("  ")), bare);
    assert_eq!(canonical_key("A", "RED", "M", Some("none")), bare);
    assert_eq!(canonical_key("A", "RED", "M", Some("NONE")), bare);
    assert_eq!(canonical_key("A", "RED", "M", Some("nan")), bare);
    assert_eq!(bare, "A|RED|M");
}

#[test]
fn four_part_key_matches_before_fallback() {
    let items = codes(&["A-RED-M-1"]);
    let vendor = vec![
        price_row("A", "RED", "M", Some("1"), "10.00"),
        price_row("A", "RED", "M", None, "8.00"),
    ];

    let outcome = matcher::match_prices(&items, &vendor, &SizeMapConfig::default());

    assert_eq!(outcome.matched.len(), 1);
    assert_eq!(outcome.matched[0].price, "10.00");
}

#[test]
fn three_part_fallback_matches_other_variants() {
    let items = codes(&["A-RED-M-2"]);
    let vendor = vec![
        price_row("A", "RED", "M", Some("1"), "10.00"),
        price_row("A", "RED", "M", None, "8.00"),
    ];

    let outcome = matcher::match_prices(&items, &vendor, &SizeMapConfig::default());

    assert_eq!(outcome.matched.len(), 1);
    assert_eq!(outcome.matched[0].price, "8.00");
}

#[test]
fn every_item_lands_in_exactly_one_partition() {
    let items = codes(&["A-RED-M-1", "B-BLUE-S", "BADCODE"]);
    let vendor = vec![price_row("A", "RED", "M", Some("1"), "10.00")];

    let outcome = matcher::match_prices(&items, &vendor, &SizeMapConfig::default());

    assert_eq!(outcome.total(), 3);
    assert_eq!(outcome.matched.len(), 1);
    assert_eq!(outcome.unmatched.len(), 2);
    assert_eq!(outcome.unmatched[0].item_code, "B-BLUE-S");
    assert_eq!(outcome.unmatched[0].reason, REASON_NO_PRICE);
    assert_eq!(outcome.unmatched[1].item_code, "BADCODE");
    assert_eq!(outcome.unmatched[1].reason, REASON_UNPARSEABLE);
}

#[test]
fn duplicate_vendor_keys_keep_the_last_price() {
    let items = codes(&["A-RED-M-1"]);
    let vendor = vec![
        price_row("A", "RED", "M", Some("1"), "10.00"),
        price_row("A", "RED", "M", Some("1"), "11.50"),
    ];

    let outcome = matcher::match_prices(&items, &vendor, &SizeMapConfig::default());

    assert_eq!(outcome.matched[0].price, "11.50");
}

#[test]
fn designated_styles_rewrite_sizes() {
    let config = SizeMapConfig::default();

    assert_eq!(config.map_size("2278", "NAVY", "L"), "LG");
    assert_eq!(config.map_size("9999", "NAVY", "L"), "L");
    assert_eq!(config.map_size("2795", "SILVER", "XL"), "XLG");
    assert_eq!(config.map_size("2795", "BLUE", "XL"), "XL");
}

#[test]
fn sizes_missing_from_the_table_pass_through() {
    let config = SizeMapConfig::default();

    assert_eq!(config.map_size("2278", "NAVY", "OSFA"), "OSFA");
}

#[test]
fn paired_rule_does_not_shadow_a_later_bare_rule() {
    let config = SizeMapConfig {
        rules: vec![
            SizeRule::style_color("2278", "BLUE"),
            SizeRule::style("2278"),
        ],
        sizes: SizeMapConfig::default().sizes,
    };

    // GREEN misses the paired rule but hits the bare one.
    assert_eq!(config.map_size("2278", "GREEN", "L"), "LG");
}

#[test]
fn size_mapping_applies_during_price_matching() {
    let items = codes(&["2278-NAVY-L"]);
    let vendor = vec![price_row("2278", "NAVY", "LG", None, "12.50")];

    let outcome = matcher::match_prices(&items, &vendor, &SizeMapConfig::default());

    assert_eq!(outcome.matched.len(), 1);
    assert!(outcome.matched[0].size_mapped);
    assert_eq!(outcome.size_mapped(), 1);
}

#[test]
fn discontinued_marker_flags_matching_items() {
    let items = codes(&["B-BLUE-S", "B-BLUE-M"]);
    let vendor = vec![
        listing("B", "BLUE", "S", None, "Classic Tee - DISCONTINUED"),
        listing("B", "BLUE", "M", None, "Classic Tee"),
    ];

    let outcome = matcher::find_discontinued(&items, &vendor);

    assert_eq!(outcome.flagged, vec!["B-BLUE-S".to_string()]);
    assert_eq!(outcome.discontinued_listings, 1);
}

#[test]
fn marker_detection_ignores_case() {
    let items = codes(&["B-BLUE-S"]);
    let vendor = vec![listing("B", "BLUE", "S", None, "Classic Tee (discontinued)")];

    let outcome = matcher::find_discontinued(&items, &vendor);

    assert_eq!(outcome.flagged.len(), 1);
}

#[test]
fn discontinuation_matching_is_single_tier() {
    // A variant-less discontinued listing must not sweep up the variant
    // item: unlike price matching there is no 4-then-3 fallback.
    let items = codes(&["B-BLUE-S-1"]);
    let vendor = vec![listing("B", "BLUE", "S", None, "Classic Tee - DISCONTINUED")];

    let outcome = matcher::find_discontinued(&items, &vendor);

    assert!(outcome.flagged.is_empty());
    assert_eq!(outcome.discontinued_listings, 1);
}

#[test]
fn flagged_items_follow_item_master_order() {
    let items = codes(&["C-GREEN-L", "A-RED-M", "B-BLUE-S"]);
    let vendor = vec![
        listing("A", "RED", "M", None, "Cap DISCONTINUED"),
        listing("C", "GREEN", "L", None, "Jacket DISCONTINUED"),
    ];

    let outcome = matcher::find_discontinued(&items, &vendor);

    assert_eq!(
        outcome.flagged,
        vec!["C-GREEN-L".to_string(), "A-RED-M".to_string()]
    );
}

#[test]
fn hundred_item_run_matches_seventy() {
    let items: Vec<String> = (0..100).map(|i| format!("ST{i}-RED-M-1")).collect();

    let mut vendor = Vec::new();
    for i in 0..60 {
        vendor.push(price_row(&format!("ST{i}"), "RED", "M", Some("1"), "10.00"));
    }
    for i in 60..70 {
        vendor.push(price_row(&format!("ST{i}"), "RED", "M", None, "8.00"));
    }

    let outcome = matcher::match_prices(&items, &vendor, &SizeMapConfig::default());

    assert_eq!(outcome.matched.len(), 70);
    assert_eq!(outcome.unmatched.len(), 30);
    assert_eq!(outcome.total(), 100);
}
