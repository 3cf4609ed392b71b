//! Item-code parsing and canonical key construction.
//!
//! An item code is a hyphen-delimited composite identifier of the form
//! `STYLE-COLOR-SIZE[-VARIANT]`, where the color may itself contain hyphens.
//! Canonical keys are the pipe-delimited join of the normalized components
//! and are the only values the matchers ever compare.

use serde::{Deserialize, Serialize};

/// Variant spellings that mean "no variant" once trimmed and uppercased.
const ABSENT_VARIANT_TOKENS: &[&str] = &["", "NONE", "NAN"];

/// The component fields of a decomposed item code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCode {
    pub style: String,
    pub color: String,
    pub size: String,
    /// Present only when the code has four or more segments.
    pub variant: Option<String>,
}

/// Decomposes an item code into its component fields.
///
/// Codes with fewer than three hyphen-delimited segments do not decompose
/// and yield `None`; callers exclude such items from matching. With more
/// than four segments the middle segments belong to the color.
pub fn parse_item_code(code: &str) -> Option<ParsedCode> {
    let parts: Vec<&str> = code.split('-').collect();

    match parts.len() {
        0..=2 => None,
        3 => Some(ParsedCode {
            style: parts[0].to_string(),
            color: parts[1].to_string(),
            size: parts[2].to_string(),
            variant: None,
        }),
        4 => Some(ParsedCode {
            style: parts[0].to_string(),
            color: parts[1].to_string(),
            size: parts[2].to_string(),
            variant: Some(parts[3].to_string()),
        }),
        n => Some(ParsedCode {
            style: parts[0].to_string(),
            color: parts[1..n - 2].join("-"),
            size: parts[n - 2].to_string(),
            variant: Some(parts[n - 1].to_string()),
        }),
    }
}

/// Builds the canonical lookup key for a style/color/size/variant tuple.
///
/// Each field is trimmed and uppercased. The variant is dropped entirely
/// when it is missing or normalizes to an empty/`NONE`/`NAN` token, so the
/// key degrades from `STYLE|COLOR|SIZE|VARIANT` to `STYLE|COLOR|SIZE`.
/// The asymmetric shape is intentional: a variant-less vendor listing keys
/// identically to the 3-part form of any internal item, and variant-aware
/// matching is the matcher's two-tier lookup, not this function alone.
pub fn canonical_key(style: &str, color: &str, size: &str, variant: Option<&str>) -> String {
    let style = normalize_field(style);
    let color = normalize_field(color);
    let size = normalize_field(size);

    match variant.map(normalize_field).filter(|v| !is_absent_variant(v)) {
        Some(variant) => format!("{style}|{color}|{size}|{variant}"),
        None => format!("{style}|{color}|{size}"),
    }
}

impl ParsedCode {
    /// Canonical key including the variant tier, with an explicit size so
    /// callers can key on a remapped size code.
    pub fn key_with_variant(&self, size: &str) -> String {
        canonical_key(&self.style, &self.color, size, self.variant.as_deref())
    }

    /// Canonical key for the variant-less fallback tier.
    pub fn key_without_variant(&self, size: &str) -> String {
        canonical_key(&self.style, &self.color, size, None)
    }
}

fn normalize_field(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn is_absent_variant(normalized: &str) -> bool {
    ABSENT_VARIANT_TOKENS.contains(&normalized)
}
