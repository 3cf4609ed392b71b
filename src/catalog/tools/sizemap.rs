//! Conditional, vendor-specific size-code remapping.
//!
//! Some vendors list garment sizes with a "G" suffix scheme (`LG` where the
//! item master says `L`). The remapping applies only to an allow-list of
//! styles, or style+color pairs, consulted in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single remapping rule. A bare style matches every color of that style;
/// a rule carrying a color matches only that exact style+color combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRule {
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl SizeRule {
    /// Rule applying to every color of a style.
    pub fn style(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            color: None,
        }
    }

    /// Rule applying to one exact style+color combination.
    pub fn style_color(style: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            color: Some(color.into()),
        }
    }

    fn matches(&self, style: &str, color: &str) -> bool {
        match &self.color {
            Some(rule_color) => self.style == style && rule_color == color,
            None => self.style == style,
        }
    }
}

/// The active remapping configuration: an ordered rule list plus the size
/// translation table. Passed explicitly into the matcher so the core stays
/// pure and testable; the CLI can load an override from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeMapConfig {
    /// Rules consulted in order; the first match wins.
    pub rules: Vec<SizeRule>,
    /// Size translations. Sizes absent from the table pass through.
    pub sizes: BTreeMap<String, String>,
}

impl Default for SizeMapConfig {
    fn default() -> Self {
        let sizes = [
            ("XS", "XSM"),
            ("S", "SM"),
            ("M", "MD"),
            ("L", "LG"),
            ("XL", "XLG"),
            ("2XL", "2XLG"),
            ("3XL", "3XLG"),
            ("4XL", "4XLG"),
            ("5XL", "5XLG"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();

        Self {
            rules: vec![
                SizeRule::style("2278"),
                SizeRule::style("3483"),
                SizeRule::style_color("2795", "SILVER"),
            ],
            sizes,
        }
    }
}

impl SizeMapConfig {
    /// Remaps a size code when the first matching rule designates the
    /// style (or style+color) for translation; otherwise returns the size
    /// unchanged. Rule comparison is exact on the parsed fields.
    pub fn map_size(&self, style: &str, color: &str, size: &str) -> String {
        for rule in &self.rules {
            if rule.matches(style, color) {
                return self
                    .sizes
                    .get(size)
                    .cloned()
                    .unwrap_or_else(|| size.to_string());
            }
        }

        size.to_string()
    }
}
