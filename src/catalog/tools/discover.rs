//! Discovery and pairing of item-master and vendor files.
//!
//! Files pair by a shared vendor code: `V105_OITM.xlsx` pairs with the
//! first vendor file whose name contains `V105` (case-insensitive). The
//! pairing is filename plumbing only; content validation happens when the
//! pair is processed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::catalog::tools::error::Result;

/// Filename token marking an item-master export.
pub const INTERNAL_FILE_TOKEN: &str = "OITM";
/// Filename tokens marking vendor catalog files.
pub const VENDOR_FILE_TOKENS: &[&str] = &["VPL", "DTW"];

/// An item-master file paired with its vendor counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    /// Vendor code shared by both filenames, e.g. `V105`.
    pub vendor: String,
    pub internal_file: PathBuf,
    pub vendor_file: PathBuf,
}

/// Scans a directory and pairs every item-master file with a vendor file.
///
/// Item-master files with no vendor counterpart are reported with a
/// warning and skipped; they never abort the batch. File lists are sorted
/// by name so "first match wins" is deterministic across runs.
pub fn discover_pairs(input_dir: &Path) -> Result<Vec<FilePair>> {
    let mut internal_files = Vec::new();
    let mut vendor_files = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        // Excel lock files appear while a workbook is open in Excel.
        if name.starts_with("~$") || !name.ends_with(".xlsx") {
            continue;
        }

        if name.contains(INTERNAL_FILE_TOKEN) {
            internal_files.push(path);
        } else if VENDOR_FILE_TOKENS.iter().any(|token| name.contains(token)) {
            vendor_files.push(path);
        }
    }

    internal_files.sort();
    vendor_files.sort();

    let mut pairs = Vec::new();
    for internal_file in internal_files {
        let vendor = vendor_code(&internal_file);
        let wanted = vendor.to_lowercase();

        let matching = vendor_files.iter().find(|candidate| {
            candidate
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.to_lowercase().contains(&wanted))
        });

        match matching {
            Some(vendor_file) => pairs.push(FilePair {
                vendor,
                internal_file,
                vendor_file: vendor_file.clone(),
            }),
            None => warn!(
                file = %internal_file.display(),
                "no vendor file found for item-master file, skipping"
            ),
        }
    }

    Ok(pairs)
}

/// The vendor code is the filename stem up to the first underscore.
fn vendor_code(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    stem.split('_').next().unwrap_or(stem).to_string()
}
