use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::catalog::tools::error::{Result, ToolError};
use crate::catalog::tools::model::{VendorListing, VendorPriceRow};

/// Column bearing the internal item identifier in price-mode exports.
pub const ITEM_NO_COLUMN: &str = "Item No.";
/// Column bearing the internal item identifier in deactivation exports.
/// Those files carry two header rows, hence [`DEACTIVATION_HEADER_ROW`].
pub const ITEM_CODE_COLUMN: &str = "ItemCode";
/// Header row index for deactivation-mode item-master exports.
pub const DEACTIVATION_HEADER_ROW: usize = 1;

const VENDOR_STYLE_COLUMN: &str = "Vendor Style";
const COLOR_COLUMN: &str = "Color";
const SIZE_COLUMN: &str = "Size";
const VARIABLE_COLUMN: &str = "Variable";
const PRICE_COLUMN: &str = "Price";
const STYLE_NAME_COLUMN: &str = "Style Name";

/// A table of string-coerced rows with named columns, as loaded from the
/// first sheet of a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Resolves a column by name, ignoring case and surrounding whitespace.
    /// Header normalization is this adapter's job; the matchers only ever
    /// see resolved fields.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.columns
            .iter()
            .position(|column| column.trim().to_lowercase() == wanted)
    }

    /// Resolves every requested column or reports all the missing ones in
    /// a single error.
    fn require_columns(&self, names: &[&str]) -> Result<Vec<usize>> {
        let mut indices = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            match self.column_index(name) {
                Some(index) => indices.push(index),
                None => missing.push((*name).to_string()),
            }
        }
        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(ToolError::MissingColumns(missing))
        }
    }
}

/// Reads the first sheet of a workbook into a [`Table`], taking the row at
/// `header_row` as the column headers and everything below as data.
pub fn read_table(path: &Path, header_row: usize) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no sheets".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?
        .map_err(ToolError::from)?;

    let mut rows = range.rows().skip(header_row);
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|cell| cell_to_string(Some(cell))).collect(),
        None => Vec::new(),
    };

    let rows = rows
        .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
        .collect();

    Ok(Table { columns, rows })
}

/// Extracts the identifier column from an item-master export. Rows with an
/// empty identifier cell are skipped.
pub fn read_item_codes(path: &Path, column: &str, header_row: usize) -> Result<Vec<String>> {
    let table = read_table(path, header_row)?;
    let indices = table.require_columns(&[column])?;
    let code_index = indices[0];

    let mut codes = Vec::new();
    for row in &table.rows {
        let code = cell_value(row, code_index);
        if code.trim().is_empty() {
            continue;
        }
        codes.push(code);
    }

    Ok(codes)
}

/// Reads a vendor price list. All five columns are required; the variant
/// becomes `None` when its cell is blank.
pub fn read_vendor_price_rows(path: &Path) -> Result<Vec<VendorPriceRow>> {
    let table = read_table(path, 0)?;
    let indices = table.require_columns(&[
        VENDOR_STYLE_COLUMN,
        COLOR_COLUMN,
        SIZE_COLUMN,
        VARIABLE_COLUMN,
        PRICE_COLUMN,
    ])?;

    let mut vendor_rows = Vec::new();
    for row in &table.rows {
        let style = cell_value(row, indices[0]);
        if style.trim().is_empty() {
            continue;
        }
        vendor_rows.push(VendorPriceRow {
            style,
            color: cell_value(row, indices[1]),
            size: cell_value(row, indices[2]),
            variant: normalize_optional(cell_value(row, indices[3])),
            price: cell_value(row, indices[4]),
        });
    }

    Ok(vendor_rows)
}

/// Reads a vendor catalog listing table for the discontinuation sweep. The
/// `Variable` column is optional here; some vendor exports omit it.
pub fn read_vendor_listings(path: &Path) -> Result<Vec<VendorListing>> {
    let table = read_table(path, 0)?;
    let indices = table.require_columns(&[
        VENDOR_STYLE_COLUMN,
        COLOR_COLUMN,
        SIZE_COLUMN,
        STYLE_NAME_COLUMN,
    ])?;
    let variable_index = table.column_index(VARIABLE_COLUMN);

    let mut listings = Vec::new();
    for row in &table.rows {
        let style = cell_value(row, indices[0]);
        if style.trim().is_empty() {
            continue;
        }
        listings.push(VendorListing {
            style,
            color: cell_value(row, indices[1]),
            size: cell_value(row, indices[2]),
            variant: variable_index.and_then(|index| normalize_optional(cell_value(row, index))),
            style_name: cell_value(row, indices[3]),
        });
    }

    Ok(listings)
}

fn cell_value(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn normalize_optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
