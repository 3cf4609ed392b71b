use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

use crate::catalog::tools::error::Result;
use crate::catalog::tools::model::{
    MatchedPrice, VendorDeactivationSummary, VendorPriceSummary,
};

/// Header fill for per-vendor price update files.
const UPDATE_HEADER_FILL: u32 = 0x366092;
/// Header fill for summary sheets.
const SUMMARY_HEADER_FILL: u32 = 0x4472C4;
/// Header fill for deactivation and removed-SKU sheets.
const ALERT_HEADER_FILL: u32 = 0xC00000;
/// Fill for per-vendor section rows on the removed-SKUs sheet.
const SECTION_FILL: u32 = 0xFFC000;
/// Fill for the totals row on summary sheets.
const TOTALS_FILL: u32 = 0xE7E6E6;

/// Writes the per-vendor price update table: two identical styled header
/// rows (the bulk-import template expects a duplicated header), then one
/// `ItemCode | U_VendorCost` row per matched item.
pub fn write_price_update(path: &Path, sheet_name: &str, matched: &[MatchedPrice]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let header = header_format(UPDATE_HEADER_FILL, 11.0);
    for row in 0..2u32 {
        worksheet.write_string_with_format(row, 0, "ItemCode", &header)?;
        worksheet.write_string_with_format(row, 1, "U_VendorCost", &header)?;
    }

    let code_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);
    let price_format = Format::new()
        .set_num_format("0.00")
        .set_align(FormatAlign::Right)
        .set_align(FormatAlign::VerticalCenter);

    for (index, item) in matched.iter().enumerate() {
        let row = (index + 2) as u32;
        worksheet.write_string_with_format(row, 0, &item.item_code, &code_format)?;
        match item.price.trim().parse::<f64>() {
            Ok(price) => {
                worksheet.write_number_with_format(row, 1, price, &price_format)?;
            }
            Err(_) => {
                worksheet.write_string_with_format(row, 1, &item.price, &price_format)?;
            }
        }
    }

    worksheet.set_column_width(0, 30.0)?;
    worksheet.set_column_width(1, 18.0)?;
    worksheet.set_freeze_panes(2, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Writes the deactivation table consumed by the bulk-update import:
/// duplicated `ItemCode | frozenFor | validFor` headers, then `Y`/`N`
/// constants for every flagged item.
pub fn write_deactivation(path: &Path, flagged: &[String]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Deactivate")?;

    let header = header_format(ALERT_HEADER_FILL, 11.0);
    let columns = ["ItemCode", "frozenFor", "validFor"];
    for row in 0..2u32 {
        for (col, title) in columns.iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, *title, &header)?;
        }
    }

    let centered = centered_format();
    for (index, item_code) in flagged.iter().enumerate() {
        let row = (index + 2) as u32;
        worksheet.write_string_with_format(row, 0, item_code, &centered)?;
        worksheet.write_string_with_format(row, 1, "Y", &centered)?;
        worksheet.write_string_with_format(row, 2, "N", &centered)?;
    }

    worksheet.set_column_width(0, 35.0)?;
    worksheet.set_column_width(1, 15.0)?;
    worksheet.set_column_width(2, 15.0)?;
    worksheet.set_freeze_panes(2, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Writes the price-matching summary workbook: a per-vendor overview sheet
/// with a totals row, and a detail sheet listing every removed SKU with its
/// reason, grouped under merged vendor section rows.
pub fn write_price_summary(path: &Path, vendors: &[VendorPriceSummary]) -> Result<()> {
    let mut workbook = Workbook::new();

    let header = header_format(SUMMARY_HEADER_FILL, 12.0);
    let centered = centered_format();
    let left = left_format();
    let totals = totals_format();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Processing Summary")?;

        let columns = [
            "Vendor",
            "Total SKUs",
            "Matched SKUs",
            "Match Rate %",
            "Size Mapped",
            "Removed",
            "Output File",
        ];
        for (col, title) in columns.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        let mut row = 1u32;
        for vendor in vendors {
            worksheet.write_string_with_format(row, 0, &vendor.vendor, &centered)?;
            worksheet.write_number_with_format(row, 1, vendor.total as f64, &centered)?;
            worksheet.write_number_with_format(row, 2, vendor.matched as f64, &centered)?;
            worksheet.write_string_with_format(
                row,
                3,
                &format!("{:.1}%", vendor.match_rate()),
                &centered,
            )?;
            if vendor.size_mapped > 0 {
                worksheet.write_number_with_format(row, 4, vendor.size_mapped as f64, &centered)?;
            } else {
                worksheet.write_string_with_format(row, 4, "", &centered)?;
            }
            worksheet.write_number_with_format(row, 5, vendor.removed() as f64, &centered)?;
            worksheet.write_string_with_format(
                row,
                6,
                vendor.output_file.as_deref().unwrap_or(""),
                &left,
            )?;
            row += 1;
        }

        // blank spacer row, then the aggregate totals
        row += 1;
        let total: usize = vendors.iter().map(|vendor| vendor.total).sum();
        let matched: usize = vendors.iter().map(|vendor| vendor.matched).sum();
        let overall_rate = if total == 0 {
            0.0
        } else {
            matched as f64 / total as f64 * 100.0
        };
        worksheet.write_string_with_format(row, 0, "TOTAL", &totals)?;
        worksheet.write_number_with_format(row, 1, total as f64, &totals)?;
        worksheet.write_number_with_format(row, 2, matched as f64, &totals)?;
        worksheet.write_string_with_format(row, 3, &format!("{overall_rate:.1}%"), &totals)?;
        worksheet.write_string_with_format(row, 4, "", &totals)?;
        worksheet.write_number_with_format(row, 5, (total - matched) as f64, &totals)?;
        worksheet.write_string_with_format(row, 6, "", &totals)?;

        for col in 0..6u16 {
            worksheet.set_column_width(col, 15.0)?;
        }
        worksheet.set_column_width(6, 35.0)?;
        worksheet.set_freeze_panes(1, 0)?;
    }

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Removed SKUs")?;

        let removed_header = header_format(ALERT_HEADER_FILL, 12.0);
        let section = Format::new()
            .set_bold()
            .set_font_size(11.0)
            .set_background_color(Color::RGB(SECTION_FILL))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let columns = ["Vendor", "Item No.", "Reason"];
        for (col, title) in columns.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &removed_header)?;
        }

        let mut row = 1u32;
        for vendor in vendors {
            if vendor.removed_items.is_empty() {
                continue;
            }

            worksheet.merge_range(row, 0, row, 2, &vendor.vendor, &section)?;
            row += 1;

            for item in &vendor.removed_items {
                worksheet.write_string_with_format(row, 0, &vendor.vendor, &centered)?;
                worksheet.write_string_with_format(row, 1, &item.item_code, &left)?;
                worksheet.write_string_with_format(row, 2, &item.reason, &centered)?;
                row += 1;
            }

            // blank row between vendors
            row += 1;
        }

        worksheet.set_column_width(0, 15.0)?;
        worksheet.set_column_width(1, 35.0)?;
        worksheet.set_column_width(2, 30.0)?;
        worksheet.set_freeze_panes(1, 0)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Writes the deactivation summary workbook.
pub fn write_deactivation_summary(
    path: &Path,
    vendors: &[VendorDeactivationSummary],
) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Deactivation Summary")?;

    let header = header_format(SUMMARY_HEADER_FILL, 12.0);
    let centered = centered_format();
    let left = left_format();
    let totals = totals_format();

    let columns = [
        "Vendor",
        "Total Items",
        "Discontinued In Vendor List",
        "Items To Deactivate",
        "Output File",
    ];
    for (col, title) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    let mut row = 1u32;
    for vendor in vendors {
        worksheet.write_string_with_format(row, 0, &vendor.vendor, &centered)?;
        worksheet.write_number_with_format(row, 1, vendor.total_items as f64, &centered)?;
        worksheet.write_number_with_format(
            row,
            2,
            vendor.discontinued_listings as f64,
            &centered,
        )?;
        worksheet.write_number_with_format(row, 3, vendor.deactivated as f64, &centered)?;
        worksheet.write_string_with_format(
            row,
            4,
            vendor
                .output_file
                .as_deref()
                .unwrap_or("No items to deactivate"),
            &left,
        )?;
        row += 1;
    }

    row += 1;
    worksheet.write_string_with_format(row, 0, "TOTAL", &totals)?;
    worksheet.write_number_with_format(
        row,
        1,
        vendors.iter().map(|vendor| vendor.total_items).sum::<usize>() as f64,
        &totals,
    )?;
    worksheet.write_number_with_format(
        row,
        2,
        vendors
            .iter()
            .map(|vendor| vendor.discontinued_listings)
            .sum::<usize>() as f64,
        &totals,
    )?;
    worksheet.write_number_with_format(
        row,
        3,
        vendors.iter().map(|vendor| vendor.deactivated).sum::<usize>() as f64,
        &totals,
    )?;
    worksheet.write_string_with_format(row, 4, "", &totals)?;

    worksheet.set_column_width(0, 15.0)?;
    worksheet.set_column_width(1, 20.0)?;
    worksheet.set_column_width(2, 25.0)?;
    worksheet.set_column_width(3, 25.0)?;
    worksheet.set_column_width(4, 40.0)?;
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

fn header_format(fill: u32, font_size: f64) -> Format {
    Format::new()
        .set_bold()
        .set_font_size(font_size)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(fill))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn centered_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn left_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
}

fn totals_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(11.0)
        .set_background_color(Color::RGB(TOTALS_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}
