//! Excel export of a finished report

mod formatting;

use anyhow::{Context, Result};
use rust_xlsxwriter::*;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::graph::Cell;
use crate::report::Report;
use crate::table::FormattedTable;
use formatting::{HighlightFormats, create_header_format};

/// Excel limit on sheet name length
const MAX_SHEET_NAME: usize = 31;
/// Excel limit on characters in one cell
const MAX_CELL_TEXT: usize = 32_767;

/// Write every sheet of `report` to `file_path`, in sheet name order
pub fn write_report(report: &Report, file_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let mut used = HashSet::new();

    for (name, table) in &report.sheets {
        let sheet_name = unique_sheet_name(name, &mut used);
        if sheet_name != *name {
            log::warn!("Sheet '{}' written as '{}'", name, sheet_name);
        }
        write_sheet(&mut workbook, &sheet_name, table)
            .with_context(|| format!("Failed to write sheet '{}'", name))?;
    }

    workbook
        .save(file_path)
        .with_context(|| format!("Failed to save Excel file: {}", file_path.display()))?;

    log::info!("Excel file exported to: {}", file_path.display());
    Ok(())
}

fn write_sheet(workbook: &mut Workbook, name: &str, table: &FormattedTable) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;

    let header_format = create_header_format();
    let highlights = HighlightFormats::new();

    for (col, column) in table.columns().iter().enumerate() {
        let col = u16::try_from(col).context("Too many columns for one sheet")?;
        sheet.write_string_with_format(0, col, column.name.as_str(), &header_format)?;

        for (row, cell) in column.cells.iter().enumerate() {
            let row = u32::try_from(row + 1).context("Too many rows for one sheet")?;
            let format = cell.highlight.map(|highlight| highlights.get(highlight));
            write_cell(sheet, row, col, &cell.value, format)?;
        }
    }

    sheet.autofit();
    log::debug!(
        "Wrote sheet '{}': {} rows, {} columns",
        name,
        table.rows(),
        table.columns().len()
    );
    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell, format: Option<&Format>) -> Result<()> {
    match (cell.to_json(), format) {
        (Value::Null, Some(format)) => {
            sheet.write_blank(row, col, format)?;
        }
        (Value::Null, None) => {}
        (Value::Bool(flag), Some(format)) => {
            sheet.write_boolean_with_format(row, col, flag, format)?;
        }
        (Value::Bool(flag), None) => {
            sheet.write_boolean(row, col, flag)?;
        }
        (Value::Number(number), format) if number.as_f64().is_some() => {
            let number = number.as_f64().unwrap_or_default();
            match format {
                Some(format) => sheet.write_number_with_format(row, col, number, format)?,
                None => sheet.write_number(row, col, number)?,
            };
        }
        (value, format) => {
            let text = cell_text(&value);
            match format {
                Some(format) => sheet.write_string_with_format(row, col, text, format)?,
                None => sheet.write_string(row, col, text)?,
            };
        }
    }
    Ok(())
}

/// Text shown for strings, lists and records
fn cell_text(value: &Value) -> String {
    let text = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    if text.chars().count() > MAX_CELL_TEXT {
        text.chars().take(MAX_CELL_TEXT).collect()
    } else {
        text
    }
}

/// Sheet name within Excel's length limit, not yet in `used`
///
/// Excel compares sheet names case-insensitively, so `used` holds lowercased
/// names. Names that collide after truncation get a `~2`, `~3`... suffix.
fn unique_sheet_name(name: &str, used: &mut HashSet<String>) -> String {
    let mut candidate: String = name.chars().take(MAX_SHEET_NAME).collect();
    let mut counter = 2;
    while !used.insert(candidate.to_lowercase()) {
        let suffix = format!("~{}", counter);
        candidate = name
            .chars()
            .take(MAX_SHEET_NAME - suffix.len())
            .chain(suffix.chars())
            .collect();
        counter += 1;
    }
    candidate
}
