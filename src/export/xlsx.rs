use crate::domain::model::SheetTable;
use crate::utils::error::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct SheetStyle {
    pub column_width: f64,
    pub font_size: f64,
}

/// Builds the output filename: `{prefix}_{YYYY-MM-DD_HH-MM-SS}.xlsx`, local
/// time, second precision.
pub fn timestamped_filename(prefix: &str) -> String {
    format!(
        "{}_{}.xlsx",
        prefix,
        chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Writes the table to a single worksheet. Every used column gets the
/// configured width, header and data cells the configured font size.
pub fn write_table(table: &SheetTable, path: &Path, style: &SheetStyle) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let format = Format::new().set_font_size(style.font_size);

    for (col, name) in table.columns.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, name, &format)?;
        worksheet.set_column_width(col, style.column_width)?;
    }

    for (row, cells) in table.rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if !cell.is_empty() {
                worksheet.write_string_with_format(row as u32 + 1, col as u16, cell, &format)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
