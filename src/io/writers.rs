use chrono::NaiveDate;
use polars::prelude::*;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

use crate::error::{PrepError, PrepResult};

// Offset between 0001-01-01 (chrono day 1) and the 1970-01-01 epoch that
// Date columns count from.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Write the full table to a single-worksheet workbook, header row first,
/// no index column. An existing file at `path` is overwritten.
pub fn write_xlsx(df: &DataFrame, path: &Path) -> PrepResult<()> {
    let wr = |e: XlsxError| PrepError::Write(e.to_string());

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = col_idx as u16;
        worksheet
            .write_string(0, col, column.name().as_str())
            .map_err(wr)?;

        let series = column.as_materialized_series();
        for row_idx in 0..series.len() {
            let row = (row_idx + 1) as u32;
            match series.get(row_idx)? {
                AnyValue::Null => {}
                AnyValue::String(v) => {
                    worksheet.write_string(row, col, v).map_err(wr)?;
                }
                AnyValue::StringOwned(v) => {
                    worksheet.write_string(row, col, v.as_str()).map_err(wr)?;
                }
                AnyValue::Int32(v) => {
                    worksheet.write_number(row, col, f64::from(v)).map_err(wr)?;
                }
                AnyValue::Int64(v) => {
                    worksheet.write_number(row, col, v as f64).map_err(wr)?;
                }
                AnyValue::Float64(v) => {
                    worksheet.write_number(row, col, v).map_err(wr)?;
                }
                AnyValue::Boolean(v) => {
                    worksheet.write_boolean(row, col, v).map_err(wr)?;
                }
                AnyValue::Date(days) => {
                    worksheet
                        .write_string(row, col, format_epoch_days(days))
                        .map_err(wr)?;
                }
                other => {
                    worksheet
                        .write_string(row, col, other.to_string())
                        .map_err(wr)?;
                }
            }
        }
    }

    workbook
        .save(path)
        .map_err(|e| PrepError::Write(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

fn format_epoch_days(days: i32) -> String {
    NaiveDate::from_num_days_from_ce_opt(days + EPOCH_DAYS_FROM_CE)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| days.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_epoch_days() {
        assert_eq!(format_epoch_days(0), "1970-01-01");
        assert_eq!(format_epoch_days(18895), "2021-09-25");
        assert_eq!(format_epoch_days(-1), "1969-12-31");
    }
}
