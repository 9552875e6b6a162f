use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Cell, SheetTable};

/// Number format applied to date cells carried over from the inputs.
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
/// Number format applied to duration cells.
const DURATION_FORMAT: &str = "[h]:mm:ss";

/// Writes the table as the only worksheet of a new workbook at `path`,
/// replacing any file already there.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_table(path: &Path, table: &SheetTable) -> Result<()> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format(DATETIME_FORMAT);
    let duration_format = Format::new().set_num_format(DURATION_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.sheet_name)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let excel_col = col_idx as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(value) => {
                    worksheet.write_string(excel_row, excel_col, value)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(excel_row, excel_col, *value)?;
                }
                Cell::Boolean(value) => {
                    worksheet.write_boolean(excel_row, excel_col, *value)?;
                }
                Cell::DateTime(value) => {
                    worksheet.write_number_with_format(excel_row, excel_col, *value, &date_format)?;
                }
                Cell::Duration(value) => {
                    worksheet.write_number_with_format(
                        excel_row,
                        excel_col,
                        *value,
                        &duration_format,
                    )?;
                }
            }
        }
    }

    workbook.save(path)?;
    debug!(
        columns = table.columns.len(),
        rows = table.row_count(),
        "workbook saved"
    );
    Ok(())
}
