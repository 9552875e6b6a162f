use std::collections::HashSet;
use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};
use tracing::{debug, instrument};

use crate::error::{Result, ToolError};
use crate::model::{Cell, SheetTable, unnamed_column};

/// Reads the first worksheet of the workbook at `path`.
///
/// The first row becomes the column names; every following row becomes a
/// data row padded to the header width. Columns are counted from `A` even
/// when the leading ones are empty. A worksheet without any cells yields
/// a table with neither columns nor rows.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_table(path: &Path) -> Result<SheetTable> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| ToolError::ReadWorkbook {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| {
            ToolError::InvalidWorkbook(format!("{} has no worksheets", path.display()))
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            ToolError::InvalidWorkbook(format!("{} has no worksheets", path.display()))
        })?
        .map_err(|source| ToolError::ReadWorkbook {
            path: path.to_path_buf(),
            source,
        })?;

    let table = range_to_table(sheet_name, &range);
    debug!(
        columns = table.columns.len(),
        rows = table.row_count(),
        "worksheet loaded"
    );
    Ok(table)
}

fn range_to_table(sheet_name: String, range: &calamine::Range<DataType>) -> SheetTable {
    // The range starts at the first used cell; columns to its left still
    // belong to the sheet.
    let leading = range
        .start()
        .map(|(_, col)| col as usize)
        .unwrap_or(0);

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(first_row) => std::iter::repeat_n(String::new(), leading)
            .chain(first_row.iter().map(|cell| cell_to_value(cell).to_string()))
            .collect(),
        None => return SheetTable::new(sheet_name, Vec::new()),
    };

    let mut table = SheetTable::new(sheet_name, header_names(headers));
    for row in rows {
        table.push_row(
            std::iter::repeat_n(Cell::Empty, leading)
                .chain(row.iter().map(cell_to_value))
                .collect(),
        );
    }
    table
}

/// Turns raw header text into unique column names: empty headers become
/// `Unnamed: <index>` and repeats get a `.1`, `.2`, ... suffix.
pub(crate) fn header_names(raw: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(raw.len());

    for (index, header) in raw.into_iter().enumerate() {
        let base = if header.is_empty() {
            unnamed_column(index)
        } else {
            header
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while taken.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        taken.insert(name.clone());
        names.push(name);
    }

    names
}

fn cell_to_value(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty => Cell::Empty,
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::Float(value) => Cell::Number(*value),
        DataType::Int(value) => Cell::Number(*value as f64),
        DataType::Bool(value) => Cell::Boolean(*value),
        DataType::DateTime(value) => Cell::DateTime(*value),
        DataType::Duration(value) => Cell::Duration(*value),
        other => Cell::Text(other.to_string()),
    }
}
