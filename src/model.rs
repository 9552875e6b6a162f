use std::fmt;

/// Name given to the single worksheet of every workbook we write.
pub const OUTPUT_SHEET: &str = "Sheet1";

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value in the source, or a column the source row did not have.
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Excel serial date, kept numeric so it can be written back as a date.
    DateTime(f64),
    /// Excel duration in days, written back with an elapsed-time format.
    Duration(f64),
}

impl Cell {
    /// Returns `true` when the cell is missing or its text form holds nothing
    /// but whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(value) => value.trim().is_empty(),
            Cell::Number(_) | Cell::Boolean(_) | Cell::DateTime(_) | Cell::Duration(_) => false,
        }
    }
}

/// Text coercion used for blankness checks and header names. Missing cells
/// render as the empty string.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(value) => f.write_str(value),
            Cell::Number(value) | Cell::DateTime(value) | Cell::Duration(value) => {
                write!(f, "{value}")
            }
            Cell::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// A table read from, or about to be written to, a worksheet.
///
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetTable {
    pub sheet_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    pub fn new(sheet_name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding it with [`Cell::Empty`] or truncating it to the
    /// column count.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Name used for a column whose header cell is empty.
pub fn unnamed_column(index: usize) -> String {
    format!("Unnamed: {index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_text_is_blank() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::Text(String::new()).is_blank());
        assert!(Cell::Text(" \t\u{a0}\n".into()).is_blank());
        assert!(!Cell::Text(" x ".into()).is_blank());
    }

    #[test]
    fn non_text_values_are_never_blank() {
        assert!(!Cell::Number(0.0).is_blank());
        assert!(!Cell::Boolean(false).is_blank());
        assert!(!Cell::DateTime(45000.0).is_blank());
        assert!(!Cell::Duration(0.0).is_blank());
    }

    #[test]
    fn display_coerces_to_text() {
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::Number(3.0).to_string(), "3");
        assert_eq!(Cell::Number(2.5).to_string(), "2.5");
        assert_eq!(Cell::Boolean(true).to_string(), "true");
    }

    #[test]
    fn push_row_pads_to_column_count() {
        let mut table = SheetTable::new("Sheet1", vec!["A".into(), "B".into()]);
        table.push_row(vec![Cell::Number(1.0)]);
        assert_eq!(table.rows[0], vec![Cell::Number(1.0), Cell::Empty]);
    }
}
