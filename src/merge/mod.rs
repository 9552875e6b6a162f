//! Table concatenation and blank-row filtering.

use std::collections::HashMap;

use crate::model::{Cell, OUTPUT_SHEET, SheetTable, unnamed_column};

/// How rows from addend tables are matched to the output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlignment {
    /// Match cells by header name; the output holds the union of all columns
    /// in order of first appearance.
    #[default]
    ByName,
    /// Match cells by column index; the output keeps the first table's
    /// headers and ignores the headers of the others.
    ByPosition,
}

/// Concatenates `tables` in order using the requested alignment.
///
/// An empty slice yields an empty table.
pub fn concat(tables: &[SheetTable], alignment: ColumnAlignment) -> SheetTable {
    match alignment {
        ColumnAlignment::ByName => concat_by_name(tables),
        ColumnAlignment::ByPosition => concat_by_position(tables),
    }
}

/// Stacks rows under the union of every table's columns. Cells for columns a
/// source table does not have are [`Cell::Empty`].
pub fn concat_by_name(tables: &[SheetTable]) -> SheetTable {
    let mut columns: Vec<String> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for table in tables {
        for column in &table.columns {
            if !positions.contains_key(column) {
                positions.insert(column.clone(), columns.len());
                columns.push(column.clone());
            }
        }
    }

    let mut merged = SheetTable::new(OUTPUT_SHEET, columns);
    merged.rows.reserve(tables.iter().map(SheetTable::row_count).sum());

    for table in tables {
        let targets: Vec<usize> = table
            .columns
            .iter()
            .map(|column| positions[column])
            .collect();

        for row in &table.rows {
            let mut merged_row = vec![Cell::Empty; merged.columns.len()];
            for (cell, &target) in row.iter().zip(&targets) {
                merged_row[target] = cell.clone();
            }
            merged.rows.push(merged_row);
        }
    }

    merged
}

/// Stacks rows column by column under the first table's headers. Columns
/// beyond the first table's width are named `Unnamed: <index>`.
pub fn concat_by_position(tables: &[SheetTable]) -> SheetTable {
    let mut columns = tables
        .first()
        .map(|table| table.columns.clone())
        .unwrap_or_default();
    let width = tables
        .iter()
        .map(|table| table.columns.len())
        .max()
        .unwrap_or(0);

    for index in columns.len()..width {
        let mut name = unnamed_column(index);
        let mut suffix = 1;
        while columns.contains(&name) {
            name = format!("{}.{suffix}", unnamed_column(index));
            suffix += 1;
        }
        columns.push(name);
    }

    let mut merged = SheetTable::new(OUTPUT_SHEET, columns);
    for table in tables {
        for row in &table.rows {
            merged.push_row(row.clone());
        }
    }
    merged
}

/// Returns `true` when every cell of the row is blank.
pub fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}

/// Removes blank rows in place, keeping the order of the rest, and returns
/// how many were removed.
pub fn drop_blank_rows(table: &mut SheetTable) -> usize {
    let before = table.rows.len();
    table.rows.retain(|row| !is_blank_row(row));
    before - table.rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: Vec<Vec<Cell>>) -> SheetTable {
        let mut table = SheetTable::new(
            "Sheet1",
            columns.iter().map(|column| column.to_string()).collect(),
        );
        for row in rows {
            table.push_row(row);
        }
        table
    }

    fn num(value: f64) -> Cell {
        Cell::Number(value)
    }

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    #[test]
    fn union_keeps_first_appearance_order() {
        let base = table(&["A", "B"], vec![vec![num(1.0), num(2.0)]]);
        let addend = table(&["B", "C"], vec![vec![num(3.0), num(4.0)]]);

        let merged = concat_by_name(&[base, addend]);

        assert_eq!(merged.columns, vec!["A", "B", "C"]);
        assert_eq!(
            merged.rows,
            vec![
                vec![num(1.0), num(2.0), Cell::Empty],
                vec![Cell::Empty, num(3.0), num(4.0)],
            ]
        );
    }

    #[test]
    fn reordered_columns_align_by_name() {
        let base = table(&["A", "B"], vec![vec![num(1.0), num(2.0)]]);
        let addend = table(&["B", "A"], vec![vec![num(20.0), num(10.0)]]);

        let merged = concat(&[base, addend], ColumnAlignment::ByName);

        assert_eq!(merged.rows[1], vec![num(10.0), num(20.0)]);
    }

    #[test]
    fn positional_concat_ignores_addend_headers() {
        let base = table(&["A", "B"], vec![vec![num(1.0), num(2.0)]]);
        let addend = table(
            &["X", "Y", "Z"],
            vec![vec![num(3.0), num(4.0), text("extra")]],
        );

        let merged = concat(&[base, addend], ColumnAlignment::ByPosition);

        assert_eq!(merged.columns, vec!["A", "B", "Unnamed: 2"]);
        assert_eq!(
            merged.rows,
            vec![
                vec![num(1.0), num(2.0), Cell::Empty],
                vec![num(3.0), num(4.0), text("extra")],
            ]
        );
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let merged = concat(&[], ColumnAlignment::ByName);
        assert!(merged.columns.is_empty());
        assert_eq!(merged.row_count(), 0);
    }

    #[test]
    fn blank_rows_are_dropped_and_counted() {
        let mut merged = table(
            &["A", "B"],
            vec![
                vec![num(1.0), num(2.0)],
                vec![Cell::Empty, Cell::Empty],
                vec![text("  "), text("\t")],
                vec![Cell::Empty, text(" x")],
                vec![text(""), num(0.0)],
            ],
        );

        let removed = drop_blank_rows(&mut merged);

        assert_eq!(removed, 2);
        assert_eq!(
            merged.rows,
            vec![
                vec![num(1.0), num(2.0)],
                vec![Cell::Empty, text(" x")],
                vec![text(""), num(0.0)],
            ]
        );
    }

    #[test]
    fn row_count_law_holds() {
        let base = table(&["A"], vec![vec![num(1.0)], vec![Cell::Empty]]);
        let first = table(&["A"], vec![vec![text(" ")], vec![num(2.0)]]);
        let second = table(&["B"], vec![vec![num(3.0)]]);
        let input_rows = base.row_count() + first.row_count() + second.row_count();

        let mut merged = concat(&[base, first, second], ColumnAlignment::ByName);
        let before = merged.row_count();
        let removed = drop_blank_rows(&mut merged);

        assert_eq!(before, input_rows);
        assert_eq!(merged.row_count(), before - removed);
        assert_eq!(removed, 2);
    }
}
