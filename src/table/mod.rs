//! Row-aligned tables built from projections
//!
//! Every table produced while building a sheet shares the same row count: one
//! row per root object. Tables are concatenated column-wise by [`assemble`].

pub mod assemble;
pub mod style;

pub use assemble::{FormattedTable, StyledCell, StyledColumn, assemble};
pub use style::{Highlight, StyleRule};

use crate::graph::Cell;

/// Dot-joined column key, skipping empty parts
pub fn column_key(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Only top-level `Null` counts. A one-to-many cell whose objects all
    /// lack the field is `Many([Null, ...])`, which still shows the row's
    /// multiplicity, so a column of those is kept.
    pub fn is_all_null(&self) -> bool {
        self.cells.iter().all(Cell::is_null)
    }
}

/// Named columns of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: usize,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.rows, "column length must match table rows");
        self.columns.push(Column::new(name, cells));
    }

    /// Copy of the named columns, in the order given; unknown names are skipped
    pub fn select(&self, names: &[&str]) -> Table {
        let mut selected = Table::new(self.rows);
        for name in names {
            if let Some(column) = self.column(name) {
                selected.columns.push(column.clone());
            }
        }
        selected
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}
