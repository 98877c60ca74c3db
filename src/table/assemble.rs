use anyhow::{Result, bail};
use std::collections::HashSet;

use super::style::{Highlight, StyleRule};
use super::{Column, Table};
use crate::graph::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct StyledCell {
    pub value: Cell,
    /// `None` for columns without a style rule
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledColumn {
    pub name: String,
    pub cells: Vec<StyledCell>,
}

impl StyledColumn {
    fn from_column(column: Column) -> Self {
        let rule = StyleRule::for_column(&column.name);
        let cells = column
            .cells
            .into_iter()
            .map(|value| StyledCell {
                highlight: rule.map(|rule| rule.apply(&value)),
                value,
            })
            .collect();
        Self {
            name: column.name,
            cells,
        }
    }
}

/// One sheet, ready to be written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedTable {
    rows: usize,
    columns: Vec<StyledColumn>,
}

impl FormattedTable {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[StyledColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&StyledColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }
}

/// Concatenate tables side by side into one styled sheet
///
/// Columns that are null in every row are dropped, then repeated column names
/// keep only their first occurrence. Column order follows the input order.
pub fn assemble(tables: Vec<Table>) -> Result<FormattedTable> {
    let rows = tables.first().map(Table::rows).unwrap_or(0);

    let mut columns = Vec::new();
    for (index, table) in tables.into_iter().enumerate() {
        if table.rows() != rows {
            bail!(
                "Cannot assemble table {} with {} rows next to tables with {} rows",
                index,
                table.rows(),
                rows
            );
        }
        columns.extend(table.into_columns());
    }

    columns.retain(|column| !column.is_all_null());

    let mut seen = HashSet::new();
    columns.retain(|column| seen.insert(column.name.clone()));

    Ok(FormattedTable {
        rows,
        columns: columns.into_iter().map(StyledColumn::from_column).collect(),
    })
}
