use super::cell::{Cell, LinkValue};
use super::ids::{IdCell, OneOrMany};
use crate::api::{EntityStore, Identifier, RemoteError};
use crate::table::{Table, column_key};

/// Identifiers reached through one link field, one cell per input row
#[derive(Debug, Clone, PartialEq)]
pub struct LinkColumn {
    /// Key of the objects the link was read from
    pub prefix: String,
    pub field: String,
    pub cells: Vec<IdCell>,
}

impl LinkColumn {
    /// Column key in a sheet, `prefix.field.@id`
    pub fn name(&self) -> String {
        column_key(&[self.prefix.as_str(), self.field.as_str(), "@id"])
    }

    /// Prefix for projections of the linked objects, `prefix.field`
    pub fn target_prefix(&self) -> String {
        column_key(&[self.prefix.as_str(), self.field.as_str()])
    }

    pub fn has_targets(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTable {
    rows: usize,
    columns: Vec<LinkColumn>,
}

impl LinkTable {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[LinkColumn] {
        &self.columns
    }

    pub fn column(&self, field: &str) -> Option<&LinkColumn> {
        self.columns.iter().find(|column| column.field == field)
    }

    pub fn into_columns(self) -> Vec<LinkColumn> {
        self.columns
    }

    /// Sheet view: each identifier cell rendered as its joined paths
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(self.rows);
        for column in &self.columns {
            table.push_column(column.name(), column.cells.iter().map(Cell::from).collect());
        }
        table
    }
}

/// Read `link_fields` from the object(s) behind each cell
///
/// Each link field yields a column of identifier cells aligned with the input.
/// A row whose cell holds several objects collects the targets of all of them,
/// in order, without repeats. Targets are not fetched here.
pub async fn resolve_links<S: AsRef<str>>(
    store: &mut EntityStore<'_>,
    cells: &[IdCell],
    link_fields: &[S],
    prefix: &str,
) -> Result<LinkTable, RemoteError> {
    let mut columns: Vec<LinkColumn> = link_fields
        .iter()
        .map(|field| LinkColumn {
            prefix: prefix.to_string(),
            field: field.as_ref().to_string(),
            cells: Vec::with_capacity(cells.len()),
        })
        .collect();

    for cell in cells {
        match cell {
            None => {
                for column in &mut columns {
                    column.cells.push(None);
                }
            }
            Some(OneOrMany::One(path)) => {
                let entity = store.get(path).await?;
                for column in &mut columns {
                    column
                        .cells
                        .push(LinkValue::from_field(entity.get(&column.field)).into_cell());
                }
            }
            Some(OneOrMany::Many(paths)) => {
                let mut targets: Vec<Vec<Identifier>> = columns.iter().map(|_| Vec::new()).collect();
                for path in paths {
                    let entity = store.get(path).await?;
                    for (column, found) in columns.iter().zip(targets.iter_mut()) {
                        for target in LinkValue::from_field(entity.get(&column.field)).targets() {
                            if !found.contains(target) {
                                found.push(target.clone());
                            }
                        }
                    }
                }
                for (column, found) in columns.iter_mut().zip(targets) {
                    column.cells.push(OneOrMany::from_vec(found));
                }
            }
        }
    }

    log::debug!(
        "Resolved {} link fields over {} rows under '{}'",
        link_fields.len(),
        cells.len(),
        prefix
    );
    Ok(LinkTable {
        rows: cells.len(),
        columns,
    })
}
