use super::cell::Cell;
use super::ids::{IdCell, OneOrMany};
use crate::api::{EntityStore, RemoteError};
use crate::table::{Table, column_key};

/// Read `fields` from the object(s) behind each cell
///
/// Produces one column `prefix.field` per field, in the order given, with one
/// row per input cell:
///
/// - a null cell gives null in every column;
/// - a single identifier gives the object's field value (null when absent);
/// - several identifiers give an ordered [`Cell::Many`] with one entry per
///   object, so a one-to-many row stays a single row.
///
/// Audit columns are normalized: a row holding only empty audit records is
/// rewritten to null so the column disappears when nothing was flagged.
pub async fn project<S: AsRef<str>>(
    store: &mut EntityStore<'_>,
    cells: &[IdCell],
    fields: &[S],
    prefix: &str,
) -> Result<Table, RemoteError> {
    let mut columns: Vec<Vec<Cell>> = fields
        .iter()
        .map(|_| Vec::with_capacity(cells.len()))
        .collect();

    for cell in cells {
        match cell {
            None => {
                for column in &mut columns {
                    column.push(Cell::Null);
                }
            }
            Some(OneOrMany::One(path)) => {
                let entity = store.get(path).await?;
                for (column, field) in columns.iter_mut().zip(fields) {
                    column.push(Cell::from_field(entity.get(field.as_ref())));
                }
            }
            Some(OneOrMany::Many(paths)) => {
                let mut lists: Vec<Vec<Cell>> = fields
                    .iter()
                    .map(|_| Vec::with_capacity(paths.len()))
                    .collect();
                for path in paths {
                    let entity = store.get(path).await?;
                    for (list, field) in lists.iter_mut().zip(fields) {
                        list.push(Cell::from_field(entity.get(field.as_ref())));
                    }
                }
                for (column, list) in columns.iter_mut().zip(lists) {
                    column.push(Cell::Many(list));
                }
            }
        }
    }

    let mut table = Table::new(cells.len());
    for (field, mut values) in fields.iter().zip(columns) {
        let name = column_key(&[prefix, field.as_ref()]);
        if name.ends_with("audit") {
            clear_vacant_audits(&mut values);
        }
        table.push_column(name, values);
    }

    log::debug!(
        "Projected {} fields over {} rows under '{}'",
        fields.len(),
        cells.len(),
        prefix
    );
    Ok(table)
}

fn clear_vacant_audits(values: &mut [Cell]) {
    for value in values.iter_mut() {
        if value.is_vacant() {
            *value = Cell::Null;
        }
    }
}
