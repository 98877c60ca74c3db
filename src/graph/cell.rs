use serde_json::Value;

use super::ids::{IdCell, OneOrMany};
use crate::api::Identifier;
use crate::api::constants::ID_FIELD;

/// Value of one table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    /// Field value copied from an object
    Value(Value),
    /// One entry per object of a one-to-many row, in link order
    Many(Vec<Cell>),
}

impl Cell {
    /// Cell for an extracted field; absent and JSON null both become `Null`
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Null,
            Some(value) => Self::Value(value.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(value) => value.as_str(),
            _ => None,
        }
    }

    /// An empty record (`{}`), or a non-empty list of nothing but empty records
    pub fn is_empty_record(&self) -> bool {
        match self {
            Self::Value(value) => is_empty_record(value),
            Self::Many(cells) => !cells.is_empty() && cells.iter().all(Cell::is_empty_record),
            Self::Null => false,
        }
    }

    /// Null, empty, or made only of null and empty parts
    pub fn is_vacant(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Value(value) => is_vacant(value),
            Self::Many(cells) => cells.iter().all(Cell::is_vacant),
        }
    }

    /// Strings of a list cell, `None` if the cell is not a list of strings
    pub fn string_items(&self) -> Option<Vec<&str>> {
        match self {
            Self::Many(cells) => cells.iter().map(Cell::as_str).collect(),
            Self::Value(Value::Array(items)) => items.iter().map(Value::as_str).collect(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Value(value) => value.clone(),
            Self::Many(cells) => Value::Array(cells.iter().map(Cell::to_json).collect()),
        }
    }
}

impl From<&IdCell> for Cell {
    fn from(ids: &IdCell) -> Self {
        match ids {
            None => Self::Null,
            Some(ids) => Self::Value(Value::String(ids.to_string())),
        }
    }
}

fn is_empty_record(value: &Value) -> bool {
    match value {
        Value::Object(fields) => fields.is_empty(),
        Value::Array(items) => !items.is_empty() && items.iter().all(is_empty_record),
        _ => false,
    }
}

fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        Value::Array(items) => items.iter().all(is_vacant),
        Value::String(text) => text.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Shape of a link field, as far as link resolution is concerned
#[derive(Debug, Clone, PartialEq)]
pub enum LinkValue {
    /// Missing, null, blank or an empty list
    Absent,
    /// A path string, or an embedded object carrying `@id`
    Ref(Identifier),
    /// A list of paths and/or embedded objects
    RefList(Vec<Identifier>),
    /// Present but not pointing at anything (numbers, objects without `@id`)
    Opaque,
}

impl LinkValue {
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Array(items)) if items.is_empty() => Self::Absent,
            Some(Value::Array(items)) => {
                let targets: Vec<Identifier> = items.iter().filter_map(reference).collect();
                if targets.is_empty() {
                    Self::Opaque
                } else {
                    Self::RefList(targets)
                }
            }
            Some(Value::String(path)) if path.is_empty() => Self::Absent,
            Some(value) => reference(value).map(Self::Ref).unwrap_or(Self::Opaque),
        }
    }

    pub fn targets(&self) -> &[Identifier] {
        match self {
            Self::Ref(target) => std::slice::from_ref(target),
            Self::RefList(targets) => targets,
            Self::Absent | Self::Opaque => &[],
        }
    }

    pub fn into_cell(self) -> IdCell {
        match self {
            Self::Ref(target) => Some(OneOrMany::One(target)),
            Self::RefList(targets) => OneOrMany::from_vec(targets),
            Self::Absent | Self::Opaque => None,
        }
    }
}

/// Identifier named by a path string or an embedded object
fn reference(value: &Value) -> Option<Identifier> {
    match value {
        Value::String(path) if !path.is_empty() => Some(Identifier::from(path.as_str())),
        Value::Object(fields) => fields
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty())
            .map(Identifier::from),
        _ => None,
    }
}
