use std::fmt;

use crate::api::Identifier;

/// A single value or an ordered list of values standing in one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// `None` for an empty list, `One` for a single item
    pub fn from_vec(mut items: Vec<T>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(Self::One),
            _ => Some(Self::Many(items)),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Joined with `", "`, the way link cells are shown in a sheet
impl<T: fmt::Display> fmt::Display for OneOrMany<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Identifier cell of a link column; `None` when the row links to nothing
pub type IdCell = Option<OneOrMany<Identifier>>;

/// One single-identifier cell per path
pub fn single_cells(paths: impl IntoIterator<Item = Identifier>) -> Vec<IdCell> {
    paths.into_iter().map(|path| Some(OneOrMany::One(path))).collect()
}
