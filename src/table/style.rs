//! Conditional cell colors for status and audit columns

use crate::graph::Cell;

const RELEASED: &str = "released";
const IN_PROGRESS: &str = "in progress";

/// Background color assigned to a styled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Released objects and clean audits
    Positive,
    /// Objects still in progress
    Pending,
    /// Anything else in a styled column
    Neutral,
}

impl Highlight {
    pub fn rgb(self) -> u32 {
        match self {
            Self::Positive => 0x90EE90, // Light Green
            Self::Pending => 0x808080,  // Grey
            Self::Neutral => 0xFFFFFF,  // White
        }
    }
}

/// Style function picked from a column name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRule {
    Status,
    Audit,
}

impl StyleRule {
    pub fn for_column(name: &str) -> Option<Self> {
        if name.ends_with("status") {
            Some(Self::Status)
        } else if name.ends_with("audit") {
            Some(Self::Audit)
        } else {
            None
        }
    }

    pub fn apply(self, cell: &Cell) -> Highlight {
        match self {
            Self::Status => status_highlight(cell),
            Self::Audit => audit_highlight(cell),
        }
    }
}

pub fn status_highlight(cell: &Cell) -> Highlight {
    if cell.as_str() == Some(RELEASED) {
        return Highlight::Positive;
    }
    if let Some(items) = cell.string_items() {
        if !items.is_empty() && items.iter().all(|item| *item == RELEASED) {
            return Highlight::Positive;
        }
    }
    if cell.as_str() == Some(IN_PROGRESS) {
        return Highlight::Pending;
    }
    Highlight::Neutral
}

pub fn audit_highlight(cell: &Cell) -> Highlight {
    if cell.is_empty_record() {
        Highlight::Positive
    } else {
        Highlight::Neutral
    }
}
