//! Report assembly: which sheets exist and what goes into them
//!
//! A report is built for one [`ReportInput`]. Root objects are the input file
//! sets of an analysis set, or the paths listed in an input file. Each sheet
//! starts from a column of root identifiers and grows outward one link hop at a
//! time, up to the catalog's `max_hops`.

pub mod driver;

pub use driver::ReportDriver;

use std::collections::BTreeMap;

use crate::input::ReportInput;
use crate::table::FormattedTable;

/// Sheets of one report, keyed and ordered by sheet name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub name: String,
    pub sheets: BTreeMap<String, FormattedTable>,
}

impl Report {
    pub fn new(input: &ReportInput) -> Self {
        Self {
            name: input.name().to_string(),
            sheets: BTreeMap::new(),
        }
    }

    /// Output file name for this report
    pub fn file_name(&self) -> String {
        format!("{}_metadata.xlsx", self.name)
    }

    pub fn sheet(&self, name: &str) -> Option<&FormattedTable> {
        self.sheets.get(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Ready(Report),
    /// Nothing to report: no root objects and no analysis set sheets
    NoInput,
}
