//! Flattening of the portal's linked-object graph
//!
//! Two operations walk the graph one hop at a time:
//!
//! - [`project`] reads a list of fields from each referenced object and lays
//!   them out as columns aligned with the input rows.
//! - [`resolve_links`] reads link fields and returns the identifiers they point
//!   at, ready to be projected or resolved again by the caller.
//!
//! Neither follows links on its own; the report driver decides how many hops
//! to chase.

pub mod cell;
pub mod ids;
pub mod projector;
pub mod resolver;

pub use cell::{Cell, LinkValue};
pub use ids::{IdCell, OneOrMany};
pub use projector::project;
pub use resolver::{LinkColumn, LinkTable, resolve_links};
