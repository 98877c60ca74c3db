//! IGVF portal API access
//!
//! Everything that talks to the portal goes through [`EntitySource`]. The HTTP
//! implementation is [`IgvfClient`]; [`MemorySource`] serves a fixed set of
//! records for fixtures and tests. [`EntityStore`] adds the per-run fetch cache
//! on top of either.

pub mod client;
pub mod constants;
pub mod error;
pub mod models;
pub mod source;
pub mod store;

pub use client::IgvfClient;
pub use error::RemoteError;
pub use models::{Credentials, Entity, Identifier};
pub use source::{EntitySource, MemorySource};
pub use store::EntityStore;
