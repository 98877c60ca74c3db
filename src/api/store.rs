use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::error::RemoteError;
use super::models::{Entity, Identifier};
use super::source::EntitySource;

/// Fetch cache for one report run
///
/// Each path is requested from the source at most once for the lifetime of
/// the store. The store is created per run and dropped with it.
pub struct EntityStore<'a> {
    source: &'a dyn EntitySource,
    cache: HashMap<Identifier, Entity>,
}

impl<'a> EntityStore<'a> {
    pub fn new(source: &'a dyn EntitySource) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Return the object at `path`, fetching it on first use
    pub async fn get(&mut self, path: &Identifier) -> Result<&Entity, RemoteError> {
        match self.cache.entry(path.clone()) {
            Entry::Occupied(entry) => {
                log::trace!("Cache hit for {}", path);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let entity = self.source.fetch(path).await?;
                Ok(entry.insert(entity))
            }
        }
    }

    /// Number of distinct objects fetched so far
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
