use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::error::RemoteError;
use super::models::{Entity, Identifier};

/// Anything that can turn a portal path into an object
#[async_trait]
pub trait EntitySource: Send + Sync {
    async fn fetch(&self, path: &Identifier) -> Result<Entity, RemoteError>;
}

/// Fixed set of objects keyed by `@id`, answering like the portal would
///
/// Unknown paths fail with a 404. Every request is recorded so callers can
/// check what was actually fetched.
#[derive(Debug, Default)]
pub struct MemorySource {
    entities: HashMap<Identifier, Entity>,
    requests: Mutex<Vec<Identifier>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under its own `@id`; bodies without one are ignored
    pub fn insert(&mut self, body: Value) -> &mut Self {
        match Entity::from_json(body) {
            Some(entity) => match entity.id() {
                Some(path) => {
                    self.entities.insert(path, entity);
                }
                None => log::warn!("Ignoring fixture without @id"),
            },
            None => log::warn!("Ignoring fixture that is not a JSON object"),
        }
        self
    }

    pub fn with(mut self, body: Value) -> Self {
        self.insert(body);
        self
    }

    /// Paths requested so far, in request order
    pub fn requests(&self) -> Vec<Identifier> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EntitySource for MemorySource {
    async fn fetch(&self, path: &Identifier) -> Result<Entity, RemoteError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.clone());
        }

        self.entities
            .get(path)
            .cloned()
            .ok_or_else(|| RemoteError::Status {
                path: path.clone(),
                status: 404,
                body: "Not Found".to_string(),
            })
    }
}
