use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::constants::ID_FIELD;

/// Portal path naming one object, e.g. `/samples/IGVFSM0000AAAA/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Collection segment of the path (`samples` for `/samples/IGVFSM0000AAAA/`)
    pub fn collection(&self) -> Option<&str> {
        self.0
            .trim_start_matches('/')
            .split('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for Identifier {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// One object as returned by the portal
///
/// No schema is applied: fields are whatever the portal embedded in the
/// response. A JSON `null` is indistinguishable from an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

impl Entity {
    /// Wrap a decoded response body, `None` unless it is a JSON object
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    pub fn id(&self) -> Option<Identifier> {
        self.get(ID_FIELD)
            .and_then(Value::as_str)
            .map(Identifier::from)
    }
}

/// API key pair used for HTTP basic auth
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"***")
            .finish()
    }
}
