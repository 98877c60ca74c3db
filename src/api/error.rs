use super::models::Identifier;

/// Failure to fetch one object from the portal
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("request for {path} failed: {source}")]
    Transport {
        path: Identifier,
        source: reqwest::Error,
    },

    #[error("request for {path} failed with status {status}: {body}")]
    Status {
        path: Identifier,
        status: u16,
        body: String,
    },

    #[error("response for {path} is not valid JSON: {source}")]
    Decode {
        path: Identifier,
        source: serde_json::Error,
    },

    #[error("response for {path} is not a JSON object")]
    NotAnObject { path: Identifier },
}

impl RemoteError {
    /// Path of the object whose fetch failed
    pub fn path(&self) -> &Identifier {
        match self {
            Self::Transport { path, .. }
            | Self::Status { path, .. }
            | Self::Decode { path, .. }
            | Self::NotAnObject { path } => path,
        }
    }

    /// The fetch failure somewhere in an error chain, if any
    pub fn find(error: &anyhow::Error) -> Option<&RemoteError> {
        error.chain().find_map(|cause| cause.downcast_ref::<RemoteError>())
    }
}
