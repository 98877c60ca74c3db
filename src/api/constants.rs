//! API constants and path helpers for the IGVF portal

use super::models::Identifier;

/// Production portal API
pub const DEFAULT_BASE_URL: &str = "https://api.data.igvf.org/";

/// Collection holding analysis sets, the root of an accession report
pub const ANALYSIS_SETS: &str = "analysis-sets";

/// File-set collections accepted in an input path list
pub const ACCEPTED_COLLECTIONS: &[&str] = &[
    "analysis-sets",
    "measurement-sets",
    "auxiliary-sets",
    "construct-library-sets",
    "curated-sets",
    "model-sets",
    "prediction-sets",
];

/// Identifier field carried by every embedded object
pub const ID_FIELD: &str = "@id";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("igvf-metadata/", env!("CARGO_PKG_VERSION"));

/// Standard headers for portal requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Environment variables read at startup
pub mod env {
    pub const API_URL: &str = "IGVF_API_URL";
    pub const API_KEY: &str = "IGVF_API_KEY";
    pub const SECRET_KEY: &str = "IGVF_SECRET_KEY";
}

/// Portal path of one analysis set
pub fn analysis_set_path(accession: &str) -> Identifier {
    Identifier::new(format!("/{}/{}/", ANALYSIS_SETS, accession))
}

/// Build the full URL for an object path
pub fn entity_url(base_url: &str, path: &Identifier) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.as_str().trim_start_matches('/')
    )
}
