//! Report inputs: one analysis set accession, or a file of object paths

use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::api::Identifier;
use crate::api::constants::ACCEPTED_COLLECTIONS;

static PATH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/([a-z0-9-]+)/([A-Za-z0-9][A-Za-z0-9:_.-]*)/?$").expect("valid path pattern")
});

static ACCESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("valid accession pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportInput {
    /// Accession of one analysis set
    Accession(String),
    /// File-set paths listed in a file; `name` is the file stem
    PathList { name: String, paths: Vec<Identifier> },
}

impl ReportInput {
    pub fn accession(accession: &str) -> Result<Self> {
        let accession = accession.trim();
        if !ACCESSION.is_match(accession) {
            bail!("'{}' is not a valid accession", accession);
        }
        Ok(Self::Accession(accession.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());
        let paths = parse_path_list(&text);
        log::info!("Read {} object paths from {}", paths.len(), path.display());
        Ok(Self::PathList { name, paths })
    }

    /// Stem of the output file name
    pub fn name(&self) -> &str {
        match self {
            Self::Accession(accession) => accession,
            Self::PathList { name, .. } => name,
        }
    }
}

/// Keep the lines that name an object in an accepted file-set collection
pub fn parse_path_list(text: &str) -> Vec<Identifier> {
    text.lines().filter_map(parse_path_line).collect()
}

/// Normalized path for one input line, `None` for blank or unusable lines
pub fn parse_path_line(line: &str) -> Option<Identifier> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(captures) = PATH_LINE.captures(line) else {
        log::debug!("Skipping malformed input line: {}", line);
        return None;
    };
    let collection = &captures[1];
    if !ACCEPTED_COLLECTIONS.contains(&collection) {
        log::debug!("Skipping path outside accepted collections: {}", line);
        return None;
    }

    Some(Identifier::new(format!("/{}/{}/", collection, &captures[2])))
}
