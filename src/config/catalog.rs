//! Compiled-in field configuration
//!
//! Which fields are read from which kind of object, and how far links are
//! followed, is fixed at build time from `catalog.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

const BUILTIN: &str = include_str!("catalog.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldCatalog {
    /// Fields read from every object
    pub basic_fields: Vec<String>,
    /// Extra fields read from the root objects only
    #[serde(default)]
    pub root_fields: Vec<String>,
    /// Kind whose link fields are resolved for the root objects
    pub root_kind: String,
    #[serde(default)]
    pub report: ReportLayout,
    #[serde(default)]
    pub output_fields: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub links: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportLayout {
    pub max_hops: usize,
    #[serde(default)]
    pub secondary_sheets: Vec<String>,
    #[serde(default)]
    pub analysis_set_sheets: Vec<String>,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            max_hops: 1,
            secondary_sheets: Vec::new(),
            analysis_set_sheets: Vec::new(),
        }
    }
}

impl FieldCatalog {
    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN).context("Built-in field catalog is invalid")
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse field catalog")
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.report.max_hops = max_hops;
        self
    }

    /// Fields projected for the root objects of a sheet
    pub fn root_projection(&self) -> Vec<String> {
        self.basic_fields
            .iter()
            .chain(&self.root_fields)
            .cloned()
            .collect()
    }

    /// Fields projected for objects reached through a `kind` link
    pub fn fields_for(&self, kind: &str) -> Vec<String> {
        let extra = self.output_fields.get(kind).map(Vec::as_slice).unwrap_or_default();
        self.basic_fields.iter().chain(extra).cloned().collect()
    }

    /// Link fields resolved when expanding objects of `kind`
    pub fn links_for(&self, kind: &str) -> &[String] {
        self.links.get(kind).map(Vec::as_slice).unwrap_or_default()
    }
}
