//! Runtime settings and the compiled-in field catalog
//!
//! Settings come from, in order of precedence: command-line overrides, the
//! process environment, a `.env` file in the working directory, then built-in
//! defaults.

pub mod catalog;

pub use catalog::{FieldCatalog, ReportLayout};

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::api::Credentials;
use crate::api::constants::{DEFAULT_BASE_URL, env};

/// Values given on the command line, overriding everything else
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub max_hops: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub output_dir: PathBuf,
    /// Replaces the catalog's hop limit when set
    pub max_hops: Option<usize>,
}

impl Settings {
    /// Load settings from the environment, reading `.env` first if present
    pub fn load(overrides: Overrides) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }

    /// Build settings from overrides and a variable lookup
    pub fn resolve(overrides: Overrides, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = overrides
            .base_url
            .or_else(|| non_empty(env::API_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let credentials = match (non_empty(env::API_KEY), non_empty(env::SECRET_KEY)) {
            (Some(key), Some(secret)) => Some(Credentials { key, secret }),
            (None, None) => {
                log::warn!(
                    "{} and {} are not set, only public objects will be readable",
                    env::API_KEY,
                    env::SECRET_KEY
                );
                None
            }
            (Some(_), None) => bail!("{} is set but {} is missing", env::API_KEY, env::SECRET_KEY),
            (None, Some(_)) => bail!("{} is set but {} is missing", env::SECRET_KEY, env::API_KEY),
        };

        Ok(Self {
            base_url,
            credentials,
            output_dir: overrides.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            max_hops: overrides.max_hops,
        })
    }

    /// Apply the hop limit override to a catalog
    pub fn apply_to(&self, catalog: FieldCatalog) -> FieldCatalog {
        match self.max_hops {
            Some(max_hops) => catalog.with_max_hops(max_hops),
            None => catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let settings = Settings::resolve(Overrides::default(), lookup(&[])).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert!(settings.credentials.is_none());
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_credentials_from_environment() {
        let settings = Settings::resolve(
            Overrides::default(),
            lookup(&[("IGVF_API_KEY", "KEY"), ("IGVF_SECRET_KEY", "SECRET")]),
        )
        .unwrap();
        assert_eq!(
            settings.credentials,
            Some(Credentials {
                key: "KEY".to_string(),
                secret: "SECRET".to_string()
            })
        );
    }

    #[test]
    fn test_half_configured_credentials_fail() {
        let result = Settings::resolve(Overrides::default(), lookup(&[("IGVF_API_KEY", "KEY")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win_over_environment() {
        let overrides = Overrides {
            base_url: Some("http://localhost:6543/".to_string()),
            output_dir: Some(PathBuf::from("out")),
            max_hops: Some(2),
        };
        let settings = Settings::resolve(overrides, lookup(&[("IGVF_API_URL", "https://api.sandbox.igvf.org/")])).unwrap();
        assert_eq!(settings.base_url, "http://localhost:6543/");
        assert_eq!(settings.output_dir, PathBuf::from("out"));

        let catalog = settings.apply_to(FieldCatalog::builtin().unwrap());
        assert_eq!(catalog.report.max_hops, 2);
    }
}
