//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use catalog::Catalog;

use crate::error::Result;
use crate::page::Page;

/// Storefront configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `STOREFRONT_CATALOG` — path to a catalog JSON file (default: built-in nursery catalog)
/// - `STOREFRONT_START_PAGE` — first page shown (default: `"home"`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub start_page: Page,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_path: lookup("STOREFRONT_CATALOG")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            start_page: lookup("STOREFRONT_START_PAGE")
                .map(|p| Page::parse(&p))
                .unwrap_or_default(),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Loads the configured catalog, or the built-in one if none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::nursery()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            start_page: Page::Home,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::StorefrontError;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.start_page, Page::Home);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_lookup_matches_default() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_lookup_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("STOREFRONT_CATALOG", "/tmp/plants.json"),
            ("STOREFRONT_START_PAGE", "cart"),
            ("RUST_LOG", "debug"),
        ]));

        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/plants.json")));
        assert_eq!(config.start_page, Page::Cart);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_start_page_falls_back_to_home() {
        let config = Config::from_lookup(lookup_from(&[("STOREFRONT_START_PAGE", "checkout")]));
        assert_eq!(config.start_page, Page::Home);
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("STOREFRONT_CATALOG", "  ")]));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.load_catalog().unwrap().len(), 6);
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let config = Config {
            catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..Config::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(StorefrontError::Catalog(_))
        ));
    }
}
