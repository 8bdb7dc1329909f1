//! # Configuration
//!
//! Loaded once at startup, read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GIGBOOK_*`)
//! 2. `catalog.json` in the platform data directory
//! 3. Defaults (this file, plus the bundled sample catalog)
//!
//! ## Environment Variables
//! - `GIGBOOK_CATALOG_PATH`: JSON catalog to load
//! - `GIGBOOK_SURCHARGE`: booking fee as a decimal, e.g. `12.00`, at most `1000000.00`
//! - `GIGBOOK_SURCHARGE_THRESHOLD`: ticket count that triggers the fee

use std::path::PathBuf;

use directories::ProjectDirs;
use gigbook_core::validation::validate_price_cents;
use gigbook_core::{Catalog, CoreError, Money, SurchargePolicy};
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

pub const CATALOG_PATH_VAR: &str = "GIGBOOK_CATALOG_PATH";
pub const SURCHARGE_VAR: &str = "GIGBOOK_SURCHARGE";
pub const SURCHARGE_THRESHOLD_VAR: &str = "GIGBOOK_SURCHARGE_THRESHOLD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CoreError),
}

/// Where the ticket catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    /// The sample catalog compiled into the binary.
    Bundled,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_source: CatalogSource,
    pub surcharge: SurchargePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            catalog_source: CatalogSource::Bundled,
            surcharge: SurchargePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds configuration from a variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        config.catalog_source = match var(CATALOG_PATH_VAR) {
            Some(path) => CatalogSource::File(PathBuf::from(path)),
            None => default_catalog_path()
                .map(CatalogSource::File)
                .unwrap_or(CatalogSource::Bundled),
        };

        if let Some(fee) = var(SURCHARGE_VAR) {
            config.surcharge.fee = Money::parse_decimal(&fee)
                .and_then(|fee| validate_price_cents(fee.pence()).map(|()| fee))
                .map_err(|_| ConfigError::InvalidValue(SURCHARGE_VAR.to_string()))?;
        }

        if let Some(threshold) = var(SURCHARGE_THRESHOLD_VAR) {
            config.surcharge.threshold = threshold
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(SURCHARGE_THRESHOLD_VAR.to_string()))?;
        }

        Ok(config)
    }

    /// Reads and validates the configured catalog.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_source {
            CatalogSource::File(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::CatalogRead {
                        path: path.clone(),
                        source,
                    }
                })?;
                Ok(Catalog::from_json(&json)?)
            }
            CatalogSource::Bundled => Ok(Catalog::from_json(BUNDLED_CATALOG)?),
        }
    }
}

/// `catalog.json` in the platform data directory, if one exists.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.gigbook.gigbook/catalog.json`
/// - **Windows**: `%APPDATA%\gigbook\gigbook\data\catalog.json`
/// - **Linux**: `~/.local/share/gigbook/catalog.json`
fn default_catalog_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("com", "gigbook", "gigbook")?;
    let path = dirs.data_dir().join("catalog.json");
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.surcharge, SurchargePolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(vars(&[
            (CATALOG_PATH_VAR, "/tmp/gigs.json"),
            (SURCHARGE_VAR, "7.50"),
            (SURCHARGE_THRESHOLD_VAR, "6"),
        ]))
        .unwrap();

        assert_eq!(
            config.catalog_source,
            CatalogSource::File(PathBuf::from("/tmp/gigs.json"))
        );
        assert_eq!(config.surcharge.fee.pence(), 750);
        assert_eq!(config.surcharge.threshold, 6);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_vars(vars(&[(SURCHARGE_VAR, "twelve")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(v) if v == SURCHARGE_VAR));

        let err = AppConfig::from_vars(vars(&[(SURCHARGE_VAR, "92233720368547758.07")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(v) if v == SURCHARGE_VAR));

        let err = AppConfig::from_vars(vars(&[(SURCHARGE_THRESHOLD_VAR, "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(v) if v == SURCHARGE_THRESHOLD_VAR));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.contains("idles-bristol"));
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = AppConfig {
            catalog_source: CatalogSource::File(PathBuf::from("/definitely/not/here.json")),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(ConfigError::CatalogRead { .. })
        ));
    }
}
