//! Configuration file support.
//!
//! A configuration selects the unresolved-family policy and supplies display strings for quantity names and unit
//! symbols:
//!
//! ```toml
//! [registry]
//! unresolved = "reject"
//!
//! [names]
//! "quantity.current" = "Stromstärke"
//! "units.length.kilometer" = "Km"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};
use crate::names::StaticNames;
use crate::registry::{FamilyRegistry, UnresolvedPolicy};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Registry construction settings (`[registry]` table).
    #[serde(default)]
    pub registry: RegistrySettings,
    /// Display names keyed by quantity or unit key (`[names]` table).
    #[serde(default)]
    pub names: HashMap<String, String>,
}

/// Registry settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// What arithmetic does with a family no registered quantity owns.
    #[serde(default)]
    pub unresolved: UnresolvedPolicy,
}

impl MeasureConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(MeasureConfig)` if successful
    /// * `Err(MeasureError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> MeasureResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            MeasureError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        debug!("loaded measure config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> MeasureResult<Self> {
        toml::from_str(content).map_err(|e| {
            MeasureError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Serialize back to TOML text.
    pub fn to_toml_string(&self) -> MeasureResult<String> {
        toml::to_string(self).map_err(|e| {
            MeasureError::Configuration(format!("Failed to serialize config: {}", e))
        })
    }

    /// Name provider backed by the `[names]` table.
    pub fn names(&self) -> StaticNames {
        StaticNames::from(self.names.clone())
    }

    /// Registry of the predefined quantities using the configured policy.
    pub fn build_registry(&self) -> MeasureResult<FamilyRegistry> {
        Ok(FamilyRegistry::builder()
            .with_policy(self.registry.unresolved)
            .with_standard_quantities()?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Family;
    use crate::length::KILOMETERS;
    use crate::names::NameProvider;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = MeasureConfig::from_toml_str("").unwrap();
        assert_eq!(config, MeasureConfig::default());
        assert_eq!(config.registry.unresolved, UnresolvedPolicy::Anonymous);
        assert!(config.names().is_empty());
    }

    #[test]
    fn parses_policy_and_names() {
        let config = MeasureConfig::from_toml_str(
            r#"
            [registry]
            unresolved = "reject"

            [names]
            "quantity.current" = "Stromstärke"
            "units.length.kilometer" = "Km"
            "#,
        )
        .unwrap();
        assert_eq!(config.registry.unresolved, UnresolvedPolicy::Reject);
        let names = config.names();
        assert_eq!(
            names.lookup("quantity.current").as_deref(),
            Some("Stromstärke")
        );
        assert_eq!(KILOMETERS.symbol_in(&names), "Km");
    }

    #[test]
    fn configured_registry_applies_policy() {
        let config = MeasureConfig::from_toml_str("[registry]\nunresolved = \"reject\"\n").unwrap();
        let registry = config.build_registry().unwrap();
        assert_eq!(registry.policy(), UnresolvedPolicy::Reject);
        assert!(registry
            .resolve(Family::DIMENSIONLESS.mass(5), 1.0)
            .is_err());
    }

    #[test]
    fn invalid_policy_is_configuration_error() {
        let err = MeasureConfig::from_toml_str("[registry]\nunresolved = \"maybe\"\n").unwrap_err();
        assert!(matches!(err, MeasureError::Configuration(_)));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let err = MeasureConfig::from_file("/nonexistent/measure.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn from_file_round_trip() {
        let mut config = MeasureConfig::default();
        config.registry.unresolved = UnresolvedPolicy::Reject;
        config
            .names
            .insert("quantity.time".to_string(), "Zeit".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("measure.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes())
            .unwrap();
        drop(file);

        let loaded = MeasureConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
