use crate::core::view::{DEFAULT_FALLBACK_CENTER, DEFAULT_MARKER_ICON, DEFAULT_REGION_DELTA};
use crate::domain::model::Coordinates;
use crate::domain::ports::ScreenConfig;
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlScreenConfig {
    pub screen: ScreenSection,
    pub source: SourceSection,
    pub map: Option<MapSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapSection {
    pub fallback_latitude: Option<f64>,
    pub fallback_longitude: Option<f64>,
    pub region_delta: Option<f64>,
    pub marker_icon: Option<String>,
}

impl TomlScreenConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MapError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MapError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitute `${VAR_NAME}` references with environment values.
    /// Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    fn map_section(&self) -> MapSection {
        self.map.clone().unwrap_or_default()
    }
}

impl ScreenConfig for TomlScreenConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn fallback_center(&self) -> Coordinates {
        let map = self.map_section();
        Coordinates::new(
            map.fallback_latitude
                .unwrap_or(DEFAULT_FALLBACK_CENTER.latitude),
            map.fallback_longitude
                .unwrap_or(DEFAULT_FALLBACK_CENTER.longitude),
        )
    }

    fn region_delta(&self) -> f64 {
        self.map_section().region_delta.unwrap_or(DEFAULT_REGION_DELTA)
    }

    fn marker_icon(&self) -> &str {
        self.map
            .as_ref()
            .and_then(|map| map.marker_icon.as_deref())
            .unwrap_or(DEFAULT_MARKER_ICON)
    }
}

impl Validate for TomlScreenConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("screen.name", &self.screen.name)?;
        validation::validate_url("source.endpoint", &self.source.endpoint)?;

        let center = self.fallback_center();
        validation::validate_latitude("map.fallback_latitude", center.latitude)?;
        validation::validate_longitude("map.fallback_longitude", center.longitude)?;
        validation::validate_positive_float("map.region_delta", self.region_delta())?;
        validation::validate_non_empty_string("map.marker_icon", self.marker_icon())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[screen]
name = "orphanages-map"
description = "Map of registered orphanages"

[source]
endpoint = "https://api.example.com/orphanages"

[map]
fallback_latitude = -23.507147
fallback_longitude = -46.6305992
region_delta = 0.008
marker_icon = "images/map-marker.png"
"#;

        let config = TomlScreenConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.screen.name, "orphanages-map");
        assert_eq!(config.api_endpoint(), "https://api.example.com/orphanages");
        assert_eq!(
            config.fallback_center(),
            Coordinates::new(-23.507147, -46.6305992)
        );
        assert_eq!(config.region_delta(), 0.008);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_map_section_uses_defaults() {
        let toml_content = r#"
[screen]
name = "orphanages-map"

[source]
endpoint = "https://api.example.com/orphanages"
"#;

        let config = TomlScreenConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.fallback_center(), DEFAULT_FALLBACK_CENTER);
        assert_eq!(config.region_delta(), DEFAULT_REGION_DELTA);
        assert_eq!(config.marker_icon(), DEFAULT_MARKER_ICON);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ORPHANAGE_ENDPOINT", "https://test.api.com/orphanages");

        let toml_content = r#"
[screen]
name = "orphanages-map"

[source]
endpoint = "${TEST_ORPHANAGE_ENDPOINT}"
"#;

        let config = TomlScreenConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_endpoint(), "https://test.api.com/orphanages");

        std::env::remove_var("TEST_ORPHANAGE_ENDPOINT");
    }

    #[test]
    fn test_config_validation_rejects_bad_endpoint() {
        let toml_content = r#"
[screen]
name = "orphanages-map"

[source]
endpoint = "invalid-url"
"#;

        let config = TomlScreenConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_out_of_range_fallback() {
        let toml_content = r#"
[screen]
name = "orphanages-map"

[source]
endpoint = "https://api.example.com/orphanages"

[map]
fallback_latitude = 120.0
"#;

        let config = TomlScreenConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[screen]
name = "file-test"

[source]
endpoint = "https://api.example.com/orphanages"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlScreenConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.screen.name, "file-test");
    }
}
