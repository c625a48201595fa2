#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Coordinates;
#[cfg(feature = "cli")]
use crate::domain::ports::ScreenConfig;
#[cfg(feature = "cli")]
use crate::utils::error::{MapError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "orphanage-map")]
#[command(about = "Orphanages map screen over a REST backend")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3333/orphanages")]
    pub api_endpoint: String,

    #[arg(long, help = "Load screen configuration from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Simulated device latitude", allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    #[arg(long, help = "Simulated device longitude", allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    #[arg(long, help = "Simulate a denied location permission")]
    pub deny_location: bool,

    #[arg(long, default_value_t = -23.507147, allow_hyphen_values = true)]
    pub fallback_latitude: f64,

    #[arg(long, default_value_t = -46.6305992, allow_hyphen_values = true)]
    pub fallback_longitude: f64,

    #[arg(long, default_value_t = 0.008)]
    pub region_delta: f64,

    #[arg(long, default_value = "images/map-marker.png")]
    pub marker_icon: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ScreenConfig for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn fallback_center(&self) -> Coordinates {
        Coordinates::new(self.fallback_latitude, self.fallback_longitude)
    }

    fn region_delta(&self) -> f64 {
        self.region_delta
    }

    fn marker_icon(&self) -> &str {
        &self.marker_icon
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_latitude("fallback_latitude", self.fallback_latitude)?;
        validation::validate_longitude("fallback_longitude", self.fallback_longitude)?;
        validation::validate_positive_float("region_delta", self.region_delta)?;
        validation::validate_non_empty_string("marker_icon", &self.marker_icon)?;

        match (self.latitude, self.longitude) {
            (Some(_), None) => {
                return Err(MapError::MissingConfigError {
                    field: "longitude".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(MapError::MissingConfigError {
                    field: "latitude".to_string(),
                })
            }
            _ => {}
        }
        if let Some(latitude) = self.latitude {
            validation::validate_latitude("latitude", latitude)?;
        }
        if let Some(longitude) = self.longitude {
            validation::validate_longitude("longitude", longitude)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_backend() {
        let config = CliConfig::try_parse_from(["orphanage-map"]).unwrap();

        assert_eq!(config.api_endpoint, "http://localhost:3333/orphanages");
        assert_eq!(
            config.fallback_center(),
            Coordinates::new(-23.507147, -46.6305992)
        );
        assert_eq!(config.region_delta(), 0.008);
        assert_eq!(config.marker_icon(), "images/map-marker.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let config =
            CliConfig::try_parse_from(["orphanage-map", "--api-endpoint", "not-a-url"]).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_simulated_position_requires_both_coordinates() {
        let config =
            CliConfig::try_parse_from(["orphanage-map", "--latitude", "10.0"]).unwrap();

        assert!(matches!(
            config.validate(),
            Err(MapError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_out_of_range_simulated_position_fails_validation() {
        let config =
            CliConfig::try_parse_from(["orphanage-map", "--latitude", "95.0", "--longitude", "20.0"])
                .unwrap();

        assert!(config.validate().is_err());
    }
}
