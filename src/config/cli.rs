use crate::config::CliConfig;
use crate::domain::model::{Coordinates, LocationReading};
use crate::domain::ports::{AlertPresenter, LocationProvider, PermissionStatus};
use crate::utils::error::{MapError, Result};

/// Location provider for the CLI binary: serves the position given on the
/// command line, or fails the read when none was configured.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    position: Option<Coordinates>,
    permission: PermissionStatus,
}

impl FixedLocationProvider {
    pub fn new(position: Option<Coordinates>, permission: PermissionStatus) -> Self {
        Self {
            position,
            permission,
        }
    }

    pub fn from_cli(config: &CliConfig) -> Self {
        let position = match (config.latitude, config.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        };
        let permission = if config.deny_location {
            PermissionStatus::Denied
        } else {
            PermissionStatus::Granted
        };
        Self::new(position, permission)
    }
}

impl LocationProvider for FixedLocationProvider {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn current_position(&self) -> Result<LocationReading> {
        match self.position {
            Some(coords) => Ok(LocationReading::new(coords)),
            None => Err(MapError::PositionUnavailableError {
                reason: "no simulated position configured".to_string(),
            }),
        }
    }
}

/// Alert surface for the CLI binary: writes to stderr and the log.
#[derive(Debug, Default)]
pub struct ConsoleAlerts;

impl AlertPresenter for ConsoleAlerts {
    fn alert(&mut self, message: &str) {
        tracing::warn!("User-facing alert: {}", message);
        eprintln!("⚠️  {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provider_serves_configured_position() {
        let provider = FixedLocationProvider::new(
            Some(Coordinates::new(10.0, 20.0)),
            PermissionStatus::Granted,
        );

        assert_eq!(
            provider.request_permission().await,
            PermissionStatus::Granted
        );
        let reading = provider.current_position().await.unwrap();
        assert_eq!(reading.coords, Coordinates::new(10.0, 20.0));
    }

    #[tokio::test]
    async fn test_provider_fails_without_a_position() {
        let provider = FixedLocationProvider::new(None, PermissionStatus::Denied);

        assert_eq!(
            provider.request_permission().await,
            PermissionStatus::Denied
        );
        let result = provider.current_position().await;
        assert!(matches!(
            result,
            Err(MapError::PositionUnavailableError { .. })
        ));
    }
}
