use crate::core::view::{MapConfig, MapViewModel};
use crate::domain::model::{LocationReading, Orphanage, Route};
use crate::domain::ports::{
    AlertPresenter, LocationProvider, Navigator, OrphanageApi, PermissionStatus,
};

pub const LOCATION_DENIED_MESSAGE: &str = "Permission to access location was denied";

/// The orphanages map screen.
///
/// Owns the displayed orphanage list and the last device fix; every mutation
/// goes through its own lifecycle handlers (`handle_mount`, `handle_focus`)
/// or tap handlers, so no synchronization is needed beyond `&mut self`.
pub struct OrphanagesMapScreen<A, L, N, U>
where
    A: OrphanageApi,
    L: LocationProvider,
    N: Navigator,
    U: AlertPresenter,
{
    api: A,
    location: L,
    navigator: N,
    alerts: U,
    map_config: MapConfig,
    orphanages: Vec<Orphanage>,
    last_fix: Option<LocationReading>,
}

impl<A, L, N, U> OrphanagesMapScreen<A, L, N, U>
where
    A: OrphanageApi,
    L: LocationProvider,
    N: Navigator,
    U: AlertPresenter,
{
    pub fn new(api: A, location: L, navigator: N, alerts: U, map_config: MapConfig) -> Self {
        Self {
            api,
            location,
            navigator,
            alerts,
            map_config,
            orphanages: Vec::new(),
            last_fix: None,
        }
    }

    /// Mount-time location acquisition. Runs once per screen instance.
    ///
    /// A denied permission surfaces exactly one alert and the flow proceeds
    /// anyway: the position read is attempted regardless of the outcome, and
    /// any failure there just leaves the screen without a fix.
    pub async fn handle_mount(&mut self) {
        if self.location.request_permission().await == PermissionStatus::Denied {
            self.alerts.alert(LOCATION_DENIED_MESSAGE);
        }

        match self.location.current_position().await {
            Ok(fix) => {
                tracing::debug!(
                    latitude = fix.coords.latitude,
                    longitude = fix.coords.longitude,
                    "Device position acquired"
                );
                self.last_fix = Some(fix);
            }
            Err(e) => {
                tracing::warn!("Current position unavailable: {}", e);
            }
        }
    }

    /// Focus-time list refresh. Fires on every focus event, not only the
    /// first: re-entering the screen always re-issues the request, with no
    /// caching and no de-duplication. On failure the displayed list stays
    /// as it was.
    pub async fn handle_focus(&mut self) {
        match self.api.fetch_orphanages().await {
            Ok(orphanages) => {
                tracing::debug!(count = orphanages.len(), "Orphanage list refreshed");
                self.orphanages = orphanages;
            }
            Err(e) => {
                tracing::warn!("Orphanage fetch failed, keeping previous list: {}", e);
            }
        }
    }

    /// Marker-callout tap: open the details screen for one orphanage.
    pub fn open_details(&mut self, id: i64) {
        self.navigator.push(Route::OrphanageDetails { id });
    }

    /// Create-button tap: start the create flow seeded with the last fix.
    /// Does nothing while no reading has resolved yet.
    pub fn open_create_flow(&mut self) {
        if let Some(location) = &self.last_fix {
            self.navigator.push(Route::SelectMapPosition {
                location: location.clone(),
            });
        }
    }

    pub fn view(&self) -> MapViewModel {
        MapViewModel::build(&self.orphanages, self.last_fix.as_ref(), &self.map_config)
    }

    pub fn orphanages(&self) -> &[Orphanage] {
        &self.orphanages
    }

    pub fn last_fix(&self) -> Option<&LocationReading> {
        self.last_fix.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
