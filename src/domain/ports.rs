use crate::domain::model::{Coordinates, LocationReading, Orphanage, Route};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outcome of a runtime location-permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Remote backend serving the registered orphanage list.
#[async_trait]
pub trait OrphanageApi: Send + Sync {
    async fn fetch_orphanages(&self) -> Result<Vec<Orphanage>>;
}

/// Device location stack: permission prompt plus a one-shot position read.
///
/// Permission and position are separate calls on purpose. The screen asks
/// for a position even after a denial, and treats any failure as "no fix".
pub trait LocationProvider: Send + Sync {
    fn request_permission(
        &self,
    ) -> impl std::future::Future<Output = PermissionStatus> + Send;

    fn current_position(
        &self,
    ) -> impl std::future::Future<Output = Result<LocationReading>> + Send;
}

/// Screen-history stack supporting imperative push-with-params.
pub trait Navigator: Send {
    fn push(&mut self, route: Route);
}

/// Blocking user-facing alert surface.
pub trait AlertPresenter: Send {
    fn alert(&mut self, message: &str);
}

pub trait ScreenConfig: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn fallback_center(&self) -> Coordinates;
    fn region_delta(&self) -> f64;
    fn marker_icon(&self) -> &str;
}
