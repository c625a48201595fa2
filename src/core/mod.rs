pub mod api;
pub mod navigation;
pub mod screen;
pub mod view;

pub use crate::domain::model::{Coordinates, LocationReading, Orphanage, Region, Route};
pub use crate::domain::ports::{
    AlertPresenter, LocationProvider, Navigator, OrphanageApi, PermissionStatus, ScreenConfig,
};
pub use crate::utils::error::Result;
