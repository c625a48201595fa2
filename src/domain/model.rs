use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered orphanage as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orphanage {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Orphanage {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A one-shot device position fix. Captured at most once per screen mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReading {
    pub coords: Coordinates,
    pub timestamp: DateTime<Utc>,
}

impl LocationReading {
    pub fn new(coords: Coordinates) -> Self {
        Self {
            coords,
            timestamp: Utc::now(),
        }
    }

    pub fn at(coords: Coordinates, timestamp: DateTime<Utc>) -> Self {
        Self { coords, timestamp }
    }
}

/// Map viewport: a center coordinate plus the visible span on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn around(center: Coordinates, delta: f64) -> Self {
        Self {
            center,
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }
}

/// Navigation targets reachable from the map screen, with their push parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    OrphanageDetails { id: i64 },
    SelectMapPosition { location: LocationReading },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::OrphanageDetails { .. } => "OrphanageDetails",
            Route::SelectMapPosition { .. } => "SelectMapPosition",
        }
    }
}
