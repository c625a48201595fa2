use crate::domain::model::{Coordinates, LocationReading, Orphanage, Region};
use crate::domain::ports::ScreenConfig;

pub const DEFAULT_FALLBACK_CENTER: Coordinates = Coordinates {
    latitude: -23.507147,
    longitude: -46.6305992,
};

pub const DEFAULT_REGION_DELTA: f64 = 0.008;

pub const DEFAULT_MARKER_ICON: &str = "images/map-marker.png";

/// Callout popup offset relative to its marker, in marker-size units.
pub const CALLOUT_ANCHOR: CalloutAnchor = CalloutAnchor { x: 2.7, y: 0.8 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalloutAnchor {
    pub x: f64,
    pub y: f64,
}

/// Presentation configuration captured once at screen construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub fallback_center: Coordinates,
    pub region_delta: f64,
    pub marker_icon: String,
}

impl MapConfig {
    pub fn from_config<C: ScreenConfig>(config: &C) -> Self {
        Self {
            fallback_center: config.fallback_center(),
            region_delta: config.region_delta(),
            marker_icon: config.marker_icon().to_string(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_center: DEFAULT_FALLBACK_CENTER,
            region_delta: DEFAULT_REGION_DELTA,
            marker_icon: DEFAULT_MARKER_ICON.to_string(),
        }
    }
}

/// Tappable popup anchored to a map pin.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub text: String,
    pub anchor: CalloutAnchor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: i64,
    pub coordinate: Coordinates,
    pub icon: String,
    pub callout: Callout,
}

/// Everything the map renderer needs to draw one frame of this screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewModel {
    pub region: Region,
    pub markers: Vec<MapMarker>,
    pub footer_text: String,
}

impl MapViewModel {
    pub fn build(
        orphanages: &[Orphanage],
        last_fix: Option<&LocationReading>,
        config: &MapConfig,
    ) -> Self {
        let center = last_fix
            .map(|fix| fix.coords)
            .unwrap_or(config.fallback_center);

        let markers = orphanages
            .iter()
            .map(|orphanage| MapMarker {
                id: orphanage.id,
                coordinate: orphanage.coordinates(),
                icon: config.marker_icon.clone(),
                callout: Callout {
                    text: orphanage.name.clone(),
                    anchor: CALLOUT_ANCHOR,
                },
            })
            .collect();

        Self {
            region: Region::around(center, config.region_delta),
            markers,
            footer_text: footer_text(orphanages.len()),
        }
    }
}

pub fn footer_text(count: usize) -> String {
    format!("{} orphanages found", count)
}
