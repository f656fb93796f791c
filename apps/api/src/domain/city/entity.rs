use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::domain::ward::entity::Coordinates;

/// Rectangle the map view is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MapBounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl MapBounds {
    pub fn contains(&self, point: &Coordinates) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct City {
    pub id: String,
    pub name: String,
    pub center: Coordinates,
    pub default_zoom: u8,
    pub bounds: MapBounds,
}
