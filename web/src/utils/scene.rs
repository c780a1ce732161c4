use shared_types::Coordinates;

use crate::{catalog::Catalog, utils::acquisition::LocationState};

#[derive(Debug, Clone, PartialEq)]
pub struct PoiMarker {
    pub id: String,
    pub position: Coordinates,
}

/// Everything the map draws for one location fix.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub center: Coordinates,
    pub self_marker: Coordinates,
    pub poi_markers: Vec<PoiMarker>,
}

impl MapScene {
    /// `None` unless the location is known; nothing is drawn partially.
    pub fn build(location: &LocationState, catalog: &Catalog) -> Option<Self> {
        let center = location.coordinates()?;
        Some(Self {
            center,
            self_marker: center,
            poi_markers: catalog
                .iter()
                .map(|poi| PoiMarker {
                    id: poi.id.clone(),
                    position: poi.coordinates,
                })
                .collect(),
        })
    }
}
