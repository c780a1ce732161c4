use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in plain degrees. Values are passed through to
/// the map untouched, so out-of-range input is never clamped here.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum PoiDescription {
    Text(String),
    Link { label: String, url: String },
    TextWithLink { text: String, label: String, url: String },
}

impl PoiDescription {
    pub fn text(&self) -> Option<&str> {
        match self {
            PoiDescription::Text(text) | PoiDescription::TextWithLink { text, .. } => Some(text),
            PoiDescription::Link { .. } => None,
        }
    }

    pub fn link(&self) -> Option<(&str, &str)> {
        match self {
            PoiDescription::Link { label, url } | PoiDescription::TextWithLink { label, url, .. } => {
                Some((label, url))
            }
            PoiDescription::Text(_) => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub description: PoiDescription,
}

/// Options handed to the browser location service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    /// How long to wait for the user to answer the permission prompt.
    pub user_decision_timeout_ms: u32,
    /// Keep receiving positions instead of asking once.
    pub watch: bool,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: false,
            user_decision_timeout_ms: 5000,
            watch: false,
        }
    }
}

pub const DEFAULT_STYLE_ID: &str = "mapbox/streets-v12";
pub const DEFAULT_TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/{style}/tiles/256/{z}/{x}/{y}?access_token={key}";
pub const DEFAULT_ATTRIBUTION: &str = "&copy; <a href=\"https://www.mapbox.com/about/maps/\">Mapbox</a> &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const DEFAULT_ZOOM: f64 = 13.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MapConfig {
    pub access_key: Option<String>,
    pub style_id: String,
    /// XYZ template. `{style}` and `{key}` are filled in before the template
    /// reaches Leaflet, which handles `{s}`, `{z}`, `{x}`, `{y}` itself.
    pub tile_url_template: String,
    pub attribution: String,
    pub zoom: f64,
    pub site_url: String,
    pub share_title: String,
    pub geolocation: GeolocationOptions,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            style_id: DEFAULT_STYLE_ID.to_string(),
            tile_url_template: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            zoom: DEFAULT_ZOOM,
            site_url: "http://127.0.0.1:3000/".to_string(),
            share_title: "Pubs near me in Dublin".to_string(),
            geolocation: GeolocationOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_defaults_match_low_accuracy_single_shot() {
        let options = GeolocationOptions::default();
        assert!(!options.enable_high_accuracy);
        assert_eq!(options.user_decision_timeout_ms, 5000);
        assert!(!options.watch);
    }

    #[test]
    fn default_map_config_needs_an_access_key() {
        let config = MapConfig::default();
        assert!(config.tile_url_template.contains("{key}"));
        assert!(config.access_key.is_none());
        assert_eq!(config.zoom, 13.0);
    }

    #[test]
    fn description_helpers_split_text_and_link() {
        let text = PoiDescription::Text("Snug at the back".to_string());
        assert_eq!(text.text(), Some("Snug at the back"));
        assert_eq!(text.link(), None);

        let both = PoiDescription::TextWithLink {
            text: "Mentioned in Ulysses".to_string(),
            label: "Map".to_string(),
            url: "https://example.org".to_string(),
        };
        assert_eq!(both.text(), Some("Mentioned in Ulysses"));
        assert_eq!(both.link(), Some(("Map", "https://example.org")));

        let link = PoiDescription::Link {
            label: "Website".to_string(),
            url: "https://example.org".to_string(),
        };
        assert_eq!(link.text(), None);
        assert!(link.link().is_some());
    }
}
