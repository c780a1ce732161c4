use shared_types::MapConfig;

use crate::error::MapProviderError;

pub const FALLBACK_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const FALLBACK_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// A tile template ready for Leaflet.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub url: String,
    pub attribution: String,
}

impl TileSource {
    pub fn resolve(config: &MapConfig) -> Result<Self, MapProviderError> {
        let mut url = config.tile_url_template.replace("{style}", &config.style_id);
        if url.contains("{key}") {
            let key = config
                .access_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .ok_or(MapProviderError::MissingAccessKey)?;
            url = url.replace("{key}", key);
        }
        Ok(Self {
            url,
            attribution: config.attribution.clone(),
        })
    }

    /// Keyless tiles drawn when the configured provider fails.
    pub fn fallback() -> Self {
        Self {
            url: FALLBACK_TILE_URL.to_string(),
            attribution: FALLBACK_ATTRIBUTION.to_string(),
        }
    }

    /// The single world tile at zoom 0.
    pub fn probe_url(&self) -> String {
        self.url
            .replace("{s}", "a")
            .replace("{z}", "0")
            .replace("{x}", "0")
            .replace("{y}", "0")
            .replace("{r}", "")
    }
}

/// Checks Leaflet is present, then loads the probe tile in a detached image.
/// `on_settled` runs once with the outcome.
#[cfg(feature = "hydrate")]
pub fn load(source: &TileSource, on_settled: impl Fn(Result<(), MapProviderError>) + Clone + 'static) {
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{js_sys::Reflect, HtmlImageElement};

    let leaflet_loaded = web_sys::window()
        .map(|window| Reflect::has(window.as_ref(), &JsValue::from_str("L")).unwrap_or(false))
        .unwrap_or(false);
    if !leaflet_loaded {
        leptos::logging::error!("Leaflet global is missing; the map cannot be drawn");
        on_settled(Err(MapProviderError::ScriptUnavailable));
        return;
    }

    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(err) => {
            leptos::logging::error!("Could not create probe image: {:?}", err);
            on_settled(Err(MapProviderError::TileRequestRejected));
            return;
        }
    };

    let probe = source.probe_url();
    let on_load = {
        let on_settled = on_settled.clone();
        Closure::once_into_js(move || {
            leptos::logging::log!("Map tile provider loaded successfully.");
            on_settled(Ok(()));
        })
    };
    let on_error = Closure::once_into_js(move || {
        leptos::logging::error!("Error loading map tile provider");
        on_settled(Err(MapProviderError::TileRequestRejected));
    });

    image.set_onload(Some(on_load.unchecked_ref()));
    image.set_onerror(Some(on_error.unchecked_ref()));
    image.set_src(&probe);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> MapConfig {
        MapConfig {
            access_key: key.map(str::to_string),
            ..MapConfig::default()
        }
    }

    #[test]
    fn fills_style_and_key_but_leaves_tile_placeholders() {
        let source = TileSource::resolve(&config_with_key(Some("pk.test"))).expect("resolves");
        assert_eq!(
            source.url,
            "https://api.mapbox.com/styles/v1/mapbox/streets-v12/tiles/256/{z}/{x}/{y}?access_token=pk.test"
        );
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        assert_eq!(
            TileSource::resolve(&config_with_key(None)),
            Err(MapProviderError::MissingAccessKey)
        );
        assert_eq!(
            TileSource::resolve(&config_with_key(Some("   "))),
            Err(MapProviderError::MissingAccessKey)
        );
    }

    #[test]
    fn keyless_templates_need_no_key() {
        let config = MapConfig {
            tile_url_template: FALLBACK_TILE_URL.to_string(),
            ..MapConfig::default()
        };
        let source = TileSource::resolve(&config).expect("resolves");
        assert_eq!(source.url, FALLBACK_TILE_URL);
    }

    #[test]
    fn probe_targets_the_zoom_zero_tile() {
        let source = TileSource {
            url: "https://{s}.tiles.example/{z}/{x}/{y}{r}.png".to_string(),
            attribution: String::new(),
        };
        assert_eq!(source.probe_url(), "https://a.tiles.example/0/0/0.png");
        assert_eq!(
            TileSource::fallback().probe_url(),
            "https://tile.openstreetmap.org/0/0/0.png"
        );
    }
}
