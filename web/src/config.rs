use std::str::FromStr;

use shared_types::{GeolocationOptions, MapConfig};
use thiserror::Error;

/// An environment value that could not be parsed and was replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ignoring invalid value for {key}: {raw:?}")]
pub struct InvalidSetting {
    pub key: &'static str,
    pub raw: String,
}

/// Builds the map configuration from key lookups. Missing keys take their
/// defaults; unparsable ones do too and are reported back.
pub fn map_config_from(lookup: impl Fn(&str) -> Option<String>) -> (MapConfig, Vec<InvalidSetting>) {
    let defaults = MapConfig::default();
    let geo_defaults = GeolocationOptions::default();
    let mut invalid = Vec::new();

    let zoom = parsed(&lookup, &mut invalid, "MAP_ZOOM", defaults.zoom);
    let geolocation = GeolocationOptions {
        enable_high_accuracy: parsed(&lookup, &mut invalid, "GEO_HIGH_ACCURACY", geo_defaults.enable_high_accuracy),
        user_decision_timeout_ms: parsed(&lookup, &mut invalid, "GEO_TIMEOUT_MS", geo_defaults.user_decision_timeout_ms),
        watch: parsed(&lookup, &mut invalid, "GEO_WATCH", geo_defaults.watch),
    };

    let config = MapConfig {
        access_key: lookup("MAP_ACCESS_KEY").filter(|key| !key.trim().is_empty()),
        style_id: lookup("MAP_STYLE_ID").unwrap_or(defaults.style_id),
        tile_url_template: lookup("MAP_TILE_URL").unwrap_or(defaults.tile_url_template),
        attribution: lookup("MAP_ATTRIBUTION").unwrap_or(defaults.attribution),
        zoom,
        site_url: lookup("SITE_URL").unwrap_or(defaults.site_url),
        share_title: lookup("SHARE_TITLE").unwrap_or(defaults.share_title),
        geolocation,
    };
    (config, invalid)
}

#[cfg(feature = "ssr")]
pub fn map_config_from_env() -> MapConfig {
    let (config, invalid) = map_config_from(|key| std::env::var(key).ok());
    for setting in &invalid {
        tracing::warn!(key = setting.key, raw = %setting.raw, "{}", setting);
    }
    config
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    invalid: &mut Vec<InvalidSetting>,
    key: &'static str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                invalid.push(InvalidSetting { key, raw });
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let (config, invalid) = map_config_from(|_| None);
        assert_eq!(config, MapConfig::default());
        assert!(invalid.is_empty());
    }

    #[test]
    fn reads_provider_and_geolocation_settings() {
        let (config, invalid) = map_config_from(lookup_from(&[
            ("MAP_ACCESS_KEY", "pk.abc"),
            ("MAP_STYLE_ID", "me/dark"),
            ("MAP_ZOOM", "15"),
            ("GEO_HIGH_ACCURACY", "true"),
            ("GEO_TIMEOUT_MS", "8000"),
            ("GEO_WATCH", "true"),
        ]));

        assert!(invalid.is_empty());
        assert_eq!(config.access_key.as_deref(), Some("pk.abc"));
        assert_eq!(config.style_id, "me/dark");
        assert_eq!(config.zoom, 15.0);
        assert!(config.geolocation.enable_high_accuracy);
        assert_eq!(config.geolocation.user_decision_timeout_ms, 8000);
        assert!(config.geolocation.watch);
    }

    #[test]
    fn bad_numbers_fall_back_and_are_reported() {
        let (config, invalid) =
            map_config_from(lookup_from(&[("MAP_ZOOM", "close"), ("GEO_TIMEOUT_MS", "-1")]));
        assert_eq!(config.zoom, 13.0);
        assert_eq!(config.geolocation.user_decision_timeout_ms, 5000);
        assert_eq!(
            invalid,
            vec![
                InvalidSetting { key: "MAP_ZOOM", raw: "close".to_string() },
                InvalidSetting { key: "GEO_TIMEOUT_MS", raw: "-1".to_string() },
            ]
        );
        assert_eq!(invalid[0].to_string(), "ignoring invalid value for MAP_ZOOM: \"close\"");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let (config, _) = map_config_from(lookup_from(&[("MAP_ACCESS_KEY", "  ")]));
        assert_eq!(config.access_key, None);
    }
}
