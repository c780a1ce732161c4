use leptos::prelude::*;
use leptos::server;
use shared_types::MapConfig;

#[cfg(feature = "ssr")]
use crate::config::map_config_from_env;

#[server]
pub async fn get_map_config() -> Result<MapConfig, ServerFnError> {
    let config = map_config_from_env();
    if config.access_key.is_none() && config.tile_url_template.contains("{key}") {
        tracing::warn!("MAP_ACCESS_KEY is not set; the tile provider will refuse requests");
    }
    tracing::debug!(style = %config.style_id, zoom = config.zoom, "Serving map config");
    Ok(config)
}
