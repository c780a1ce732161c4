use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};

use crate::{
    app::GeoMapContext,
    utils::{map_provider::TileSource, scene::MapScene},
    views::map::map_marker::{PoiMarker, SelfMarker},
};

#[component]
pub fn MapRenderer(source: TileSource, zoom: f64) -> impl IntoView {
    let ctx = expect_context::<GeoMapContext>();

    let scene = Memo::new(move |_| {
        let location = ctx.location.get();
        ctx.catalog.with_value(|catalog| MapScene::build(&location, catalog))
    });
    let center = Memo::new(move |_| scene.with(|scene| scene.as_ref().map(|scene| scene.center)));

    let map = JsRwSignal::new_local(None::<Map>);
    Effect::new(move |_| {
        if let (Some(coords), Some(map)) = (center.get(), map.get_untracked()) {
            map.set_view(&Position::new(coords.lat, coords.lng).as_lat_lng(), map.get_zoom());
        }
    });

    let initial = center.get_untracked().unwrap_or_default();
    let poi_markers = scene
        .get_untracked()
        .map(|scene| scene.poi_markers)
        .unwrap_or_default();
    let provider_failed = Memo::new(move |_| ctx.provider.with(|provider| provider.is_failed()));

    view! {
        <MapContainer
            class="map-renderer-map-container"
            center=Position::new(initial.lat, initial.lng)
            zoom=zoom
            set_view=true
            map=map.write_only()
        >
            {move || {
                let tiles = if provider_failed.get() {
                    TileSource::fallback()
                } else {
                    source.clone()
                };
                view! {
                    <TileLayer url=tiles.url attribution=tiles.attribution />
                }
            }}

            {move || center.get().map(|coords| view! { <SelfMarker position=coords /> })}

            {poi_markers.into_iter().map(|marker| {
                ctx.catalog
                    .with_value(|catalog| catalog.get(&marker.id).cloned())
                    .map(|poi| view! { <PoiMarker poi=poi position=marker.position /> })
            }).collect_view()}
        </MapContainer>
    }
}
