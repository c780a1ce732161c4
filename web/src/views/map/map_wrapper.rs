use leptos::prelude::*;
use shared_types::MapConfig;

use crate::{
    app::GeoMapContext,
    components::{error::ErrorView, loading::LoadingView, ShareButtons},
    server::get_map_config,
    utils::{
        acquisition::{LocationState, Placeholder},
        map_provider::TileSource,
    },
    views::map::map_renderer::MapRenderer,
};

#[component]
pub fn GeolocatedMapPage() -> impl IntoView {
    let config = OnceResource::new(get_map_config());

    view! {
        <div class="geo-map-page">
            <h1>"Geolocated Map"</h1>
            <Suspense fallback=|| view! {
                <LoadingView message=Some("Loading map settings...".to_string()) />
            }>
                {move ||
                    match config.get() {
                        Some(Ok(config)) => view! { <GeolocatedMap config=config /> }.into_any(),
                        Some(Err(err)) => {
                            leptos::logging::error!("Error fetching map config: {}", err);
                            view! {
                                <ErrorView message=Some("Could not load the map settings.".to_string()) />
                            }.into_any()
                        }
                        None => view! {
                            <LoadingView message=Some("Loading map settings...".to_string()) />
                        }.into_any(),
                    }
                }
            </Suspense>
        </div>
    }
}

/// Location placeholder or map, plus any map-provider error underneath.
#[component]
pub fn GeolocatedMap(config: MapConfig) -> impl IntoView {
    let ctx = expect_context::<GeoMapContext>();
    let tiles = TileSource::resolve(&config);

    {
        let options = config.geolocation.clone();
        let tiles = tiles.clone();
        // Effects only run in the browser, once per mount.
        Effect::new(move |_| {
            #[cfg(feature = "hydrate")]
            {
                use crate::utils::{geolocation, map_provider};

                match geolocation::location_service() {
                    Some(service) => {
                        ctx.location.set(LocationState::initial(true));
                        let requested = geolocation::request_position(&service, &options, move |event| {
                            ctx.location.try_update(|state| state.apply(event));
                        });
                        if let Err(err) = requested {
                            leptos::logging::error!("Location request failed to start: {:?}", err);
                            ctx.location.set(LocationState::initial(false));
                        }
                    }
                    None => ctx.location.set(LocationState::initial(false)),
                }

                let on_settled = move |outcome| {
                    ctx.provider.try_update(|provider| provider.settle(outcome));
                };
                match &tiles {
                    Ok(source) => map_provider::load(source, on_settled),
                    Err(err) => {
                        leptos::logging::error!("Map provider not configured: {}", err);
                        on_settled(Err(*err));
                    }
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&options, &tiles);
            }
        });
    }

    let placeholder = Memo::new(move |_| ctx.location.with(LocationState::placeholder));
    let provider_error = Memo::new(move |_| ctx.provider.with(|provider| provider.error()));
    let page_url = RwSignal::new(config.site_url.clone());

    Effect::new(move |_| {
        if let Some(href) = web_sys::window().and_then(|window| window.location().href().ok()) {
            page_url.set(href);
        }
    });

    let source = tiles.unwrap_or_else(|_| TileSource::fallback());
    let zoom = config.zoom;

    view! {
        <div class="geo-map">
            {move ||
                match placeholder.get() {
                    Some(Placeholder::Waiting(message)) => view! {
                        <LoadingView message=Some(message.to_string()) />
                    }.into_any(),
                    Some(Placeholder::Blocked(err)) => view! {
                        <ErrorView message=Some(err.to_string()) warning=true />
                    }.into_any(),
                    None => {
                        let source = source.clone();
                        view! { <MapRenderer source=source zoom=zoom /> }.into_any()
                    }
                }
            }
            {move ||
                provider_error.get().map(|err| view! {
                    <div class="map-provider-error">
                        <ErrorView message=Some(err.to_string()) />
                    </div>
                })
            }
            <ShareButtons page_url=page_url title=config.share_title.clone() />
        </div>
    }
}
