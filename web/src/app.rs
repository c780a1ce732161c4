use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::{
    catalog::Catalog,
    utils::{
        acquisition::{LocationState, MapProviderState},
        popups::PopupVisibility,
    },
    views::{map::map_wrapper::GeolocatedMapPage, not_found::NotFoundPage},
};

/// Page-wide state, created once by [`App`] and shared through context.
#[derive(Clone, Copy)]
pub struct GeoMapContext {
    pub location: RwSignal<LocationState>,
    pub provider: RwSignal<MapProviderState>,
    pub popups: RwSignal<PopupVisibility>,
    pub catalog: StoredValue<Catalog>,
}

impl GeoMapContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            location: RwSignal::new(LocationState::default()),
            provider: RwSignal::new(MapProviderState::default()),
            popups: RwSignal::new(PopupVisibility::default()),
            catalog: StoredValue::new(catalog),
        }
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <link
                        rel="stylesheet"
                        href="https://unpkg.com/leaflet@1.9.3/dist/leaflet.css"
                    />
                    // loaded before the wasm bundle so `L` exists when the map mounts
                    <script src="https://unpkg.com/leaflet@1.9.3/dist/leaflet.js"></script>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(GeoMapContext::new(Catalog::dublin_pubs()));

    view! {
        <Stylesheet id="leptos" href="/pkg/pub_map.css"/>
        <Title text="Geolocated Map"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=GeolocatedMapPage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
