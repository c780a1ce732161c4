use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{Coordinates, PointOfInterest};

use crate::{app::GeoMapContext, views::map::map_marker_popup::MapMarkerPopup};

fn pin_icon(fill_color: &str) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='28' height='42' viewBox='0 0 28 42'%3E%3Cpath fill='{}' stroke='%23000000' stroke-width='1.5' d='M14 2C8.5 2 4 6.5 4 12c0 8.5 10 26 10 26s10-17.5 10-26c0-5.5-4.5-10-10-10zm0 13.5c-1.9 0-3.5-1.6-3.5-3.5s1.6-3.5 3.5-3.5 3.5 1.6 3.5 3.5-1.6 3.5-3.5 3.5z'/%3E%3C/svg%3E",
        fill_color
    )
}

/// The user's own position, drawn with Leaflet's default marker.
#[component]
pub fn SelfMarker(position: Coordinates) -> impl IntoView {
    view! {
        <Marker position=Position::new(position.lat, position.lng) draggable=false />
    }
}

/// A catalog pin with its own popup. Clicking the pin toggles the popup;
/// popups never close each other.
#[component]
pub fn PoiMarker(poi: PointOfInterest, position: Coordinates) -> impl IntoView {
    let ctx = expect_context::<GeoMapContext>();
    let opened_id = poi.id.clone();
    let closed_id = poi.id.clone();

    let popup_events = PopupEvents::new()
        .on_popup_open(move |_| {
            ctx.popups.try_update(|popups| popups.set(&opened_id, true));
            leptos::logging::log!("Popup for '{}' opened", opened_id);
        })
        .on_popup_close(move |_| {
            ctx.popups.try_update(|popups| popups.set(&closed_id, false));
        });

    view! {
        <Marker
            position=Position::new(position.lat, position.lng)
            draggable=false
            icon_url=Some(pin_icon("%2308a04b"))
            icon_size=Some((28.0, 42.0))
            icon_anchor=Some((14.0, 42.0))
            popup_events=popup_events
        >
            <Popup auto_close=false close_on_click=false>
                <MapMarkerPopup poi=poi />
            </Popup>
        </Marker>
    }
}
