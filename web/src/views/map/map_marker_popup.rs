use leptos::prelude::*;
use shared_types::{PoiDescription, PointOfInterest};
use thaw::{Label, LabelSize};

/// Body of a catalog marker's popup.
#[component]
pub fn MapMarkerPopup(poi: PointOfInterest) -> impl IntoView {
    view! {
        <div class="poi-popup">
            <Label size=LabelSize::Large>{poi.name.clone()}</Label>
            {match poi.description {
                PoiDescription::Text(text) => view! {
                    <p class="poi-popup-text">{text}</p>
                }.into_any(),
                PoiDescription::Link { label, url } => view! {
                    <a class="poi-popup-link" href=url target="_blank" rel="noopener noreferrer">{label}</a>
                }.into_any(),
                PoiDescription::TextWithLink { text, label, url } => view! {
                    <p class="poi-popup-text">{text}</p>
                    <a class="poi-popup-link" href=url target="_blank" rel="noopener noreferrer">{label}</a>
                }.into_any(),
            }}
        </div>
    }
}
