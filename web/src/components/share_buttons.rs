use leptos::prelude::*;

use crate::utils::share::{share_links, ShareNetwork};

fn icon_glyph(network: ShareNetwork) -> &'static str {
    match network {
        ShareNetwork::WhatsApp => "W",
        ShareNetwork::Twitter => "X",
        ShareNetwork::Facebook => "f",
    }
}

/// Round share icons for the current page.
#[component]
pub fn ShareButtons(
    #[prop(into)] page_url: Signal<String>,
    #[prop(into)] title: String,
) -> impl IntoView {
    let links = Memo::new(move |_| share_links(&page_url.get(), &title));

    view! {
        <div class="share-buttons">
            {move || {
                links
                    .get()
                    .into_iter()
                    .map(|link| {
                        let label = format!("Share on {}", link.network.label());
                        view! {
                            <a
                                class="share-button"
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                title=label.clone()
                                aria-label=label
                            >
                                <svg width="32" height="32" viewBox="0 0 32 32" aria-hidden="true">
                                    <circle cx="16" cy="16" r="16" fill=link.network.brand_color() />
                                    <text
                                        x="16"
                                        y="21"
                                        text-anchor="middle"
                                        font-size="15"
                                        font-weight="700"
                                        fill="#ffffff"
                                    >
                                        {icon_glyph(link.network)}
                                    </text>
                                </svg>
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
