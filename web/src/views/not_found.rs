use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"There's no pub at this address. Head back to the map to find one nearby."</p>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigate("/", Default::default())
            >
                "Back to the map"
            </Button>
        </div>
    }
}
