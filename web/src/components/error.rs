use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(
    message: Option<String>,
    #[prop(optional)] warning: bool,
) -> impl IntoView {
    let intent = if warning {
        MessageBarIntent::Warning
    } else {
        MessageBarIntent::Error
    };

    view! {
        <MessageBar intent=intent>
            {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
        </MessageBar>
    }
}
