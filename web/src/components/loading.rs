use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

const DEFAULT_MESSAGE: &str = "Finding pubs near you...";

fn status_line(message: Option<String>) -> String {
    message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}

/// Spinner with a status line underneath, shown while the map waits on
/// the browser or the server.
#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    let message = status_line(message);

    view! {
        <div class="loading-container" role="status" aria-live="polite">
            <Spinner size=SpinnerSize::Medium />
            <p class="loading-message">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_defaults_to_pub_search() {
        assert_eq!(status_line(None), "Finding pubs near you...");
        assert_eq!(status_line(Some("   ".to_string())), "Finding pubs near you...");
    }

    #[test]
    fn status_line_keeps_caller_message() {
        assert_eq!(
            status_line(Some("Loading map settings...".to_string())),
            "Loading map settings..."
        );
    }
}
