use dioxus::prelude::*;

use crate::app::Route;

/// Fallback for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    use_hook({
        let path = path.clone();
        move || tracing::warn!("No page at {}", path)
    });

    rsx! {
        main { class: "stage not-found",
            div { class: "container",
                span { class: "overline", "404" }
                h1 { class: "section-title", "Nothing grows at {path}" }
                Link { class: "btn-contained", to: Route::Home {}, "Back to FieldLab" }
            }
        }
    }
}
