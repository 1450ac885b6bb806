//! Field trial sub-pages.

use dioxus::prelude::*;
use fieldlab_core::FieldKey;

use crate::components::{LightboxGallery, TrialPanel};
use crate::hooks::use_scroll_to_top;

/// Panel and evidence gallery for one field trial.
///
/// Opens at the top of the page regardless of where the visitor came from.
#[component]
pub fn FieldPage(field: FieldKey) -> Element {
    use_scroll_to_top();
    let panel = field.panel();

    rsx! {
        main { class: "field-page",
            TrialPanel { panel }
            LightboxGallery {
                title: panel.gallery_title,
                blurb: panel.gallery_blurb,
                media: panel.media,
            }
        }
    }
}

#[component]
pub fn Hpi() -> Element {
    rsx! { FieldPage { field: FieldKey::Hpi } }
}

#[component]
pub fn ClimateSmart() -> Element {
    rsx! { FieldPage { field: FieldKey::ClimateSmart } }
}
