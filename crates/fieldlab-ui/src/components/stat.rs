//! Stat Components
//!
//! Figures and definition lists for the field sub-pages.

use dioxus::prelude::*;
use fieldlab_core::content::{Definition, Stat};

/// A single labelled figure
#[component]
pub fn StatTile(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    rsx! {
        div { class: "stat-tile",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
        }
    }
}

/// Row of figures, wrapping to two columns on narrow screens
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatBar { stats: &HPI_PANEL.stats[..] }
/// }
/// ```
#[component]
pub fn StatBar(stats: &'static [Stat]) -> Element {
    rsx! {
        div { class: "stat-bar",
            for stat in stats.iter() {
                StatTile { key: "{stat.label}", label: stat.label, value: stat.value }
            }
        }
    }
}

/// Term and description pairs
#[component]
pub fn DefinitionList(items: &'static [Definition]) -> Element {
    rsx! {
        dl { class: "definition-list",
            for item in items.iter() {
                div { key: "{item.term}", class: "definition",
                    dt { "{item.term}" }
                    dd { "{item.desc}" }
                }
            }
        }
    }
}
