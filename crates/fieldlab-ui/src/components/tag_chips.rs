//! Tag Chips Component
//!
//! Outlined labels summarising a field trial ("5 years", "13.5 acres", ...).

use dioxus::prelude::*;

/// Properties for the TagChips component
#[derive(Clone, PartialEq, Props)]
pub struct TagChipsProps {
    pub tags: &'static [&'static str],
    /// Compact variant used on cards
    #[props(default = false)]
    pub small: bool,
}

/// Wrapping row of tag chips
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagChips { tags: trial.tags, small: true }
/// }
/// ```
#[component]
pub fn TagChips(props: TagChipsProps) -> Element {
    let chip_class = if props.small { "tag-chip small" } else { "tag-chip" };

    rsx! {
        div { class: "tag-chips",
            for tag in props.tags.iter() {
                span { key: "{tag}", class: "{chip_class}", "{tag}" }
            }
        }
    }
}
