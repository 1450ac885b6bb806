//! Detail panel at the top of a field sub-page.

use dioxus::prelude::*;
use fieldlab_core::content::{FieldPanel, Run};
use fieldlab_ui::{Button, ButtonVariant, DefinitionList, DotGrid, StatBar, TagChips};

use crate::context::use_motion_settings;
use crate::hooks::use_back_or_home;

#[component]
pub fn TrialPanel(panel: &'static FieldPanel) -> Element {
    let settings = use_motion_settings();
    let mut back = use_back_or_home();

    rsx! {
        section { id: panel.id, class: "stage panel",
            DotGrid { opacity: 0.14, pan_secs: 26, still: settings.reduced_motion }
            div { class: "panel-back",
                Button {
                    variant: ButtonVariant::Glow,
                    aria_label: "Go back",
                    onclick: move |_| back(),
                    "\u{2190} Back"
                }
            }
            div { class: "container",
                header { class: "panel-header",
                    span { class: "overline", "{panel.location}" }
                    h1 { class: "panel-title", "{panel.title}" }
                    p { class: "panel-intro",
                        for (i, run) in panel.intro.iter().enumerate() {
                            {match run {
                                Run::Plain(text) => rsx! { span { key: "{i}", "{text}" } },
                                Run::Strong(text) => rsx! { strong { key: "{i}", "{text}" } },
                            }}
                        }
                    }
                }
                if let Some((src, alt)) = panel.hero_image {
                    img { class: "panel-hero", src: src, alt: alt }
                }
                StatBar { stats: &panel.stats[..] }
                div { class: "panel-details",
                    div { class: "panel-column",
                        DefinitionList { items: panel.left }
                    }
                    div { class: "panel-column",
                        DefinitionList { items: panel.right }
                        TagChips { tags: panel.tags }
                    }
                }
            }
        }
    }
}
