//! "Our living testbeds" section.
//!
//! Two field-trial cards that rise in after the header once a fifth of the
//! section is on screen. Each card links to its trial page.

use dioxus::prelude::*;
use fieldlab_core::content::{FieldTrial, FIELD_TRIALS};
use fieldlab_ui::{Button, ButtonVariant, DotGrid, RevealMotion, SectionHeader, TagChips};

use crate::app::Route;
use crate::context::use_motion_settings;
use crate::hooks::{use_reveal, RevealOptions};

pub const FIELDS_ID: &str = "fields";

/// Seconds between the header and each card.
const CARD_STAGGER: f64 = 0.18;

/// Entrance delay of card `index`.
pub fn card_delay(index: usize) -> f64 {
    CARD_STAGGER * (index + 1) as f64
}

#[component]
pub fn FieldScroller() -> Element {
    let settings = use_motion_settings();
    let reduced = settings.reduced_motion;
    let revealed = use_reveal(
        FIELDS_ID,
        RevealOptions::threshold(settings.config.motion.fields_threshold)
            .root_margin("0px 0px -10% 0px")
            .immediate_when_reduced(),
    );

    let header_motion = RevealMotion::for_section(revealed(), reduced, 0.0);

    rsx! {
        section { id: FIELDS_ID, class: "stage fields",
            DotGrid { still: reduced }
            div { class: "container fields-column",
                SectionHeader {
                    overline: "Our living testbeds",
                    title: "Two active field trials built for real-world research",
                    centered: false,
                    motion: header_motion,
                }
                for (i, trial) in FIELD_TRIALS.iter().enumerate() {
                    StepCard {
                        key: "{trial.label}",
                        trial: *trial,
                        motion: RevealMotion::for_section(revealed(), reduced, card_delay(i)),
                    }
                }
            }
        }
    }
}

#[component]
fn StepCard(trial: FieldTrial, motion: RevealMotion) -> Element {
    let navigator = use_navigator();
    let style = motion.style("revealY", 0.7);
    let key = trial.key;

    rsx! {
        article { class: "step-card", tabindex: "0", style: style,
            span { class: "overline", "{trial.overline}" }
            h3 { class: "step-title", "{trial.label}" }
            p { class: "step-summary", "{trial.summary}" }
            ul { class: "step-bullets",
                for bullet in trial.bullets.iter() {
                    li { key: "{bullet}", "{bullet}" }
                }
            }
            TagChips { tags: trial.tags }
            Button {
                variant: ButtonVariant::Glow,
                class: "card-cta",
                aria_label: format!("Learn more about {}", trial.label),
                onclick: move |_| {
                    tracing::info!("Opening {}", key.path());
                    navigator.push(Route::from(key));
                },
                "Learn More"
            }
        }
    }
}
