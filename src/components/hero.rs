//! Hero section.
//!
//! Full-height image with the headline, two calls to action, and a
//! "Scroll down" cue that glides to the intro.

use dioxus::prelude::*;
use fieldlab_core::ScrollRequest;
use fieldlab_ui::{AnchorButton, ButtonVariant, CueButton};

use crate::components::Navbar;
use crate::context::use_motion_settings;
use crate::hooks::use_smooth_scroll;

/// Id of the section directly below the hero.
pub const INTRO_ID: &str = "next-section";

#[component]
pub fn Hero() -> Element {
    let settings = use_motion_settings();
    let scroll = use_smooth_scroll();
    let duration = settings.config.motion.hero_scroll();

    let scroll_down = move |_| {
        scroll.scroll(
            ScrollRequest::ToElement {
                id: INTRO_ID.to_string(),
                offset: 0.0,
            },
            duration,
        );
    };

    rsx! {
        header { class: "hero",
            Navbar {}
            div { class: "hero-content",
                h1 { class: "hero-title reveal-text", "Where Innovation Takes Root" }
                p { class: "hero-tagline reveal-text slow",
                    "Transforming open fields into real-world testbeds for 5G connectivity."
                }
                div { class: "hero-actions reveal-text slow",
                    AnchorButton { href: "#contact", "Partner With Us" }
                    AnchorButton { variant: ButtonVariant::Outline, href: "#fields", "Learn More" }
                }
            }
            div { class: "cue-dock reveal-text slowest",
                CueButton {
                    label: "Scroll down",
                    animate: !settings.reduced_motion,
                    onclick: scroll_down,
                }
            }
        }
    }
}
