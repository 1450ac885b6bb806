//! Closing call to action.

use dioxus::prelude::*;
use fieldlab_ui::AnchorButton;

use crate::context::use_motion_settings;

pub const CONTACT_ID: &str = "contact";

#[component]
pub fn FooterCTA() -> Element {
    let settings = use_motion_settings();
    let mailto = settings.config.mailto();

    rsx! {
        footer { id: CONTACT_ID, class: "stage footer-cta",
            div { class: "footer-glow", "aria-hidden": "true" }
            div { class: "container footer-content",
                h2 { class: "footer-title", "See the testbed in action" }
                p { class: "footer-copy",
                    "We\u{2019}re ready for open, integrated NextG experiments, on real acreage, with real data."
                }
                AnchorButton { href: mailto, new_tab: true, "Request a field tour" }
            }
        }
    }
}
