//! "Instrumentation" section.
//!
//! Four device cards orbit a circle that shows the selected device. On
//! narrow screens the circle is hidden and the cards stack.

use dioxus::prelude::*;
use fieldlab_core::content::{TechItem, TECH_ITEMS};
use fieldlab_ui::SectionHeader;

use crate::context::use_motion_settings;

pub const TECHNOLOGY_ID: &str = "technology";

#[component]
pub fn TechShowcase() -> Element {
    let settings = use_motion_settings();
    let reduced = settings.reduced_motion;
    let mut active = use_signal(|| 0usize);

    let center = TECH_ITEMS.get(active());

    rsx! {
        section { id: TECHNOLOGY_ID, class: "stage padded",
            div { class: "container",
                SectionHeader {
                    overline: "Instrumentation",
                    title: "Deployment-ready technology at the plot edge",
                    blurb: "We combine low-power LoRa sensors, imaging systems, and a field-hardened gateway to push data to 5G/MEC, so experiments can run at real-farm scales.",
                }
                div { class: "orbit",
                    div { class: "orbit-center",
                        if let Some(item) = center {
                            img {
                                key: "{item.image}",
                                class: if reduced { "orbit-image" } else { "orbit-image fade-in" },
                                src: item.image,
                                alt: item.alt,
                            }
                        }
                    }
                    for (i, item) in TECH_ITEMS.iter().enumerate() {
                        OrbitCard {
                            key: "{item.title}",
                            item: *item,
                            active: active() == i,
                            reduced,
                            onselect: move |_| active.set(i),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrbitCard(item: TechItem, active: bool, reduced: bool, onselect: EventHandler<()>) -> Element {
    let class = if active { "orbit-card active" } else { "orbit-card" };
    let orbit = format!("--orbit: {};", item.orbit_transform());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            style: orbit,
            "aria-pressed": if active { "true" } else { "false" },
            onclick: move |_| onselect.call(()),
            span { class: "orbit-title", "{item.title}" }
            span { class: "orbit-blurb", "{item.blurb}" }
            span { class: if reduced { "orbit-pulse still" } else { "orbit-pulse" }, "aria-hidden": "true" }
        }
    }
}
