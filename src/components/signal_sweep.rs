//! Pinned "signal sweep" intro.
//!
//! A 200vh track with a sticky stage. A radial 5G-style sweep travels down
//! the stage as the visitor scrolls and each sentence fades in when the
//! sweep passes it.

use dioxus::prelude::*;
use fieldlab_core::SignalSweepFrame;
use fieldlab_ui::Em;

use crate::components::INTRO_ID;
use crate::context::use_motion_settings;
use crate::hooks::use_scroll_progress;

fn rise_style(t: f64, reduced: bool, transition_ms: u32) -> String {
    let transition = if reduced {
        "none".to_string()
    } else {
        format!("opacity {0}ms ease, transform {0}ms ease", transition_ms)
    };
    format!(
        "opacity: {:.3}; transform: translateY({:.2}px); transition: {};",
        t,
        (1.0 - t) * 10.0,
        transition
    )
}

#[component]
pub fn SignalSweepIntro() -> Element {
    let settings = use_motion_settings();
    let reduced = settings.reduced_motion;
    let progress = use_scroll_progress(INTRO_ID);
    let frame = SignalSweepFrame::at(progress());

    let sweep_class = if reduced { "sweep still" } else { "sweep" };
    let grid_style = format!("opacity: {:.3};", frame.grid_alpha);
    let sweep_style = format!("--y: {:.2}%;", frame.center_percent);
    let overline_style = rise_style(frame.overline, reduced, 160);
    let [s1, s2, s3] = frame.sentences.map(|t| rise_style(t, reduced, 220));

    rsx! {
        section { id: INTRO_ID, class: "pinned-track",
            div { class: "pinned-stage",
                div {
                    class: "sweep-grid",
                    "aria-hidden": "true",
                    style: grid_style,
                }
                div {
                    class: "{sweep_class}",
                    "aria-hidden": "true",
                    style: sweep_style,
                }
                div { class: "stage-content",
                    span { class: "overline", style: overline_style, "About FieldLab" }
                    p { class: "sweep-sentence", style: s1,
                        "FieldLab is pioneered by "
                        Em { "Dr. Nadia Shakoor" }
                        " and her team at the "
                        Em { "Donald Danforth Plant Science Center" }
                        "."
                    }
                    p { class: "sweep-sentence", style: s2,
                        "Designed as a "
                        Em { "living laboratory" }
                        ", FieldLab brings together "
                        Em { "agriculture" }
                        ", "
                        Em { "technology" }
                        ", and "
                        Em { "connectivity" }
                        "."
                    }
                    p { class: "sweep-sentence", style: s3,
                        "It tests and validates innovations like "
                        Em { "advanced sensors" }
                        ", "
                        Em { "data analytics" }
                        ", and "
                        Em { "5G networks" }
                        " in real-world field conditions."
                    }
                }
            }
        }
    }
}
