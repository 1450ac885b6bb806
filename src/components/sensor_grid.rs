//! Pinned "sensor grid" scrollytelling scene.
//!
//! Three lines draw across a dot grid in sequence while the stage is
//! pinned; the matching phrases in the paragraph glow as each line lands.

use dioxus::prelude::*;
use fieldlab_core::progress::{pulse_radius, SENSOR_GRID_SEGMENTS};
use fieldlab_core::SensorGridFrame;
use fieldlab_ui::{ChipGlow, Em, CHIP_GLOW_COLOR};

use crate::components::INTRO_ID;
use crate::context::use_motion_settings;
use crate::hooks::use_scroll_progress;
use crate::theme::colors::{INK, INK_DOT, INK_LINE, INK_SOFT, INK_WASH};

const GRID_X: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];
const GRID_Y: [f64; 5] = [15.0, 35.0, 55.0, 75.0, 90.0];

/// The last line glows once it is a fifth drawn.
fn line_style(index: usize, frame: &SensorGridFrame, transition: &str) -> String {
    if index == 2 && frame.segments[2] > 0.2 {
        format!(
            "transition: {}; filter: drop-shadow(0 0 4px rgba(255,255,255,0.35));",
            transition
        )
    } else {
        format!("transition: {};", transition)
    }
}

#[component]
pub fn SensorGridConnect() -> Element {
    let settings = use_motion_settings();
    let reduced = settings.reduced_motion;
    let progress = use_scroll_progress(INTRO_ID);
    let frame = SensorGridFrame::at(progress());

    let dots = GRID_Y
        .iter()
        .flat_map(|y| GRID_X.iter().map(move |x| (*x, *y)))
        .collect::<Vec<_>>();
    let line_transition = if reduced { "none" } else { "stroke-dashoffset 40ms linear" };
    let node_transition = if reduced { "none" } else { "all 240ms ease" };
    let overline_style = format!("transform: translateY({:.2}px);", frame.overline_offset);
    let copy_style = format!(
        "opacity: {:.3}; transform: translateY({:.2}px);",
        frame.resolve,
        (1.0 - frame.resolve) * 8.0
    );
    let [h1, h2, h3] = frame.highlights;

    rsx! {
        section { id: INTRO_ID, class: "pinned-track",
            div { class: if reduced { "pinned-stage still" } else { "pinned-stage" },
                div { class: "sensor-scene", "aria-hidden": "true",
                    svg {
                        view_box: "0 0 100 100",
                        width: "100%",
                        height: "100%",
                        preserve_aspect_ratio: "xMidYMid slice",
                        for (x, y) in dots {
                            circle {
                                key: "d-{x}-{y}",
                                cx: "{x}",
                                cy: "{y}",
                                r: "0.6",
                                fill: INK_DOT,
                            }
                        }
                        for (i, segment) in SENSOR_GRID_SEGMENTS.iter().enumerate() {
                            line {
                                key: "l-{i}",
                                x1: "{segment.from.0}",
                                y1: "{segment.from.1}",
                                x2: "{segment.to.0}",
                                y2: "{segment.to.1}",
                                stroke: INK_LINE,
                                stroke_width: "0.75",
                                stroke_linecap: "round",
                                stroke_dasharray: "{segment.length()}",
                                stroke_dashoffset: "{segment.dash_offset(frame.progress)}",
                                style: line_style(i, &frame, line_transition),
                            }
                        }
                        for (i, ((cx, cy), t)) in frame.pulse_nodes().into_iter().enumerate() {
                            circle {
                                key: "p-{i}",
                                cx: "{cx}",
                                cy: "{cy}",
                                r: "{pulse_radius(t)}",
                                fill: INK_WASH,
                                stroke: INK_SOFT,
                                stroke_width: if t > 0.0 { "0.2" } else { "0" },
                                style: "transition: {node_transition};",
                            }
                        }
                    }
                }
                div { class: "stage-content",
                    span { class: "overline dim", style: overline_style, "About FieldLab" }
                    p { class: "sensor-copy", style: copy_style,
                        "FieldLab is pioneered by "
                        ChipGlow { on: h1, color: CHIP_GLOW_COLOR, "Dr. Nadia Shakoor" }
                        " and her team at the "
                        ChipGlow { on: h2, color: INK, "Donald Danforth Plant Science Center" }
                        ". Designed as a "
                        Em { "living laboratory" }
                        ", FieldLab brings together "
                        Em { "agriculture" }
                        ", "
                        Em { "technology" }
                        ", and "
                        Em { "connectivity" }
                        " to test and validate innovations like "
                        Em { "advanced sensors" }
                        ", "
                        Em { "data analytics" }
                        ", and "
                        ChipGlow { on: h3, color: CHIP_GLOW_COLOR, "5G networks" }
                        " in real-world field conditions."
                    }
                }
            }
        }
    }
}
