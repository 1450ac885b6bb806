//! "Plot → Edge → Core" data path diagram.
//!
//! Static SVG: nodes from sensors to the cloud, glowing links whose dashes
//! flow unless motion is reduced, and a dashed return path for insights.

use dioxus::prelude::*;
use fieldlab_core::content::{FlowNode, FLOW_NODES, FLOW_PATHS, RETURN_PATH};
use fieldlab_ui::SectionHeader;

use crate::theme::colors::{INK, INK_FAINT, LEAF, LEAF_CLEAR, LEAF_SOLID, LEAF_WASH};

pub const DATAFLOW_ID: &str = "dataflow";

#[component]
pub fn DataFlowPath() -> Element {
    rsx! {
        section { id: DATAFLOW_ID, class: "stage padded",
            div { class: "container",
                SectionHeader {
                    overline: "Plot → Edge → Core",
                    title: "Real\u{2011}time data path across NextG",
                    blurb: "LoRa sensor data travel through our field gateways to 5G gNBs and MEC, where xApps can act. Aggregated results route to the core/cloud and back to researchers, closing the loop between experiment and insight.",
                }
                div { class: "diagram-frame",
                    Diagram {}
                }
            }
        }
    }
}

#[component]
fn Diagram() -> Element {
    rsx! {
        svg { view_box: "0 0 980 430", width: "100%", height: "100%",
            defs {
                linearGradient { id: "flow-gradient", x1: "0", x2: "1", y1: "0", y2: "0",
                    stop { offset: "0%", "stop-color": LEAF_CLEAR }
                    stop { offset: "50%", "stop-color": LEAF_SOLID }
                    stop { offset: "100%", "stop-color": LEAF_CLEAR }
                }
                filter { id: "flow-glow",
                    feGaussianBlur { "stdDeviation": "3", result: "coloredBlur" }
                    feMerge {
                        feMergeNode { "in": "coloredBlur" }
                        feMergeNode { "in": "SourceGraphic" }
                    }
                }
            }
            for node in FLOW_NODES.iter() {
                Node { key: "{node.label}", node: *node }
            }
            for (i, path) in FLOW_PATHS.iter().enumerate() {
                path {
                    key: "{i}",
                    class: "flow",
                    d: path.d(),
                    stroke: "url(#flow-gradient)",
                    stroke_width: "3",
                    fill: "none",
                    filter: "url(#flow-glow)",
                }
            }
            path {
                d: RETURN_PATH,
                stroke: INK_FAINT,
                stroke_width: "1.5",
                fill: "none",
                stroke_dasharray: "4 6",
            }
        }
    }
}

#[component]
fn Node(node: FlowNode) -> Element {
    rsx! {
        g { transform: "translate({node.x},{node.y})",
            circle {
                r: "{node.radius()}",
                fill: LEAF_WASH,
                stroke: LEAF,
                stroke_width: "1",
                filter: "url(#flow-glow)",
            }
            text {
                x: "0",
                y: "{node.label_offset()}",
                "text-anchor": "middle",
                "font-size": "12",
                fill: INK,
                "{node.label}"
            }
        }
    }
}
