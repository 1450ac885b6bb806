//! Chip Glow Component
//!
//! Inline pill that lights up around a key phrase. Used by the intro
//! sections to pick out people, places and technologies as the reader
//! scrolls.

use dioxus::prelude::*;
use fieldlab_core::color::rgba;

/// Default glow color (leaf green)
pub const CHIP_GLOW_COLOR: &str = "#60ad5e";

const UNLIT_BORDER: &str = "rgba(255,255,255,0.25)";

/// Inline style for a chip in the given state.
///
/// The pulse keyframes read `--glow-soft` and `--glow-strong`, so a pulsing
/// chip only needs the class plus these variables.
pub fn glow_style(color: &str, on: bool) -> String {
    if !on {
        return format!("border-color: {}; box-shadow: none;", UNLIT_BORDER);
    }
    format!(
        "border-color: {color}; box-shadow: 0 0 0 4px {ring}, 0 0 12px {halo}; \
         --glow-soft: {soft}; --glow-strong: {strong};",
        color = color,
        ring = rgba(color, 0.1),
        halo = rgba(color, 0.55),
        soft = rgba(color, 0.45),
        strong = rgba(color, 0.65),
    )
}

/// Properties for the ChipGlow component
#[derive(Clone, PartialEq, Props)]
pub struct ChipGlowProps {
    /// Whether the chip is lit
    pub on: bool,
    /// Whether the chip is the one currently pulsing
    #[props(default = false)]
    pub pulse: bool,
    /// Hex glow color
    #[props(default = CHIP_GLOW_COLOR.to_string(), into)]
    pub color: String,
    pub children: Element,
}

/// A phrase wrapped in a glowing pill
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ChipGlow { on: chips.is_lit(0), pulse: chips.is_pulsing(0), "Dr. Nadia Shakoor" }
/// }
/// ```
#[component]
pub fn ChipGlow(props: ChipGlowProps) -> Element {
    let style = glow_style(&props.color, props.on);
    let class = match (props.on, props.pulse) {
        (true, true) => "chip-glow lit pulsing",
        (true, false) => "chip-glow lit",
        _ => "chip-glow",
    };

    rsx! {
        span { class: "{class}", style: "{style}", {props.children} }
    }
}

/// Dotted underline for secondary key phrases
#[component]
pub fn Em(children: Element) -> Element {
    rsx! {
        span { class: "em-dotted", {children} }
    }
}
