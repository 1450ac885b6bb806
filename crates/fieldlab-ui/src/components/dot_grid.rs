//! Dot Grid Background Component
//!
//! Faint sensor-style dot grid drawn behind dark sections. The grid slowly
//! pans downward unless motion is reduced.

use dioxus::prelude::*;

/// Properties for the DotGrid component
#[derive(Clone, PartialEq, Props)]
pub struct DotGridProps {
    /// Layer opacity (default: 0.16)
    #[props(default = 0.16)]
    pub opacity: f64,
    /// Seconds per pan cycle (default: 26)
    #[props(default = 26)]
    pub pan_secs: u32,
    /// Disable the pan animation
    #[props(default = false)]
    pub still: bool,
}

/// Inline style for the grid layer.
pub fn dot_grid_style(opacity: f64, pan_secs: u32, still: bool) -> String {
    let animation = if still {
        "none".to_string()
    } else {
        format!("pan {}s linear infinite", pan_secs)
    };
    format!("opacity: {}; animation: {};", opacity, animation)
}

/// Renders the dot grid as an absolutely positioned layer
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     section { class: "stage",
///         DotGrid { opacity: 0.22, pan_secs: 24, still: reduced }
///         // Content goes on top
///     }
/// }
/// ```
#[component]
pub fn DotGrid(props: DotGridProps) -> Element {
    let style = dot_grid_style(props.opacity, props.pan_secs, props.still);

    rsx! {
        div { class: "dot-grid", style: "{style}", "aria-hidden": "true" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props() {
        let props = DotGridProps {
            opacity: 0.16,
            pan_secs: 26,
            still: false,
        };
        assert_eq!(
            dot_grid_style(props.opacity, props.pan_secs, props.still),
            "opacity: 0.16; animation: pan 26s linear infinite;"
        );
    }

    #[test]
    fn still_grid_does_not_pan() {
        assert_eq!(dot_grid_style(0.22, 24, true), "opacity: 0.22; animation: none;");
    }
}
