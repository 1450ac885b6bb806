//! Section Header Component
//!
//! Overline, title and optional blurb at the top of every home section.
//! Headers can play a staggered rise-in once their section is revealed.

use dioxus::prelude::*;

/// How a revealable element is animated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RevealMotion {
    /// Shown immediately with no animation (reduced motion)
    #[default]
    Static,
    /// Waiting for the section to reveal
    Hidden,
    /// Rising in after `delay` seconds
    Playing { delay: f64 },
}

impl RevealMotion {
    /// Picks the motion for an element from the section's state.
    pub fn for_section(revealed: bool, reduced_motion: bool, delay: f64) -> Self {
        match (reduced_motion, revealed) {
            (true, _) => RevealMotion::Static,
            (false, false) => RevealMotion::Hidden,
            (false, true) => RevealMotion::Playing { delay },
        }
    }

    /// Inline style using `keyframes` and `secs` of duration.
    pub fn style(&self, keyframes: &str, secs: f64) -> String {
        match self {
            RevealMotion::Static => String::new(),
            RevealMotion::Hidden => "opacity: 0; transform: translateY(24px);".to_string(),
            RevealMotion::Playing { delay } => {
                format!("animation: {} {}s ease {}s both;", keyframes, secs, delay)
            }
        }
    }

    /// The same motion shifted later by `extra` seconds.
    pub fn delayed(self, extra: f64) -> Self {
        match self {
            RevealMotion::Playing { delay } => RevealMotion::Playing { delay: delay + extra },
            other => other,
        }
    }
}

/// Properties for the SectionHeader component
#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    #[props(into)]
    pub overline: String,
    #[props(into)]
    pub title: String,
    /// Optional paragraph below the title
    #[props(default, into)]
    pub blurb: Option<String>,
    /// Center-align the block
    #[props(default = true)]
    pub centered: bool,
    #[props(default)]
    pub motion: RevealMotion,
}

/// Section heading block
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionHeader {
///         overline: "Instrumentation",
///         title: "Deployment-ready technology at the plot edge",
///     }
/// }
/// ```
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let overline_style = props.motion.style("revealYDim", 0.6);
    let title_style = props.motion.delayed(0.12).style("revealY", 0.7);

    rsx! {
        div { class: if props.centered { "section-header centered" } else { "section-header" },
            span { class: "overline", style: "{overline_style}", "{props.overline}" }
            h2 { class: "section-title", style: "{title_style}", "{props.title}" }
            if let Some(blurb) = &props.blurb {
                p { class: "section-blurb", "{blurb}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_is_static() {
        assert_eq!(RevealMotion::for_section(false, true, 0.3), RevealMotion::Static);
        assert_eq!(RevealMotion::Static.style("revealY", 0.7), "");
    }

    #[test]
    fn hidden_until_revealed() {
        let motion = RevealMotion::for_section(false, false, 0.0);
        assert!(motion.style("revealY", 0.7).contains("opacity: 0"));
    }

    #[test]
    fn playing_carries_delay() {
        let motion = RevealMotion::for_section(true, false, 0.18).delayed(0.12);
        assert_eq!(
            motion.style("revealY", 0.7),
            "animation: revealY 0.7s ease 0.3s both;"
        );
    }
}
