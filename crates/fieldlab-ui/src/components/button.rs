//! Button Components
//!
//! Button styles used across the site:
//! - Contained: solid green call to action
//! - Outline: white outline on the hero image
//! - Glow: green gradient with a soft halo (cards, back buttons)
//! - Cue: borderless "Scroll down" / "Continue" prompts with a bouncing arrow

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid accent fill
    #[default]
    Contained,
    /// Transparent with a light border
    Outline,
    /// Green gradient with glow on hover and focus
    Glow,
    /// Text only, used for scroll cues
    Cue,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Contained => "btn-contained",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Glow => "btn-glow",
            ButtonVariant::Cue => "btn-cue",
        }
    }
}

fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label when the content is not descriptive
    #[props(default, into)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default, into)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Contained,
///         onclick: move |_| partner(),
///         "Partner With Us"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the AnchorButton component
#[derive(Clone, PartialEq, Props)]
pub struct AnchorButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// Link target
    #[props(into)]
    pub href: String,
    /// Open in a new browsing context
    #[props(default = false)]
    pub new_tab: bool,
    pub children: Element,
    #[props(default, into)]
    pub class: Option<String>,
}

/// A link styled as a button, for `mailto:` and external targets
#[component]
pub fn AnchorButton(props: AnchorButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());
    let (target, rel) = if props.new_tab {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: target,
            rel: rel,
            {props.children}
        }
    }
}

/// Scroll prompt with a bouncing down arrow
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CueButton { label: "Scroll down", onclick: move |_| scroll_to_intro() }
/// }
/// ```
#[component]
pub fn CueButton(
    #[props(into)] label: String,
    onclick: EventHandler<()>,
    #[props(default = true)] animate: bool,
) -> Element {
    rsx! {
        button {
            class: if animate { "btn-cue animated" } else { "btn-cue" },
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| onclick.call(()),
            span { class: "cue-arrow", "aria-hidden": "true", "\u{2304}" }
            span { class: "cue-label", "{label}" }
        }
    }
}

/// Small text button for lightbox controls
#[component]
pub fn TinyButton(
    #[props(into)] aria_label: String,
    onclick: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "btn-tiny",
            r#type: "button",
            "aria-label": "{aria_label}",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                onclick.call(());
            },
            {children}
        }
    }
}
