//! Top navigation bar.
//!
//! Frosted pill over the hero image. Slides up while the visitor scrolls
//! down and comes back on the first scroll up.

use dioxus::prelude::*;

use crate::hooks::use_hide_on_scroll;

/// In-page links, in display order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#"),
    ("Fields", "#fields"),
    ("Technology", "#technology"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar() -> Element {
    let hidden = use_hide_on_scroll();

    rsx! {
        div { class: "navbar-shell",
            nav { class: if hidden() { "navbar hidden" } else { "navbar" },
                a { class: "navbar-brand", href: "/", "aria-label": "FieldLab home",
                    img {
                        class: "navbar-logo",
                        src: "/assets/logo_icon.png",
                        alt: "FieldLab logo",
                        loading: "lazy",
                        decoding: "async",
                    }
                    span { class: "navbar-wordmark", "F I E L D L A B" }
                }
                div { class: "navbar-links",
                    for (label, href) in NAV_LINKS {
                        a { key: "{label}", class: "navbar-link", href: "{href}", "{label}" }
                    }
                }
            }
        }
    }
}
