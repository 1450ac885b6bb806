//! Field evidence gallery with a full-screen lightbox.
//!
//! Tiles flow into CSS columns. Opening a tile shows it in a dialog; the
//! left and right halves of the image step backwards and forwards, and
//! Escape and the arrow keys work while the dialog is open.

use dioxus::prelude::*;
use fieldlab_core::content::MediaItem;
use fieldlab_ui::{Button, ButtonVariant, SectionHeader, TinyButton};

use crate::hooks::{use_back_or_home, use_lightbox};

pub const GALLERY_ID: &str = "gallery";

/// Accessible label for the tile showing `item`.
pub fn open_label(item: &MediaItem) -> String {
    format!("Open image: {}", item.label())
}

#[component]
pub fn LightboxGallery(
    #[props(into)] title: String,
    #[props(into)] blurb: String,
    media: &'static [MediaItem],
) -> Element {
    let mut lightbox = use_lightbox(media.len());
    let back = use_back_or_home();

    let current = lightbox().index().and_then(|i| media.get(i));

    rsx! {
        section { id: GALLERY_ID, class: "stage gallery",
            div { class: "container",
                SectionHeader {
                    overline: "Field Evidence",
                    title: title,
                    blurb: blurb,
                }
                div { class: "masonry",
                    for (i, item) in media.iter().enumerate() {
                        button {
                            key: "{item.src}",
                            class: "tile",
                            r#type: "button",
                            "aria-label": open_label(item),
                            onclick: move |_| lightbox.write().open(i),
                            img { src: item.src, alt: item.alt, loading: "lazy" }
                            span { class: "tile-caption", "{item.label()}" }
                        }
                    }
                }
            }

            if let Some(item) = current {
                div {
                    class: "lightbox-backdrop",
                    role: "dialog",
                    "aria-modal": "true",
                    "aria-label": item.label(),
                    onclick: move |_| lightbox.write().close(),
                    figure {
                        class: "lightbox",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        div { class: "lightbox-media",
                            img { src: item.src, alt: item.alt }
                            button {
                                class: "lightbox-zone prev",
                                r#type: "button",
                                "aria-label": "Previous image",
                                onclick: move |_| lightbox.write().prev(),
                            }
                            button {
                                class: "lightbox-zone next",
                                r#type: "button",
                                "aria-label": "Next image",
                                onclick: move |_| lightbox.write().next(),
                            }
                        }
                        figcaption { class: "lightbox-caption", "{item.label()}" }
                        div { class: "lightbox-controls",
                            TinyButton {
                                aria_label: "Previous image",
                                onclick: move |_| lightbox.write().prev(),
                                "\u{2039} Prev"
                            }
                            TinyButton {
                                aria_label: "Next image",
                                onclick: move |_| lightbox.write().next(),
                                "Next \u{203a}"
                            }
                            TinyButton {
                                aria_label: "Close",
                                onclick: move |_| lightbox.write().close(),
                                "\u{00d7} Close"
                            }
                        }
                    }
                }
            } else {
                div { class: "mobile-back",
                    Button {
                        variant: ButtonVariant::Glow,
                        aria_label: "Go back to previous page",
                        onclick: {
                            let mut back = back.clone();
                            move |_| back()
                        },
                        "Back"
                    }
                }
            }
        }
    }
}
