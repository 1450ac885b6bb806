//! "About FieldLab" intro with glowing chips.
//!
//! Once the section is a third in view, the five key phrases light up one
//! after another. "Continue" glides on to the field trials, or one screen
//! down if that anchor is missing.

use dioxus::prelude::*;
use fieldlab_core::content::INTRO_CHIPS;
use fieldlab_core::ScrollRequest;
use fieldlab_ui::{ChipGlow, CueButton, DotGrid, CHIP_GLOW_COLOR};

use crate::components::INTRO_ID;
use crate::context::use_motion_settings;
use crate::hooks::{use_chip_sequence, use_reveal, use_smooth_scroll, RevealOptions};

/// Anchor placed right after the intro.
pub const AFTER_INTRO_ID: &str = "after-black-intro";

#[component]
pub fn BlackIntroSection() -> Element {
    let settings = use_motion_settings();
    let motion = settings.config.motion.clone();
    let reduced = settings.reduced_motion;

    let revealed = use_reveal(INTRO_ID, RevealOptions::threshold(motion.intro_threshold));
    let chips = use_chip_sequence(revealed, motion.chip_plan());
    let scroll = use_smooth_scroll();
    let duration = motion.continue_scroll();

    let on_continue = move |_| {
        scroll.scroll(
            ScrollRequest::ToElementOrNextViewport {
                id: AFTER_INTRO_ID.to_string(),
                offset: 0.0,
            },
            duration,
        );
    };

    let copy_class = match (reduced, revealed()) {
        (true, _) => "intro-copy",
        (false, true) => "intro-copy fade-up",
        (false, false) => "intro-copy pending",
    };
    let chips = chips.read();
    let chip = |i: usize| (chips.is_lit(i), chips.is_pulsing(i) && !reduced);

    rsx! {
        section { id: INTRO_ID, class: "stage intro",
            DotGrid { opacity: 0.22, pan_secs: 24, still: reduced }
            div { class: "stage-content",
                span { class: "overline", "About FieldLab" }
                p { class: "{copy_class}",
                    span { class: "soft", "FieldLab is pioneered by" }
                    " "
                    ChipGlow { on: chip(0).0, pulse: chip(0).1, color: CHIP_GLOW_COLOR, {INTRO_CHIPS[0]} }
                    " and her team at the "
                    ChipGlow { on: chip(1).0, pulse: chip(1).1, color: CHIP_GLOW_COLOR, {INTRO_CHIPS[1]} }
                    ". Designed as a "
                    i { "living" }
                    " laboratory, FieldLab brings together agriculture, technology, and connectivity to test and validate innovations like "
                    ChipGlow { on: chip(2).0, pulse: chip(2).1, color: CHIP_GLOW_COLOR, {INTRO_CHIPS[2]} }
                    ", "
                    ChipGlow { on: chip(3).0, pulse: chip(3).1, color: CHIP_GLOW_COLOR, {INTRO_CHIPS[3]} }
                    ", and "
                    ChipGlow { on: chip(4).0, pulse: chip(4).1, color: CHIP_GLOW_COLOR, {INTRO_CHIPS[4]} }
                    " in real-world field conditions."
                }
            }
            div { class: "cue-dock",
                CueButton { label: "Continue", animate: !reduced, onclick: on_continue }
            }
        }
    }
}
