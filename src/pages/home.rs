//! Home page - the scroll-driven tour.
//!
//! Hero, the configured intro section, then the testbeds, technology, data
//! path, fit matrix and contact sections in order.

use dioxus::prelude::*;
use fieldlab_core::IntroVariant;

use crate::components::{
    BlackIntroSection, DataFlowPath, FieldScroller, FitMatrix, FooterCTA, Hero, SensorGridConnect,
    SignalSweepIntro, TechShowcase, AFTER_INTRO_ID,
};
use crate::context::use_motion_settings;

#[component]
pub fn Home() -> Element {
    let settings = use_motion_settings();

    rsx! {
        main { class: "home",
            Hero {}
            {match settings.config.motion.intro {
                IntroVariant::Chips => rsx! { BlackIntroSection {} },
                IntroVariant::SignalSweep => rsx! { SignalSweepIntro {} },
                IntroVariant::SensorGrid => rsx! { SensorGridConnect {} },
            }}
            div { id: AFTER_INTRO_ID }
            FieldScroller {}
            TechShowcase {}
            DataFlowPath {}
            FitMatrix {}
            FooterCTA {}
        }
    }
}
