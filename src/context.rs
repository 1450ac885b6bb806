//! Site-wide context for FieldLab.
//!
//! The root component resolves the configuration once and provides it, along
//! with the page's single scroll controller, to every section.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let settings = use_motion_settings();
//! if settings.reduced_motion { /* render the static variant */ }
//! ```

use dioxus::prelude::*;
use fieldlab_core::{ScrollController, SiteConfig};

/// Resolved configuration plus the visitor's motion preference.
///
/// The preference is read once at startup; changing the OS setting takes
/// effect on the next load.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionSettings {
    pub config: SiteConfig,
    /// True when the browser asks for reduced motion or the config forces it
    pub reduced_motion: bool,
}

impl MotionSettings {
    pub fn resolve(config: SiteConfig, prefers_reduced_motion: bool) -> Self {
        let reduced_motion = prefers_reduced_motion || config.motion.force_reduced_motion;
        Self {
            config,
            reduced_motion,
        }
    }
}

/// Hook to access the resolved motion settings.
pub fn use_motion_settings() -> MotionSettings {
    use_context::<MotionSettings>()
}

/// Hook to access the page's scroll controller.
///
/// Every smooth scroll goes through this one controller, so starting a new
/// scroll supersedes the one in flight.
pub fn use_scroll_controller() -> Signal<ScrollController> {
    use_context::<Signal<ScrollController>>()
}
