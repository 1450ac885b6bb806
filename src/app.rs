use dioxus::prelude::*;
use fieldlab_core::{FieldKey, ScrollController};

use crate::context::MotionSettings;
use crate::pages::{ClimateSmart, Home, Hpi, NotFound};
use crate::platform;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Scroll-driven home page
/// - `/fields/hpi` - HPI genetic diversity trial
/// - `/fields/climate-smart` - Climate Smart field trial
/// - anything else - Not found
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/fields/hpi")]
    Hpi {},
    #[route("/fields/climate-smart")]
    ClimateSmart {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<FieldKey> for Route {
    fn from(key: FieldKey) -> Self {
        match key {
            FieldKey::Hpi => Route::Hpi {},
            FieldKey::ClimateSmart => Route::ClimateSmart {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, motion settings, the scroll controller, and routing.
#[component]
pub fn App() -> Element {
    let settings = use_hook(|| {
        let config = platform::load_site_config();
        let settings = MotionSettings::resolve(config, platform::prefers_reduced_motion());
        tracing::info!(
            "Motion: reduced={}, intro={}",
            settings.reduced_motion,
            settings.config.motion.intro.label()
        );
        settings
    });
    let controller: Signal<ScrollController> = use_signal(ScrollController::new);

    use_context_provider(|| settings);
    use_context_provider(|| controller);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_routes_match_content_paths() {
        for key in [FieldKey::Hpi, FieldKey::ClimateSmart] {
            assert_eq!(Route::from(key).to_string(), key.path());
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let route: Route = "/fields/unknown".parse().unwrap_or(Route::Home {});
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
