//! Browser platform glue.
//!
//! Adapts `web_sys::Window` to the engine's [`ScrollHost`] and
//! [`Scheduler`] traits, and wraps every browser listener the app installs
//! in a [`Subscription`] so dropping it detaches the listener.

use std::time::Duration;

use fieldlab_core::{
    FieldLabError, FieldLabResult, IntersectionSample, Scheduler, ScrollHost, SiteConfig,
    Subscription, CONFIG_ELEMENT_ID,
};
use futures::channel::oneshot;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, Window,
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn platform_error(context: &str, err: JsValue) -> FieldLabError {
    FieldLabError::Platform(format!("{}: {:?}", context, err))
}

fn window() -> FieldLabResult<Window> {
    web_sys::window().ok_or_else(|| FieldLabError::Platform("no global window".into()))
}

/// Looks up a mounted element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Whether the environment asks for reduced motion.
///
/// Browsers without `matchMedia` report `false`.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Milliseconds on the same clock as animation frame timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

// ============================================================================
// Scroll host
// ============================================================================

/// The page viewport.
#[derive(Clone, Debug)]
pub struct WindowHost {
    window: Window,
    reduced_motion: bool,
}

impl WindowHost {
    /// Wraps the global window. `reduced_motion` is the resolved preference.
    pub fn new(reduced_motion: bool) -> FieldLabResult<Self> {
        Ok(Self {
            window: window()?,
            reduced_motion,
        })
    }

    pub fn now_ms(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }
}

impl ScrollHost for WindowHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn set_scroll_y(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self.window.document()?.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top())
    }
}

/// Top edge and height of an element, both in CSS pixels.
pub fn element_geometry(id: &str) -> Option<(f64, f64)> {
    let rect = element_by_id(id)?.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}

// ============================================================================
// Timers and frames
// ============================================================================

/// Schedules stagger steps on `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

/// Resolves on the next animation frame with its timestamp.
pub async fn next_animation_frame() -> f64 {
    let (tx, rx) = oneshot::channel();
    let _frame = gloo::render::request_animation_frame(move |timestamp| {
        let _ = tx.send(timestamp);
    });
    rx.await.unwrap_or_else(|_| now_ms())
}

// ============================================================================
// Listeners
// ============================================================================

/// Observes `element` and reports every intersection change.
pub fn observe_intersection(
    element: &Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_sample: impl FnMut(IntersectionSample) + 'static,
) -> FieldLabResult<Subscription> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_sample(IntersectionSample::new(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                ));
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| platform_error("IntersectionObserver", err))?;
    observer.observe(element);

    Ok(Subscription::new("intersection", move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Calls `on_event` on every window event named `event`.
pub fn on_window(event: &'static str, mut on_event: impl FnMut() + 'static) -> FieldLabResult<Subscription> {
    let window = window()?;
    let listener = EventListener::new(&window, event, move |_| on_event());
    Ok(Subscription::hold(event, listener))
}

/// Calls `on_key` with the `key` of every keydown on the window.
pub fn on_keydown(mut on_key: impl FnMut(String) + 'static) -> FieldLabResult<Subscription> {
    let window = window()?;
    let listener = EventListener::new(&window, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            on_key(event.key());
        }
    });
    Ok(Subscription::hold("keydown", listener))
}

/// Whether the session history has somewhere to go back to.
pub fn has_history() -> bool {
    web_sys::window()
        .and_then(|w| w.history().ok())
        .and_then(|h| h.length().ok())
        .map(|len| len > 1)
        .unwrap_or(false)
}

// ============================================================================
// Configuration
// ============================================================================

/// Reads the inline JSON config block, if the page has one.
pub fn read_site_config() -> FieldLabResult<Option<SiteConfig>> {
    let Some(element) = element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(None);
    }
    SiteConfig::from_json(&json).map(Some)
}

/// The site config, falling back to defaults when missing or invalid.
pub fn load_site_config() -> SiteConfig {
    match read_site_config() {
        Ok(Some(config)) => {
            tracing::info!("Loaded site config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Ok(None) => SiteConfig::default(),
        Err(e) => {
            tracing::warn!("Ignoring invalid site config: {}", e);
            SiteConfig::default()
        }
    }
}
