//! Hooks binding the scroll/reveal engine to the browser.
//!
//! Browser callbacks never touch signals directly. Each hook owns an
//! unbounded channel; listeners push events into it and a task spawned in
//! the component's scope applies them, so the task and its listeners die
//! with the component.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use fieldlab_core::{
    ChipSequence, FrameOutcome, HideOnScroll, IntersectionSample, Lightbox, ProgressTracker,
    RevealState, RevealTrigger, ScrollHost, ScrollRequest, ScrollStart, StaggerPlan, StaggerStep,
    StaggerTask, Subscription, SubscriptionSet, TrackGeometry, TrackerState,
};
use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::StreamExt;
use gloo::timers::callback::Timeout;

use crate::app::Route;
use crate::context::{use_motion_settings, use_scroll_controller};
use crate::platform::{self, TimeoutScheduler, WindowHost};

type Slot = Rc<RefCell<Option<Subscription>>>;
type Listeners = Rc<RefCell<SubscriptionSet>>;

/// Options for [`use_reveal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    /// Reveal on mount when motion is reduced
    pub immediate_when_reduced: bool,
}

impl RevealOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
            immediate_when_reduced: false,
        }
    }

    pub fn root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }

    pub fn immediate_when_reduced(mut self) -> Self {
        self.immediate_when_reduced = true;
        self
    }
}

/// One-shot reveal for the element with `id`.
///
/// Becomes true the first time the element crosses the threshold and stays
/// true. The observer is disconnected as soon as it fires. A missing element
/// leaves the section hidden.
pub fn use_reveal(id: &'static str, options: RevealOptions) -> Signal<bool> {
    let settings = use_motion_settings();
    let immediate = settings.reduced_motion && options.immediate_when_reduced;
    let mut revealed = use_signal(|| immediate);
    let observer: Slot = use_hook(|| Rc::new(RefCell::new(None)));

    let sender = use_hook({
        let observer = observer.clone();
        move || {
            let (tx, mut rx) = unbounded::<IntersectionSample>();
            spawn(async move {
                let mut trigger = RevealTrigger::new(options.threshold);
                let mut state = RevealState::hidden();
                while let Some(sample) = rx.next().await {
                    if trigger.observe(sample) && state.reveal() {
                        tracing::debug!("#{} revealed", id);
                        revealed.set(true);
                        if let Some(mut subscription) = observer.borrow_mut().take() {
                            subscription.release();
                        }
                    }
                }
            });
            tx
        }
    });

    use_effect({
        let observer = observer.clone();
        move || {
            if immediate {
                return;
            }
            let Some(element) = platform::element_by_id(id) else {
                tracing::debug!("Reveal target #{} not mounted", id);
                return;
            };
            let tx = sender.clone();
            match platform::observe_intersection(&element, options.threshold, options.root_margin, move |sample| {
                let _ = tx.unbounded_send(sample);
            }) {
                Ok(subscription) => *observer.borrow_mut() = Some(subscription),
                Err(e) => {
                    tracing::warn!("Revealing #{} without observer: {}", id, e);
                    revealed.set(true);
                }
            }
        }
    });

    use_drop(move || {
        observer.borrow_mut().take();
    });

    revealed
}

/// Normalized scroll progress through the pinned track with `id`.
///
/// Recomputed on every scroll and resize. Pinned at 1 under reduced motion.
pub fn use_scroll_progress(id: &'static str) -> Signal<f64> {
    let settings = use_motion_settings();
    let reduced = settings.reduced_motion;
    let mut progress = use_signal(|| if reduced { 1.0 } else { 0.0 });
    let listeners: Listeners = use_hook(|| Rc::new(RefCell::new(SubscriptionSet::new())));

    let sender = use_hook(|| {
        let (tx, mut rx) = unbounded::<()>();
        spawn(async move {
            let mut tracker = if reduced {
                ProgressTracker::completed()
            } else {
                ProgressTracker::new()
            };
            while rx.next().await.is_some() {
                let Some((top, height)) = platform::element_geometry(id) else {
                    continue;
                };
                let Ok(host) = WindowHost::new(reduced) else {
                    continue;
                };
                let geometry = TrackGeometry::new(top, height);
                let vh = host.viewport_height();
                let p = match tracker.state() {
                    TrackerState::Unmounted => tracker.attach(geometry, vh),
                    TrackerState::Tracking => tracker.update(geometry, vh),
                };
                if *progress.peek() != p {
                    progress.set(p);
                }
            }
            tracker.detach();
        });
        tx
    });

    use_effect({
        let listeners = listeners.clone();
        move || {
            if reduced {
                return;
            }
            let mut set = listeners.borrow_mut();
            for event in ["scroll", "resize"] {
                let tx = sender.clone();
                match platform::on_window(event, move || {
                    let _ = tx.unbounded_send(());
                }) {
                    Ok(subscription) => set.push(subscription),
                    Err(e) => tracing::warn!("No {} listener for #{}: {}", event, id, e),
                }
            }
            let _ = sender.unbounded_send(());
        }
    });

    use_drop(move || listeners.borrow_mut().clear());

    progress
}

/// Runs `plan` once `revealed` turns true and reports chip state.
///
/// The whole sequence is one [`StaggerTask`]; re-running the effect
/// replaces it and unmounting the component cancels it.
pub fn use_chip_sequence(revealed: Signal<bool>, plan: StaggerPlan) -> Signal<ChipSequence> {
    let settings = use_motion_settings();
    let mut chips = use_signal(ChipSequence::new);
    let mut task: Signal<StaggerTask<Timeout>> = use_signal(StaggerTask::idle);

    let sender = use_hook(|| {
        let (tx, mut rx) = unbounded::<StaggerStep>();
        spawn(async move {
            while let Some(step) = rx.next().await {
                chips.write().apply(step);
            }
        });
        tx
    });

    use_effect(move || {
        if !revealed() {
            return;
        }
        let tx = sender.clone();
        let next = plan.start(&TimeoutScheduler, settings.reduced_motion, move |step| {
            let _ = tx.unbounded_send(step);
        });
        task.set(next);
    });

    chips
}

// ============================================================================
// Smooth scroll
// ============================================================================

/// Handle for starting smooth scrolls through the shared controller.
#[derive(Clone, Copy)]
pub struct SmoothScroll {
    controller: Signal<fieldlab_core::ScrollController>,
    reduced_motion: bool,
}

impl SmoothScroll {
    /// Scrolls to the request's target over `duration`.
    ///
    /// A request whose element is missing and that has no fallback does
    /// nothing.
    pub fn scroll(&self, request: ScrollRequest, duration: Duration) {
        let host = match WindowHost::new(self.reduced_motion) {
            Ok(host) => host,
            Err(e) => {
                tracing::warn!("Cannot scroll: {}", e);
                return;
            }
        };
        let Some(target) = request.resolve(&host) else {
            tracing::debug!("Scroll target {:?} not mounted", request);
            return;
        };

        let mut controller = self.controller;
        let start = controller.write().begin(&host, target, duration, host.now_ms());
        let ScrollStart::Animating(token) = start else {
            return;
        };

        spawn(async move {
            loop {
                let now = platform::next_animation_frame().await;
                match controller.write().frame(token, &host, now) {
                    FrameOutcome::Continue => continue,
                    FrameOutcome::Finished | FrameOutcome::Superseded => break,
                }
            }
        });
    }

    /// Stops any scroll in flight.
    pub fn cancel(&self) {
        let mut controller = self.controller;
        controller.write().cancel();
    }
}

pub fn use_smooth_scroll() -> SmoothScroll {
    let settings = use_motion_settings();
    SmoothScroll {
        controller: use_scroll_controller(),
        reduced_motion: settings.reduced_motion,
    }
}

/// Jumps to the top of the page on mount, cancelling any scroll in flight.
pub fn use_scroll_to_top() {
    let scroll = use_smooth_scroll();
    use_effect(move || {
        scroll.cancel();
        if let Ok(host) = WindowHost::new(true) {
            host.set_scroll_y(0.0);
        }
    });
}

// ============================================================================
// Navigation
// ============================================================================

/// Whether the navbar should be tucked away.
pub fn use_hide_on_scroll() -> Signal<bool> {
    let mut hidden = use_signal(|| false);
    let listener: Slot = use_hook(|| Rc::new(RefCell::new(None)));

    let sender = use_hook(|| {
        let (tx, mut rx) = unbounded::<f64>();
        spawn(async move {
            let mut nav = HideOnScroll::new(0.0);
            while let Some(y) = rx.next().await {
                if nav.on_scroll(y) {
                    hidden.set(nav.is_hidden());
                }
            }
        });
        tx
    });

    use_effect({
        let listener = listener.clone();
        move || {
            let Ok(host) = WindowHost::new(false) else {
                return;
            };
            let tx = sender.clone();
            match platform::on_window("scroll", move || {
                let _ = tx.unbounded_send(host.scroll_y());
            }) {
                Ok(subscription) => *listener.borrow_mut() = Some(subscription),
                Err(e) => tracing::warn!("Navbar stays pinned: {}", e),
            }
        }
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    hidden
}

/// Goes back in history, or home when there is nothing to go back to.
pub fn use_back_or_home() -> impl FnMut() + Clone {
    let navigator = use_navigator();
    move || {
        if platform::has_history() {
            navigator.go_back();
        } else {
            navigator.push(Route::Home {});
        }
    }
}

// ============================================================================
// Lightbox
// ============================================================================

/// Lightbox over `len` items with keyboard control while open.
pub fn use_lightbox(len: usize) -> Signal<Lightbox> {
    let mut lightbox = use_signal(|| Lightbox::new(len));
    let listener: Slot = use_hook(|| Rc::new(RefCell::new(None)));

    let sender = use_hook(|| {
        let (tx, mut rx) = unbounded::<String>();
        spawn(async move {
            while let Some(key) = rx.next().await {
                if lightbox.peek().is_open() {
                    lightbox.write().on_key(&key);
                }
            }
        });
        tx
    });

    use_effect({
        let listener = listener.clone();
        move || {
            let tx: UnboundedSender<String> = sender.clone();
            match platform::on_keydown(move |key| {
                let _ = tx.unbounded_send(key);
            }) {
                Ok(subscription) => *listener.borrow_mut() = Some(subscription),
                Err(e) => tracing::warn!("Lightbox keyboard disabled: {}", e),
            }
        }
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    lightbox
}
