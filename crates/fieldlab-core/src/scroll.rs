//! Smooth scroll driver.
//!
//! A single [`ScrollController`] owns the page's scroll animation. Starting a
//! new animation bumps the controller's generation, so a frame loop still
//! holding an older [`AnimationToken`] sees [`FrameOutcome::Superseded`] and
//! stops without writing. Starting while an animation is running cancels it
//! and restarts from the current offset.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = ScrollController::new();
//! match controller.begin(&host, 1200.0, Duration::from_millis(2200), host.now()) {
//!     ScrollStart::Jumped => {}
//!     ScrollStart::Animating(token) => loop {
//!         let now = next_frame().await;
//!         if controller.frame(token, &host, now) != FrameOutcome::Continue {
//!             break;
//!         }
//!     },
//! }
//! ```

use std::time::Duration;

use crate::motion::{clamp, ease_in_out_cubic};

/// Viewport the driver reads from and writes to.
///
/// Positions are CSS pixels. `element_top` is relative to the viewport, the
/// way `getBoundingClientRect().top` reports it.
pub trait ScrollHost {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Jumps the page to an absolute vertical offset.
    fn set_scroll_y(&self, y: f64);

    /// Whether the user asked the environment to reduce motion.
    fn prefers_reduced_motion(&self) -> bool;

    /// Viewport-relative top edge of the element with this id, if mounted.
    fn element_top(&self, id: &str) -> Option<f64>;
}

/// What the caller wants to scroll to.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollRequest {
    /// An absolute page offset.
    ToY(f64),
    /// An element's top edge plus an offset. Missing elements are a no-op.
    ToElement { id: String, offset: f64 },
    /// Like `ToElement`, but a missing element scrolls one viewport down.
    ToElementOrNextViewport { id: String, offset: f64 },
}

impl ScrollRequest {
    /// Resolves the request into an absolute target against the host.
    ///
    /// Returns `None` only for `ToElement` when the element is not mounted.
    pub fn resolve<H: ScrollHost + ?Sized>(&self, host: &H) -> Option<f64> {
        match self {
            ScrollRequest::ToY(y) => Some(*y),
            ScrollRequest::ToElement { id, offset } => target_for_element(host, id, *offset),
            ScrollRequest::ToElementOrNextViewport { id, offset } => {
                Some(element_or_next_viewport(host, id, *offset))
            }
        }
    }
}

/// Absolute page offset of an element's top edge plus `offset`.
pub fn target_for_element<H: ScrollHost + ?Sized>(host: &H, id: &str, offset: f64) -> Option<f64> {
    host.element_top(id).map(|top| host.scroll_y() + top + offset)
}

/// Element target, or exactly one viewport below the current offset when the
/// element is missing.
pub fn element_or_next_viewport<H: ScrollHost + ?Sized>(host: &H, id: &str, offset: f64) -> f64 {
    target_for_element(host, id, offset).unwrap_or_else(|| {
        tracing::debug!("Scroll target '{}' missing, scrolling one viewport", id);
        host.scroll_y() + host.viewport_height()
    })
}

/// A running scroll animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub start_y: f64,
    pub target_y: f64,
    /// Host timestamp in milliseconds when the animation began
    pub start_time: f64,
    pub duration: Duration,
}

impl ScrollAnimation {
    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f64 {
        let duration_ms = self.duration.as_secs_f64() * 1000.0;
        if duration_ms <= 0.0 {
            return 1.0;
        }
        clamp((now - self.start_time) / duration_ms, 0.0, 1.0)
    }

    /// Eased scroll position at `now`. Exactly `target_y` once complete.
    pub fn position_at(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.target_y;
        }
        self.start_y + (self.target_y - self.start_y) * ease_in_out_cubic(t)
    }
}

/// Identifies one animation started by a [`ScrollController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationToken(u64);

/// Result of [`ScrollController::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollStart {
    /// Reduced motion (or zero duration): the page was moved in one write.
    Jumped,
    /// An animation is running; drive it with [`ScrollController::frame`].
    Animating(AnimationToken),
}

/// Result of a single animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Position written, more frames needed
    Continue,
    /// Final position written, animation retired
    Finished,
    /// A newer animation (or a cancel) replaced this one; nothing written
    Superseded,
}

/// Owner of the page's single scroll animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollController {
    generation: u64,
    active: Option<ScrollAnimation>,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The animation currently in flight, if any.
    pub fn active(&self) -> Option<&ScrollAnimation> {
        self.active.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Starts scrolling to `target_y`, superseding any running animation.
    pub fn begin<H: ScrollHost + ?Sized>(
        &mut self,
        host: &H,
        target_y: f64,
        duration: Duration,
        now: f64,
    ) -> ScrollStart {
        self.generation += 1;

        if let Some(previous) = self.active.take() {
            tracing::debug!(
                "Superseding scroll to {:.0} with scroll to {:.0}",
                previous.target_y,
                target_y
            );
        }

        if host.prefers_reduced_motion() || duration.is_zero() {
            host.set_scroll_y(target_y);
            return ScrollStart::Jumped;
        }

        let start_y = host.scroll_y();
        tracing::debug!(
            "Scrolling {:.0} -> {:.0} over {}ms",
            start_y,
            target_y,
            duration.as_millis()
        );
        self.active = Some(ScrollAnimation {
            start_y,
            target_y,
            start_time: now,
            duration,
        });
        ScrollStart::Animating(AnimationToken(self.generation))
    }

    /// Advances the animation identified by `token` to `now`.
    pub fn frame<H: ScrollHost + ?Sized>(
        &mut self,
        token: AnimationToken,
        host: &H,
        now: f64,
    ) -> FrameOutcome {
        if token.0 != self.generation {
            return FrameOutcome::Superseded;
        }
        let Some(animation) = self.active else {
            return FrameOutcome::Superseded;
        };

        host.set_scroll_y(animation.position_at(now));
        if animation.progress(now) >= 1.0 {
            self.active = None;
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    /// Stops the running animation where it is.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            self.generation += 1;
            tracing::debug!("Scroll animation cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct TestHost {
        y: Cell<f64>,
        viewport: f64,
        reduced: bool,
        elements: HashMap<String, f64>,
        writes: RefCell<Vec<f64>>,
    }

    impl ScrollHost for TestHost {
        fn scroll_y(&self) -> f64 {
            self.y.get()
        }
        fn viewport_height(&self) -> f64 {
            self.viewport
        }
        fn set_scroll_y(&self, y: f64) {
            self.y.set(y);
            self.writes.borrow_mut().push(y);
        }
        fn prefers_reduced_motion(&self) -> bool {
            self.reduced
        }
        fn element_top(&self, id: &str) -> Option<f64> {
            self.elements.get(id).copied()
        }
    }

    const DURATION: Duration = Duration::from_millis(2000);

    #[test]
    fn animation_position_is_eased() {
        let anim = ScrollAnimation {
            start_y: 0.0,
            target_y: 1000.0,
            start_time: 100.0,
            duration: DURATION,
        };
        assert_eq!(anim.position_at(100.0), 0.0);
        assert!((anim.position_at(1100.0) - 500.0).abs() < 1e-9);
        assert_eq!(anim.position_at(2100.0), 1000.0);
        assert_eq!(anim.position_at(9999.0), 1000.0);
        // First rAF timestamp may predate the start sample
        assert_eq!(anim.position_at(90.0), 0.0);
    }

    #[test]
    fn frames_run_to_completion() {
        let host = TestHost { viewport: 800.0, ..Default::default() };
        let mut controller = ScrollController::new();

        let ScrollStart::Animating(token) = controller.begin(&host, 1600.0, DURATION, 0.0) else {
            panic!("expected animation");
        };
        assert_eq!(controller.frame(token, &host, 500.0), FrameOutcome::Continue);
        assert_eq!(controller.frame(token, &host, 1000.0), FrameOutcome::Continue);
        assert_eq!(controller.frame(token, &host, 2000.0), FrameOutcome::Finished);
        assert_eq!(host.scroll_y(), 1600.0);
        assert!(!controller.is_animating());

        let writes = host.writes.borrow();
        assert_eq!(writes.len(), 3);
        assert!(writes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn reduced_motion_jumps_once() {
        let host = TestHost { reduced: true, ..Default::default() };
        let mut controller = ScrollController::new();

        assert_eq!(controller.begin(&host, 742.5, DURATION, 0.0), ScrollStart::Jumped);
        assert_eq!(*host.writes.borrow(), vec![742.5]);
        assert!(!controller.is_animating());
    }

    #[test]
    fn new_animation_supersedes_old_token() {
        let host = TestHost::default();
        let mut controller = ScrollController::new();

        let ScrollStart::Animating(first) = controller.begin(&host, 1000.0, DURATION, 0.0) else {
            panic!("expected animation");
        };
        controller.frame(first, &host, 1000.0);
        let midway = host.scroll_y();

        let ScrollStart::Animating(second) = controller.begin(&host, 0.0, DURATION, 1000.0) else {
            panic!("expected animation");
        };
        let writes_before = host.writes.borrow().len();
        assert_eq!(controller.frame(first, &host, 1500.0), FrameOutcome::Superseded);
        assert_eq!(host.writes.borrow().len(), writes_before);

        // The replacement restarts from where the first one left off
        assert_eq!(controller.active().map(|a| a.start_y), Some(midway));
        assert_eq!(controller.frame(second, &host, 3000.0), FrameOutcome::Finished);
        assert_eq!(host.scroll_y(), 0.0);
    }

    #[test]
    fn cancel_stops_frames() {
        let host = TestHost::default();
        let mut controller = ScrollController::new();
        let ScrollStart::Animating(token) = controller.begin(&host, 500.0, DURATION, 0.0) else {
            panic!("expected animation");
        };
        controller.cancel();
        assert_eq!(controller.frame(token, &host, 100.0), FrameOutcome::Superseded);
        assert!(host.writes.borrow().is_empty());
    }

    #[test]
    fn element_target_adds_scroll_and_offset() {
        let mut host = TestHost::default();
        host.y.set(300.0);
        host.elements.insert("next-section".to_string(), 450.0);

        assert_eq!(target_for_element(&host, "next-section", -72.0), Some(678.0));
        assert_eq!(target_for_element(&host, "missing", 0.0), None);
    }

    #[test]
    fn missing_element_falls_back_to_next_viewport() {
        let host = TestHost { viewport: 900.0, ..Default::default() };
        host.y.set(250.0);
        assert_eq!(element_or_next_viewport(&host, "after-black-intro", 0.0), 1150.0);
    }

    #[test]
    fn request_resolution() {
        let host = TestHost { viewport: 700.0, ..Default::default() };
        assert_eq!(ScrollRequest::ToY(12.0).resolve(&host), Some(12.0));
        let missing = ScrollRequest::ToElement { id: "x".into(), offset: 0.0 };
        assert_eq!(missing.resolve(&host), None);
        let fallback = ScrollRequest::ToElementOrNextViewport { id: "x".into(), offset: 0.0 };
        assert_eq!(fallback.resolve(&host), Some(700.0));
    }
}
