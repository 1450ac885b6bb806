//! Scenario tests for the scroll/reveal engine
//!
//! These drive the engine the way the home page does: a section is revealed,
//! its chips stagger in on a clock, buttons start smooth scrolls, and pinned
//! sections report progress as the page moves.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use fieldlab_core::progress::SensorGridFrame;
use fieldlab_core::scroll::element_or_next_viewport;
use fieldlab_core::{
    scroll_progress, ChipSequence, FrameOutcome, IntersectionSample, ManualScheduler,
    ProgressTracker, RevealState, RevealTrigger, ScrollController, ScrollHost, ScrollRequest,
    ScrollStart, SiteConfig, StaggerPlan, StaggerTask, TrackGeometry,
};
use fieldlab_core::ManualHandle;

// ============================================================================
// Test Host
// ============================================================================

/// In-memory viewport recording every scroll write
#[derive(Default)]
struct FakeWindow {
    y: Cell<f64>,
    viewport: f64,
    reduced: bool,
    elements: HashMap<&'static str, f64>,
    writes: RefCell<Vec<f64>>,
}

impl FakeWindow {
    fn new(viewport: f64) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    fn reduced(viewport: f64) -> Self {
        Self {
            viewport,
            reduced: true,
            ..Default::default()
        }
    }

    fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl ScrollHost for FakeWindow {
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
        // Stored as page offsets; report them viewport-relative
        self.elements.get(id).map(|page_y| page_y - self.y.get())
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Runs a scroll animation to completion at 16ms frames
fn run_frames(controller: &mut ScrollController, host: &FakeWindow, start: ScrollStart, t0: f64) {
    let ScrollStart::Animating(token) = start else {
        return;
    };
    let mut now = t0;
    loop {
        now += 16.0;
        match controller.frame(token, host, now) {
            FrameOutcome::Continue => continue,
            FrameOutcome::Finished | FrameOutcome::Superseded => break,
        }
    }
}

fn chip_harness(
    reduced: bool,
) -> (ManualScheduler, Rc<RefCell<ChipSequence>>, StaggerTask<ManualHandle>) {
    let scheduler = ManualScheduler::new();
    let chips = Rc::new(RefCell::new(ChipSequence::new()));
    let sink = Rc::clone(&chips);
    let plan = SiteConfig::default().motion.chip_plan();
    let task = plan.start(&scheduler, reduced, move |step| sink.borrow_mut().apply(step));
    (scheduler, chips, task)
}

// ============================================================================
// Chip Stagger
// ============================================================================

/// maxLit follows 1000 + k * 700 exactly
#[test]
fn test_chip_timeline() {
    init_tracing();
    let (scheduler, chips, _task) = chip_harness(false);

    scheduler.advance_to(999);
    assert_eq!(chips.borrow().max_lit(), None);

    for (k, at) in [1000u64, 1700, 2400, 3100, 3800].into_iter().enumerate() {
        scheduler.advance_to(at - 1);
        assert_eq!(chips.borrow().max_lit(), k.checked_sub(1), "just before {}ms", at);
        scheduler.advance_to(at);
        assert_eq!(chips.borrow().max_lit(), Some(k), "at {}ms", at);
        assert_eq!(chips.borrow().current(), Some(k));
    }
    assert_eq!(scheduler.pending(), 0);
}

/// Reduced motion settles every chip with zero timers
#[test]
fn test_reduced_motion_settles_without_timers() {
    let (scheduler, chips, _task) = chip_harness(true);

    assert_eq!(scheduler.registrations(), 0);
    assert_eq!(chips.borrow().current(), Some(4));
    assert_eq!(chips.borrow().max_lit(), Some(4));
    assert!((0..5).all(|i| chips.borrow().is_lit(i)));
}

/// Unmounting mid-sequence cancels the remaining chips as a unit
#[test]
fn test_teardown_cancels_remaining_chips() {
    let (scheduler, chips, task) = chip_harness(false);

    scheduler.advance_to(1700);
    drop(task);
    scheduler.advance_to(10_000);

    assert_eq!(chips.borrow().max_lit(), Some(1));
    assert_eq!(scheduler.pending(), 0);
}

/// Retriggering replaces the old task without double-firing
#[test]
fn test_retrigger_replaces_sequence() {
    let scheduler = ManualScheduler::new();
    let fired = Rc::new(RefCell::new(Vec::new()));
    let plan = StaggerPlan::new(3, Duration::from_millis(100), Duration::from_millis(100));

    let sink = Rc::clone(&fired);
    let task = plan.start(&scheduler, false, move |s| sink.borrow_mut().push(s));
    scheduler.advance_to(150);

    let sink = Rc::clone(&fired);
    let replacement = plan.start(&scheduler, false, move |s| sink.borrow_mut().push(s));
    drop(task);
    let task = replacement;
    scheduler.advance_to(1000);

    // One from the first run, three from the second
    assert_eq!(fired.borrow().len(), 4);
    assert_eq!(task.pending(), 3);
    assert_eq!(scheduler.pending(), 0);
}

// ============================================================================
// Reveal + Stagger
// ============================================================================

/// Chips only start once the intro crosses its threshold
#[test]
fn test_reveal_gates_stagger() {
    let config = SiteConfig::default();
    let scheduler = ManualScheduler::new();
    let chips = Rc::new(RefCell::new(ChipSequence::new()));
    let mut trigger = RevealTrigger::new(config.motion.intro_threshold);
    let mut revealed = RevealState::hidden();
    let mut task = None;

    for ratio in [0.0, 0.1, 0.3, 0.36, 0.8, 0.0] {
        if trigger.observe(IntersectionSample::new(ratio > 0.0, ratio)) && revealed.reveal() {
            let sink = Rc::clone(&chips);
            task = Some(config.motion.chip_plan().start(&scheduler, false, move |step| {
                sink.borrow_mut().apply(step)
            }));
        }
    }

    assert!(revealed.is_revealed());
    assert_eq!(scheduler.registrations(), 5);
    scheduler.advance_to(3800);
    assert_eq!(chips.borrow().max_lit(), Some(4));
    drop(task);
}

// ============================================================================
// Smooth Scroll
// ============================================================================

/// Reduced motion makes exactly one write, equal to the target
#[test]
fn test_reduced_motion_scroll_is_single_write() {
    let host = FakeWindow::reduced(800.0);
    let mut controller = ScrollController::new();

    let start = controller.begin(&host, 1234.5, Duration::from_millis(2200), 0.0);
    run_frames(&mut controller, &host, start, 0.0);

    assert_eq!(start, ScrollStart::Jumped);
    assert_eq!(*host.writes.borrow(), vec![1234.5]);
}

/// Hero "Scroll down" lands exactly on the intro
#[test]
fn test_scroll_to_element_lands_on_target() {
    init_tracing();
    let mut host = FakeWindow::new(900.0);
    host.elements.insert("next-section", 900.0);
    let mut controller = ScrollController::new();

    let target = ScrollRequest::ToElement {
        id: "next-section".into(),
        offset: 0.0,
    }
    .resolve(&host)
    .unwrap();
    let start = controller.begin(&host, target, Duration::from_millis(2200), 0.0);
    run_frames(&mut controller, &host, start, 0.0);

    assert_eq!(host.scroll_y(), 900.0);
    assert!(host.write_count() > 100);
    let writes = host.writes.borrow();
    assert!(writes.windows(2).all(|w| w[0] <= w[1]));
}

/// A missing target element scrolls exactly one viewport
#[test]
fn test_missing_target_scrolls_one_viewport() {
    let host = FakeWindow::new(740.0);
    host.y.set(1200.0);
    let mut controller = ScrollController::new();

    let target = element_or_next_viewport(&host, "after-black-intro", 0.0);
    assert_eq!(target, 1940.0);

    let start = controller.begin(&host, target, Duration::from_millis(2200), 0.0);
    run_frames(&mut controller, &host, start, 0.0);
    assert_eq!(host.scroll_y(), 1940.0);
}

/// A missing element with no fallback leaves the page alone
#[test]
fn test_missing_target_without_fallback_is_noop() {
    let host = FakeWindow::new(740.0);
    let request = ScrollRequest::ToElement {
        id: "next-section".into(),
        offset: 0.0,
    };
    assert_eq!(request.resolve(&host), None);
    assert_eq!(host.write_count(), 0);
}

/// A second click mid-flight wins; the first loop writes nothing more
#[test]
fn test_second_scroll_supersedes_first() {
    let host = FakeWindow::new(800.0);
    let mut controller = ScrollController::new();

    let ScrollStart::Animating(first) = controller.begin(&host, 2000.0, Duration::from_millis(2000), 0.0)
    else {
        panic!("expected animation");
    };
    assert_eq!(controller.frame(first, &host, 500.0), FrameOutcome::Continue);

    let second = controller.begin(&host, 100.0, Duration::from_millis(1000), 500.0);
    assert_eq!(controller.frame(first, &host, 516.0), FrameOutcome::Superseded);

    run_frames(&mut controller, &host, second, 500.0);
    assert_eq!(host.scroll_y(), 100.0);
}

// ============================================================================
// Pinned Progress
// ============================================================================

/// A 3x viewport track scrolled one viewport in sits at half progress
#[test]
fn test_triple_height_track_midpoint() {
    let vh = 1000.0;
    assert!((scroll_progress(TrackGeometry::new(-vh, 3.0 * vh), vh) - 0.5).abs() < 1e-12);
}

/// Scrolling through the sensor grid lights every chip by the end
#[test]
fn test_sensor_grid_scroll_through() {
    let vh = 800.0;
    let height = 2.0 * vh;
    let mut tracker = ProgressTracker::new();
    tracker.attach(TrackGeometry::new(0.0, height), vh);

    let mut lit_at: [Option<usize>; 3] = [None; 3];
    for step in 0..=100usize {
        let scrolled = step as f64 * 8.0;
        let p = tracker.update(TrackGeometry::new(-scrolled, height), vh);
        let frame = SensorGridFrame::at(p);
        for (i, on) in frame.highlights.iter().enumerate() {
            if *on && lit_at[i].is_none() {
                lit_at[i] = Some(step);
            }
        }
    }

    assert_eq!(tracker.progress(), 1.0);
    let lit: Vec<usize> = lit_at.iter().map(|s| s.unwrap()).collect();
    assert!(lit[0] < lit[1] && lit[1] < lit[2], "highlights in order: {:?}", lit);
}
