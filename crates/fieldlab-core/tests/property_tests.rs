//! Property-based tests for the motion engine
//!
//! Uses proptest to verify invariants of the easing math, pinned progress,
//! reveal triggers and chip sequences.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use fieldlab_core::motion::{ease_in_out_cubic, segment_progress, smoothstep};
use fieldlab_core::{
    scroll_progress, ChipSequence, IntersectionSample, Lightbox, ManualScheduler, RevealState,
    RevealTrigger, StaggerPlan, StaggerStep, TrackGeometry,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Edges with a non-degenerate gap
fn edges_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-10.0..10.0f64, 0.001..10.0f64).prop_map(|(e0, gap)| (e0, e0 + gap))
}

/// Sub-ranges of [0, 1]
fn range_strategy() -> impl Strategy<Value = (f64, f64)> {
    (0.0..0.99f64, 0.001..1.0f64).prop_map(|(s, len)| (s, (s + len).min(1.0)))
}

fn sample_strategy() -> impl Strategy<Value = IntersectionSample> {
    (any::<bool>(), 0.0..=1.0f64).prop_map(|(hit, ratio)| IntersectionSample::new(hit, ratio))
}

#[derive(Debug, Clone)]
enum LightboxOp {
    Open(usize),
    Close,
    Next,
    Prev,
    Key(&'static str),
}

fn lightbox_ops_strategy() -> impl Strategy<Value = Vec<LightboxOp>> {
    prop::collection::vec(
        prop_oneof![
            (0..20usize).prop_map(LightboxOp::Open),
            Just(LightboxOp::Close),
            Just(LightboxOp::Next),
            Just(LightboxOp::Prev),
            prop::sample::select(vec!["Escape", "ArrowRight", "ArrowLeft", "Enter"])
                .prop_map(LightboxOp::Key),
        ],
        0..40,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Easing stays inside the unit interval
    #[test]
    fn ease_in_out_is_bounded(t in 0.0..=1.0f64) {
        let v = ease_in_out_cubic(t);
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&v));
    }

    /// Easing never goes backwards
    #[test]
    fn ease_in_out_is_monotone(a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ease_in_out_cubic(lo) <= ease_in_out_cubic(hi) + 1e-12);
    }

    /// Smoothstep is bounded and monotone for any ordered edges
    #[test]
    fn smoothstep_bounded_and_monotone((e0, e1) in edges_strategy(), a in -20.0..20.0f64, b in -20.0..20.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (s_lo, s_hi) = (smoothstep(e0, e1, lo), smoothstep(e0, e1, hi));
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&s_lo));
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&s_hi));
        prop_assert!(s_lo <= s_hi + 1e-12);
    }

    /// Segment progress is 0 before, 1 after, and bounded between
    #[test]
    fn segment_progress_bounds(p in -1.0..2.0f64, range in range_strategy()) {
        let v = segment_progress(p, range);
        prop_assert!((0.0..=1.0).contains(&v));
        if p <= range.0 {
            prop_assert_eq!(v, 0.0);
        }
        if p >= range.1 {
            prop_assert_eq!(v, 1.0);
        }
    }

    /// Pinned progress is always a finite value in [0, 1]
    #[test]
    fn scroll_progress_is_clamped(
        top in -1.0e5..1.0e5f64,
        height in 0.0..1.0e5f64,
        vh in 1.0..4000.0f64,
    ) {
        let p = scroll_progress(TrackGeometry::new(top, height), vh);
        prop_assert!(p.is_finite());
        prop_assert!((0.0..=1.0).contains(&p));
    }

    /// Scrolling further into a track never lowers progress
    #[test]
    fn scroll_progress_is_monotone_in_scroll(
        a in 0.0..5000.0f64,
        b in 0.0..5000.0f64,
        height in 1000.0..8000.0f64,
    ) {
        let vh = 900.0;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = scroll_progress(TrackGeometry::new(-lo, height), vh);
        let p_hi = scroll_progress(TrackGeometry::new(-hi, height), vh);
        prop_assert!(p_lo <= p_hi);
    }

    /// Once fired, a trigger stays fired and the revealed flag stays set
    #[test]
    fn reveal_is_monotone(threshold in 0.0..=1.0f64, samples in prop::collection::vec(sample_strategy(), 0..30)) {
        let mut trigger = RevealTrigger::new(threshold);
        let mut state = RevealState::hidden();
        let mut fired_count = 0;

        for sample in samples {
            let was_revealed = state.is_revealed();
            if trigger.observe(sample) {
                fired_count += 1;
                state.reveal();
            }
            if was_revealed {
                prop_assert!(state.is_revealed());
            }
        }
        prop_assert!(fired_count <= 1);
        prop_assert_eq!(trigger.has_fired(), state.is_revealed());
    }

    /// The lit high-water mark never decreases, whatever order steps arrive in
    #[test]
    fn chip_high_water_mark_never_decreases(steps in prop::collection::vec(0..5usize, 0..20)) {
        let mut chips = ChipSequence::new();
        let mut previous = None;
        for k in steps {
            chips.apply(StaggerStep::Lit(k));
            prop_assert!(chips.max_lit() >= previous);
            prop_assert!(chips.is_pulsing(k));
            previous = chips.max_lit();
        }
    }

    /// A stagger fires each index exactly once, in order
    #[test]
    fn stagger_visits_each_index_once(
        count in 1..8usize,
        start in 0..2000u64,
        step in 1..1000u64,
    ) {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let plan = StaggerPlan::new(count, Duration::from_millis(start), Duration::from_millis(step));

        let _task = plan.start(&scheduler, false, move |s| sink.borrow_mut().push(s));
        scheduler.advance_to(start + step * count as u64 + 1);

        let expected: Vec<_> = (0..count).map(StaggerStep::Lit).collect();
        let seen = seen.borrow().clone();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(scheduler.registrations(), count);
    }

    /// The lightbox index always stays within the gallery
    #[test]
    fn lightbox_index_in_bounds(len in 0..15usize, ops in lightbox_ops_strategy()) {
        let mut lightbox = Lightbox::new(len);
        for op in ops {
            match op {
                LightboxOp::Open(i) => lightbox.open(i),
                LightboxOp::Close => lightbox.close(),
                LightboxOp::Next => lightbox.next(),
                LightboxOp::Prev => lightbox.prev(),
                LightboxOp::Key(key) => {
                    lightbox.on_key(key);
                }
            }
            if let Some(i) = lightbox.index() {
                prop_assert!(i < len);
            }
        }
    }
}

// ============================================================================
// Fixed-point checks
// ============================================================================

#[test]
fn test_ease_in_out_endpoints() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
}

#[test]
fn test_segment_progress_examples() {
    assert!((segment_progress(0.5, (0.0, 1.0)) - 0.5).abs() < 1e-12);
    assert_eq!(segment_progress(0.2, (0.33, 0.66)), 0.0);
}
