//! One-shot viewport reveal.
//!
//! A [`RevealTrigger`] is armed when a section mounts and fires the first time
//! an intersection sample crosses its threshold. `Fired` is terminal: later
//! samples, including the element leaving the viewport, change nothing.

/// Browsers report crossing ratios with float noise just under the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// A single intersection observation for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Fraction of the element's area inside the viewport, `[0, 1]`
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }
}

/// Lifecycle of a one-shot trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TriggerState {
    /// Waiting for a qualifying intersection
    #[default]
    Armed,
    /// Fired once; never re-arms
    Fired,
}

/// Fires once when an element becomes sufficiently visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    state: TriggerState,
}

impl RevealTrigger {
    /// An armed trigger. `threshold` is clamped to `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: TriggerState::Armed,
        }
    }

    /// A trigger that has already fired, for reduced-motion call sites that
    /// skip observation entirely.
    pub fn immediate() -> Self {
        Self {
            threshold: 0.0,
            state: TriggerState::Fired,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Fired
    }

    /// Feeds one observation. Returns `true` only on the Armed to Fired
    /// transition, which is the caller's cue to detach its observer.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.state == TriggerState::Fired {
            return false;
        }
        if sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= self.threshold {
            self.state = TriggerState::Fired;
            tracing::debug!(
                "Reveal fired at ratio {:.2} (threshold {:.2})",
                sample.ratio,
                self.threshold
            );
            return true;
        }
        false
    }
}

/// Monotonic revealed flag owned by a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState(bool);

impl RevealState {
    pub fn hidden() -> Self {
        Self(false)
    }

    pub fn revealed() -> Self {
        Self(true)
    }

    pub fn is_revealed(&self) -> bool {
        self.0
    }

    /// Marks the section revealed. Returns whether this call changed it.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.0;
        self.0 = true;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut trigger = RevealTrigger::new(0.35);
        assert!(!trigger.observe(IntersectionSample::new(true, 0.2)));
        assert_eq!(trigger.state(), TriggerState::Armed);

        assert!(trigger.observe(IntersectionSample::new(true, 0.35)));
        assert!(trigger.has_fired());

        assert!(!trigger.observe(IntersectionSample::new(true, 0.9)));
    }

    #[test]
    fn non_intersecting_samples_never_fire() {
        let mut trigger = RevealTrigger::new(0.0);
        assert!(!trigger.observe(IntersectionSample::new(false, 0.0)));
        assert!(trigger.observe(IntersectionSample::new(true, 0.0)));
    }

    #[test]
    fn fired_is_terminal_after_leaving_viewport() {
        let mut trigger = RevealTrigger::new(0.2);
        let mut state = RevealState::hidden();

        if trigger.observe(IntersectionSample::new(true, 0.5)) {
            state.reveal();
        }
        for sample in [
            IntersectionSample::new(false, 0.0),
            IntersectionSample::new(true, 0.1),
            IntersectionSample::new(false, 0.0),
        ] {
            if trigger.observe(sample) {
                state.reveal();
            }
        }
        assert!(trigger.has_fired());
        assert!(state.is_revealed());
    }

    #[test]
    fn immediate_trigger_is_already_fired() {
        let mut trigger = RevealTrigger::immediate();
        assert!(trigger.has_fired());
        assert!(!trigger.observe(IntersectionSample::new(true, 1.0)));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealTrigger::new(4.0).threshold(), 1.0);
        assert_eq!(RevealTrigger::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn reveal_state_reports_change_once() {
        let mut state = RevealState::default();
        assert!(state.reveal());
        assert!(!state.reveal());
        assert!(state.is_revealed());
    }
}
