//! Staggered reveal sequencing.
//!
//! Once a section is revealed, its children light up one after another at
//! `start_delay + k * step_delay`. Every timer for a sequence is owned by a
//! single [`StaggerTask`]; dropping the task cancels whatever has not fired.
//!
//! Timers come from a [`Scheduler`], so the same plan runs on browser
//! timeouts in the app and on [`ManualScheduler`]'s virtual clock in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Source of one-shot timers.
pub trait Scheduler {
    /// Keeps a scheduled task alive. Dropping it cancels the task.
    type Handle;

    /// Runs `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// One event of a running sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerStep {
    /// Item `k` lit up and is now the current one
    Lit(usize),
    /// Every item up to and including this index is lit at once
    Settled(usize),
}

/// Timing of a staggered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerPlan {
    pub count: usize,
    pub start_delay: Duration,
    pub step_delay: Duration,
}

impl StaggerPlan {
    pub fn new(count: usize, start_delay: Duration, step_delay: Duration) -> Self {
        Self {
            count,
            start_delay,
            step_delay,
        }
    }

    /// Delay from the start of the sequence until item `k` lights.
    pub fn offset(&self, k: usize) -> Duration {
        self.start_delay + self.step_delay * k as u32
    }

    /// Schedules the sequence.
    ///
    /// Under reduced motion nothing is scheduled: `on_step` receives
    /// [`StaggerStep::Settled`] with the last index before this returns.
    pub fn start<S, F>(&self, scheduler: &S, reduced_motion: bool, on_step: F) -> StaggerTask<S::Handle>
    where
        S: Scheduler,
        F: Fn(StaggerStep) + 'static,
    {
        if self.count == 0 {
            return StaggerTask::idle();
        }

        if reduced_motion {
            tracing::debug!("Stagger of {} settled without timers", self.count);
            on_step(StaggerStep::Settled(self.count - 1));
            return StaggerTask::idle();
        }

        let on_step: Rc<dyn Fn(StaggerStep)> = Rc::new(on_step);
        let handles = (0..self.count)
            .map(|k| {
                let on_step = Rc::clone(&on_step);
                scheduler.schedule(self.offset(k), Box::new(move || on_step(StaggerStep::Lit(k))))
            })
            .collect();

        tracing::debug!(
            "Stagger of {} scheduled ({}ms + k*{}ms)",
            self.count,
            self.start_delay.as_millis(),
            self.step_delay.as_millis()
        );
        StaggerTask { handles }
    }
}

/// Owns every timer of one sequence.
#[derive(Debug)]
#[must_use = "dropping a StaggerTask cancels its timers"]
pub struct StaggerTask<H> {
    handles: Vec<H>,
}

impl<H> Default for StaggerTask<H> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<H> StaggerTask<H> {
    /// A task holding no timers.
    pub fn idle() -> Self {
        Self { handles: Vec::new() }
    }

    /// Number of timer handles still held.
    pub fn pending(&self) -> usize {
        self.handles.len()
    }

    /// Cancels every timer that has not fired yet.
    pub fn cancel(&mut self) {
        if !self.handles.is_empty() {
            tracing::debug!("Cancelling stagger with {} timers", self.handles.len());
        }
        self.handles.clear();
    }
}

/// Chip highlight state driven by a stagger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChipSequence {
    current: Option<usize>,
    max_lit: Option<usize>,
}

impl ChipSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chip currently pulsing, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// High-water mark of lit chips. Never decreases.
    pub fn max_lit(&self) -> Option<usize> {
        self.max_lit
    }

    pub fn apply(&mut self, step: StaggerStep) {
        match step {
            StaggerStep::Lit(k) => {
                self.current = Some(k);
                self.max_lit = Some(self.max_lit.map_or(k, |m| m.max(k)));
            }
            StaggerStep::Settled(last) => {
                self.current = Some(last);
                self.max_lit = Some(self.max_lit.map_or(last, |m| m.max(last)));
            }
        }
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.max_lit.is_some_and(|m| index <= m)
    }

    pub fn is_pulsing(&self, index: usize) -> bool {
        self.current == Some(index)
    }
}

// ============================================================================
// Virtual clock
// ============================================================================

type TaskKey = (u64, u64);

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    registrations: usize,
    queue: BTreeMap<TaskKey, Box<dyn FnOnce()>>,
}

/// Deterministic scheduler driven by explicit clock advances.
///
/// Tasks due at the same instant run in registration order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

/// Cancels its task on drop.
pub struct ManualHandle {
    key: TaskKey,
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.queue.remove(&self.key);
            }
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Total tasks ever scheduled, fired or not.
    pub fn registrations(&self) -> usize {
        self.clock.borrow().registrations
    }

    /// Tasks scheduled and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Moves the clock to `ms`, running every task due on the way.
    pub fn advance_to(&self, ms: u64) {
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                match clock.queue.first_key_value() {
                    Some((&key, _)) if key.0 <= ms => {
                        clock.now_ms = key.0;
                        clock.queue.remove(&key)
                    }
                    _ => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        let mut clock = self.clock.borrow_mut();
        clock.now_ms = clock.now_ms.max(ms);
    }

    pub fn advance_by(&self, delta: Duration) {
        let target = self.now_ms() + delta.as_millis() as u64;
        self.advance_to(target);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let key = (clock.now_ms + delay.as_millis() as u64, clock.next_id);
        clock.next_id += 1;
        clock.registrations += 1;
        clock.queue.insert(key, task);
        ManualHandle {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn chip_plan() -> StaggerPlan {
        StaggerPlan::new(5, Duration::from_millis(1000), Duration::from_millis(700))
    }

    #[test]
    fn offsets_are_linear() {
        let plan = chip_plan();
        assert_eq!(plan.offset(0), Duration::from_millis(1000));
        assert_eq!(plan.offset(4), Duration::from_millis(3800));
    }

    #[test]
    fn chip_sequence_tracks_high_water_mark() {
        let mut chips = ChipSequence::new();
        assert!(!chips.is_lit(0));

        chips.apply(StaggerStep::Lit(2));
        chips.apply(StaggerStep::Lit(1));
        assert_eq!(chips.current(), Some(1));
        assert_eq!(chips.max_lit(), Some(2));
        assert!(chips.is_lit(2));
        assert!(!chips.is_lit(3));
        assert!(chips.is_pulsing(1));
        assert!(!chips.is_pulsing(2));
    }

    #[test]
    fn settled_lights_everything() {
        let mut chips = ChipSequence::new();
        chips.apply(StaggerStep::Settled(4));
        assert!((0..5).all(|i| chips.is_lit(i)));
        assert_eq!(chips.current(), Some(4));
    }

    #[test]
    fn dropping_task_cancels_pending_timers() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);

        let task = chip_plan().start(&scheduler, false, move |_| counter.set(counter.get() + 1));
        assert_eq!(task.pending(), 5);

        scheduler.advance_to(1700);
        assert_eq!(fired.get(), 2);

        drop(task);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance_to(10_000);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn cancel_keeps_task_reusable() {
        let scheduler = ManualScheduler::new();
        let mut task = chip_plan().start(&scheduler, false, |_| {});
        task.cancel();
        assert_eq!(task.pending(), 0);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.registrations(), 5);
    }

    #[test]
    fn empty_plan_schedules_nothing() {
        let scheduler = ManualScheduler::new();
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let plan = StaggerPlan::new(0, Duration::ZERO, Duration::ZERO);
        let task = plan.start(&scheduler, true, move |_| flag.set(true));
        assert_eq!(task.pending(), 0);
        assert!(!called.get());
    }

    #[test]
    fn same_instant_tasks_run_in_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let handles: Vec<_> = (0..3)
            .map(|i| {
                let log = Rc::clone(&log);
                scheduler.schedule(Duration::from_millis(10), Box::new(move || log.borrow_mut().push(i)))
            })
            .collect();
        scheduler.advance_by(Duration::from_millis(10));
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        drop(handles);
    }
}
