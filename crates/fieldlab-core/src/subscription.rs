//! RAII listener subscriptions.
//!
//! Scroll, resize, intersection and keydown listeners are held as
//! [`Subscription`] guards. Dropping a guard detaches its listener exactly
//! once, so a section that unmounts cannot leave callbacks behind.

use std::any::Any;
use std::fmt;

enum Detach {
    Callback(Box<dyn FnOnce()>),
    Guard(Box<dyn Any>),
}

/// A live listener registration.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    label: &'static str,
    detach: Option<Detach>,
}

impl Subscription {
    /// A subscription that runs `detach` when released.
    pub fn new(label: &'static str, detach: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            detach: Some(Detach::Callback(Box::new(detach))),
        }
    }

    /// A subscription that owns a guard whose own `Drop` detaches the
    /// listener (event listeners, observers, timers).
    pub fn hold<G: 'static>(label: &'static str, guard: G) -> Self {
        Self {
            label,
            detach: Some(Detach::Guard(Box::new(guard))),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    /// Detaches now instead of at drop.
    pub fn release(&mut self) {
        match self.detach.take() {
            Some(Detach::Callback(detach)) => {
                tracing::debug!("Detaching {} listener", self.label);
                detach();
            }
            Some(Detach::Guard(guard)) => {
                tracing::debug!("Detaching {} listener", self.label);
                drop(guard);
            }
            None => {}
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}

/// A group of subscriptions released together.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Detaches every listener in insertion order.
    pub fn clear(&mut self) {
        for mut subscription in self.subscriptions.drain(..) {
            subscription.release();
        }
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[test]
    fn drop_detaches_once() {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let mut sub = Subscription::new("scroll", move || c.set(c.get() + 1));
        assert!(sub.is_active());

        sub.release();
        assert!(!sub.is_active());
        drop(sub);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn held_guard_is_dropped_on_release() {
        struct Guard(Rc<Cell<bool>>);
        impl Drop for Guard {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let dropped = Rc::new(Cell::new(false));
        let sub = Subscription::hold("resize", Guard(Rc::clone(&dropped)));
        assert!(!dropped.get());
        drop(sub);
        assert!(dropped.get());
    }

    #[test]
    fn set_releases_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = SubscriptionSet::new();
        for label in ["scroll", "resize", "keydown"] {
            let log = Rc::clone(&log);
            set.push(Subscription::new(label, move || log.borrow_mut().push(label)));
        }
        assert_eq!(set.len(), 3);

        drop(set);
        assert_eq!(*log.borrow(), vec!["scroll", "resize", "keydown"]);
    }
}
