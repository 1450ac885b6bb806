//! FieldLab Core Library
//!
//! Scroll, reveal and stagger engine for the FieldLab website.
//!
//! ## Overview
//!
//! FieldLab is a scroll-driven marketing site for an agricultural research
//! testbed. This crate holds everything about it that is not markup: easing
//! math, the smooth scroll driver, one-shot viewport reveals, pinned-section
//! progress, timed staggers, and the static content the pages render.
//!
//! Nothing here touches the browser. The viewport is reached through
//! [`ScrollHost`], timers through [`Scheduler`], and listeners are held as
//! [`Subscription`] guards, so every piece runs under plain `cargo test`.
//!
//! ## Principles
//!
//! - **Single-threaded**: all state lives on the UI thread; no locks
//! - **One-shot**: reveals fire once and never re-arm
//! - **Reduced motion first**: every animated path has a static equivalent
//!
//! ## Quick Start
//!
//! ```ignore
//! use fieldlab_core::{ChipSequence, ManualScheduler, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let scheduler = ManualScheduler::new();
//! let chips = std::rc::Rc::new(std::cell::RefCell::new(ChipSequence::new()));
//!
//! let sink = chips.clone();
//! let _task = config
//!     .motion
//!     .chip_plan()
//!     .start(&scheduler, false, move |step| sink.borrow_mut().apply(step));
//!
//! scheduler.advance_to(1700);
//! assert_eq!(chips.borrow().max_lit(), Some(1));
//! ```

pub mod color;
pub mod config;
pub mod content;
pub mod error;
pub mod lightbox;
pub mod motion;
pub mod nav;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod stagger;
pub mod subscription;

// Re-exports
pub use config::{IntroVariant, MotionConfig, SiteConfig, CONFIG_ELEMENT_ID};
pub use content::{FieldKey, FieldPanel, MediaItem, MatrixHover};
pub use error::{FieldLabError, FieldLabResult};
pub use lightbox::{Lightbox, LightboxKey, LightboxState};
pub use nav::HideOnScroll;
pub use progress::{
    scroll_progress, LineSegment, ProgressTracker, SensorGridFrame, SignalSweepFrame,
    TrackGeometry, TrackerState,
};
pub use reveal::{IntersectionSample, RevealState, RevealTrigger, TriggerState};
pub use scroll::{
    AnimationToken, FrameOutcome, ScrollAnimation, ScrollController, ScrollHost, ScrollRequest,
    ScrollStart,
};
pub use stagger::{
    ChipSequence, ManualHandle, ManualScheduler, Scheduler, StaggerPlan, StaggerStep, StaggerTask,
};
pub use subscription::{Subscription, SubscriptionSet};
