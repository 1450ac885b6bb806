//! Scroll progress for pinned (sticky) sections.
//!
//! A pinned section is a tall "track" whose inner stage sticks to the top of
//! the viewport. As the page scrolls through the track, its top edge moves
//! from 0 to `-(height - viewport)`, which maps onto progress `0..=1`.

use crate::motion::{clamp, ease_out_cubic, lerp, line_length, segment_progress, smoothstep};

/// Viewport-relative geometry of a track element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    /// Top edge relative to the viewport; negative once scrolled past
    pub top: f64,
    pub height: f64,
}

impl TrackGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Normalized progress of a pinned track.
///
/// The scrollable distance is `height - viewport_height`, floored at 1 so a
/// track shorter than the viewport yields a degenerate but finite value.
pub fn scroll_progress(track: TrackGeometry, viewport_height: f64) -> f64 {
    let total = (track.height - viewport_height).max(1.0);
    clamp(-track.top / total, 0.0, 1.0)
}

/// Lifecycle of a progress tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackerState {
    #[default]
    Unmounted,
    Tracking,
}

/// Per-section progress, recomputed on every scroll and resize tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressTracker {
    state: TrackerState,
    progress: f64,
    pinned: bool,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Unmounted,
            progress: 0.0,
            pinned: false,
        }
    }

    /// A tracker fixed at full progress; geometry updates are ignored.
    pub fn completed() -> Self {
        Self {
            state: TrackerState::Unmounted,
            progress: 1.0,
            pinned: true,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Starts tracking and takes the initial measurement.
    pub fn attach(&mut self, geometry: TrackGeometry, viewport_height: f64) -> f64 {
        self.state = TrackerState::Tracking;
        self.update(geometry, viewport_height)
    }

    /// Recomputes progress from fresh geometry. Unmounted trackers keep
    /// their last value.
    pub fn update(&mut self, geometry: TrackGeometry, viewport_height: f64) -> f64 {
        if self.state == TrackerState::Tracking && !self.pinned {
            self.progress = scroll_progress(geometry, viewport_height);
        }
        self.progress
    }

    pub fn detach(&mut self) {
        self.state = TrackerState::Unmounted;
    }
}

/// A straight line drawn over a sub-range of progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub range: (f64, f64),
}

impl LineSegment {
    pub const fn new(from: (f64, f64), to: (f64, f64), range: (f64, f64)) -> Self {
        Self { from, to, range }
    }

    /// Stroke length, used as the dash array total.
    pub fn length(&self) -> f64 {
        line_length(self.from, self.to)
    }

    /// How much of this segment is drawn at global `progress`.
    pub fn draw_fraction(&self, progress: f64) -> f64 {
        segment_progress(progress, self.range)
    }

    /// Dash offset that hides the undrawn remainder of the stroke.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        (1.0 - self.draw_fraction(progress)) * self.length()
    }
}

/// Sensors to research to data to 5G, drawn in sequence.
pub const SENSOR_GRID_SEGMENTS: [LineSegment; 3] = [
    LineSegment::new((12.0, 78.0), (36.0, 52.0), (0.0, 0.33)),
    LineSegment::new((36.0, 52.0), (62.0, 36.0), (0.33, 0.66)),
    LineSegment::new((62.0, 36.0), (86.0, 22.0), (0.66, 0.95)),
];

/// Derived visual state of the sensor-grid scrollytelling scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorGridFrame {
    pub progress: f64,
    /// Per-segment draw fraction
    pub segments: [f64; 3],
    /// Chip highlights: researcher, institution, network
    pub highlights: [bool; 3],
    /// Paragraph opacity
    pub resolve: f64,
    /// Overline vertical offset in px
    pub overline_offset: f64,
}

impl SensorGridFrame {
    pub fn at(progress: f64) -> Self {
        let segments = SENSOR_GRID_SEGMENTS.map(|s| s.draw_fraction(progress));
        Self {
            progress,
            segments,
            highlights: [
                segments[0] > 0.85 || progress >= 0.66,
                segments[1] > 0.85 || progress >= 0.9,
                segments[2] > 0.25 || progress >= 0.95,
            ],
            resolve: smoothstep(0.8, 1.0, progress),
            overline_offset: (1.0 - smoothstep(0.05, 0.15, progress)) * 10.0,
        }
    }

    /// Pulse nodes where segments start and land, with their draw fractions.
    pub fn pulse_nodes(&self) -> [((f64, f64), f64); 4] {
        let [s0, s1, s2] = SENSOR_GRID_SEGMENTS;
        [
            (s0.from, self.segments[0]),
            (s0.to, self.segments[0]),
            (s1.to, self.segments[1]),
            (s2.to, self.segments[2]),
        ]
    }
}

/// Radius of a pulse node whose segment is `t` drawn.
pub fn pulse_radius(t: f64) -> f64 {
    1.2 + 0.8 * ease_out_cubic(t)
}

/// Derived visual state of the signal-sweep intro.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalSweepFrame {
    pub progress: f64,
    /// Vertical centre of the radial sweep, percent of stage height
    pub center_percent: f64,
    pub overline: f64,
    pub sentences: [f64; 3],
    pub grid_alpha: f64,
}

impl SignalSweepFrame {
    pub fn at(progress: f64) -> Self {
        let sentences = [
            smoothstep(0.12, 0.34, progress),
            smoothstep(0.40, 0.64, progress),
            smoothstep(0.68, 0.92, progress),
        ];
        Self {
            progress,
            center_percent: lerp(-15.0, 115.0, progress),
            overline: smoothstep(0.04, 0.16, progress),
            sentences,
            grid_alpha: 0.08 + 0.1 * sentences[1],
        }
    }
}
