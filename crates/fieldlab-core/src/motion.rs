//! Easing and interpolation helpers.
//!
//! Every function here is pure. Inputs come from layout geometry or timers
//! and are assumed finite.

/// Constrains `v` to `[lo, hi]`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Cubic ease-in-out. Slow start, fast middle, slow finish.
///
/// `f(0) = 0`, `f(0.5) = 0.5`, `f(1) = 1`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-out. Input is clamped to `[0, 1]` first.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - clamp(t, 0.0, 1.0)).powi(3)
}

/// Hermite smoothstep between two edges.
///
/// Returns 0 at or below `edge0`, 1 at or above `edge1`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linearly remaps `progress` inside `[start, end]` onto `[0, 1]`.
///
/// Values before the range give 0 and values past it give 1, so sequenced
/// sub-animations can share a single global progress value.
pub fn segment_progress(progress: f64, (start, end): (f64, f64)) -> f64 {
    if progress <= start {
        return 0.0;
    }
    if progress >= end {
        return 1.0;
    }
    (progress - start) / (end - start)
}

/// Euclidean distance between two points.
pub fn line_length(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn ease_in_out_fixed_points() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let mirrored = 1.0 - ease_in_out_cubic(1.0 - t);
            assert!((ease_in_out_cubic(t) - mirrored).abs() < 1e-9, "t = {}", t);
        }
    }

    #[test]
    fn ease_out_clamps_input() {
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(4.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
    }

    #[test]
    fn smoothstep_edges_and_midpoint() {
        assert_eq!(smoothstep(0.12, 0.34, 0.0), 0.0);
        assert_eq!(smoothstep(0.12, 0.34, 0.12), 0.0);
        assert_eq!(smoothstep(0.12, 0.34, 0.34), 1.0);
        assert_eq!(smoothstep(0.12, 0.34, 0.9), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn segment_progress_examples() {
        assert!((segment_progress(0.5, (0.0, 1.0)) - 0.5).abs() < EPS);
        assert_eq!(segment_progress(0.2, (0.33, 0.66)), 0.0);
        assert_eq!(segment_progress(0.7, (0.33, 0.66)), 1.0);
        assert!((segment_progress(0.495, (0.33, 0.66)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn line_length_is_hypotenuse() {
        assert!((line_length((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < EPS);
        assert_eq!(line_length((12.0, 78.0), (12.0, 78.0)), 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-15.0, 115.0, 0.0), -15.0);
        assert_eq!(lerp(-15.0, 115.0, 1.0), 115.0);
    }
}
