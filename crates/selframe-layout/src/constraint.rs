#![forbid(unsafe_code)]

//! Constraint checks and clamping.
//!
//! Two pure rules guard every commit:
//!
//! - [`is_within_constraints`] decides whether a dragged handle may move to a
//!   candidate position without shrinking the area below its minimum size.
//!   It is evaluated against the area *before* the move; a `false` result
//!   means the drag stalls and nothing is written.
//! - [`clamp_area`] turns a candidate rectangle into one that fits the
//!   container and meets the minimum size, rolling the origin back to the
//!   previous area when a dimension bottoms out.
//!
//! [`fit_area`] is the rollback-free variant used when there is no
//! meaningful previous area (construction, reset, a changed minimum).
//!
//! # Failure Modes
//!
//! None of these fail. They expect finite input; `SelectionFrame` drops
//! non-finite candidates before they get here.

use selframe_core::geometry::{Area, PERCENT_MAX, Position, Sizes};
use selframe_core::handle::Handle;

/// Whether `handle` may move to `candidate` given the current `area`.
#[must_use]
pub fn is_within_constraints(handle: Handle, candidate: Position, area: Area, min: Sizes) -> bool {
    let max_left = area.left + area.width - min.width;
    let max_top = area.top + area.height - min.height;
    let min_left = area.left + min.width;
    let min_top = area.top + min.height;

    match handle {
        Handle::NorthWest => candidate.left <= max_left && candidate.top <= max_top,
        Handle::North => candidate.top <= max_top,
        Handle::NorthEast => candidate.left >= min_left && candidate.top <= max_top,
        Handle::East => candidate.left >= min_left,
        Handle::SouthEast => candidate.left >= min_left && candidate.top >= min_top,
        Handle::South => candidate.top >= min_top,
        Handle::SouthWest => candidate.left <= max_left && candidate.top >= min_top,
        Handle::West => candidate.left <= max_left,
    }
}

/// Clamp a coordinate so that a span of `size` starting at it stays inside
/// `[0, 100]`.
///
/// Computed as `max(0, min(value, 100 − size))` so that an oversize span
/// pins to `0` instead of panicking like `f64::clamp` would.
#[inline]
#[must_use]
pub fn clamp_origin(value: f64, size: f64) -> f64 {
    value.min(PERCENT_MAX - size).max(0.0)
}

/// Fit `candidate` into the container and the minimum size.
///
/// 1. `left`/`top` are clamped with [`clamp_origin`].
/// 2. `width`/`height` are capped to the room left after the origin and
///    raised to the minimum.
/// 3. Outside a move, a dimension that landed exactly on its minimum keeps
///    the previous origin on that axis, so the far edge stops instead of
///    pushing the near edge.
/// 4. The origin is clamped again against the settled sizes, so raising a
///    dimension to its minimum never pushes the far edge past 100.
#[must_use]
pub fn clamp_area(candidate: Area, previous: Area, min: Sizes, moving: bool) -> Area {
    let mut left = clamp_origin(candidate.left, candidate.width);
    let mut top = clamp_origin(candidate.top, candidate.height);

    let width = candidate.width.min(PERCENT_MAX - left).max(min.width);
    let height = candidate.height.min(PERCENT_MAX - top).max(min.height);

    if !moving {
        if width == min.width {
            left = previous.left;
        }
        if height == min.height {
            top = previous.top;
        }
    }

    let left = clamp_origin(left, width);
    let top = clamp_origin(top, height);

    Area::new(top, left, width, height)
}

/// Fit `candidate` into the container and the minimum size without
/// consulting a previous area.
///
/// Sizes are settled first and the origin is clamped against them, so the
/// result always satisfies the area invariants when `min` is at most 100.
#[must_use]
pub fn fit_area(candidate: Area, min: Sizes) -> Area {
    let width = candidate.width.max(min.width).min(PERCENT_MAX);
    let height = candidate.height.max(min.height).min(PERCENT_MAX);
    Area::new(
        clamp_origin(candidate.top, height),
        clamp_origin(candidate.left, width),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Sizes = Sizes::new(10.0, 10.0);
    const AREA: Area = Area::new(20.0, 20.0, 40.0, 40.0);

    fn allowed(handle: Handle, left: f64, top: f64) -> bool {
        is_within_constraints(handle, Position::new(left, top), AREA, MIN)
    }

    #[test]
    fn corner_rules() {
        // NW may not pass right − min or bottom − min.
        assert!(allowed(Handle::NorthWest, 50.0, 50.0));
        assert!(!allowed(Handle::NorthWest, 50.1, 10.0));
        assert!(!allowed(Handle::NorthWest, 10.0, 50.1));

        assert!(allowed(Handle::SouthEast, 30.0, 30.0));
        assert!(!allowed(Handle::SouthEast, 29.9, 80.0));

        assert!(allowed(Handle::NorthEast, 30.0, 50.0));
        assert!(!allowed(Handle::NorthEast, 30.0, 50.5));

        assert!(allowed(Handle::SouthWest, 50.0, 30.0));
        assert!(!allowed(Handle::SouthWest, 50.0, 29.0));
    }

    #[test]
    fn edge_rules_ignore_the_cross_axis() {
        let far = 1_000.0;
        assert!(allowed(Handle::East, 30.0, far));
        assert!(!allowed(Handle::East, 29.0, 0.0));
        assert!(allowed(Handle::West, 50.0, -far));
        assert!(!allowed(Handle::West, 51.0, 0.0));
        assert!(allowed(Handle::North, far, 50.0));
        assert!(!allowed(Handle::North, 0.0, 51.0));
        assert!(allowed(Handle::South, -far, 30.0));
        assert!(!allowed(Handle::South, 0.0, 29.0));
    }

    #[test]
    fn clamp_origin_handles_oversize_spans() {
        assert_eq!(clamp_origin(95.0, 10.0), 90.0);
        assert_eq!(clamp_origin(-3.0, 10.0), 0.0);
        assert_eq!(clamp_origin(50.0, 150.0), 0.0);
    }

    #[test]
    fn clamp_area_fits_container() {
        let out = clamp_area(Area::new(-5.0, 80.0, 40.0, 30.0), AREA, MIN, true);
        assert_eq!(out, Area::new(0.0, 60.0, 40.0, 30.0));
    }

    #[test]
    fn clamp_area_raises_to_minimum_and_rolls_back_origin() {
        let previous = Area::new(5.0, 7.0, 30.0, 30.0);
        let out = clamp_area(Area::new(40.0, 40.0, 2.0, 2.0), previous, MIN, false);
        assert_eq!(out, Area::new(5.0, 7.0, 10.0, 10.0));
    }

    #[test]
    fn moving_keeps_clamped_origin_at_minimum() {
        let previous = Area::new(5.0, 7.0, 10.0, 10.0);
        let out = clamp_area(Area::new(40.0, 40.0, 10.0, 10.0), previous, MIN, true);
        assert_eq!(out, Area::new(40.0, 40.0, 10.0, 10.0));
    }

    #[test]
    fn moving_raise_to_minimum_stays_inside() {
        let out = clamp_area(Area::new(98.0, 98.0, 1.0, 1.0), AREA, MIN, true);
        assert_eq!(out, Area::new(90.0, 90.0, 10.0, 10.0));
        assert!(out.is_within_container());
    }

    #[test]
    fn oversize_candidate_is_capped() {
        let out = clamp_area(Area::new(10.0, 50.0, 1e300, 20.0), AREA, MIN, false);
        assert_eq!(out, Area::new(10.0, 0.0, 100.0, 20.0));
    }

    #[test]
    fn fit_area_settles_size_before_origin() {
        // A 5-wide area at the right edge grows leftwards to a 10 minimum.
        let out = fit_area(Area::new(0.0, 95.0, 5.0, 5.0), MIN);
        assert_eq!(out, Area::new(0.0, 90.0, 10.0, 10.0));
        assert!(out.is_within_container());

        let out = fit_area(Area::new(-20.0, 10.0, 300.0, 50.0), MIN);
        assert_eq!(out, Area::new(0.0, 0.0, 100.0, 50.0));
    }
}
