#![forbid(unsafe_code)]

//! Aspect-ratio target computation.
//!
//! With the aspect lock on, a drag first runs the ordinary resolver to get a
//! trial area, then [`ratio_target`] decides which dimension the dragged
//! handle drives and derives the other from the ratio of the area as it was
//! before the drag step.
//!
//! | Handle | Driven | Derived | Origin |
//! |---|---|---|---|
//! | E, W, SE, SW | width | `height = width / ratio` | trial |
//! | N, S, NE | height | `width = height × ratio` | trial |
//! | NW | height | `width = height × ratio` | anchored to SE |
//!
//! The NW anchor computes `left = |SE.left − width|`. The absolute value
//! turns an overshoot past the left edge into a mirrored positive offset
//! rather than a clamp; [`clamp_area`](crate::constraint::clamp_area) then
//! fits the result.
//!
//! A derived size below the minimum reverts like an overflow. Raising it to
//! the minimum would commit a different ratio.

use selframe_core::geometry::{Area, PERCENT_MAX, Position, Sizes};
use selframe_core::handle::Handle;

/// What the aspect strategy decided for one drag step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioOutcome {
    /// Commit this area (still subject to clamping).
    Resize(Area),
    /// The ratio-preserving size would reach the container or drop below
    /// the minimum; restore the previous area.
    Revert,
}

/// Compute the ratio-preserving area for a drag of `handle`.
///
/// `trial` is the resolver's output for the raw candidate, `previous` the
/// area before the step, `anchor` the SE handle position before the step and
/// `min` the configured minimum size.
#[must_use]
pub fn ratio_target(
    handle: Handle,
    trial: Area,
    previous: Area,
    anchor: Position,
    min: Sizes,
) -> RatioOutcome {
    let Some(ratio) = previous.aspect_ratio() else {
        return RatioOutcome::Revert;
    };

    let (width, height) = match handle {
        Handle::East | Handle::West | Handle::SouthEast | Handle::SouthWest => {
            (trial.width, trial.width / ratio)
        }
        Handle::North | Handle::South | Handle::NorthEast | Handle::NorthWest => {
            (trial.height * ratio, trial.height)
        }
    };

    if width >= PERCENT_MAX || height >= PERCENT_MAX {
        return RatioOutcome::Revert;
    }
    if !Area::new(0.0, 0.0, width, height).meets_min_sizes(min) {
        return RatioOutcome::Revert;
    }

    let (left, top) = match handle {
        Handle::NorthWest => ((anchor.left - width).abs(), anchor.top - height),
        _ => (trial.left, trial.top),
    };

    RatioOutcome::Resize(Area::new(top, left, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Area = Area::new(0.0, 0.0, 50.0, 50.0);
    const MIN: Sizes = Sizes::new(5.0, 5.0);

    #[test]
    fn east_drives_width() {
        let trial = Area::new(0.0, 0.0, 80.0, 50.0);
        let out = ratio_target(Handle::East, trial, SQUARE, Position::new(50.0, 50.0), MIN);
        assert_eq!(out, RatioOutcome::Resize(Area::new(0.0, 0.0, 80.0, 80.0)));
    }

    #[test]
    fn south_drives_height_with_wide_ratio() {
        let previous = Area::new(0.0, 0.0, 40.0, 20.0);
        let trial = Area::new(0.0, 0.0, 40.0, 30.0);
        let out = ratio_target(Handle::South, trial, previous, Position::new(40.0, 20.0), MIN);
        assert_eq!(out, RatioOutcome::Resize(Area::new(0.0, 0.0, 60.0, 30.0)));
    }

    #[test]
    fn north_west_anchors_to_south_east() {
        let previous = Area::new(50.0, 50.0, 40.0, 40.0);
        let anchor = Position::new(90.0, 90.0);
        // Dragging NW up to top = 40 gives a trial height of 50.
        let trial = Area::new(40.0, 50.0, 40.0, 50.0);
        let out = ratio_target(Handle::NorthWest, trial, previous, anchor, MIN);
        assert_eq!(out, RatioOutcome::Resize(Area::new(40.0, 40.0, 50.0, 50.0)));
    }

    #[test]
    fn north_west_overshoot_mirrors_left() {
        let previous = Area::new(20.0, 10.0, 40.0, 20.0);
        let anchor = Position::new(50.0, 40.0);
        let trial = Area::new(10.0, 10.0, 40.0, 30.0);
        // width = 60 > SE.left, so left = |50 − 60| = 10.
        let out = ratio_target(Handle::NorthWest, trial, previous, anchor, MIN);
        assert_eq!(out, RatioOutcome::Resize(Area::new(10.0, 10.0, 60.0, 30.0)));
    }

    #[test]
    fn reaching_the_container_reverts() {
        let trial = Area::new(0.0, 0.0, 100.0, 50.0);
        let out = ratio_target(Handle::East, trial, SQUARE, Position::new(50.0, 50.0), MIN);
        assert_eq!(out, RatioOutcome::Revert);

        let tall = Area::new(0.0, 0.0, 20.0, 40.0);
        let trial = Area::new(0.0, 0.0, 60.0, 40.0);
        let out = ratio_target(Handle::SouthEast, trial, tall, Position::new(20.0, 40.0), MIN);
        assert_eq!(out, RatioOutcome::Revert);
    }

    #[test]
    fn derived_side_below_minimum_reverts() {
        let min = Sizes::new(10.0, 10.0);
        let wide = Area::new(0.0, 0.0, 40.0, 10.0);
        // Width 30 would need height 7.5.
        let trial = Area::new(0.0, 0.0, 30.0, 10.0);
        let out = ratio_target(Handle::East, trial, wide, Position::new(40.0, 10.0), min);
        assert_eq!(out, RatioOutcome::Revert);

        let trial = Area::new(0.0, 0.0, 60.0, 10.0);
        let out = ratio_target(Handle::East, trial, wide, Position::new(40.0, 10.0), min);
        assert_eq!(out, RatioOutcome::Resize(Area::new(0.0, 0.0, 60.0, 15.0)));
    }

    #[test]
    fn degenerate_previous_reverts() {
        let flat = Area::new(0.0, 0.0, 50.0, 0.0);
        let out = ratio_target(Handle::East, SQUARE, flat, Position::default(), MIN);
        assert_eq!(out, RatioOutcome::Revert);
    }
}
