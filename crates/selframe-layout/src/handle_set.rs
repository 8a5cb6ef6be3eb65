#![forbid(unsafe_code)]

//! The eight handle positions and the derivation of their bounding area.
//!
//! [`HandleSet`] is plain data: one [`Position`] per [`Handle`], stored
//! densely by [`Handle::index`]. The propagation steps of the resolver
//! ([`HandleSet::apply_dependencies`], [`HandleSet::center_edges`]) and the
//! derivation ([`HandleSet::bounding_area`]) live here so they can be tested
//! without a frame.
//!
//! # Invariants
//!
//! For a set built by [`HandleSet::from_area`]:
//! 1. Corners sit on the rectangle's corners.
//! 2. Each edge handle shares its along-axis coordinate with its two
//!    adjacent corners and sits at their midpoint on the cross axis.
//! 3. `from_area(r).bounding_area()` reproduces `r` (exactly for dyadic
//!    values, within floating-point rounding otherwise).

use selframe_core::geometry::{Area, Position};
use selframe_core::handle::Handle;

use crate::dep_table::{centering_pair, dependencies};

/// Positions of all eight handles in percentage space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSet {
    positions: [Position; 8],
}

impl HandleSet {
    /// Place the handles on the corners and edge midpoints of `area`.
    #[must_use]
    pub fn from_area(area: Area) -> Self {
        let left = area.left;
        let top = area.top;
        let right = area.left + area.width;
        let bottom = area.top + area.height;
        let center_x = area.left + area.width / 2.0;
        let center_y = area.top + area.height / 2.0;

        let mut positions = [Position::default(); 8];
        for handle in Handle::ALL {
            positions[handle.index()] = match handle {
                Handle::NorthWest => Position::new(left, top),
                Handle::North => Position::new(center_x, top),
                Handle::NorthEast => Position::new(right, top),
                Handle::East => Position::new(right, center_y),
                Handle::SouthEast => Position::new(right, bottom),
                Handle::South => Position::new(center_x, bottom),
                Handle::SouthWest => Position::new(left, bottom),
                Handle::West => Position::new(left, center_y),
            };
        }
        Self { positions }
    }

    /// Position of one handle.
    #[inline]
    #[must_use]
    pub const fn get(&self, handle: Handle) -> Position {
        self.positions[handle.index()]
    }

    /// Overwrite one handle without propagating.
    #[inline]
    pub fn set(&mut self, handle: Handle, position: Position) {
        self.positions[handle.index()] = position;
    }

    /// Iterate `(handle, position)` pairs in [`Handle::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, Position)> + '_ {
        Handle::ALL.into_iter().map(|handle| (handle, self.get(handle)))
    }

    /// Copy `handle`'s coordinates into its dependents.
    ///
    /// Dependents in the horizontal list take its `left`; those in the
    /// vertical list take its `top`.
    pub fn apply_dependencies(&mut self, handle: Handle) {
        let source = self.get(handle);
        let deps = dependencies(handle);
        for &dependent in deps.horizontal {
            self.positions[dependent.index()].left = source.left;
        }
        for &dependent in deps.vertical {
            self.positions[dependent.index()].top = source.top;
        }
    }

    /// Re-center each edge handle between its two bordering corners on the
    /// cross axis.
    pub fn center_edges(&mut self) {
        for edge in Handle::EDGES {
            let Some((a, b)) = centering_pair(edge) else {
                continue;
            };
            let mid = Position::midpoint(self.get(a), self.get(b));
            let slot = &mut self.positions[edge.index()];
            match edge {
                Handle::East | Handle::West => slot.top = mid.top,
                Handle::North | Handle::South => slot.left = mid.left,
                Handle::NorthWest | Handle::NorthEast | Handle::SouthEast | Handle::SouthWest => {}
            }
        }
    }

    /// Derive the rectangle the handles describe.
    ///
    /// `left`/`top` are the minima over all handles; `width` is `E.left −
    /// W.left` and `height` is `S.top − N.top`. Both may be negative if the
    /// handles have crossed; callers enforce minimum sizes.
    #[must_use]
    pub fn bounding_area(&self) -> Area {
        let left = self
            .positions
            .iter()
            .map(|p| p.left)
            .fold(f64::INFINITY, f64::min);
        let top = self
            .positions
            .iter()
            .map(|p| p.top)
            .fold(f64::INFINITY, f64::min);
        let width = self.get(Handle::East).left - self.get(Handle::West).left;
        let height = self.get(Handle::South).top - self.get(Handle::North).top;
        Area::new(top, left, width, height)
    }
}

impl Default for HandleSet {
    fn default() -> Self {
        Self::from_area(Area::FULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_area_layout() {
        let set = HandleSet::default();
        assert_eq!(set.get(Handle::NorthWest), Position::new(0.0, 0.0));
        assert_eq!(set.get(Handle::North), Position::new(50.0, 0.0));
        assert_eq!(set.get(Handle::East), Position::new(100.0, 50.0));
        assert_eq!(set.get(Handle::SouthEast), Position::new(100.0, 100.0));
        assert_eq!(set.get(Handle::SouthWest), Position::new(0.0, 100.0));
        assert_eq!(set.get(Handle::West), Position::new(0.0, 50.0));
    }

    #[test]
    fn round_trip_is_exact_for_dyadic_values() {
        for area in [
            Area::FULL,
            Area::new(12.5, 25.0, 50.0, 37.5),
            Area::new(0.0, 90.0, 10.0, 10.0),
        ] {
            assert_eq!(HandleSet::from_area(area).bounding_area(), area);
        }
    }

    #[test]
    fn dragging_se_inward() {
        let mut set = HandleSet::default();
        set.set(Handle::SouthEast, Position::new(50.0, 50.0));
        set.apply_dependencies(Handle::SouthEast);
        set.center_edges();

        assert_eq!(set.get(Handle::East), Position::new(50.0, 25.0));
        assert_eq!(set.get(Handle::NorthEast), Position::new(50.0, 0.0));
        assert_eq!(set.get(Handle::South), Position::new(25.0, 50.0));
        assert_eq!(set.get(Handle::SouthWest), Position::new(0.0, 50.0));
        assert_eq!(set.get(Handle::North).left, 25.0);
        assert_eq!(set.get(Handle::West).top, 25.0);
        assert_eq!(set.bounding_area(), Area::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn dragging_east_touches_only_horizontal_coordinates() {
        let before = HandleSet::from_area(Area::new(10.0, 10.0, 40.0, 40.0));
        let mut set = before;
        set.set(Handle::East, Position::new(70.0, before.get(Handle::East).top));
        set.apply_dependencies(Handle::East);
        set.center_edges();

        for handle in Handle::ALL {
            assert_eq!(set.get(handle).top, before.get(handle).top, "{handle} top moved");
        }
        assert_eq!(set.bounding_area(), Area::new(10.0, 10.0, 60.0, 40.0));
    }

    #[test]
    fn crossed_handles_yield_negative_width() {
        let mut set = HandleSet::from_area(Area::new(0.0, 20.0, 20.0, 20.0));
        set.set(Handle::East, Position::new(10.0, 10.0));
        set.apply_dependencies(Handle::East);
        assert!(set.bounding_area().width < 0.0);
    }

    #[test]
    fn iter_visits_all_in_order() {
        let set = HandleSet::default();
        let handles: Vec<Handle> = set.iter().map(|(h, _)| h).collect();
        assert_eq!(handles, Handle::ALL.to_vec());
    }
}
