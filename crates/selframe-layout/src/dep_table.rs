#![forbid(unsafe_code)]

//! Static handle dependency table.
//!
//! When one handle moves, other handles must adopt one of its coordinates to
//! keep the eight points on a single rectangle. The table lists, per handle,
//! which handles copy its `left` and which copy its `top`.
//!
//! | Handle | adopt `left` | adopt `top` |
//! |---|---|---|
//! | E  | NE, SE | - |
//! | N  | - | NW, NE |
//! | NE | E, SE | N, NW |
//! | NW | W, SW | N, NE |
//! | S  | - | SE, SW |
//! | SE | E, NE | S, SW |
//! | SW | W, NW | S, SE |
//! | W  | SW, NW | - |
//!
//! For an edge handle the non-empty list is also the pair of corners whose
//! mean gives the edge's cross-axis coordinate (see [`centering_pair`]).
//!
//! # Invariants
//!
//! 1. No handle lists itself.
//! 2. Corners have two entries in both lists; edges have two in one list and
//!    none in the other.
//! 3. The table is `'static` and never mutated.

use selframe_core::handle::Handle;

/// Handles that adopt coordinates from one source handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleDependencies {
    /// Handles that copy the source's `left`.
    pub horizontal: &'static [Handle],
    /// Handles that copy the source's `top`.
    pub vertical: &'static [Handle],
}

const NONE: &[Handle] = &[];

/// Look up the dependency entry for `handle`.
#[must_use]
pub const fn dependencies(handle: Handle) -> HandleDependencies {
    use Handle::*;
    let (horizontal, vertical): (&'static [Handle], &'static [Handle]) = match handle {
        East => (&[NorthEast, SouthEast], NONE),
        North => (NONE, &[NorthWest, NorthEast]),
        NorthEast => (&[East, SouthEast], &[North, NorthWest]),
        NorthWest => (&[West, SouthWest], &[North, NorthEast]),
        South => (NONE, &[SouthEast, SouthWest]),
        SouthEast => (&[East, NorthEast], &[South, SouthWest]),
        SouthWest => (&[West, NorthWest], &[South, SouthEast]),
        West => (&[SouthWest, NorthWest], NONE),
    };
    HandleDependencies {
        horizontal,
        vertical,
    }
}

/// The two corners an edge handle is centered between, or `None` for a
/// corner.
///
/// E/W are centered vertically between the corners in their `left` list;
/// N/S horizontally between the corners in their `top` list.
#[must_use]
pub const fn centering_pair(handle: Handle) -> Option<(Handle, Handle)> {
    let deps = dependencies(handle);
    match handle {
        Handle::East | Handle::West => Some((deps.horizontal[0], deps.horizontal[1])),
        Handle::North | Handle::South => Some((deps.vertical[0], deps.vertical[1])),
        Handle::NorthWest | Handle::NorthEast | Handle::SouthEast | Handle::SouthWest => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selframe_core::handle::Handle::*;

    #[test]
    fn table_contents() {
        assert_eq!(dependencies(East).horizontal, &[NorthEast, SouthEast]);
        assert!(dependencies(East).vertical.is_empty());
        assert_eq!(dependencies(NorthWest).horizontal, &[West, SouthWest]);
        assert_eq!(dependencies(NorthWest).vertical, &[North, NorthEast]);
        assert_eq!(dependencies(West).horizontal, &[SouthWest, NorthWest]);
        assert_eq!(dependencies(South).vertical, &[SouthEast, SouthWest]);
    }

    #[test]
    fn no_handle_depends_on_itself() {
        for handle in Handle::ALL {
            let deps = dependencies(handle);
            assert!(!deps.horizontal.contains(&handle), "{handle} horizontal");
            assert!(!deps.vertical.contains(&handle), "{handle} vertical");
        }
    }

    #[test]
    fn list_shapes_follow_handle_kind() {
        for handle in Handle::ALL {
            let deps = dependencies(handle);
            if handle.is_corner() {
                assert_eq!((deps.horizontal.len(), deps.vertical.len()), (2, 2), "{handle}");
            } else {
                assert_eq!(deps.horizontal.len() + deps.vertical.len(), 2, "{handle}");
            }
        }
    }

    #[test]
    fn adopters_share_the_copied_edge() {
        // A handle adopting `left` must sit on the same vertical edge.
        for handle in Handle::ALL {
            for adopter in dependencies(handle).horizontal {
                assert!(
                    !adopter.is_corner() || adopter.short_name().ends_with(last_char(handle)),
                    "{adopter} adopts left from {handle}"
                );
            }
        }
    }

    fn last_char(handle: Handle) -> char {
        handle.short_name().chars().last().unwrap_or('?')
    }

    #[test]
    fn centering_pairs() {
        assert_eq!(centering_pair(East), Some((NorthEast, SouthEast)));
        assert_eq!(centering_pair(West), Some((SouthWest, NorthWest)));
        assert_eq!(centering_pair(North), Some((NorthWest, NorthEast)));
        assert_eq!(centering_pair(South), Some((SouthEast, SouthWest)));
        for corner in Handle::CORNERS {
            assert_eq!(centering_pair(corner), None);
        }
    }
}
