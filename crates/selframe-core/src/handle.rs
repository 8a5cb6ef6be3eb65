#![forbid(unsafe_code)]

//! Handle identities.
//!
//! A selection area carries eight handles: four corners and four edge
//! midpoints. Every per-role rule in the engine is an exhaustive `match`
//! over [`Handle`], so adding or forgetting a role is a compile error rather
//! than a runtime default branch.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

bitflags! {
    /// Axes a handle controls when dragged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// Dragging moves a vertical edge (changes `left`/`width`).
        const HORIZONTAL = 0b01;
        /// Dragging moves a horizontal edge (changes `top`/`height`).
        const VERTICAL = 0b10;
    }
}

/// One of the eight fixed control points of the selection area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Handle {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "n")]
    North,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "w")]
    West,
}

impl Handle {
    /// All handles, clockwise from the top-left corner.
    pub const ALL: [Handle; 8] = [
        Handle::NorthWest,
        Handle::North,
        Handle::NorthEast,
        Handle::East,
        Handle::SouthEast,
        Handle::South,
        Handle::SouthWest,
        Handle::West,
    ];

    /// The four corner handles.
    pub const CORNERS: [Handle; 4] = [
        Handle::NorthWest,
        Handle::NorthEast,
        Handle::SouthEast,
        Handle::SouthWest,
    ];

    /// The four edge-midpoint handles.
    pub const EDGES: [Handle; 4] = [Handle::North, Handle::East, Handle::South, Handle::West];

    /// Dense index into [`Handle::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::North => 1,
            Self::NorthEast => 2,
            Self::East => 3,
            Self::SouthEast => 4,
            Self::South => 5,
            Self::SouthWest => 6,
            Self::West => 7,
        }
    }

    /// Compass short name (`nw`, `n`, ...).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::North => "n",
            Self::NorthEast => "ne",
            Self::East => "e",
            Self::SouthEast => "se",
            Self::South => "s",
            Self::SouthWest => "sw",
            Self::West => "w",
        }
    }

    #[inline]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthEast | Self::SouthWest
        )
    }

    /// Axes this handle moves when dragged.
    pub const fn axes(self) -> Axes {
        match self {
            Self::East | Self::West => Axes::HORIZONTAL,
            Self::North | Self::South => Axes::VERTICAL,
            Self::NorthWest | Self::NorthEast | Self::SouthEast | Self::SouthWest => {
                Axes::HORIZONTAL.union(Axes::VERTICAL)
            }
        }
    }

    /// CSS cursor name shown while hovering or dragging this handle.
    pub const fn cursor(self) -> &'static str {
        match self {
            Self::East | Self::West => "ew-resize",
            Self::North | Self::South => "ns-resize",
            Self::NorthEast | Self::SouthWest => "nesw-resize",
            Self::NorthWest | Self::SouthEast => "nwse-resize",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Handle {
    type Err = HandleParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim().to_ascii_lowercase();
        Handle::ALL
            .into_iter()
            .find(|handle| handle.short_name() == name)
            .ok_or_else(|| HandleParseError {
                name: raw.to_string(),
            })
    }
}

/// Unknown handle short name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown handle `{name}` (expected one of nw, n, ne, e, se, s, sw, w)")]
pub struct HandleParseError {
    pub name: String,
}
