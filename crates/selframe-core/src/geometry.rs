#![forbid(unsafe_code)]

//! Geometric primitives in percentage space.
//!
//! Coordinates are percentages of the container: `0.0` is the container's
//! top/left edge and [`PERCENT_MAX`] the opposite edge. Pixels only appear in
//! [`ContainerSize`], which is the single pixel ↔ percent boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the percentage space on either axis.
pub const PERCENT_MAX: f64 = 100.0;

/// Tolerance used when checking derived geometry against its invariants.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// A point in percentage space.
///
/// No invariant beyond being finite; consumers clamp.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the container's left edge.
    pub left: f64,
    /// Vertical offset from the container's top edge.
    pub top: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Midpoint between two positions.
    #[inline]
    pub fn midpoint(a: Position, b: Position) -> Position {
        Position::new((a.left + b.left) / 2.0, (a.top + b.top) / 2.0)
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite()
    }
}

/// The selection rectangle in percentage space.
///
/// Field order matches the wire format (`top`, `left`, `width`, `height`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    /// The whole container.
    pub const FULL: Area = Area::new(0.0, 0.0, PERCENT_MAX, PERCENT_MAX);

    /// Create a new area. Arguments follow the field order.
    #[inline]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Right edge (`left + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Position {
        Position::new(self.left, self.top)
    }

    /// Width divided by height, or `None` for a degenerate height.
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height.abs() <= f64::EPSILON {
            None
        } else {
            Some(self.width / self.height)
        }
    }

    /// Whether `position` lies inside the area (edges inclusive).
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.left >= self.left
            && position.left <= self.right()
            && position.top >= self.top
            && position.top <= self.bottom()
    }

    /// All four fields are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Whether the area lies inside `[0, 100]` on both axes, up to
    /// [`GEOMETRY_EPSILON`].
    pub fn is_within_container(&self) -> bool {
        self.left >= -GEOMETRY_EPSILON
            && self.top >= -GEOMETRY_EPSILON
            && self.right() <= PERCENT_MAX + GEOMETRY_EPSILON
            && self.bottom() <= PERCENT_MAX + GEOMETRY_EPSILON
    }

    /// Whether both dimensions reach `min`, up to [`GEOMETRY_EPSILON`].
    pub fn meets_min_sizes(&self, min: Sizes) -> bool {
        self.width >= min.width - GEOMETRY_EPSILON && self.height >= min.height - GEOMETRY_EPSILON
    }

    /// Field-wise comparison with tolerance `epsilon`.
    pub fn approx_eq(&self, other: &Area, epsilon: f64) -> bool {
        (self.top - other.top).abs() <= epsilon
            && (self.left - other.left).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::FULL
    }
}

/// A width/height pair in percentage units (used for minimum sizes).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sizes {
    pub width: f64,
    pub height: f64,
}

impl Sizes {
    /// Create a new size pair.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel dimensions of the container the area lives in.
///
/// Both dimensions are finite and strictly positive, so conversions never
/// divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContainerSize", into = "RawContainerSize")]
pub struct ContainerSize {
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
struct RawContainerSize {
    width: f64,
    height: f64,
}

impl TryFrom<RawContainerSize> for ContainerSize {
    type Error = GeometryError;

    fn try_from(raw: RawContainerSize) -> Result<Self, Self::Error> {
        ContainerSize::new(raw.width, raw.height)
    }
}

impl From<ContainerSize> for RawContainerSize {
    fn from(size: ContainerSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl ContainerSize {
    /// Create a validated container size in pixels.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GeometryError::InvalidContainerSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Clamp a pixel coordinate into `[0, width] × [0, height]`.
    #[inline]
    pub fn clamp_pixels(&self, x: f64, y: f64) -> (f64, f64) {
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }

    /// Convert an absolute pixel coordinate into percentage space.
    #[inline]
    pub fn to_percent(&self, x: f64, y: f64) -> Position {
        Position::new(x * PERCENT_MAX / self.width, y * PERCENT_MAX / self.height)
    }

    /// Convert a pixel delta into a percentage delta.
    #[inline]
    pub fn delta_to_percent(&self, dx: f64, dy: f64) -> Position {
        self.to_percent(dx, dy)
    }

    /// Convert a percentage position into pixels.
    #[inline]
    pub fn to_pixels(&self, position: Position) -> (f64, f64) {
        (
            position.left * self.width / PERCENT_MAX,
            position.top * self.height / PERCENT_MAX,
        )
    }
}

/// Construction failures for geometry types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid container size width={width} height={height} (must be finite and > 0)")]
    InvalidContainerSize { width: f64, height: f64 },
}
