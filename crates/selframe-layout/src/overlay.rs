#![forbid(unsafe_code)]

//! Data for the rendering collaborator.
//!
//! A renderer needs three things from the engine: where the handles are and
//! whether to show them, the polygon that reveals the selected area while
//! shading the rest of the container, and which cursor to show. Nothing here
//! draws; [`OverlayGeometry`] is a snapshot value.
//!
//! The clip polygon walks the container boundary and cuts the area out as a
//! hole joined by a zero-width seam along the area's left edge:
//!
//! ```text
//! (0,0) ─────────────────────────── (100,0)
//!   │                                  │
//!   │     (x1,y1) ──────── (x2,y1)     │
//!   │        │                 │       │
//!   │     (x1,y2) ──────── (x2,y2)     │
//!   │        ┃                         │
//! (0,100) ─ (x1,100) ──────────── (100,100)
//! ```

use serde::Serialize;

use selframe_core::event::PointerTarget;
use selframe_core::geometry::{Area, ContainerSize, PERCENT_MAX, Position};
use selframe_core::handle::Handle;

use crate::handle_set::HandleSet;

/// Cursor shown while the whole area is being moved.
pub const MOVE_CURSOR: &str = "move";

/// One handle as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleMarker {
    pub handle: Handle,
    pub position: Position,
    pub cursor: &'static str,
    pub visible: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayGeometry {
    /// The committed area.
    pub area: Area,
    /// Handle markers in [`Handle::ALL`] order.
    pub markers: [HandleMarker; 8],
    /// Ten vertices in percent, see the module docs.
    pub clip_polygon: [Position; 10],
    /// Whether the shade outside the area is drawn.
    pub shade_visible: bool,
}

impl OverlayGeometry {
    /// Build the overlay for `handles`/`area`.
    ///
    /// Handles are hidden when `handles_hidden` or `disabled`; the shade only
    /// when `disabled`.
    #[must_use]
    pub fn new(handles: &HandleSet, area: Area, handles_hidden: bool, disabled: bool) -> Self {
        let visible = !(handles_hidden || disabled);
        let markers = Handle::ALL.map(|handle| HandleMarker {
            handle,
            position: handles.get(handle),
            cursor: handle.cursor(),
            visible,
        });
        Self {
            area,
            markers,
            clip_polygon: clip_polygon(area),
            shade_visible: !disabled,
        }
    }

    /// Marker for one handle.
    #[must_use]
    pub fn marker(&self, handle: Handle) -> &HandleMarker {
        &self.markers[handle.index()]
    }

    /// The clip polygon as a CSS `clip-path` value.
    #[must_use]
    pub fn css_clip_path(&self) -> String {
        let points: Vec<String> = self
            .clip_polygon
            .iter()
            .map(|p| format!("{}% {}%", p.left, p.top))
            .collect();
        format!("polygon({})", points.join(", "))
    }
}

/// Ten-vertex polygon covering the container minus `area`.
#[must_use]
pub fn clip_polygon(area: Area) -> [Position; 10] {
    let x1 = area.left;
    let y1 = area.top;
    let x2 = area.right();
    let y2 = area.bottom();
    [
        Position::new(0.0, 0.0),
        Position::new(0.0, PERCENT_MAX),
        Position::new(x1, PERCENT_MAX),
        Position::new(x1, y1),
        Position::new(x2, y1),
        Position::new(x2, y2),
        Position::new(x1, y2),
        Position::new(x1, PERCENT_MAX),
        Position::new(PERCENT_MAX, PERCENT_MAX),
        Position::new(PERCENT_MAX, 0.0),
    ]
}

/// Classify a container-local pixel.
///
/// Handles within `radius_px` win, corners before edges; otherwise the
/// pointer is inside or outside the area. With `handles_enabled == false`
/// handles are not hit-testable.
#[must_use]
pub fn hit_test(
    handles: &HandleSet,
    area: Area,
    container: ContainerSize,
    x: f64,
    y: f64,
    radius_px: f64,
    handles_enabled: bool,
) -> PointerTarget {
    if handles_enabled {
        let hit = Handle::CORNERS
            .into_iter()
            .chain(Handle::EDGES)
            .find(|&handle| {
                let (hx, hy) = container.to_pixels(handles.get(handle));
                (x - hx).hypot(y - hy) <= radius_px
            });
        if let Some(handle) = hit {
            return PointerTarget::Handle(handle);
        }
    }

    if area.contains(container.to_percent(x, y)) {
        PointerTarget::Inside
    } else {
        PointerTarget::Outside
    }
}
