#![forbid(unsafe_code)]

//! selframe public facade crate.
//!
//! Re-exports the geometry types from `selframe-core` and the selection
//! frame engine from `selframe-layout`, plus a prelude for day-to-day use.
//!
//! ```
//! use selframe::prelude::*;
//!
//! let container = ContainerSize::new(800.0, 600.0).unwrap();
//! let mut frame = SelectionFrame::new(container, FrameConfig::default()).unwrap();
//! frame.set_area(Area::new(10.0, 10.0, 30.0, 30.0));
//! assert_eq!(frame.area(), Area::new(10.0, 10.0, 30.0, 30.0));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use selframe_core::event::{PointerInput, PointerTarget};
pub use selframe_core::geometry::{Area, ContainerSize, GeometryError, Position, Sizes};
pub use selframe_core::handle::{Axes, Handle, HandleParseError};

pub use selframe_core::logging;

// --- Engine re-exports -----------------------------------------------------

pub use selframe_layout::{
    ConfigError, FrameConfig, FrameEffect, FrameTransition, HandleMarker, HandleSet,
    IgnoreReason, ListenerId, MOVE_CURSOR, OverlayGeometry, SelectionFrame, SessionState,
};

/// Module-level access for callers that need the lower-level pieces.
pub mod core {
    pub use selframe_core::*;
}

pub mod layout {
    pub use selframe_layout::*;
}

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Area, ConfigError, ContainerSize, FrameConfig, FrameEffect, FrameTransition, Handle,
        OverlayGeometry, PointerInput, PointerTarget, Position, SelectionFrame, SessionState,
        Sizes,
    };
}
