#![forbid(unsafe_code)]

//! Constrained-rectangle engine for selframe.
//!
//! A selection area lives inside a container and carries eight handles. This
//! crate keeps the handles and the area consistent while the user drags a
//! handle or the whole area:
//!
//! - [`dep_table`]: which handles adopt a moved handle's coordinates.
//! - [`handle_set`]: the eight positions, propagation and area derivation.
//! - [`constraint`]: the per-handle minimum-size check and the clamp rules.
//! - [`aspect`]: the aspect-ratio-preserving resize target.
//! - [`session`]: the idle/resizing/moving lifecycle and pixel conversion.
//! - [`frame`]: [`SelectionFrame`], which owns all of the above.
//! - [`overlay`]: snapshot data for renderers (markers, clip polygon).
//! - [`notify`]: area-changed listeners.
//! - [`config`]: [`FrameConfig`] and its validation.
//!
//! # Example
//!
//! ```
//! use selframe_core::event::PointerTarget;
//! use selframe_core::geometry::{Area, ContainerSize};
//! use selframe_core::handle::Handle;
//! use selframe_layout::{FrameConfig, SelectionFrame};
//!
//! let container = ContainerSize::new(1000.0, 500.0).unwrap();
//! let mut frame = SelectionFrame::new(container, FrameConfig::default()).unwrap();
//!
//! frame.pointer_down(1000.0, 500.0, PointerTarget::Handle(Handle::SouthEast));
//! frame.pointer_move(500.0, 250.0);
//! frame.pointer_up();
//!
//! assert_eq!(frame.area(), Area::new(0.0, 0.0, 50.0, 50.0));
//! ```

pub mod aspect;
pub mod config;
pub mod constraint;
pub mod dep_table;
pub mod frame;
pub mod handle_set;
pub mod notify;
pub mod overlay;
pub mod session;

pub use aspect::{RatioOutcome, ratio_target};
pub use config::{ConfigError, DEFAULT_GRAB_RADIUS_PX, DEFAULT_MIN_SIZE, FrameConfig};
pub use constraint::{clamp_area, fit_area, is_within_constraints};
pub use dep_table::{HandleDependencies, dependencies};
pub use frame::SelectionFrame;
pub use handle_set::HandleSet;
pub use notify::{AreaListener, ListenerId, Listeners};
pub use overlay::{HandleMarker, MOVE_CURSOR, OverlayGeometry, hit_test};
pub use session::{FrameEffect, FrameTransition, IgnoreReason, SessionState};
