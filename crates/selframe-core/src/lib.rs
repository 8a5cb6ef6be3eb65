#![forbid(unsafe_code)]

//! Core: percentage-space geometry, handle identities, and pointer input.
//!
//! # Role in selframe
//! `selframe-core` is the vocabulary layer. It owns the value types every
//! other crate speaks in and nothing stateful:
//!
//! - **Geometry**: [`geometry::Position`], [`geometry::Area`],
//!   [`geometry::Sizes`] in percentage units, and [`geometry::ContainerSize`]
//!   as the one place where pixels become percentages.
//! - **Handles**: the eight [`handle::Handle`] roles and the [`handle::Axes`]
//!   each one controls.
//! - **Input**: the primitive pointer signals ([`event::PointerInput`]) an
//!   input collaborator feeds into the engine.
//! - **Logging**: the `tracing` re-exports and subscriber setup used across
//!   the workspace.
//!
//! # How it fits in the system
//! `selframe-layout` consumes these types to run the constrained-rectangle
//! engine. Renderers and hosts depend on `selframe-core` alone when all they
//! need is to read an [`geometry::Area`].

pub mod event;
pub mod geometry;
pub mod handle;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
