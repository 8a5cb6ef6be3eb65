#![forbid(unsafe_code)]

//! Primitive pointer signals.
//!
//! An input collaborator (DOM listeners, a windowing toolkit, a replay
//! trace) reduces native mouse/touch input to three signals: down, move and
//! up. Coordinates are container-local pixels; converting them to percent is
//! the engine's job, not the collaborator's.
//!
//! # Design Notes
//!
//! - Touch input maps onto the same signals using the first touch point.
//! - A down signal carries what it landed on ([`PointerTarget`]) because hit
//!   testing is usually done by the host's element tree.

use serde::{Deserialize, Serialize};

use crate::handle::Handle;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    /// One of the eight resize handles.
    Handle(Handle),
    /// The interior of the selection area, away from any handle.
    Inside,
    /// Anywhere else.
    Outside,
}

/// One primitive pointer signal in container-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum PointerInput {
    /// Button pressed or touch started.
    Down { x: f64, y: f64, target: PointerTarget },
    /// Pointer moved (only meaningful while a session is active).
    Move { x: f64, y: f64 },
    /// Button released or touch ended.
    Up,
}

impl PointerInput {
    /// Pixel coordinate carried by the signal, if any.
    #[must_use]
    pub const fn position(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Down { x, y, .. } | Self::Move { x, y } => Some((x, y)),
            Self::Up => None,
        }
    }

    /// Stable name for logs and diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Down { .. } => "pointer_down",
            Self::Move { .. } => "pointer_move",
            Self::Up => "pointer_up",
        }
    }
}
