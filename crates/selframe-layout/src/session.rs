#![forbid(unsafe_code)]

//! Interaction session lifecycle.
//!
//! ```text
//! Idle --down(handle)--> Resizing --move--> Resizing --up--> Idle
//! Idle --down(inside)--> Moving   --move--> Moving   --up--> Idle
//! ```
//!
//! The session is a tagged enum, so a frame is never resizing and moving at
//! once. Every input produces a [`FrameTransition`] naming the states on
//! either side and a [`FrameEffect`] describing what happened, including
//! explicit [`IgnoreReason`]s for input that was dropped.
//!
//! This module is also the only place where pointer pixels become
//! percentages: [`resize_candidate`] and [`move_target`] take pixels in and
//! hand percentages to the geometry layer.

use serde::Serialize;

use selframe_core::geometry::{Area, ContainerSize, Position};
use selframe_core::handle::{Axes, Handle};

use crate::constraint::clamp_origin;
use crate::overlay::MOVE_CURSOR;

/// Current interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Idle,
    /// A handle is being dragged.
    Resizing {
        handle: Handle,
        /// Pointer minus the handle's pixel position at pointer-down.
        offset_x: f64,
        offset_y: f64,
    },
    /// The whole area is being dragged.
    Moving {
        start_x: f64,
        start_y: f64,
        /// Area origin at pointer-down.
        origin: Position,
    },
}

impl SessionState {
    #[inline]
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        matches!(self, Self::Moving { .. })
    }

    /// Handle being dragged, if resizing.
    #[must_use]
    pub const fn active_handle(&self) -> Option<Handle> {
        match *self {
            Self::Resizing { handle, .. } => Some(handle),
            Self::Idle | Self::Moving { .. } => None,
        }
    }

    /// Cursor the host should show on the container for this state.
    #[must_use]
    pub const fn cursor(&self) -> Option<&'static str> {
        match *self {
            Self::Idle => None,
            Self::Resizing { handle, .. } => Some(handle.cursor()),
            Self::Moving { .. } => Some(MOVE_CURSOR),
        }
    }
}

/// Why an input was dropped without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The frame is disabled.
    Disabled,
    /// The host's `prevent_events` gate is set.
    EventsPrevented,
    /// Pointer-down while a session is already running.
    SessionActive,
    /// Pointer-down outside the area and away from any handle.
    OutsideArea,
    /// Move or up with no session running.
    NoActiveSession,
    /// Pointer coordinates were not finite.
    NonFinitePointer,
}

/// What one input did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum FrameEffect {
    ResizeStarted { handle: Handle },
    MoveStarted { origin: Position },
    Resized { handle: Handle, area: Area },
    Moved { area: Area },
    /// The candidate failed the constraint check; nothing was written.
    Rejected { handle: Handle, candidate: Position },
    Ended,
    Ignored { reason: IgnoreReason },
}

/// One session step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameTransition {
    pub from: SessionState,
    pub to: SessionState,
    pub effect: FrameEffect,
}

impl FrameTransition {
    /// A transition that leaves the state as it was.
    #[must_use]
    pub const fn ignored(state: SessionState, reason: IgnoreReason) -> Self {
        Self {
            from: state,
            to: state,
            effect: FrameEffect::Ignored { reason },
        }
    }

    /// Whether the step committed a new area.
    #[must_use]
    pub const fn committed(&self) -> bool {
        matches!(
            self.effect,
            FrameEffect::Resized { .. } | FrameEffect::Moved { .. }
        )
    }
}

/// Session entered by a pointer-down on `handle` at pixel `(x, y)`.
#[must_use]
pub fn start_resize(
    handle: Handle,
    handle_position: Position,
    container: ContainerSize,
    x: f64,
    y: f64,
) -> SessionState {
    let (hx, hy) = container.to_pixels(handle_position);
    SessionState::Resizing {
        handle,
        offset_x: x - hx,
        offset_y: y - hy,
    }
}

/// Percent candidate for the dragged handle at pixel `(x, y)`.
///
/// The pointer is corrected by the grab offset, clamped to the container in
/// pixels, and converted to percent. Edge handles keep their current
/// cross-axis coordinate (`current`).
#[must_use]
pub fn resize_candidate(
    handle: Handle,
    offset: (f64, f64),
    current: Position,
    container: ContainerSize,
    x: f64,
    y: f64,
) -> Position {
    let (px, py) = container.clamp_pixels(x - offset.0, y - offset.1);
    let raw = container.to_percent(px, py);
    let axes = handle.axes();
    Position::new(
        if axes.contains(Axes::HORIZONTAL) { raw.left } else { current.left },
        if axes.contains(Axes::VERTICAL) { raw.top } else { current.top },
    )
}

/// Area for a move session at pixel `(x, y)`: the recorded origin shifted by
/// the pointer's percent delta, clamped so the area stays inside.
#[must_use]
pub fn move_target(
    start: (f64, f64),
    origin: Position,
    size: Area,
    container: ContainerSize,
    x: f64,
    y: f64,
) -> Area {
    let delta = container.delta_to_percent(x - start.0, y - start.1);
    Area::new(
        clamp_origin(origin.top + delta.top, size.height),
        clamp_origin(origin.left + delta.left, size.width),
        size.width,
        size.height,
    )
}
