#![forbid(unsafe_code)]

//! The selection frame engine.
//!
//! [`SelectionFrame`] owns the handle set, the committed area, the previous
//! area snapshot, the interaction session and the listeners. Every public
//! method takes `&mut self` and leaves handles and area consistent on
//! return.
//!
//! # Commit paths
//!
//! | Path | Entry | Writes |
//! |---|---|---|
//! | resolve | [`SelectionFrame::set_handle`] | one handle, propagated; area derived from handles |
//! | set_area | [`SelectionFrame::set_area`], resolver min-size fallback, moves | area clamped; handles rebuilt |
//! | ratio | [`SelectionFrame::resize_keeping_ratio`] | trial resolve, then set_area |
//! | reset | [`SelectionFrame::reset_to`], [`SelectionFrame::set_min_sizes`] | fitted area; previous reset too |
//!
//! # Invariants
//!
//! After every commit:
//! 1. `0 ≤ left`, `0 ≤ top`, `left + width ≤ 100`, `top + height ≤ 100`.
//! 2. `width ≥ min_width`, `height ≥ min_height`.
//! 3. The area equals the handle set's bounding area.
//!
//! The previous area is only overwritten by the resolver (snapshot before
//! deriving) and by the reset path.
//!
//! # Failure Modes
//!
//! Geometry methods never fail. Non-finite candidates and pointer
//! coordinates are dropped without touching state.

use selframe_core::event::{PointerInput, PointerTarget};
use selframe_core::geometry::{Area, ContainerSize, PERCENT_MAX, Position, Sizes};
use selframe_core::handle::Handle;

use crate::aspect::{RatioOutcome, ratio_target};
use crate::config::{ConfigError, FrameConfig, validate_min_sizes};
use crate::constraint::{clamp_area, fit_area, is_within_constraints};
use crate::handle_set::HandleSet;
use crate::notify::{ListenerId, Listeners};
use crate::overlay::{self, OverlayGeometry};
use crate::session::{
    FrameEffect, FrameTransition, IgnoreReason, SessionState, move_target, resize_candidate,
    start_resize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommitPath {
    Resolve,
    SetArea,
    Ratio,
    Move,
    Reset,
}

impl CommitPath {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    const fn as_str(self) -> &'static str {
        match self {
            Self::Resolve => "resolve",
            Self::SetArea => "set_area",
            Self::Ratio => "ratio",
            Self::Move => "move",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notify {
    Listeners,
    Silent,
}

/// A resizable, movable selection rectangle inside a container.
#[derive(Debug)]
pub struct SelectionFrame {
    container: ContainerSize,
    config: FrameConfig,
    handles: HandleSet,
    area: Area,
    previous: Area,
    session: SessionState,
    listeners: Listeners,
}

impl SelectionFrame {
    /// Create a frame covering the whole container.
    pub fn new(container: ContainerSize, config: FrameConfig) -> Result<Self, ConfigError> {
        Self::with_area(container, config, Area::FULL)
    }

    /// Create a frame starting from `area`, fitted to the container and the
    /// configured minimum size.
    pub fn with_area(
        container: ContainerSize,
        config: FrameConfig,
        area: Area,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if !area.is_finite() {
            return Err(ConfigError::NonFiniteArea {
                top: area.top,
                left: area.left,
                width: area.width,
                height: area.height,
            });
        }
        let area = fit_area(area, config.min_sizes);
        Ok(Self {
            container,
            config,
            handles: HandleSet::from_area(area),
            area,
            previous: area,
            session: SessionState::Idle,
            listeners: Listeners::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The committed area.
    #[must_use]
    pub const fn area(&self) -> Area {
        self.area
    }

    /// Area before the most recent resolver step.
    #[must_use]
    pub const fn previous_area(&self) -> Area {
        self.previous
    }

    #[must_use]
    pub const fn handles(&self) -> &HandleSet {
        &self.handles
    }

    #[must_use]
    pub const fn config(&self) -> &FrameConfig {
        &self.config
    }

    #[must_use]
    pub const fn container(&self) -> ContainerSize {
        self.container
    }

    #[must_use]
    pub const fn session(&self) -> SessionState {
        self.session
    }

    /// Cursor the host should show on the container right now.
    #[must_use]
    pub const fn cursor(&self) -> Option<&'static str> {
        self.session.cursor()
    }

    /// Snapshot for the rendering collaborator.
    #[must_use]
    pub fn overlay(&self) -> OverlayGeometry {
        OverlayGeometry::new(
            &self.handles,
            self.area,
            self.config.handles_hidden,
            self.config.disabled,
        )
    }

    /// Classify a container-local pixel for hosts without their own hit
    /// testing. A disabled frame reports everything as outside; hidden
    /// handles cannot be grabbed.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> PointerTarget {
        if self.config.disabled {
            return PointerTarget::Outside;
        }
        overlay::hit_test(
            &self.handles,
            self.area,
            self.container,
            x,
            y,
            self.config.grab_radius_px,
            !self.config.handles_hidden,
        )
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Call `listener` with the committed area after every commit.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Area) + Send + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Move one handle and resolve the rest of the set around it.
    ///
    /// The position is clamped to `[0, 100]` on both axes. If the derived
    /// width (then height) is at or below the minimum, the step is finished
    /// through [`set_area`](Self::set_area) with the minimum substituted.
    pub fn set_handle(&mut self, handle: Handle, position: Position) {
        if !position.is_finite() {
            trace_dropped("set_handle");
            return;
        }
        self.resolve(handle, position, Notify::Listeners);
    }

    /// Replace the whole area, clamped to the container and minimum size.
    ///
    /// Outside a move session, a dimension clamped to its minimum keeps the
    /// previous area's origin on that axis.
    pub fn set_area(&mut self, candidate: Area) {
        if !candidate.is_finite() {
            trace_dropped("set_area");
            return;
        }
        self.apply_area(candidate, Notify::Listeners, CommitPath::SetArea);
    }

    /// Drag `handle` to `candidate` while preserving the previous area's
    /// aspect ratio. Reverts to the previous area if the ratio-preserving
    /// size would reach the container or fall below the minimum.
    pub fn resize_keeping_ratio(&mut self, handle: Handle, candidate: Position) {
        if !candidate.is_finite() {
            trace_dropped("resize_keeping_ratio");
            return;
        }
        let anchor = self.handles.get(Handle::SouthEast);
        self.resolve(handle, candidate, Notify::Silent);
        match ratio_target(
            handle,
            self.area,
            self.previous,
            anchor,
            self.config.min_sizes,
        ) {
            RatioOutcome::Resize(area) => {
                self.apply_area(area, Notify::Listeners, CommitPath::Ratio);
            }
            RatioOutcome::Revert => {
                self.apply_area(self.previous, Notify::Listeners, CommitPath::Ratio);
            }
        }
    }

    fn resolve(&mut self, handle: Handle, position: Position, notify: Notify) {
        let position = Position::new(
            position.left.clamp(0.0, PERCENT_MAX),
            position.top.clamp(0.0, PERCENT_MAX),
        );
        self.handles.set(handle, position);
        self.handles.apply_dependencies(handle);
        self.handles.center_edges();

        self.previous = self.area;
        let derived = self.handles.bounding_area();
        let min = self.config.min_sizes;

        if derived.width <= min.width {
            let candidate = Area {
                width: min.width,
                ..derived
            };
            self.apply_area(candidate, notify, CommitPath::SetArea);
        } else if derived.height <= min.height {
            let candidate = Area {
                height: min.height,
                ..derived
            };
            self.apply_area(candidate, notify, CommitPath::SetArea);
        } else {
            self.area = derived;
            self.emit(notify, CommitPath::Resolve);
        }
    }

    fn apply_area(&mut self, candidate: Area, notify: Notify, path: CommitPath) {
        let area = clamp_area(
            candidate,
            self.previous,
            self.config.min_sizes,
            self.session.is_moving(),
        );
        self.rebuild(area, notify, path);
    }

    fn rebuild(&mut self, area: Area, notify: Notify, path: CommitPath) {
        self.handles = HandleSet::from_area(area);
        self.area = area;
        self.emit(notify, path);
    }

    fn emit(&mut self, notify: Notify, path: CommitPath) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "frame.commit",
            path = path.as_str(),
            top = self.area.top,
            left = self.area.left,
            width = self.area.width,
            height = self.area.height,
            notified = notify == Notify::Listeners
        )
        .entered();
        #[cfg(not(feature = "tracing"))]
        let _ = path;

        if notify == Notify::Listeners {
            self.listeners.notify(&self.area);
        }
    }

    // ========================================================================
    // Pointer input
    // ========================================================================

    /// Dispatch one primitive pointer signal.
    pub fn handle_input(&mut self, input: PointerInput) -> FrameTransition {
        match input {
            PointerInput::Down { x, y, target } => self.pointer_down(x, y, target),
            PointerInput::Move { x, y } => self.pointer_move(x, y),
            PointerInput::Up => self.pointer_up(),
        }
    }

    /// Start a resize (on a handle) or move (inside the area) session.
    pub fn pointer_down(&mut self, x: f64, y: f64, target: PointerTarget) -> FrameTransition {
        let from = self.session;
        if !(x.is_finite() && y.is_finite()) {
            return self.ignore(IgnoreReason::NonFinitePointer);
        }
        if self.config.disabled {
            return self.ignore(IgnoreReason::Disabled);
        }
        if self.config.prevent_events {
            return self.ignore(IgnoreReason::EventsPrevented);
        }
        if !from.is_idle() {
            return self.ignore(IgnoreReason::SessionActive);
        }

        let effect = match target {
            PointerTarget::Handle(handle) => {
                self.session =
                    start_resize(handle, self.handles.get(handle), self.container, x, y);
                FrameEffect::ResizeStarted { handle }
            }
            PointerTarget::Inside => {
                let origin = self.area.origin();
                self.session = SessionState::Moving {
                    start_x: x,
                    start_y: y,
                    origin,
                };
                FrameEffect::MoveStarted { origin }
            }
            PointerTarget::Outside => return self.ignore(IgnoreReason::OutsideArea),
        };
        self.transition(from, effect)
    }

    /// Advance the running session to pixel `(x, y)`.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> FrameTransition {
        let from = self.session;
        if self.config.prevent_events {
            return self.ignore(IgnoreReason::EventsPrevented);
        }
        if !(x.is_finite() && y.is_finite()) {
            return self.ignore(IgnoreReason::NonFinitePointer);
        }

        let effect = match from {
            SessionState::Idle => return self.ignore(IgnoreReason::NoActiveSession),
            SessionState::Resizing {
                handle,
                offset_x,
                offset_y,
            } => {
                let candidate = resize_candidate(
                    handle,
                    (offset_x, offset_y),
                    self.handles.get(handle),
                    self.container,
                    x,
                    y,
                );
                if !is_within_constraints(handle, candidate, self.area, self.config.min_sizes) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        message = "frame.rejected",
                        handle = handle.short_name(),
                        left = candidate.left,
                        top = candidate.top
                    );
                    FrameEffect::Rejected { handle, candidate }
                } else {
                    if self.config.keep_aspect_ratio {
                        self.resize_keeping_ratio(handle, candidate);
                    } else {
                        self.resolve(handle, candidate, Notify::Listeners);
                    }
                    FrameEffect::Resized {
                        handle,
                        area: self.area,
                    }
                }
            }
            SessionState::Moving {
                start_x,
                start_y,
                origin,
            } => {
                let target =
                    move_target((start_x, start_y), origin, self.area, self.container, x, y);
                self.apply_area(target, Notify::Listeners, CommitPath::Move);
                FrameEffect::Moved { area: self.area }
            }
        };
        self.transition(from, effect)
    }

    /// End the running session.
    pub fn pointer_up(&mut self) -> FrameTransition {
        let from = self.session;
        if from.is_idle() {
            return self.ignore(IgnoreReason::NoActiveSession);
        }
        self.session = SessionState::Idle;
        self.transition(from, FrameEffect::Ended)
    }

    fn ignore(&self, reason: IgnoreReason) -> FrameTransition {
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "frame.ignored", reason = ?reason);
        FrameTransition::ignored(self.session, reason)
    }

    fn transition(&self, from: SessionState, effect: FrameEffect) -> FrameTransition {
        let transition = FrameTransition {
            from,
            to: self.session,
            effect,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "frame.transition",
            from = ?from,
            to = ?self.session,
            effect = ?effect,
            committed = transition.committed()
        );
        transition
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Change the minimum size. An area (or previous area) that no longer
    /// meets it is refitted and committed.
    pub fn set_min_sizes(&mut self, min_sizes: Sizes) -> Result<(), ConfigError> {
        validate_min_sizes(min_sizes)?;
        self.config.min_sizes = min_sizes;
        self.previous = fit_area(self.previous, min_sizes);
        if !self.area.meets_min_sizes(min_sizes) {
            let fitted = fit_area(self.area, min_sizes);
            self.rebuild(fitted, Notify::Listeners, CommitPath::Reset);
        }
        Ok(())
    }

    pub fn set_keep_aspect_ratio(&mut self, enabled: bool) {
        self.config.keep_aspect_ratio = enabled;
    }

    /// Flip the aspect lock; returns the new value.
    pub fn toggle_keep_aspect_ratio(&mut self) -> bool {
        self.set_keep_aspect_ratio(!self.config.keep_aspect_ratio);
        self.config.keep_aspect_ratio
    }

    /// Disabling also ends any running session.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.session = SessionState::Idle;
        }
    }

    /// Flip the disabled flag; returns the new value.
    pub fn toggle_disabled(&mut self) -> bool {
        self.set_disabled(!self.config.disabled);
        self.config.disabled
    }

    pub fn set_handles_hidden(&mut self, hidden: bool) {
        self.config.handles_hidden = hidden;
    }

    /// Flip handle visibility; returns the new value.
    pub fn toggle_handles_hidden(&mut self) -> bool {
        self.set_handles_hidden(!self.config.handles_hidden);
        self.config.handles_hidden
    }

    pub fn set_prevent_events(&mut self, prevent: bool) {
        self.config.prevent_events = prevent;
    }

    /// Change the container's pixel size. Percentage geometry is unchanged.
    pub fn set_container_size(&mut self, container: ContainerSize) {
        self.container = container;
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// Restore the full-container area and end any session.
    pub fn reset(&mut self) {
        self.reset_to(Area::FULL);
    }

    /// Restore `area` (fitted to the container and minimum size; a
    /// non-finite area falls back to the full container) and end any
    /// session. Configuration is kept.
    pub fn reset_to(&mut self, area: Area) {
        let target = if area.is_finite() {
            fit_area(area, self.config.min_sizes)
        } else {
            Area::FULL
        };
        self.session = SessionState::Idle;
        self.previous = target;
        self.rebuild(target, Notify::Listeners, CommitPath::Reset);
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn trace_dropped(operation: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(message = "frame.non_finite", operation);
}
