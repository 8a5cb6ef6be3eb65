//! Apply a [`ReplayTrace`] to a fresh [`SelectionFrame`].

use std::sync::mpsc;

use serde::Serialize;

use selframe_core::event::PointerTarget;
use selframe_core::geometry::{Area, Sizes};
use selframe_layout::{FrameEffect, SelectionFrame};

use crate::error::{ReplayError, Result};
use crate::trace::{ReplayTrace, Step, drag_path};

/// One area-changed notification observed during replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Notification {
    /// Index of the step that produced it.
    pub step: usize,
    pub op: &'static str,
    pub area: Area,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayOutcome {
    pub notifications: Vec<Notification>,
    pub final_area: Area,
    /// Pointer signals the engine ignored or rejected.
    pub ignored: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Fail on the first notification that breaks the area invariants.
    pub check_invariants: bool,
}

/// Replay every step of `trace`.
pub fn replay(trace: &ReplayTrace, options: ReplayOptions) -> Result<ReplayOutcome> {
    trace.validate()?;
    let mut frame = match trace.initial_area {
        Some(area) => SelectionFrame::with_area(trace.container, trace.config, area)?,
        None => SelectionFrame::new(trace.container, trace.config)?,
    };
    let (sender, receiver) = mpsc::channel();
    frame.subscribe(move |area: &Area| {
        // The receiver outlives the frame for the whole replay.
        let _ = sender.send(*area);
    });

    let mut outcome = ReplayOutcome {
        notifications: Vec::new(),
        final_area: frame.area(),
        ignored: 0,
        rejected: 0,
    };
    tracing::info!(steps = trace.steps.len(), "replay.start");

    for (index, step) in trace.steps.iter().enumerate() {
        let effects = apply_step(&mut frame, step)?;
        for effect in effects {
            match effect {
                FrameEffect::Ignored { .. } => outcome.ignored += 1,
                FrameEffect::Rejected { .. } => outcome.rejected += 1,
                _ => {}
            }
        }
        for area in receiver.try_iter() {
            if options.check_invariants {
                check_area(&area, frame.config().min_sizes).map_err(|detail| {
                    ReplayError::InvariantViolation {
                        step: index,
                        op: step.name(),
                        detail,
                    }
                })?;
            }
            outcome.notifications.push(Notification {
                step: index,
                op: step.name(),
                area,
            });
        }
    }

    outcome.final_area = frame.area();
    tracing::info!(
        notifications = outcome.notifications.len(),
        ignored = outcome.ignored,
        rejected = outcome.rejected,
        "replay.done"
    );
    Ok(outcome)
}

fn apply_step(frame: &mut SelectionFrame, step: &Step) -> Result<Vec<FrameEffect>> {
    let mut effects = Vec::new();
    match *step {
        Step::PointerDown { x, y, target } => {
            let target = target.unwrap_or_else(|| frame.hit_test(x, y));
            effects.push(frame.pointer_down(x, y, target).effect);
        }
        Step::PointerMove { x, y } => effects.push(frame.pointer_move(x, y).effect),
        Step::PointerUp => effects.push(frame.pointer_up().effect),
        Step::Drag { from, to, samples } => {
            let target = frame.hit_test(from[0], from[1]);
            effects.push(frame.pointer_down(from[0], from[1], target).effect);
            if target != PointerTarget::Outside {
                for (x, y) in drag_path(from, to, samples) {
                    effects.push(frame.pointer_move(x, y).effect);
                }
            }
            effects.push(frame.pointer_up().effect);
        }
        Step::SetArea { area } => frame.set_area(area),
        Step::SetMinSizes { width, height } => frame.set_min_sizes(Sizes::new(width, height))?,
        Step::SetKeepAspectRatio { enabled } => frame.set_keep_aspect_ratio(enabled),
        Step::ToggleKeepAspectRatio => {
            frame.toggle_keep_aspect_ratio();
        }
        Step::ToggleDisabled => {
            frame.toggle_disabled();
        }
        Step::ToggleHandlesHidden => {
            frame.toggle_handles_hidden();
        }
        Step::SetPreventEvents { enabled } => frame.set_prevent_events(enabled),
        Step::Reset { area: Some(area) } => frame.reset_to(area),
        Step::Reset { area: None } => frame.reset(),
    }
    Ok(effects)
}

/// Check a committed area against the container bounds and `min`.
pub fn check_area(area: &Area, min: Sizes) -> std::result::Result<(), String> {
    if !area.is_finite() {
        return Err(format!("non-finite area {area:?}"));
    }
    if !area.is_within_container() {
        return Err(format!("area {area:?} leaves the container"));
    }
    if !area.meets_min_sizes(min) {
        return Err(format!(
            "width {} height {} below minimum {}x{}",
            area.width, area.height, min.width, min.height
        ));
    }
    Ok(())
}
