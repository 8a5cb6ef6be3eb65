//! Recorded host traces.
//!
//! A trace is a JSON document naming the container, the frame
//! configuration, an optional starting area and the host steps to apply:
//!
//! ```json
//! {
//!   "container": { "width": 1000, "height": 500 },
//!   "config": { "min_sizes": { "width": 10, "height": 10 } },
//!   "steps": [
//!     { "op": "drag", "from": [1000, 500], "to": [500, 250] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use selframe_core::event::PointerTarget;
use selframe_core::geometry::{Area, ContainerSize};
use selframe_layout::FrameConfig;

use crate::error::{ReplayError, Result};

/// Moves generated for a `drag` step when `samples` is omitted.
pub const DEFAULT_DRAG_SAMPLES: u32 = 1;

/// Upper bound on `samples` for one `drag` step.
pub const MAX_DRAG_SAMPLES: u32 = 10_000;

fn default_drag_samples() -> u32 {
    DEFAULT_DRAG_SAMPLES
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayTrace {
    pub container: ContainerSize,
    #[serde(default)]
    pub config: FrameConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_area: Option<Area>,
    pub steps: Vec<Step>,
}

impl ReplayTrace {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| ReplayError::TraceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Reject steps the replay loop cannot run in bounded time.
    pub fn validate(&self) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            match *step {
                Step::Drag { samples, .. } if samples > MAX_DRAG_SAMPLES => {
                    return Err(ReplayError::invalid(format!(
                        "step {index}: drag samples {samples} exceed the limit of {MAX_DRAG_SAMPLES}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// One host action. Pixel coordinates for pointer steps, percent for areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Press; the target is hit-tested when absent.
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<PointerTarget>,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    /// Press at `from`, `samples` evenly spaced moves ending at `to`, release.
    Drag {
        from: [f64; 2],
        to: [f64; 2],
        #[serde(default = "default_drag_samples")]
        samples: u32,
    },
    SetArea {
        area: Area,
    },
    SetMinSizes {
        width: f64,
        height: f64,
    },
    SetKeepAspectRatio {
        enabled: bool,
    },
    ToggleKeepAspectRatio,
    ToggleDisabled,
    ToggleHandlesHidden,
    SetPreventEvents {
        enabled: bool,
    },
    Reset {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        area: Option<Area>,
    },
}

impl Step {
    /// Wire name of the step, as used in the `op` tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::Drag { .. } => "drag",
            Self::SetArea { .. } => "set_area",
            Self::SetMinSizes { .. } => "set_min_sizes",
            Self::SetKeepAspectRatio { .. } => "set_keep_aspect_ratio",
            Self::ToggleKeepAspectRatio => "toggle_keep_aspect_ratio",
            Self::ToggleDisabled => "toggle_disabled",
            Self::ToggleHandlesHidden => "toggle_handles_hidden",
            Self::SetPreventEvents { .. } => "set_prevent_events",
            Self::Reset { .. } => "reset",
        }
    }
}

/// Pointer samples for a drag: `samples` points after `from`, the last one
/// exactly at `to`.
pub fn drag_path(
    from: [f64; 2],
    to: [f64; 2],
    samples: u32,
) -> impl Iterator<Item = (f64, f64)> {
    let samples = samples.max(1);
    (1..=samples).map(move |i| {
        if i == samples {
            return (to[0], to[1]);
        }
        let t = f64::from(i) / f64::from(samples);
        (from[0] + (to[0] - from[0]) * t, from[1] + (to[1] - from[1]) * t)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use selframe_core::handle::Handle;

    #[test]
    fn minimal_trace_uses_default_config() {
        let trace = ReplayTrace::from_json(
            r#"{"container":{"width":800,"height":600},"steps":[{"op":"pointer_up"}]}"#,
        )
        .expect("trace");
        assert_eq!(trace.config, FrameConfig::default());
        assert_eq!(trace.initial_area, None);
        assert_eq!(trace.steps, vec![Step::PointerUp]);
    }

    #[test]
    fn steps_parse_with_optional_fields() {
        let trace = ReplayTrace::from_json(
            r#"{
                "container": {"width": 100, "height": 100},
                "steps": [
                    {"op": "pointer_down", "x": 1, "y": 2},
                    {"op": "pointer_down", "x": 1, "y": 2, "target": {"handle": "se"}},
                    {"op": "drag", "from": [0, 0], "to": [10, 10]},
                    {"op": "reset"},
                    {"op": "reset", "area": {"top": 1, "left": 2, "width": 30, "height": 40}}
                ]
            }"#,
        )
        .expect("trace");
        assert_eq!(
            trace.steps,
            vec![
                Step::PointerDown { x: 1.0, y: 2.0, target: None },
                Step::PointerDown {
                    x: 1.0,
                    y: 2.0,
                    target: Some(PointerTarget::Handle(Handle::SouthEast)),
                },
                Step::Drag { from: [0.0, 0.0], to: [10.0, 10.0], samples: 1 },
                Step::Reset { area: None },
                Step::Reset { area: Some(Area::new(1.0, 2.0, 30.0, 40.0)) },
            ]
        );
    }

    #[test]
    fn invalid_container_is_rejected() {
        let error = ReplayTrace::from_json(r#"{"container":{"width":-1,"height":5},"steps":[]}"#)
            .expect_err("negative width");
        assert!(matches!(error, ReplayError::Json(_)));
    }

    #[test]
    fn unknown_op_is_rejected() {
        let error = ReplayTrace::from_json(
            r#"{"container":{"width":5,"height":5},"steps":[{"op":"teleport"}]}"#,
        )
        .expect_err("unknown op");
        assert!(error.to_string().contains("teleport"));
    }

    #[test]
    fn step_names_match_wire_tags() {
        let step = Step::SetPreventEvents { enabled: true };
        let json = serde_json::to_value(&step).expect("serialize");
        assert_eq!(json["op"], step.name());
        assert_eq!(Step::ToggleHandlesHidden.name(), "toggle_handles_hidden");
    }

    #[test]
    fn drag_path_ends_exactly_at_target() {
        let path: Vec<_> = drag_path([0.0, 0.0], [10.0, 20.0], 4).collect();
        assert_eq!(path, vec![(2.5, 5.0), (5.0, 10.0), (7.5, 15.0), (10.0, 20.0)]);
        let single: Vec<_> = drag_path([3.0, 3.0], [9.0, 1.0], 0).collect();
        assert_eq!(single, vec![(9.0, 1.0)]);
    }

    #[test]
    fn drag_path_is_lazy() {
        let mut path = drag_path([0.0, 0.0], [100.0, 0.0], u32::MAX);
        assert!(path.next().is_some());
        assert_eq!(path.size_hint().0, (u32::MAX - 1) as usize);
    }

    #[test]
    fn validate_caps_drag_samples() {
        let drag = |samples| Step::Drag { from: [0.0, 0.0], to: [1.0, 1.0], samples };
        let mut trace = ReplayTrace {
            container: ContainerSize::new(10.0, 10.0).expect("container"),
            config: FrameConfig::default(),
            initial_area: None,
            steps: vec![Step::PointerUp, drag(MAX_DRAG_SAMPLES)],
        };
        assert!(trace.validate().is_ok());

        trace.steps.push(drag(u32::MAX));
        let error = trace.validate().expect_err("too many samples");
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().contains("step 2"), "{error}");
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let error = ReplayTrace::load(Path::new("/definitely/not/here.json")).expect_err("missing");
        assert!(error.to_string().contains("/definitely/not/here.json"));
        assert_eq!(error.exit_code(), 1);
    }
}
