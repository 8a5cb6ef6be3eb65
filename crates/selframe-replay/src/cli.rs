use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use selframe_core::geometry::{Area, ContainerSize};
use selframe_layout::{FrameConfig, SelectionFrame};

use crate::error::{ReplayError, Result};
use crate::logging::init_logging;
use crate::replay::{ReplayOptions, replay};
use crate::scenarios::{self, print_scenarios};
use crate::trace::ReplayTrace;

#[derive(Debug, Parser)]
#[command(
    name = "selframe-replay",
    about = "Replay recorded pointer traces against a selframe selection frame",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether errors should be reported as JSON.
    #[must_use]
    pub fn wants_json(&self) -> bool {
        match &self.command {
            Commands::Run(args) => args.json,
            Commands::Overlay(args) => args.json,
            Commands::ListScenarios => false,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a trace file or a built-in scenario.
    Run(RunArgs),

    /// Print handle markers and the clip path for an area.
    Overlay(OverlayArgs),

    /// Print built-in scenario names.
    #[command(name = "list-scenarios")]
    ListScenarios,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Trace JSON file to replay.
    #[arg(long, conflicts_with = "scenario", required_unless_present = "scenario")]
    pub trace: Option<PathBuf>,

    /// Built-in scenario name (see `list-scenarios`).
    #[arg(long)]
    pub scenario: Option<String>,

    /// Emit JSON lines instead of text.
    #[arg(long)]
    pub json: bool,

    /// Fail when a notified area breaks the container or minimum-size bounds.
    #[arg(long)]
    pub check_invariants: bool,

    /// Log filter directive; defaults to SELFRAME_LOG, then RUST_LOG, then "info".
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct OverlayArgs {
    /// Area as TOP,LEFT,WIDTH,HEIGHT in percent.
    #[arg(long, value_parser = parse_area)]
    pub area: Area,

    /// Mark handles hidden.
    #[arg(long)]
    pub handles_hidden: bool,

    /// Render as disabled (no handles, no shade).
    #[arg(long)]
    pub disabled: bool,

    /// Emit the overlay as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Run(args) => run_replay(&args, &mut out),
        Commands::Overlay(args) => run_overlay(&args, &mut out),
        Commands::ListScenarios => {
            print_scenarios();
            Ok(())
        }
    }
}

pub fn run_replay(args: &RunArgs, out: &mut dyn Write) -> Result<()> {
    init_logging(args.log_level.as_deref())?;

    let trace = match (&args.trace, &args.scenario) {
        (Some(path), _) => ReplayTrace::load(path)?,
        (None, Some(name)) => scenarios::load(name)?,
        (None, None) => return Err(ReplayError::invalid("either --trace or --scenario is required")),
    };
    let outcome = replay(
        &trace,
        ReplayOptions {
            check_invariants: args.check_invariants,
        },
    )?;

    if args.json {
        for notification in &outcome.notifications {
            writeln!(out, "{}", serde_json::to_string(notification)?)?;
        }
        let summary = json!({
            "status": "ok",
            "final_area": outcome.final_area,
            "notifications": outcome.notifications.len(),
            "ignored": outcome.ignored,
            "rejected": outcome.rejected,
        });
        writeln!(out, "{summary}")?;
    } else {
        for notification in &outcome.notifications {
            writeln!(
                out,
                "step {:>3} {:<24} {}",
                notification.step,
                notification.op,
                format_area(&notification.area)
            )?;
        }
        writeln!(out, "final {}", format_area(&outcome.final_area))?;
        writeln!(
            out,
            "notifications={} ignored={} rejected={}",
            outcome.notifications.len(),
            outcome.ignored,
            outcome.rejected
        )?;
    }
    Ok(())
}

pub fn run_overlay(args: &OverlayArgs, out: &mut dyn Write) -> Result<()> {
    let config = FrameConfig {
        disabled: args.disabled,
        handles_hidden: args.handles_hidden,
        ..FrameConfig::default()
    };
    // The overlay is resolution independent; any container will do.
    let container = ContainerSize::new(100.0, 100.0)?;
    let frame = SelectionFrame::with_area(container, config, args.area)?;
    let overlay = frame.overlay();

    let clip_path = overlay.css_clip_path();

    if args.json {
        let value = json!({
            "overlay": overlay,
            "clip_path": clip_path,
        });
        writeln!(out, "{value}")?;
        return Ok(());
    }

    writeln!(out, "area {}", format_area(&overlay.area))?;
    for marker in &overlay.markers {
        writeln!(
            out,
            "{:<2} {:>8.3} {:>8.3} {:<12} {}",
            marker.handle.short_name(),
            marker.position.left,
            marker.position.top,
            marker.cursor,
            if marker.visible { "visible" } else { "hidden" }
        )?;
    }
    writeln!(out, "clip-path: {clip_path}")?;
    writeln!(out, "shade: {}", if overlay.shade_visible { "on" } else { "off" })?;
    Ok(())
}

fn format_area(area: &Area) -> String {
    format!(
        "top={:.3} left={:.3} width={:.3} height={:.3}",
        area.top, area.left, area.width, area.height
    )
}

/// Parse `TOP,LEFT,WIDTH,HEIGHT`.
pub fn parse_area(value: &str) -> std::result::Result<Area, String> {
    let parts = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|error| format!("`{}`: {error}", part.trim()))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        &[top, left, width, height] => {
            let area = Area::new(top, left, width, height);
            if area.is_finite() {
                Ok(area)
            } else {
                Err("area values must be finite".to_string())
            }
        }
        _ => Err(format!(
            "expected TOP,LEFT,WIDTH,HEIGHT, got {} value(s)",
            parts.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use selframe_core::geometry::Area;
    use tempfile::tempdir;

    use super::*;

    fn run_args() -> RunArgs {
        RunArgs {
            trace: None,
            scenario: None,
            json: false,
            check_invariants: true,
            log_level: Some("off".to_string()),
        }
    }

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("command succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn list_scenarios_command_dispatches_successfully() {
        let result = run(Cli {
            command: Commands::ListScenarios,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn run_scenario_prints_final_area() {
        let args = RunArgs {
            scenario: Some("shrink-south-east".to_string()),
            ..run_args()
        };
        let text = capture(|out| run_replay(&args, out));
        assert!(text.contains("final top=0.000 left=0.000 width=50.000 height=50.000"), "{text}");
    }

    #[test]
    fn run_json_emits_one_line_per_notification_plus_summary() {
        let args = RunArgs {
            scenario: Some("aspect-lock-east".to_string()),
            json: true,
            ..run_args()
        };
        let text = capture(|out| run_replay(&args, out));
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        let summary = lines.last().expect("summary line");
        assert_eq!(summary["status"], "ok");
        assert_eq!(summary["notifications"].as_u64(), Some(lines.len() as u64 - 1));
        assert_eq!(lines[0]["op"], "drag");
    }

    #[test]
    fn run_trace_file_from_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        fs::write(
            &path,
            r#"{"container":{"width":200,"height":200},
                "steps":[{"op":"set_area","area":{"top":10,"left":10,"width":20,"height":20}}]}"#,
        )
        .expect("write trace");
        let args = RunArgs {
            trace: Some(path),
            ..run_args()
        };
        let text = capture(|out| run_replay(&args, out));
        assert!(text.contains("set_area"), "{text}");
        assert!(text.contains("final top=10.000 left=10.000 width=20.000 height=20.000"));
    }

    #[test]
    fn unknown_scenario_maps_to_usage_exit_code() {
        let args = RunArgs {
            scenario: Some("not-a-real-scenario".to_string()),
            ..run_args()
        };
        let error = run_replay(&args, &mut Vec::<u8>::new()).expect_err("unknown scenario");
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn bad_log_filter_is_invalid_argument() {
        let args = RunArgs {
            scenario: Some("shrink-south-east".to_string()),
            log_level: Some("selframe=loud".to_string()),
            ..run_args()
        };
        let error = run_replay(&args, &mut Vec::<u8>::new()).expect_err("bad filter");
        assert!(matches!(error, ReplayError::InvalidArgument { .. }));
    }

    #[test]
    fn overlay_text_lists_every_handle() {
        let args = OverlayArgs {
            area: Area::new(10.0, 20.0, 30.0, 40.0),
            handles_hidden: false,
            disabled: false,
            json: false,
        };
        let text = capture(|out| run_overlay(&args, out));
        assert_eq!(text.lines().filter(|line| line.ends_with("visible")).count(), 8);
        assert!(text.contains("clip-path: polygon("));
        assert!(text.contains("shade: on"));
    }

    #[test]
    fn overlay_json_reports_hidden_markers_when_disabled() {
        let args = OverlayArgs {
            area: Area::new(10.0, 20.0, 30.0, 40.0),
            handles_hidden: false,
            disabled: true,
            json: true,
        };
        let text = capture(|out| run_overlay(&args, out));
        let value: serde_json::Value = serde_json::from_str(text.trim()).expect("json");
        assert_eq!(value["overlay"]["shade_visible"], false);
        assert_eq!(value["overlay"]["markers"][0]["visible"], false);
        assert!(value["clip_path"].as_str().expect("string").starts_with("polygon("));
    }

    #[test]
    fn parse_area_accepts_four_numbers() {
        assert_eq!(parse_area("1, 2,3 ,4"), Ok(Area::new(1.0, 2.0, 3.0, 4.0)));
        assert!(parse_area("1,2,3").is_err());
        assert!(parse_area("1,2,x,4").expect_err("not a number").contains("`x`"));
        assert!(parse_area("1,2,inf,4").is_err());
    }

    #[test]
    fn cli_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "selframe-replay",
            "run",
            "--scenario",
            "move-and-reset",
            "--json",
            "--check-invariants",
        ])
        .expect("parse");
        assert!(cli.wants_json());
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.check_invariants);
        assert_eq!(args.scenario.as_deref(), Some("move-and-reset"));
    }

    #[test]
    fn cli_rejects_trace_and_scenario_together() {
        let result = Cli::try_parse_from([
            "selframe-replay",
            "run",
            "--trace",
            "a.json",
            "--scenario",
            "b",
        ]);
        assert!(result.is_err());
        assert!(Cli::try_parse_from(["selframe-replay", "run"]).is_err());
    }
}
