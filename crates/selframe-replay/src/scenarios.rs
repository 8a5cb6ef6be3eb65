//! Built-in traces shipped with the binary.

use crate::error::{ReplayError, Result};
use crate::trace::ReplayTrace;

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub summary: &'static str,
    pub source: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "shrink-south-east",
        summary: "1000x500 container, drag SE from the corner to the center",
        source: include_str!("../scenarios/shrink_south_east.json"),
    },
    Scenario {
        name: "shrink-to-minimum",
        summary: "drag SE to the origin; the drag stalls at the 10x10 minimum",
        source: include_str!("../scenarios/shrink_to_minimum.json"),
    },
    Scenario {
        name: "aspect-lock-east",
        summary: "square area with the aspect lock, drag E to 80%",
        source: include_str!("../scenarios/aspect_lock_east.json"),
    },
    Scenario {
        name: "move-and-reset",
        summary: "move past the bottom-right corner, move back, reset",
        source: include_str!("../scenarios/move_and_reset.json"),
    },
    Scenario {
        name: "guarded-input",
        summary: "prevent_events and disabled swallow drags; min sizes refit the area",
        source: include_str!("../scenarios/guarded_input.json"),
    },
];

#[must_use]
pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.name == name)
}

pub fn load(name: &str) -> Result<ReplayTrace> {
    let scenario = find(name).ok_or_else(|| ReplayError::UnknownScenario {
        name: name.to_string(),
    })?;
    ReplayTrace::from_json(scenario.source)
}

pub fn print_scenarios() {
    for scenario in SCENARIOS {
        println!("{:<20} {}", scenario.name, scenario.summary);
    }
}
