#![no_main]

use libfuzzer_sys::fuzz_target;
use selframe_replay::{ReplayError, ReplayOptions, ReplayTrace, Step, replay};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut trace) = ReplayTrace::from_json(source) else {
        return;
    };
    trace.steps.truncate(256);
    for step in &mut trace.steps {
        if let Step::Drag { samples, .. } = step {
            *samples = (*samples).min(64);
        }
    }
    if let Err(ReplayError::InvariantViolation { step, op, detail }) =
        replay(&trace, ReplayOptions { check_invariants: true })
    {
        panic!("invariant violated at step {step} ({op}): {detail}");
    }
});
