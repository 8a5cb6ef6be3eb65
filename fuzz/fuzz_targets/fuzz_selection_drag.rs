#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use selframe_core::event::PointerTarget;
use selframe_core::geometry::{Area, ContainerSize, Position, Sizes};
use selframe_core::handle::Handle;
use selframe_layout::{FrameConfig, SelectionFrame};

#[derive(Debug, Arbitrary)]
enum Op {
    Down { x: f64, y: f64, handle: Option<u8>, inside: bool },
    HitTestDown { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    SetHandle { handle: u8, left: f64, top: f64 },
    SetArea { top: f64, left: f64, width: f64, height: f64 },
    SetMinSizes { width: f64, height: f64 },
    ToggleRatio,
    ToggleDisabled,
    ToggleHidden,
    SetPrevent(bool),
    Resize { width: u16, height: u16 },
    Reset,
}

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    height: u16,
    keep_aspect_ratio: bool,
    ops: Vec<Op>,
}

fn handle(index: u8) -> Handle {
    Handle::ALL[usize::from(index) % Handle::ALL.len()]
}

fuzz_target!(|input: Input| {
    let Ok(container) = ContainerSize::new(
        f64::from(input.width.max(1)),
        f64::from(input.height.max(1)),
    ) else {
        return;
    };
    let config = FrameConfig::default().with_keep_aspect_ratio(input.keep_aspect_ratio);
    let Ok(mut frame) = SelectionFrame::new(container, config) else {
        return;
    };

    for op in input.ops.into_iter().take(512) {
        match op {
            Op::Down { x, y, handle: index, inside } => {
                let target = match (index, inside) {
                    (Some(index), _) => PointerTarget::Handle(handle(index)),
                    (None, true) => PointerTarget::Inside,
                    (None, false) => PointerTarget::Outside,
                };
                frame.pointer_down(x, y, target);
            }
            Op::HitTestDown { x, y } => {
                let target = frame.hit_test(x, y);
                frame.pointer_down(x, y, target);
            }
            Op::Move { x, y } => {
                frame.pointer_move(x, y);
            }
            Op::Up => {
                frame.pointer_up();
            }
            Op::SetHandle { handle: index, left, top } => {
                frame.set_handle(handle(index), Position::new(left, top));
            }
            Op::SetArea { top, left, width, height } => {
                frame.set_area(Area::new(top, left, width, height));
            }
            Op::SetMinSizes { width, height } => {
                let _ = frame.set_min_sizes(Sizes::new(width, height));
            }
            Op::ToggleRatio => {
                frame.toggle_keep_aspect_ratio();
            }
            Op::ToggleDisabled => {
                frame.toggle_disabled();
            }
            Op::ToggleHidden => {
                frame.toggle_handles_hidden();
            }
            Op::SetPrevent(prevent) => frame.set_prevent_events(prevent),
            Op::Resize { width, height } => {
                if let Ok(size) = ContainerSize::new(f64::from(width), f64::from(height)) {
                    frame.set_container_size(size);
                }
            }
            Op::Reset => frame.reset(),
        }

        let area = frame.area();
        let min = frame.config().min_sizes;
        assert!(area.is_finite(), "non-finite area {area:?}");
        assert!(area.is_within_container(), "area {area:?} out of bounds");
        assert!(area.meets_min_sizes(min), "area {area:?} below {min:?}");
        assert!(
            frame.handles().bounding_area().approx_eq(&area, 1e-6),
            "handles disagree with {area:?}"
        );
        let _ = frame.overlay().css_clip_path();
    }
});
