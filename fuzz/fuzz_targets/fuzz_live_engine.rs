//! Fuzz target for the live decoration engine.
//!
//! Drives a headless editor through arbitrary edits, scrolls and selections
//! and checks the decoration set invariants after every update.

#![no_main]

use arbitrary::Arbitrary;
use display_props::{EngineOptions, LiveEngine, MemoryEditor, Policy, Selection, ViewUpdate};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Insert { at: u16, text: String },
    Remove { start: u16, end: u16 },
    Select { anchor: u16, head: u16 },
    Scroll { ranges: Vec<(u16, u16)> },
    Click { at: u16 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    baseline: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let policy = if input.baseline {
        Policy::BASELINE
    } else {
        Policy::RICHER
    };
    let mut editor = MemoryEditor::new(&input.text);
    let mut engine = LiveEngine::new(EngineOptions::with_policy(policy), &editor);

    // Limit iterations to keep each run short
    for op in input.ops.into_iter().take(64) {
        let flags = match op {
            Op::Insert { at, text } => editor.insert(at.into(), &text),
            Op::Remove { start, end } => editor.remove(start.into()..end.into()),
            Op::Select { anchor, head } => {
                editor.select(Selection::new(anchor.into(), head.into()))
            }
            Op::Scroll { ranges } => editor.set_visible_ranges(
                ranges
                    .into_iter()
                    .map(|(a, b)| usize::from(a.min(b))..usize::from(a.max(b)))
                    .collect(),
            ),
            Op::Click { at } => {
                engine.click(at.into(), &mut editor);
                continue;
            }
        };
        engine.update(&ViewUpdate::new(flags), &editor);

        let mut last_end = 0;
        for deco in engine.decorations() {
            assert!(deco.range.start < deco.range.end);
            assert!(deco.range.start >= last_end);
            last_end = deco.range.end;
        }
    }
});
