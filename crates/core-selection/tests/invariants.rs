//! Property tests for the invariants that must hold across every selector.

use core_config::Options;
use core_selection::{Context, ObjectFlags, Selection, WordType, select_to_next_word, select_word};
use core_text::{Buffer, Position};
use quickcheck_macros::quickcheck;

fn sample_buffer() -> Buffer {
    Buffer::from_str("t", "the quick, brown fox-jumps over 42 lazy dogs\n").unwrap()
}

/// Invariant 1: every returned selection's endpoints are valid buffer
/// coordinates.
#[quickcheck]
fn word_motion_endpoints_are_valid_coordinates(col: usize) -> bool {
    let buf = sample_buffer();
    let opts = Options::default();
    let ctx = Context::new(&buf, &opts);
    let clamped = buf.clamp(Position::new(0, col % 50));
    let sel = Selection::point(clamped);
    match select_to_next_word(ctx, &sel, WordType::Word) {
        None => true,
        Some(out) => {
            let valid = |p: Position| p.line < buf.line_count() && p.byte <= buf.line_len(p.line);
            valid(out.min()) && valid(out.max())
        }
    }
}

/// Invariant 4: a `TO_END` selector never produces a backward-direction
/// result.
#[quickcheck]
fn select_word_to_end_preserves_forward_direction(col: usize) -> bool {
    let buf = sample_buffer();
    let opts = Options::default();
    let ctx = Context::new(&buf, &opts);
    let clamped = buf.clamp(Position::new(0, col % 50));
    let sel = Selection::point(clamped);
    match select_word(ctx, &sel, WordType::Word, ObjectFlags::TO_END) {
        None => true,
        Some(out) => out.anchor <= out.cursor,
    }
}

/// Invariant 4 (backward leg): a pure `TO_BEGIN` selector never produces a
/// forward-direction result.
#[quickcheck]
fn select_word_to_begin_preserves_backward_direction(col: usize) -> bool {
    let buf = sample_buffer();
    let opts = Options::default();
    let ctx = Context::new(&buf, &opts);
    let clamped = buf.clamp(Position::new(0, col % 50));
    let sel = Selection::point(clamped);
    match select_word(ctx, &sel, WordType::Word, ObjectFlags::TO_BEGIN) {
        None => true,
        Some(out) => out.cursor <= out.anchor,
    }
}
