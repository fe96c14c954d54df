//! Whole-line and line-relative motions.

use core_text::utf8;
use core_text::{Position, classify};

use crate::Context;
use crate::selection::Selection;

/// Select the cursor's whole line (content plus trailing newline), direction
/// preserved forward, cursor sticky to end of line.
pub fn select_line(ctx: Context, sel: &Selection) -> Option<Selection> {
    let buf = ctx.buffer;
    let mut cur = buf.iterator_at(sel.cursor);
    if cur.peek() == Some('\n') && !cur.is_end() {
        utf8::next(&mut cur, buf.end());
    }
    let line = if cur.is_end() {
        buf.line_count() - 1
    } else {
        cur.pos().line
    };
    let begin = Position::new(line, 0);
    let end = Position::new(line, buf.content_len(line).saturating_sub(1));
    Some(Selection::new(begin, end).target_eol())
}

/// Selection cursor moved to the last non-newline column of its line.
/// `only_move` collapses the anchor onto the new cursor rather than
/// preserving the original anchor.
pub fn select_to_line_end(ctx: Context, sel: &Selection, only_move: bool) -> Option<Selection> {
    let buf = ctx.buffer;
    let line = sel.cursor.line;
    let end = Position::new(line, buf.content_len(line).saturating_sub(1));
    let anchor = if only_move { end } else { sel.anchor };
    Some(Selection::new(anchor, end).target_eol())
}

/// Selection cursor moved to column 0 of its line.
pub fn select_to_line_begin(ctx: Context, sel: &Selection, only_move: bool) -> Option<Selection> {
    let _ = ctx;
    let begin = Position::new(sel.cursor.line, 0);
    let anchor = if only_move { begin } else { sel.anchor };
    Some(Selection::new(anchor, begin))
}

/// Collapse the selection to the first non-horizontal-blank character of the
/// cursor's line (never crossing the newline).
pub fn select_to_first_non_blank(ctx: Context, sel: &Selection) -> Option<Selection> {
    let buf = ctx.buffer;
    let line = sel.cursor.line;
    let mut cur = buf.iterator_at_line(line);
    let end_of_line = Position::new(line, buf.content_len(line));
    while cur.pos() < end_of_line {
        match cur.peek() {
            Some(c) if classify::is_horizontal_blank(c) => {
                utf8::next(&mut cur, buf.end());
            }
            _ => break,
        }
    }
    Some(Selection::point(cur.pos()))
}
