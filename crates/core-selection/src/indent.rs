//! Indent-block text object.

use core_text::Position;

use crate::Context;
use crate::flags::ObjectFlags;
use crate::selection::Selection;

/// Visual column of the first non-blank character on `line`, tabs rounding up
/// to the next `tabstop` multiple. `None` for an all-whitespace (blank) line.
fn visual_indent(line: &str, tabstop: usize) -> Option<usize> {
    let mut col = 0usize;
    for c in line.chars() {
        match c {
            ' ' => col += 1,
            '\t' => col = (col / tabstop + 1) * tabstop,
            '\n' => return None,
            _ => return Some(col),
        }
    }
    None
}

/// The contiguous block of lines around the cursor sharing an indent level at
/// least as deep as the cursor's line, with blank lines treated as
/// indent-agnostic filler. `INNER` trims leading/trailing blank lines from
/// the result.
pub fn select_indent(ctx: Context, sel: &Selection, flags: ObjectFlags) -> Option<Selection> {
    let buf = ctx.buffer;
    let tabstop = ctx.tabstop();
    let cursor_line = sel.cursor.line;
    let cur_indent = visual_indent(&buf.line(cursor_line)?, tabstop)?;
    let last = buf.line_count() - 1;

    let mut start = cursor_line;
    while start > 0 {
        let prev = start - 1;
        match visual_indent(&buf.line(prev)?, tabstop) {
            None => start = prev,
            Some(ind) if ind >= cur_indent => start = prev,
            _ => break,
        }
    }

    let mut end = cursor_line;
    while end < last {
        let next = end + 1;
        match visual_indent(&buf.line(next)?, tabstop) {
            None => end = next,
            Some(ind) if ind >= cur_indent => end = next,
            _ => break,
        }
    }

    if flags.contains(ObjectFlags::INNER) {
        while start < end && visual_indent(&buf.line(start)?, tabstop).is_none() {
            start += 1;
        }
        while end > start && visual_indent(&buf.line(end)?, tabstop).is_none() {
            end -= 1;
        }
    }

    let begin = Position::new(start, 0);
    let endpos = Position::new(end, buf.content_len(end).saturating_sub(1));
    Some(Selection::new(begin, endpos))
}
