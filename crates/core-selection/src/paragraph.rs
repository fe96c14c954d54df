//! Paragraph text object: a run of lines separated by one or more blank lines.

use core_text::Position;

use crate::Context;
use crate::flags::ObjectFlags;
use crate::selection::Selection;

fn is_blank_line(ctx: Context, line: usize) -> bool {
    ctx.buffer.content_len(line) == 0
}

/// The paragraph containing the cursor. If the cursor sits on a blank-line
/// separator, the adjacent paragraph in the requested direction is chosen
/// (forward when both `TO_BEGIN` and `TO_END` are set). `INNER` excludes
/// trailing blank lines from the outer selection.
pub fn select_paragraph(ctx: Context, sel: &Selection, flags: ObjectFlags) -> Option<Selection> {
    let buf = ctx.buffer;
    let last = buf.line_count() - 1;
    let mut start = sel.cursor.line;
    let mut end = start;

    if is_blank_line(ctx, start) {
        if flags.contains(ObjectFlags::TO_BEGIN) && !flags.contains(ObjectFlags::TO_END) {
            while start > 0 && is_blank_line(ctx, start) {
                start -= 1;
            }
        } else {
            while start < last && is_blank_line(ctx, start) {
                start += 1;
            }
        }
        if is_blank_line(ctx, start) {
            return None;
        }
        end = start;
    }

    if flags.contains(ObjectFlags::TO_BEGIN) {
        while start > 0 && !is_blank_line(ctx, start - 1) {
            start -= 1;
        }
    }
    if flags.contains(ObjectFlags::TO_END) {
        while end < last && !is_blank_line(ctx, end + 1) {
            end += 1;
        }
        if !flags.contains(ObjectFlags::INNER) {
            while end < last && is_blank_line(ctx, end + 1) {
                end += 1;
            }
        }
    }

    let begin = Position::new(start, 0);
    let endpos = Position::new(end, buf.content_len(end).saturating_sub(1));
    Some(Selection::new(begin, endpos))
}
