//! Numeric literal text object.

use core_text::traversal;

use crate::Context;
use crate::flags::ObjectFlags;
use crate::selection::Selection;

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// The numeric literal under the cursor: digits, an optional leading `-`, and
/// (unless `INNER`) a `.` for simple decimals.
pub fn select_number(ctx: Context, sel: &Selection, flags: ObjectFlags) -> Option<Selection> {
    let buf = ctx.buffer;
    let cursor = sel.cursor;
    let here = buf.iterator_at(cursor).peek()?;
    let on_number_char = is_digit(here) || (!flags.contains(ObjectFlags::INNER) && here == '.');
    if !on_number_char {
        return None;
    }

    let allow_dot = !flags.contains(ObjectFlags::INNER);
    let pred = move |c: char| is_digit(c) || (allow_dot && c == '.');

    let mut begin_cur = buf.iterator_at(cursor);
    traversal::skip_while_reverse(&mut begin_cur, buf.begin(), pred);
    let mut probe = begin_cur;
    if probe.pos() != buf.begin() {
        let mut back = probe;
        if core_text::utf8::previous(&mut back, buf.begin()) && back.peek() == Some('-') {
            begin_cur = back;
        }
    }

    let mut end_cur = buf.iterator_at(cursor);
    traversal::skip_while(&mut end_cur, buf.end(), pred);
    let mut last = buf.iterator_at(end_cur.pos());
    core_text::utf8::previous(&mut last, buf.begin());

    Some(Selection::new(begin_cur.pos(), last.pos()))
}
