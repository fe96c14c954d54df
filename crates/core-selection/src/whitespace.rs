//! Whitespace-run text object.

use core_text::{classify, traversal, utf8};

use crate::Context;
use crate::flags::ObjectFlags;
use crate::selection::Selection;

fn in_run(c: char, inner: bool) -> bool {
    if inner {
        classify::is_horizontal_blank(c)
    } else {
        classify::is_horizontal_blank(c) || classify::is_eol(c)
    }
}

/// The maximal run of blanks (horizontal blanks, plus `\n` unless `INNER`)
/// around the cursor. Fails if the cursor is not itself on whitespace.
pub fn select_whitespace(ctx: Context, sel: &Selection, flags: ObjectFlags) -> Option<Selection> {
    let buf = ctx.buffer;
    let cursor = sel.cursor;
    let here = buf.iterator_at(cursor).peek()?;
    let inner = flags.contains(ObjectFlags::INNER);
    if !in_run(here, inner) {
        return None;
    }

    let mut begin_cur = buf.iterator_at(cursor);
    traversal::skip_while_reverse(&mut begin_cur, buf.begin(), |c| in_run(c, inner));

    let mut end_cur = buf.iterator_at(cursor);
    traversal::skip_while(&mut end_cur, buf.end(), |c| in_run(c, inner));
    let mut last = buf.iterator_at(end_cur.pos());
    utf8::previous(&mut last, buf.begin());

    Some(Selection::new(begin_cur.pos(), last.pos()))
}
