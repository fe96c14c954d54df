//! Sentence text object.

use core_text::{classify, traversal, utf8};

use crate::Context;
use crate::flags::ObjectFlags;
use crate::selection::Selection;

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | ';' | '!' | '?')
}

/// The sentence containing the cursor. A sentence ends at `. ; ! ?` or a
/// blank-line boundary; `INNER` excludes the trailing horizontal blanks that
/// would otherwise be folded into the selection after the terminator.
pub fn select_sentence(ctx: Context, sel: &Selection, flags: ObjectFlags) -> Option<Selection> {
    let buf = ctx.buffer;
    let cursor = sel.cursor;

    let mut begin_cur = buf.iterator_at(cursor);
    let mut saw_non_blank = false;
    loop {
        if begin_cur.pos() == buf.begin() {
            break;
        }
        if begin_cur.pos().byte == 0 {
            let prev_line = begin_cur.pos().line - 1;
            if buf.content_len(prev_line) == 0 {
                break;
            }
        }
        let mut probe = begin_cur;
        if !utf8::previous(&mut probe, buf.begin()) {
            break;
        }
        let c = probe.peek()?;
        if is_sentence_end(c) && saw_non_blank {
            break;
        }
        if !classify::is_blank(c) {
            saw_non_blank = true;
        }
        begin_cur = probe;
    }
    traversal::skip_while(&mut begin_cur, buf.end(), classify::is_blank);

    let mut end_cur = buf.iterator_at(cursor);
    loop {
        if end_cur.is_end() {
            break;
        }
        let c = end_cur.peek()?;
        if classify::is_eol(c) && buf.content_len(end_cur.pos().line) == 0 {
            break;
        }
        if is_sentence_end(c) {
            utf8::next(&mut end_cur, buf.end());
            break;
        }
        if !utf8::next(&mut end_cur, buf.end()) {
            break;
        }
    }
    if !flags.contains(ObjectFlags::INNER) {
        traversal::skip_while(&mut end_cur, buf.end(), classify::is_horizontal_blank);
    }
    let mut last = buf.iterator_at(end_cur.pos());
    utf8::previous(&mut last, buf.begin());

    Some(Selection::new(begin_cur.pos(), last.pos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Options;
    use core_text::{Buffer, Position};

    #[test]
    fn selects_sentence_containing_cursor() {
        let buf = Buffer::from_str("t", "Hi. Bye.\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 5)); // 'y' in "Bye."
        let out = select_sentence(ctx, &sel, ObjectFlags::empty()).unwrap();
        assert_eq!(
            buf.string(out.min(), Position::new(0, out.max().byte + 1)),
            "Bye."
        );
    }

    #[test]
    fn first_sentence_starts_at_buffer_begin() {
        let buf = Buffer::from_str("t", "Hi. Bye.\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 0));
        let out = select_sentence(ctx, &sel, ObjectFlags::empty()).unwrap();
        assert_eq!(
            buf.string(out.min(), Position::new(0, out.max().byte + 1)),
            "Hi. "
        );
    }
}
