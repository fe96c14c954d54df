//! Word motions and the whole-word text object.

use core_text::classify::{self, CharCategory, WordType};
use core_text::utf8;
use core_text::{Position, traversal};

use crate::flags::ObjectFlags;
use crate::selection::{Direction, Selection};
use crate::Context;

fn category(ctx: Context, c: char, word_type: WordType) -> CharCategory {
    classify::categorize(c, word_type, ctx.extra_word_chars())
}

/// Last codepoint's position strictly before `pos`, saturating at `buffer.begin()`.
fn one_before(ctx: Context, pos: Position) -> Position {
    let mut cur = ctx.buffer.iterator_at(pos);
    utf8::previous(&mut cur, ctx.buffer.begin());
    cur.pos()
}

/// Select from cursor to the start of the next word (or punctuation run),
/// consuming trailing horizontal blanks.
pub fn select_to_next_word(ctx: Context, sel: &Selection, word_type: WordType) -> Option<Selection> {
    let buf = ctx.buffer;
    let begin = sel.cursor;
    let mut cur = buf.iterator_at(begin);
    if cur.is_end() {
        return None;
    }
    let here = cur.peek()?;
    let mut probe = cur;
    if utf8::next(&mut probe, buf.end()) {
        if let Some(next_char) = probe.peek() {
            if category(ctx, here, word_type) != category(ctx, next_char, word_type) {
                cur = probe;
            }
        }
    }
    traversal::skip_while(&mut cur, buf.end(), classify::is_eol);
    if cur.is_end() {
        return None;
    }
    let c = cur.peek()?;
    match category(ctx, c, word_type) {
        CharCategory::Word => {
            traversal::skip_while(&mut cur, buf.end(), |c| {
                category(ctx, c, word_type) == CharCategory::Word
            });
        }
        CharCategory::Punctuation => {
            traversal::skip_while(&mut cur, buf.end(), |c| {
                category(ctx, c, word_type) == CharCategory::Punctuation
            });
        }
        CharCategory::Whitespace => {}
    }
    traversal::skip_while(&mut cur, buf.end(), classify::is_horizontal_blank);
    let end = one_before(ctx, cur.pos());
    Some(Selection::new(begin, end))
}

/// Select from cursor to the end of the next word (or punctuation run): skips
/// leading horizontal blanks first, then consumes the run, without consuming
/// trailing blanks.
pub fn select_to_next_word_end(
    ctx: Context,
    sel: &Selection,
    word_type: WordType,
) -> Option<Selection> {
    let buf = ctx.buffer;
    let begin = sel.cursor;
    let mut cur = buf.iterator_at(begin);
    if cur.is_end() {
        return None;
    }
    let here = cur.peek()?;
    let mut probe = cur;
    if utf8::next(&mut probe, buf.end()) {
        if let Some(next_char) = probe.peek() {
            if category(ctx, here, word_type) != category(ctx, next_char, word_type) {
                cur = probe;
            }
        }
    }
    traversal::skip_while(&mut cur, buf.end(), classify::is_eol);
    traversal::skip_while(&mut cur, buf.end(), classify::is_horizontal_blank);
    if cur.is_end() {
        return None;
    }
    let c = cur.peek()?;
    match category(ctx, c, word_type) {
        CharCategory::Word => {
            traversal::skip_while(&mut cur, buf.end(), |c| {
                category(ctx, c, word_type) == CharCategory::Word
            });
        }
        CharCategory::Punctuation => {
            traversal::skip_while(&mut cur, buf.end(), |c| {
                category(ctx, c, word_type) == CharCategory::Punctuation
            });
        }
        CharCategory::Whitespace => {}
    }
    let end = one_before(ctx, cur.pos());
    Some(Selection::new(begin, end))
}

/// Char immediately preceding `cur`'s position, without moving `cur`.
fn peek_back(ctx: Context, pos: Position) -> Option<char> {
    let mut probe = ctx.buffer.iterator_at(pos);
    if !utf8::previous(&mut probe, ctx.buffer.begin()) {
        return None;
    }
    probe.peek()
}

/// Select from cursor backward to the start of the previous word (or
/// punctuation run). Mirrors [`select_to_next_word`] moving in reverse.
pub fn select_to_previous_word(
    ctx: Context,
    sel: &Selection,
    word_type: WordType,
) -> Option<Selection> {
    let buf = ctx.buffer;
    let begin = sel.cursor;
    let mut cur = buf.iterator_at(begin);
    let c0 = peek_back(ctx, cur.pos())?;
    let mut probe = cur;
    utf8::previous(&mut probe, buf.begin());
    if let Some(c1) = peek_back(ctx, probe.pos()) {
        if category(ctx, c0, word_type) != category(ctx, c1, word_type) {
            cur = probe;
        }
    }
    while let Some(c) = peek_back(ctx, cur.pos()) {
        if !classify::is_eol(c) {
            break;
        }
        utf8::previous(&mut cur, buf.begin());
    }
    let Some(c) = peek_back(ctx, cur.pos()) else {
        return None;
    };
    let cat = category(ctx, c, word_type);
    while let Some(c) = peek_back(ctx, cur.pos()) {
        if category(ctx, c, word_type) != cat {
            break;
        }
        utf8::previous(&mut cur, buf.begin());
    }
    let mut with_end = false;
    while let Some(c) = peek_back(ctx, cur.pos()) {
        if !classify::is_horizontal_blank(c) {
            break;
        }
        utf8::previous(&mut cur, buf.begin());
        with_end = true;
    }
    let end = cur.pos();
    let final_end = if with_end {
        end
    } else {
        let mut c2 = buf.iterator_at(end);
        utf8::next(&mut c2, buf.end());
        c2.pos()
    };
    Some(Selection::new(begin, final_end))
}

/// The whole word (or `INNER` word, excluding trailing blanks) under the
/// cursor, extended in the direction(s) requested by `flags`.
pub fn select_word(
    ctx: Context,
    sel: &Selection,
    word_type: WordType,
    flags: ObjectFlags,
) -> Option<Selection> {
    let buf = ctx.buffer;
    let cursor = sel.cursor;
    let c = buf.iterator_at(cursor).peek()?;
    if category(ctx, c, word_type) != CharCategory::Word {
        return None;
    }
    let mut begin_cur = buf.iterator_at(cursor);
    if flags.contains(ObjectFlags::TO_BEGIN) {
        traversal::skip_while_reverse(&mut begin_cur, buf.begin(), |c| {
            category(ctx, c, word_type) == CharCategory::Word
        });
    }
    let mut end_cur = buf.iterator_at(cursor);
    if flags.contains(ObjectFlags::TO_END) {
        traversal::skip_while(&mut end_cur, buf.end(), |c| {
            category(ctx, c, word_type) == CharCategory::Word
        });
        if !flags.contains(ObjectFlags::INNER) {
            traversal::skip_while(&mut end_cur, buf.end(), classify::is_horizontal_blank);
        }
    }
    let begin = begin_cur.pos();
    let end = one_before(ctx, end_cur.pos().max(begin));
    let dir = if flags.contains(ObjectFlags::TO_BEGIN) && !flags.contains(ObjectFlags::TO_END) {
        Direction::Backward
    } else {
        Direction::Forward
    };
    Some(Selection::with_direction(begin, end, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Options;
    use core_text::Buffer;
    use pretty_assertions::assert_eq;

    fn opts() -> Options {
        Options {
            extra_word_chars: vec![],
            tabstop: 8,
        }
    }

    #[test]
    fn select_to_next_word_crosses_punctuation_boundary() {
        let buf = Buffer::from_str("t", "foo.bar  baz\n").unwrap();
        let o = opts();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::origin());
        let out = select_to_next_word(ctx, &sel, WordType::Word).unwrap();
        assert_eq!(out.anchor, Position::new(0, 0));
        assert_eq!(out.cursor, Position::new(0, 2));
    }

    #[test]
    fn select_word_whole_object() {
        let buf = Buffer::from_str("t", "foo bar\n").unwrap();
        let o = opts();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 1));
        let out = select_word(ctx, &sel, WordType::Word, ObjectFlags::WHOLE).unwrap();
        assert_eq!(out.min(), Position::new(0, 0));
        assert_eq!(out.max(), Position::new(0, 3));
    }

    #[test]
    fn select_word_fails_off_word_char() {
        let buf = Buffer::from_str("t", "   \n").unwrap();
        let o = opts();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::origin());
        assert!(select_word(ctx, &sel, WordType::Word, ObjectFlags::WHOLE).is_none());
    }
}
