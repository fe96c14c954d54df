//! Arbitrary surrounding-pair text object: `select_surrounding`, built on the
//! `find_closing`/`find_surrounding` nesting-level scan.
//!
//! `opening`/`closing` are treated as byte strings, scanned over the buffer's
//! materialized text. Buffers handled by this selector are expected to be
//! editor-sized; this trades a per-call `String` allocation for a much
//! simpler (and easier to get right) nesting scan than iterator-level
//! backward matching would need.

use core_text::Position;

use crate::Context;
use crate::flags::ObjectFlags;
use crate::selection::Selection;

fn full_text(ctx: Context) -> String {
    let buf = ctx.buffer;
    buf.string(buf.begin(), buf.end())
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut b = pos - 1;
    while b > 0 && !text.is_char_boundary(b) {
        b -= 1;
    }
    b
}

/// Scan forward from absolute byte `pos` for the next occurrence of
/// `closing`, bumping `level` on each `opening` seen in between when
/// `nestable`, decrementing on each `closing`. Returns the absolute byte
/// offset of the *start* of the closing occurrence at which `level` reaches
/// zero.
fn find_closing_abs(
    text: &str,
    mut pos: usize,
    opening: &str,
    closing: &str,
    mut level: u32,
    nestable: bool,
) -> Option<usize> {
    loop {
        if pos >= text.len() {
            return None;
        }
        if !closing.is_empty() && text[pos..].starts_with(closing) {
            level = level.saturating_sub(1);
            if level == 0 {
                return Some(pos);
            }
            pos += closing.len();
            continue;
        }
        if nestable && !opening.is_empty() && text[pos..].starts_with(opening) {
            level += 1;
            pos += opening.len();
            continue;
        }
        let next = next_char_boundary(text, pos);
        if next == pos {
            return None;
        }
        pos = next;
    }
}

/// Mirror of [`find_closing_abs`] scanning backward from `pos` for the
/// opening delimiter that balances `level`.
fn find_opening_abs(
    text: &str,
    mut pos: usize,
    opening: &str,
    closing: &str,
    mut level: u32,
    nestable: bool,
) -> Option<usize> {
    loop {
        if pos == 0 {
            return None;
        }
        if !opening.is_empty() && pos >= opening.len() && &text[pos - opening.len()..pos] == opening {
            level = level.saturating_sub(1);
            if level == 0 {
                return Some(pos - opening.len());
            }
            pos -= opening.len();
            continue;
        }
        if nestable
            && !closing.is_empty()
            && pos >= closing.len()
            && &text[pos - closing.len()..pos] == closing
        {
            level += 1;
            pos -= closing.len();
            continue;
        }
        pos = prev_char_boundary(text, pos);
    }
}

/// Public, `Context`-facing wrapper around [`find_closing_abs`] operating on
/// buffer coordinates.
pub fn find_closing(
    ctx: Context,
    pos: Position,
    opening: &str,
    closing: &str,
    level: u32,
    nestable: bool,
) -> Option<Position> {
    let buf = ctx.buffer;
    let text = full_text(ctx);
    let start = buf.absolute_byte(pos);
    let close_start = find_closing_abs(&text, start, opening, closing, level.max(1), nestable)?;
    Some(buf.position_at_absolute(close_start))
}

/// Core surrounding-pair search. `init_level` lets callers grow outward to an
/// enclosing pair by retrying with `level + 1`.
pub fn find_surrounding(
    ctx: Context,
    pos: Position,
    opening: &str,
    closing: &str,
    flags: ObjectFlags,
    init_level: u32,
) -> Option<Selection> {
    let buf = ctx.buffer;
    let text = full_text(ctx);
    let nestable = opening != closing;
    let cursor_abs = buf.absolute_byte(pos);
    let level = init_level.max(1);

    let on_opener = !opening.is_empty() && text[cursor_abs..].starts_with(opening);

    let mut begin_abs = cursor_abs;
    if flags.contains(ObjectFlags::TO_BEGIN) {
        begin_abs = if on_opener {
            cursor_abs
        } else {
            find_opening_abs(&text, cursor_abs, opening, closing, level, nestable)?
        };
    }

    let mut end_last_abs = cursor_abs;
    if flags.contains(ObjectFlags::TO_END) {
        let search_from = if on_opener {
            cursor_abs + opening.len()
        } else {
            cursor_abs
        };
        let close_start = find_closing_abs(&text, search_from, opening, closing, level, nestable)?;
        end_last_abs = close_start + closing.len().saturating_sub(1);
    }

    if flags.contains(ObjectFlags::INNER) {
        if flags.contains(ObjectFlags::TO_BEGIN) {
            begin_abs += opening.len();
        }
        if flags.contains(ObjectFlags::TO_END) && !closing.is_empty() {
            end_last_abs = end_last_abs.saturating_sub(closing.len());
        }
        // An empty pair (e.g. "[]") has no inner content: pushing begin past
        // the opener and pulling end before the closer crosses them. Collapse
        // to the degenerate point at the closer instead of letting min()/max()
        // silently reorder this into a two-character span.
        if begin_abs > end_last_abs {
            end_last_abs = begin_abs;
        }
    }

    let begin = buf.position_at_absolute(begin_abs);
    let end = buf.position_at_absolute(end_last_abs);
    Some(Selection::new(begin, end))
}

/// `opening`/`closing` surrounding-pair text object. Retries with the next
/// nesting level when the result equals the input selection's exact span, so
/// repeated invocation grows outward to the enclosing pair.
pub fn select_surrounding(
    ctx: Context,
    sel: &Selection,
    opening: &str,
    closing: &str,
    level: u32,
    flags: ObjectFlags,
) -> Option<Selection> {
    let result = find_surrounding(ctx, sel.cursor, opening, closing, flags, level)?;
    if result.min() == sel.min() && result.max() == sel.max() {
        return find_surrounding(ctx, sel.cursor, opening, closing, flags, level + 1);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Options;
    use core_text::Buffer;

    fn advance_one(buf: &Buffer, pos: Position) -> Position {
        buf.position_at_absolute(buf.absolute_byte(pos) + 1)
    }

    #[test]
    fn selects_nestable_pair_enclosing_cursor() {
        let buf = Buffer::from_str("t", "a(b(c)d)e\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 2)); // 'b', only inside the outer pair
        let out = select_surrounding(ctx, &sel, "(", ")", 1, ObjectFlags::WHOLE).unwrap();
        assert_eq!(
            buf.string(out.min(), advance_one(&buf, out.max())),
            "(b(c)d)"
        );
    }

    #[test]
    fn selects_innermost_pair_around_cursor() {
        let buf = Buffer::from_str("t", "a(b(c)d)e\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 4)); // 'c', inside both pairs
        let out = select_surrounding(ctx, &sel, "(", ")", 1, ObjectFlags::WHOLE).unwrap();
        assert_eq!(buf.string(out.min(), advance_one(&buf, out.max())), "(c)");
    }

    #[test]
    fn selects_inner_excludes_delimiters() {
        let buf = Buffer::from_str("t", "a(bcd)e\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 3));
        let flags = ObjectFlags::WHOLE | ObjectFlags::INNER;
        let out = select_surrounding(ctx, &sel, "(", ")", 1, flags).unwrap();
        assert_eq!(buf.string(out.min(), advance_one(&buf, out.max())), "bcd");
    }

    #[test]
    fn fails_when_unbalanced() {
        let buf = Buffer::from_str("t", "a(bcd\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 3));
        assert!(select_surrounding(ctx, &sel, "(", ")", 1, ObjectFlags::WHOLE).is_none());
    }

    /// `find_surrounding` against a single source string, covering the full
    /// table of cursor/delimiter/flag combinations it must handle.
    #[test]
    fn find_surrounding_table() {
        let src = "[salut { toi[] }]\n";
        let buf = Buffer::from_str("t", src).unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);

        let at = |byte: usize| Position::new(0, byte);
        let span = |out: &Selection| buf.string(out.min(), advance_one(&buf, out.max()));

        // { toi[] } enclosing 'o' at offset 10.
        let out = find_surrounding(ctx, at(10), "{", "}", ObjectFlags::WHOLE, 0).unwrap();
        assert_eq!(span(&out), "{ toi[] }");

        // salut { toi[] } as the inner of the outermost [ ] pair.
        let out = find_surrounding(ctx, at(10), "[", "]", ObjectFlags::WHOLE | ObjectFlags::INNER, 0)
            .unwrap();
        assert_eq!(span(&out), "salut { toi[] }");

        // cursor on the opening '[' selects the whole bracketed string.
        let out = find_surrounding(ctx, at(0), "[", "]", ObjectFlags::WHOLE, 0).unwrap();
        assert_eq!(span(&out), "[salut { toi[] }]");

        // cursor on the nested opening '[' of "[]", INNER, degenerates to "]".
        let out = find_surrounding(ctx, at(12), "[", "]", ObjectFlags::WHOLE | ObjectFlags::INNER, 0)
            .unwrap();
        assert_eq!(span(&out), "]");
        assert_eq!(out.min(), out.max());
    }

    #[test]
    fn find_surrounding_degenerate_pair() {
        let buf = Buffer::from_str("t", "[]\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let out = find_surrounding(ctx, Position::new(0, 1), "[", "]", ObjectFlags::WHOLE, 0).unwrap();
        assert_eq!(
            buf.string(out.min(), advance_one(&buf, out.max())),
            "[]"
        );
    }

    #[test]
    fn find_surrounding_fails_outside_any_pair() {
        let buf = Buffer::from_str("t", "[*][] hehe\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let out = find_surrounding(ctx, Position::new(0, 6), "[", "]", ObjectFlags::TO_BEGIN, 0);
        assert!(out.is_none());
    }

    #[test]
    fn find_surrounding_multi_byte_delimiters() {
        let buf = Buffer::from_str("t", "begin tchou begin tchaa end end\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let out = find_surrounding(ctx, Position::new(0, 6), "begin", "end", ObjectFlags::WHOLE, 0)
            .unwrap();
        assert_eq!(
            buf.string(out.min(), advance_one(&buf, out.max())),
            "begin tchou begin tchaa end end"
        );
    }
}
