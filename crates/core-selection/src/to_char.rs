//! `f`/`t`-style character search within the buffer.

use core_text::utf8;

use crate::Context;
use crate::selection::Selection;

/// Advance past at least one character, then skip until `c` is found,
/// repeating `count` times. `inclusive` controls whether the final `c` is
/// part of the returned span.
pub fn select_to(ctx: Context, sel: &Selection, c: char, count: usize, inclusive: bool) -> Option<Selection> {
    let buf = ctx.buffer;
    let begin = sel.cursor;
    let mut cur = buf.iterator_at(begin);
    for _ in 0..count.max(1) {
        if !utf8::next(&mut cur, buf.end()) {
            return None;
        }
        loop {
            let here = cur.peek()?;
            if here == c {
                break;
            }
            if !utf8::next(&mut cur, buf.end()) {
                return None;
            }
        }
    }
    let end = if inclusive {
        cur.pos()
    } else {
        let mut back = cur;
        utf8::previous(&mut back, buf.begin());
        back.pos()
    };
    Some(Selection::new(begin, end))
}

/// Symmetric reverse of [`select_to`].
pub fn select_to_reverse(
    ctx: Context,
    sel: &Selection,
    c: char,
    count: usize,
    inclusive: bool,
) -> Option<Selection> {
    let buf = ctx.buffer;
    let begin = sel.cursor;
    let mut cur = buf.iterator_at(begin);
    for _ in 0..count.max(1) {
        if !utf8::previous(&mut cur, buf.begin()) {
            return None;
        }
        loop {
            let here = cur.peek()?;
            if here == c {
                break;
            }
            if !utf8::previous(&mut cur, buf.begin()) {
                return None;
            }
        }
    }
    let end = if inclusive {
        cur.pos()
    } else {
        let mut fwd = cur;
        utf8::next(&mut fwd, buf.end());
        fwd.pos()
    };
    Some(Selection::new(begin, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Options;
    use core_text::{Buffer, Position};

    #[test]
    fn select_to_inclusive_lands_on_target() {
        let buf = Buffer::from_str("t", "abcXdef\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::origin());
        let out = select_to(ctx, &sel, 'X', 1, true).unwrap();
        assert_eq!(out.cursor, Position::new(0, 3));
    }

    #[test]
    fn select_to_exclusive_stops_before_target() {
        let buf = Buffer::from_str("t", "abcXdef\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::origin());
        let out = select_to(ctx, &sel, 'X', 1, false).unwrap();
        assert_eq!(out.cursor, Position::new(0, 2));
    }

    #[test]
    fn select_to_reverse_finds_target_backward() {
        let buf = Buffer::from_str("t", "abcXdef\n").unwrap();
        let o = Options::default();
        let ctx = Context::new(&buf, &o);
        let sel = Selection::point(Position::new(0, 6));
        let out = select_to_reverse(ctx, &sel, 'X', 1, true).unwrap();
        assert_eq!(out.cursor, Position::new(0, 3));
    }
}
