//! Generic skip-while traversal over a [`utf8::Cursor`](crate::utf8::Cursor).

use crate::{Position, utf8::Cursor};

/// Advance `cursor` while `pred` holds on the current character and
/// `cursor.pos() != end`. Returns `true` iff it advanced at least once.
pub fn skip_while<F>(cursor: &mut Cursor<'_>, end: Position, mut pred: F) -> bool
where
    F: FnMut(char) -> bool,
{
    let mut moved = false;
    while cursor.pos() != end {
        match cursor.peek() {
            Some(c) if pred(c) => {
                cursor.advance();
                moved = true;
            }
            _ => break,
        }
    }
    moved
}

/// Retreat `cursor` while `pred` holds on the character immediately before it
/// and `cursor.pos() != begin`. Returns `true` iff it moved at least once.
pub fn skip_while_reverse<F>(cursor: &mut Cursor<'_>, begin: Position, mut pred: F) -> bool
where
    F: FnMut(char) -> bool,
{
    let mut moved = false;
    while cursor.pos() != begin {
        let mut probe = *cursor;
        probe.retreat();
        match probe.peek() {
            Some(c) if pred(c) => {
                cursor.retreat();
                moved = true;
            }
            _ => break,
        }
    }
    moved
}
