//! Matching-bracket jump.

use core_text::utf8;

use crate::Context;
use crate::selection::Selection;

const PAIRS: [(char, char); 4] = [('(', ')'), ('{', '}'), ('[', ']'), ('<', '>')];

fn opener_for(c: char) -> Option<(char, char)> {
    PAIRS.into_iter().find(|&(o, _)| o == c)
}

fn closer_for(c: char) -> Option<(char, char)> {
    PAIRS.into_iter().find(|&(_, cl)| cl == c)
}

/// Scan forward from the cursor within its current line for a bracket
/// character, then jump to its match, counting nesting. Fails if no bracket
/// is found on the line, or if the buffer ends before balance is reached.
pub fn select_matching(ctx: Context, sel: &Selection) -> Option<Selection> {
    let buf = ctx.buffer;
    let line = sel.cursor.line;
    let line_end = core_text::Position::new(line, buf.content_len(line));
    let mut cur = buf.iterator_at(sel.cursor);
    let start = loop {
        if cur.pos() > line_end {
            return None;
        }
        let c = cur.peek()?;
        if opener_for(c).is_some() || closer_for(c).is_some() {
            break cur.pos();
        }
        if !utf8::next(&mut cur, buf.end()) {
            return None;
        }
    };
    let c = buf.char_at(start);
    if let Some((open, close)) = opener_for(c) {
        let mut level = 1i32;
        let mut scan = buf.iterator_at(start);
        loop {
            if !utf8::next(&mut scan, buf.end()) {
                return None;
            }
            let ch = scan.peek()?;
            if ch == open {
                level += 1;
            } else if ch == close {
                level -= 1;
                if level == 0 {
                    return Some(Selection::new(start, scan.pos()));
                }
            }
        }
    } else {
        let (open, close) = closer_for(c)?;
        let mut level = 1i32;
        let mut scan = buf.iterator_at(start);
        loop {
            if !utf8::previous(&mut scan, buf.begin()) {
                return None;
            }
            let ch = scan.peek()?;
            if ch == close {
                level += 1;
            } else if ch == open {
                level -= 1;
                if level == 0 {
                    return Some(Selection::new(start, scan.pos()));
                }
            }
        }
    }
}
