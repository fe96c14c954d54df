//! Function-argument text object.

use core_text::classify;
use core_text::utf8;
use core_text::Position;

use crate::Context;
use crate::flags::ObjectFlags;
use crate::selection::Selection;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ArgClass {
    Opening,
    Closing,
    Delimiter,
    None,
}

fn classify_arg(c: char) -> ArgClass {
    match c {
        '(' | '[' | '{' => ArgClass::Opening,
        ')' | ']' | '}' => ArgClass::Closing,
        ',' | ';' => ArgClass::Delimiter,
        _ => ArgClass::None,
    }
}

fn advance_one(buf: &core_text::Buffer, pos: Position) -> Position {
    let mut cur = buf.iterator_at(pos);
    utf8::next(&mut cur, buf.end());
    cur.pos()
}

fn one_before(buf: &core_text::Buffer, pos: Position) -> Position {
    let mut cur = buf.iterator_at(pos);
    utf8::previous(&mut cur, buf.begin());
    cur.pos()
}

/// The argument containing the cursor, in a `(`/`[`/`{`-delimited,
/// `,`/`;`-separated list. `INNER` trims surrounding blanks; outer selection
/// of a non-first, last argument additionally includes its leading
/// delimiter, matching the asymmetry noted for this object.
pub fn select_argument(ctx: Context, sel: &Selection, flags: ObjectFlags) -> Option<Selection> {
    let buf = ctx.buffer;
    let cursor = sel.cursor;

    // Backward scan.
    let mut back = buf.iterator_at(cursor);
    if let Some(c) = back.peek() {
        if matches!(classify_arg(c), ArgClass::Opening | ArgClass::Delimiter) {
            utf8::previous(&mut back, buf.begin());
        }
    }
    let mut level = 0i32;
    let mut is_first;
    let mut found_opening = false;
    let begin_marker;
    loop {
        let mut probe = back;
        if !utf8::previous(&mut probe, buf.begin()) {
            begin_marker = buf.begin();
            is_first = true;
            break;
        }
        let c = probe.peek()?;
        match classify_arg(c) {
            ArgClass::Closing => {
                level += 1;
                back = probe;
            }
            ArgClass::Opening => {
                if level == 0 {
                    begin_marker = probe.pos();
                    is_first = true;
                    found_opening = true;
                    break;
                }
                level -= 1;
                back = probe;
            }
            ArgClass::Delimiter => {
                if level == 0 {
                    begin_marker = probe.pos();
                    is_first = false;
                    break;
                }
                back = probe;
            }
            ArgClass::None => back = probe,
        }
    }

    // Forward scan.
    let mut fwd = buf.iterator_at(cursor);
    let mut level = 0i32;
    let is_last;
    let mut found_closing = false;
    let end_marker;
    loop {
        let Some(c) = fwd.peek() else {
            end_marker = fwd.pos();
            is_last = true;
            break;
        };
        match classify_arg(c) {
            ArgClass::Opening => {
                level += 1;
                utf8::next(&mut fwd, buf.end());
            }
            ArgClass::Closing => {
                if level == 0 {
                    end_marker = fwd.pos();
                    is_last = true;
                    found_closing = true;
                    break;
                }
                level -= 1;
                utf8::next(&mut fwd, buf.end());
            }
            ArgClass::Delimiter => {
                if level == 0 {
                    end_marker = fwd.pos();
                    is_last = false;
                    break;
                }
                utf8::next(&mut fwd, buf.end());
            }
            ArgClass::None => {
                utf8::next(&mut fwd, buf.end());
            }
        }
    }

    let mut begin_content = if is_first {
        if found_opening {
            advance_one(buf, begin_marker)
        } else {
            begin_marker
        }
    } else {
        advance_one(buf, begin_marker)
    };
    let mut end_content = if is_last {
        if found_closing {
            one_before(buf, end_marker)
        } else {
            buf.back_coord()
        }
    } else {
        one_before(buf, end_marker)
    };

    if flags.contains(ObjectFlags::INNER) {
        let mut b = buf.iterator_at(begin_content);
        while b.pos() < end_content {
            match b.peek() {
                Some(c) if classify::is_blank(c) => {
                    utf8::next(&mut b, buf.end());
                }
                _ => break,
            }
        }
        begin_content = b.pos();

        let mut e = buf.iterator_at(end_content);
        while e.pos() > begin_content {
            match e.peek() {
                Some(c) if classify::is_blank(c) => {
                    utf8::previous(&mut e, buf.begin());
                }
                _ => break,
            }
        }
        end_content = e.pos();
    } else if !is_first && is_last {
        begin_content = begin_marker;
    }

    Some(Selection::new(begin_content, end_content))
}
