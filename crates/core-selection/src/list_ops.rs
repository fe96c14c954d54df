//! List-level selection operations and regex integration.

use core_text::Position;
use core_text::utf8;
use regex::Regex;
use tracing::{debug, trace};

use crate::selection::{Direction, Selection, SelectionList};
use crate::{Context, SelectionError};

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

/// Expand every selection to whole-line coverage, direction preserved,
/// cursor sticky to end of line.
pub fn select_lines(ctx: Context, list: &SelectionList) -> SelectionList {
    let buf = ctx.buffer;
    let expanded: Vec<Selection> = list
        .iter()
        .map(|sel| {
            let min = sel.min();
            let max = sel.max();
            let begin = Position::new(min.line, 0);
            let end = Position::new(max.line, buf.content_len(max.line).saturating_sub(1));
            Selection::with_direction(begin, end, sel.direction()).target_eol()
        })
        .collect();
    SelectionList::new(expanded, list.main_index())
}

/// Inverse of [`select_lines`]: pull each selection's endpoints in to whole
/// lines, dropping any selection that has no whole line left inside it.
pub fn trim_partial_lines(
    ctx: Context,
    list: &SelectionList,
) -> Result<SelectionList, SelectionError> {
    let buf = ctx.buffer;
    let mut out = Vec::new();
    let mut main = 0usize;
    for (idx, sel) in list.iter().enumerate() {
        let min = sel.min();
        let max = sel.max();
        let begin = if min.byte == 0 {
            min
        } else if min.line + 1 < buf.line_count() {
            Position::new(min.line + 1, 0)
        } else {
            continue;
        };
        let at_line_end = max.byte + 1 >= buf.content_len(max.line) || buf.content_len(max.line) == 0;
        let end = if at_line_end {
            max
        } else if max.line > 0 {
            Position::new(max.line - 1, buf.content_len(max.line - 1).saturating_sub(1))
        } else {
            continue;
        };
        if begin > end {
            continue;
        }
        if idx == list.main_index() {
            main = out.len();
        }
        out.push(Selection::with_direction(begin, end, sel.direction()).target_eol());
    }
    if out.is_empty() {
        return Err(SelectionError::NothingSelected);
    }
    Ok(SelectionList::new(out, main))
}

/// Replace the list with a single selection covering the whole buffer.
pub fn select_buffer(ctx: Context) -> SelectionList {
    let buf = ctx.buffer;
    SelectionList::single(Selection::new(buf.begin(), buf.back_coord()))
}

/// For each input selection, enumerate every match of `regex` within
/// `[min, max+1codepoint)` and emit a selection per match (or per the
/// `capture`-th group). All capture strings are copied onto each resulting
/// selection.
pub fn select_all_matches(
    ctx: Context,
    list: &SelectionList,
    regex: &Regex,
    capture: usize,
) -> Result<SelectionList, SelectionError> {
    if capture >= regex.captures_len() {
        return Err(SelectionError::InvalidCapture);
    }
    let buf = ctx.buffer;
    let mut out = Vec::new();
    for sel in list.iter() {
        let min = sel.min();
        let window_end = advance_one(buf, sel.max());
        let text = buf.string(min, window_end);
        let base = buf.absolute_byte(min);
        for caps in regex.captures_iter(&text) {
            let Some(m) = caps.get(capture) else {
                continue;
            };
            let start = buf.position_at_absolute(base + m.start());
            let end = buf.position_at_absolute(base + m.end());
            let captures: Vec<String> = (0..caps.len())
                .map(|i| caps.get(i).map(|g| g.as_str().to_string()).unwrap_or_default())
                .collect();
            out.push(Selection::new(start, one_before(buf, end)).with_captures(captures));
        }
    }
    if out.is_empty() {
        return Err(SelectionError::NothingSelected);
    }
    trace!(count = out.len(), "select_all_matches");
    Ok(SelectionList::new(out, 0))
}

/// For each input selection, enumerate matches as in [`select_all_matches`]
/// but emit the gaps between matches rather than the matches themselves. A
/// zero-width gap between two adjacent matches is emitted as a degenerate
/// point selection (`anchor == cursor`) at the boundary between them, since
/// this selection model has no narrower representation for an empty span.
pub fn split_selections(
    ctx: Context,
    list: &SelectionList,
    regex: &Regex,
    capture: usize,
) -> Result<SelectionList, SelectionError> {
    if capture >= regex.captures_len() {
        return Err(SelectionError::InvalidCapture);
    }
    let buf = ctx.buffer;
    let mut out = Vec::new();
    for sel in list.iter() {
        let min = sel.min();
        let window_end = advance_one(buf, sel.max());
        let text = buf.string(min, window_end);
        let base = buf.absolute_byte(min);
        let mut last_end = 0usize;
        let mut any = false;
        for caps in regex.captures_iter(&text) {
            let Some(m) = caps.get(capture) else {
                continue;
            };
            any = true;
            if m.start() >= last_end {
                let s = buf.position_at_absolute(base + last_end);
                if m.start() > last_end {
                    let e = buf.position_at_absolute(base + m.start());
                    out.push(Selection::with_direction(s, one_before(buf, e), sel.direction()));
                } else {
                    out.push(Selection::with_direction(s, s, sel.direction()));
                }
            }
            last_end = m.end();
        }
        if last_end < text.len() {
            let s = buf.position_at_absolute(base + last_end);
            out.push(Selection::with_direction(s, sel.max(), sel.direction()));
        } else if !any {
            out.push(sel.clone());
        }
    }
    if out.is_empty() {
        return Err(SelectionError::NothingSelected);
    }
    Ok(SelectionList::new(out, 0))
}

fn search_forward(buf: &core_text::Buffer, regex: &Regex, from: Position, to: Position) -> Option<Selection> {
    if from >= to {
        return None;
    }
    let text = buf.string(from, to);
    let base = buf.absolute_byte(from);
    let m = regex.find(&text)?;
    let s = buf.position_at_absolute(base + m.start());
    let e = buf.position_at_absolute(base + m.end());
    Some(Selection::new(s, one_before(buf, e)))
}

fn search_backward(buf: &core_text::Buffer, regex: &Regex, from: Position, to: Position) -> Option<Selection> {
    if from >= to {
        return None;
    }
    let text = buf.string(from, to);
    let base = buf.absolute_byte(from);
    let m = regex.find_iter(&text).last()?;
    let s = buf.position_at_absolute(base + m.start());
    let e = buf.position_at_absolute(base + m.end());
    Some(Selection::new(s, one_before(buf, e)))
}

/// Search for the next (or, with `dir = Backward`, previous) regex match
/// relative to `sel`. Wraps around the buffer when no match is found before
/// reaching the relevant end, setting `*wrapped`.
pub fn find_next_match(
    ctx: Context,
    sel: &Selection,
    regex: &Regex,
    dir: Direction,
    wrapped: &mut bool,
) -> Result<Selection, SelectionError> {
    *wrapped = false;
    let buf = ctx.buffer;
    let no_matches = || SelectionError::NoMatches {
        pattern: regex.as_str().to_string(),
    };
    match dir {
        Direction::Forward => {
            let start = advance_one(buf, sel.max());
            if let Some(found) = search_forward(buf, regex, start, buf.end()) {
                return Ok(found);
            }
            *wrapped = true;
            debug!(pattern = regex.as_str(), "find_next_match_wrapped");
            search_forward(buf, regex, buf.begin(), start).ok_or_else(no_matches)
        }
        Direction::Backward => {
            let end = sel.min();
            if let Some(found) = search_backward(buf, regex, buf.begin(), end) {
                return Ok(found);
            }
            *wrapped = true;
            debug!(pattern = regex.as_str(), "find_next_match_wrapped");
            search_backward(buf, regex, end, buf.end()).ok_or_else(no_matches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::Options;
    use core_text::Buffer;

    fn ctx_for<'a>(buf: &'a Buffer, opts: &'a Options) -> Context<'a> {
        Context::new(buf, opts)
    }

    #[test]
    fn select_lines_expands_to_whole_line() {
        let buf = Buffer::from_str("t", "abc\ndef\n").unwrap();
        let o = Options::default();
        let ctx = ctx_for(&buf, &o);
        let list = SelectionList::single(Selection::point(Position::new(0, 1)));
        let out = select_lines(ctx, &list);
        assert_eq!(out.main().min(), Position::new(0, 0));
        assert_eq!(out.main().max(), Position::new(0, 2));
    }

    #[test]
    fn select_lines_then_trim_is_identity() {
        let buf = Buffer::from_str("t", "abc\ndef\n").unwrap();
        let o = Options::default();
        let ctx = ctx_for(&buf, &o);
        let list = SelectionList::single(Selection::point(Position::new(0, 1)));
        let lines = select_lines(ctx, &list);
        let trimmed = trim_partial_lines(ctx, &lines).unwrap();
        assert_eq!(trimmed.main().min(), lines.main().min());
        assert_eq!(trimmed.main().max(), lines.main().max());
    }

    #[test]
    fn split_selections_on_repeated_delimiter() {
        let buf = Buffer::from_str("t", "a,b,,c\n").unwrap();
        let o = Options::default();
        let ctx = ctx_for(&buf, &o);
        let re = Regex::new(",").unwrap();
        let list = SelectionList::single(Selection::new(Position::new(0, 0), Position::new(0, 5)));
        let out = split_selections(ctx, &list, &re, 0).unwrap();
        assert_eq!(out.len(), 4);
        let texts: Vec<String> = out
            .iter()
            .filter(|s| s.min() != s.max())
            .map(|s| buf.string(s.min(), Position::new(s.max().line, s.max().byte + 1)))
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        let gap = out.iter().find(|s| s.min() == s.max()).unwrap();
        assert_eq!(gap.min(), Position::new(0, 4));
    }

    #[test]
    fn find_next_match_wraps_to_buffer_start() {
        let buf = Buffer::from_str("t", "abc\nabc\n").unwrap();
        let o = Options::default();
        let ctx = ctx_for(&buf, &o);
        let re = Regex::new("abc").unwrap();
        let sel = Selection::new(Position::new(1, 0), Position::new(1, 2));
        let mut wrapped = false;
        let out = find_next_match(ctx, &sel, &re, Direction::Forward, &mut wrapped).unwrap();
        assert!(wrapped);
        assert_eq!(out.min(), Position::new(0, 0));
    }

    #[test]
    fn select_all_matches_errors_when_empty() {
        let buf = Buffer::from_str("t", "abc\n").unwrap();
        let o = Options::default();
        let ctx = ctx_for(&buf, &o);
        let re = Regex::new("zzz").unwrap();
        let list = SelectionList::single(Selection::new(Position::new(0, 0), Position::new(0, 2)));
        let err = select_all_matches(ctx, &list, &re, 0).unwrap_err();
        assert_eq!(err, SelectionError::NothingSelected);
    }
}
