//! Rope-based text buffer abstraction: the selection engine's buffer collaborator.
//!
//! `Buffer` guarantees that its content always ends with `\n`, so a line's byte
//! length always includes a trailing newline and `column ∈ [0, line_len)` is a
//! valid coordinate on every existing line. The engine itself never mutates a
//! buffer; this crate exposes only read access plus the codepoint-level
//! traversal primitives (`utf8`, `classify`, `traversal`) the selector layer
//! builds on.

use anyhow::Result;
use ropey::Rope;

pub mod classify;
pub mod traversal;
pub mod utf8;

pub use classify::WordType;

/// A text buffer backed by a `ropey::Rope`. Read-only from the selection engine's
/// point of view: nothing in this crate or `core-selection` mutates the rope.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
    pub name: String,
}

/// A position inside a buffer expressed as (line index, byte offset within that
/// line). Line and byte are on UTF-8 character boundaries whenever produced by
/// this crate's own APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub const fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }

    pub const fn origin() -> Self {
        Self { line: 0, byte: 0 }
    }
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice. A trailing `\n` is
    /// appended if absent, so the buffer always satisfies the "last line ends
    /// with `\n`" invariant the rest of the engine relies on.
    pub fn from_str(name: impl Into<String>, content: &str) -> Result<Self> {
        let rope = if content.is_empty() || content.ends_with('\n') {
            Rope::from_str(content)
        } else {
            let mut owned = content.to_string();
            owned.push('\n');
            Rope::from_str(&owned)
        };
        Ok(Self {
            rope,
            name: name.into(),
        })
    }

    /// Total number of lines in the buffer (always ≥ 1).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    /// Return the requested line as an owned `String`, including its trailing `\n`.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx < self.rope.len_lines() {
            Some(self.rope.line(idx).to_string())
        } else {
            None
        }
    }

    /// Byte length of line `idx` including its trailing `\n`.
    pub fn line_len(&self, idx: usize) -> usize {
        self.line(idx).map(|l| l.len()).unwrap_or(0)
    }

    /// Byte length of line `idx` excluding its trailing `\n`.
    pub fn content_len(&self, idx: usize) -> usize {
        self.line_len(idx).saturating_sub(1)
    }

    /// Coordinate of the first byte of the buffer.
    pub fn begin(&self) -> Position {
        Position::origin()
    }

    /// Sentinel coordinate one past the last line. Never a valid `byte_at`/`char_at`
    /// target; used only for comparisons and as an iteration bound.
    pub fn end(&self) -> Position {
        Position::new(self.line_count(), 0)
    }

    /// Coordinate of the last byte in the buffer (the final line's trailing `\n`).
    pub fn back_coord(&self) -> Position {
        let last = self.line_count() - 1;
        Position::new(last, self.content_len(last))
    }

    /// Coordinate of the first byte of line `line`.
    pub fn iterator_at_line(&self, line: usize) -> utf8::Cursor<'_> {
        utf8::Cursor::new(self, Position::new(line, 0))
    }

    /// A codepoint cursor positioned at `pos`.
    pub fn iterator_at(&self, pos: Position) -> utf8::Cursor<'_> {
        utf8::Cursor::new(self, pos)
    }

    /// Clamp a coordinate so it refers to an existing line and a byte offset
    /// within that line's bounds (inclusive of the trailing `\n` slot).
    pub fn clamp(&self, mut pos: Position) -> Position {
        let last = self.line_count() - 1;
        if pos.line > last {
            pos.line = last;
        }
        let len = self.line_len(pos.line);
        if pos.byte > len {
            pos.byte = len;
        }
        pos
    }

    /// Raw byte at `pos`. Asserts in debug builds that `pos` is in range.
    pub fn byte_at(&self, pos: Position) -> u8 {
        let line = self.line(pos.line).unwrap_or_default();
        debug_assert!(pos.byte < line.len(), "byte_at out of range: {pos:?}");
        line.as_bytes().get(pos.byte).copied().unwrap_or(b'\n')
    }

    /// Decode the full codepoint starting at `pos`.
    pub fn char_at(&self, pos: Position) -> char {
        let line = self.line(pos.line).unwrap_or_default();
        debug_assert!(pos.byte < line.len(), "char_at out of range: {pos:?}");
        line[pos.byte..].chars().next().unwrap_or('\n')
    }

    /// Absolute byte offset of `pos` within the whole buffer. Delegates to the
    /// rope's own line index rather than summing line lengths.
    pub fn absolute_byte(&self, pos: Position) -> usize {
        let line = pos.line.min(self.rope.len_lines());
        self.rope.line_to_byte(line) + pos.byte
    }

    /// Inverse of [`absolute_byte`](Self::absolute_byte).
    pub fn position_at_absolute(&self, abs: usize) -> Position {
        let abs = abs.min(self.rope.len_bytes());
        let line = self.rope.byte_to_line(abs);
        let line_start = self.rope.line_to_byte(line);
        Position::new(line, abs - line_start)
    }

    /// The UTF-8 slice spanning the half-open absolute range `[begin, end)`.
    pub fn string(&self, begin: Position, end: Position) -> String {
        let a = self.absolute_byte(begin).min(self.rope.len_bytes());
        let b = self.absolute_byte(end).min(self.rope.len_bytes());
        if a >= b {
            return String::new();
        }
        let start_char = self.rope.byte_to_char(a);
        let end_char = self.rope.byte_to_char(b);
        self.rope.slice(start_char..end_char).to_string()
    }
}
