//! The selection engine: pure selectors mapping `(buffer, selections) -> selections'`.
//!
//! Every selector borrows its buffer and options through [`Context`] and never
//! mutates them. No-op failures (`select_word` off a word, `select_matching`
//! with no bracket on the line, ...) return `None`; list-level operations that
//! would otherwise return an empty list report [`SelectionError`] instead.

use core_config::Options;
use core_text::Buffer;

mod argument;
mod bracket;
mod flags;
mod indent;
mod line;
mod list_ops;
mod number;
mod paragraph;
mod selection;
mod sentence;
mod surrounding;
mod to_char;
mod whitespace;
mod word;

pub use flags::ObjectFlags;
pub use selection::{ColumnTarget, Direction, Selection, SelectionList};

pub use argument::select_argument;
pub use bracket::select_matching;
pub use indent::select_indent;
pub use line::{
    select_line, select_to_first_non_blank, select_to_line_begin, select_to_line_end,
};
pub use list_ops::{
    find_next_match, select_all_matches, select_buffer, select_lines, split_selections,
    trim_partial_lines,
};
pub use number::select_number;
pub use paragraph::select_paragraph;
pub use sentence::select_sentence;
pub use surrounding::{find_closing, find_surrounding, select_surrounding};
pub use to_char::{select_to, select_to_reverse};
pub use whitespace::select_whitespace;
pub use word::{
    select_to_next_word, select_to_next_word_end, select_to_previous_word, select_word,
};

pub use core_text::WordType;

/// Errors reported by list-level operations that would otherwise return an
/// empty result. Never raised by single-selection selectors, which signal
/// "no target" with `None` instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SelectionError {
    #[error("'{pattern}': no matches found")]
    NoMatches { pattern: String },
    #[error("nothing selected")]
    NothingSelected,
    #[error("invalid capture number")]
    InvalidCapture,
}

/// Immutable context threaded through every selector: the buffer collaborator
/// plus the options collaborator (`extra_word_chars`, `tabstop`). Borrowed for
/// the duration of a single selector call and never retained.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub buffer: &'a Buffer,
    pub options: &'a Options,
}

impl<'a> Context<'a> {
    pub fn new(buffer: &'a Buffer, options: &'a Options) -> Self {
        Self { buffer, options }
    }

    pub(crate) fn extra_word_chars(&self) -> &[char] {
        &self.options.extra_word_chars
    }

    pub(crate) fn tabstop(&self) -> usize {
        self.options.tabstop.max(1)
    }
}
