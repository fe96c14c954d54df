//! Character classifiers shared by every selector.
//!
//! `extra_word_chars` lets the options collaborator widen what counts as a word
//! character (e.g. treating `-` as part of a word in kebab-case-heavy files)
//! without the classifier needing to know where that list came from.

/// Which word regime a word-aware selector is operating under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordType {
    /// Letters, digits, `_`, and configured extras form words; everything else
    /// non-whitespace is punctuation.
    Word,
    /// Any maximal run of non-whitespace is a single "big word" token.
    Big,
}

/// Coarse class of a single codepoint, used to detect "class changed" boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharCategory {
    Word,
    Punctuation,
    Whitespace,
}

pub fn is_eol(c: char) -> bool {
    c == '\n'
}

pub fn is_horizontal_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_blank(c: char) -> bool {
    is_horizontal_blank(c) || is_eol(c)
}

pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Is `c` a word character under `wt`, given the configured `extra` codepoints?
pub fn is_word(c: char, wt: WordType, extra: &[char]) -> bool {
    match wt {
        WordType::Word => c.is_alphanumeric() || c == '_' || extra.contains(&c),
        WordType::Big => !c.is_whitespace(),
    }
}

/// Classify `c` into word / punctuation / whitespace under `wt`.
pub fn categorize(c: char, wt: WordType, extra: &[char]) -> CharCategory {
    if c.is_whitespace() {
        CharCategory::Whitespace
    } else if is_word(c, wt, extra) {
        CharCategory::Word
    } else {
        CharCategory::Punctuation
    }
}
