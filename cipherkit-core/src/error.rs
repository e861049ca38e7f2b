//! Error types for the cipher engine.

use thiserror::Error;

/// Reasons a candidate keyword fails validation.
///
/// The checks run in a fixed order (length, case, alphabet, recurrence,
/// excess), so a candidate breaking several rules reports the first check
/// that failed.
#[derive(Debug, Error)]
pub enum KeywordError {
    /// The candidate is shorter than five or longer than ten characters.
    #[error("the keyword must be five to ten letters, got {0}")]
    Length(usize),

    /// The candidate contains a lowercase letter.
    #[error("every letter in the keyword must be uppercase")]
    NotUppercase,

    /// The candidate contains a character outside A-Z.
    #[error("the keyword must only contain the letters A through Z")]
    NotAlphabetic,

    /// No letter occurs more than once.
    #[error("the keyword must have at least one recurring letter")]
    NoRecurringLetter,

    /// Some letter occurs more than three times.
    #[error("no keyword letter may occur more than three times")]
    TooManyRecurrences,
}

/// A ciphertext line whose length cannot be laid out under the keyword.
///
/// Raised by transposition decode when a column runs dry during replay, or
/// when characters remain after every column budget is spent. Decode has no
/// ambiguity-resolution strategy, so the line is rejected as a whole.
#[derive(Debug, Error)]
#[error("ciphertext of {length} characters does not lay out under a {keyword_len}-letter keyword")]
pub struct MalformedCiphertext {
    /// Characters in the rejected line.
    pub length: usize,
    /// Letters in the keyword the decode ran under.
    pub keyword_len: usize,
}

/// Popped a column that holds no characters.
///
/// Indicates a bookkeeping bug in the caller: the encode and decode loops
/// pop exactly as many characters as they insert.
#[derive(Debug, Error)]
#[error("column {rank} holds no characters")]
pub struct EmptyColumn {
    /// Rank of the empty column.
    pub rank: usize,
}
