//! The two stage pipeline: shift substitution composed with keyed
//! transposition.
//!
//! Both stages read the same keyword. The shift normalizes and rotates,
//! the transposition reorders; deciphering runs the inverse stages.

use crate::{error::MalformedCiphertext, keyword::Keyword, shift, transpose};

/// Enciphers one line: shift first, then transposition.
///
/// Non-letters are dropped and letters are folded to uppercase, so the
/// output length equals the count of ASCII letters in `line`.
#[must_use]
pub fn encipher_line(line: &str, keyword: &Keyword) -> String {
    transpose::encode(&shift::encode(line, keyword), keyword)
}

/// Deciphers one line of [`encipher_line`] output.
///
/// The shift moves every letter by the same amount wherever it sits, so
/// the inverse stages commute; this runs the inverse shift first and the
/// inverse transposition second.
///
/// # Errors
/// Returns [`MalformedCiphertext`] when the surviving characters cannot
/// be laid back out under the keyword's column sizes.
pub fn decipher_line(line: &str, keyword: &Keyword) -> Result<String, MalformedCiphertext> {
    transpose::decode(&shift::decode(line, keyword), keyword)
}
