//! The substitution stage: a fixed alphabet shift derived from the keyword.
//!
//! The shift amount is `(vowels * consonants) mod 26` over the keyword
//! letters. Surviving characters are folded to uppercase, so this stage
//! also performs the pipeline's case normalization; non-letters are
//! dropped outright. The substitution is position-independent, which lets
//! the pipeline run it before the transposition stage in both directions.

use crate::keyword::Keyword;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Applies the forward shift to `line`.
///
/// Non-ASCII-alphabetic characters are dropped; lowercase letters are
/// folded to uppercase before shifting. The output is uppercase letters
/// only, in input order, at most as long as the input.
#[must_use]
pub fn encode(line: &str, keyword: &Keyword) -> String {
    transform(line, shift_amount(keyword))
}

/// Applies the inverse shift to `line`.
///
/// Same dropping and folding rules as [`encode`]; decoding a character
/// that [`encode`] produced returns the original uppercase letter.
#[must_use]
pub fn decode(line: &str, keyword: &Keyword) -> String {
    transform(line, 26 - shift_amount(keyword))
}

fn shift_amount(keyword: &Keyword) -> usize {
    (keyword.vowel_count() * keyword.consonant_count()) % 26
}

fn transform(line: &str, offset: usize) -> String {
    let mut output = String::with_capacity(line.len());
    for byte in line.bytes() {
        if byte.is_ascii_alphabetic() {
            let letter = usize::from(byte.to_ascii_uppercase() - b'A');
            output.push(char::from(ALPHABET[(letter + offset) % 26]));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_by_vowels_times_consonants() {
        // BALLOON: 3 vowels * 4 consonants = shift 12.
        let keyword = Keyword::parse("BALLOON").unwrap();
        assert_eq!(encode("ABC", &keyword), "MNO");
        assert_eq!(encode("HELLOWORLD", &keyword), "TQXXAIADXP");
    }

    #[test]
    fn wraps_around_the_alphabet() {
        let keyword = Keyword::parse("BALLOON").unwrap();
        assert_eq!(encode("OZ", &keyword), "AL");
        assert_eq!(decode("AL", &keyword), "OZ");
    }

    #[test]
    fn decode_inverts_encode_for_every_letter() {
        let keyword = Keyword::parse("SECRETS").unwrap();
        let alphabet: String = ('A'..='Z').collect();
        assert_eq!(decode(&encode(&alphabet, &keyword), &keyword), alphabet);
    }

    #[test]
    fn drops_non_letters_and_folds_case() {
        let keyword = Keyword::parse("BALLOON").unwrap();
        assert_eq!(
            encode("Hello, World 123!", &keyword),
            encode("HELLOWORLD", &keyword)
        );
        assert_eq!(encode("...", &keyword), "");
        assert_eq!(encode("", &keyword), "");
    }

    #[test]
    fn zero_shift_keyword_still_normalizes() {
        // RHYTHM has no vowels, so the offset is zero.
        let keyword = Keyword::parse("RHYTHM").unwrap();
        assert_eq!(encode("abc xyz", &keyword), "ABCXYZ");
        assert_eq!(decode("ABCXYZ", &keyword), "ABCXYZ");
    }
}
