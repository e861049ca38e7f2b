use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeywordError;

/// Letters the shift stage counts as vowels.
const VOWELS: &[u8] = b"AEIOU";

/// A validated cipher keyword: the single shared key of both cipher stages.
///
/// A keyword is five to ten uppercase letters A-Z with at least one letter
/// occurring twice or three times and no letter occurring more than three
/// times. The recurrence rules exist for the transposition stage: recurring
/// letters are what make several keyword positions share one column, and a
/// letter repeated four or more times would collapse too much of the
/// column structure.
///
/// Construction is the validation. A `Keyword` value always satisfies the
/// rules, so the engine entry points take it by reference and never
/// re-check; untrusted strings go through [`Keyword::parse`] (or `FromStr`,
/// or deserialization, both of which route through it).
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    /// Validates `candidate` and wraps it.
    ///
    /// Checks run in a fixed order: length, case, alphabet, recurrence,
    /// excess recurrence. The first failing check is reported.
    ///
    /// # Errors
    /// Returns the [`KeywordError`] variant for the first rule `candidate`
    /// breaks.
    pub fn parse(candidate: &str) -> Result<Self, KeywordError> {
        let length = candidate.chars().count();
        if !(5..=10).contains(&length) {
            return Err(KeywordError::Length(length));
        }
        if candidate.chars().any(char::is_lowercase) {
            return Err(KeywordError::NotUppercase);
        }
        if !candidate.bytes().all(|letter| letter.is_ascii_uppercase()) {
            return Err(KeywordError::NotAlphabetic);
        }

        let frequencies = letter_frequencies(candidate);
        if !frequencies.iter().any(|&count| count >= 2) {
            return Err(KeywordError::NoRecurringLetter);
        }
        if frequencies.iter().any(|&count| count > 3) {
            return Err(KeywordError::TooManyRecurrences);
        }

        Ok(Self(candidate.to_owned()))
    }

    /// The keyword as an uppercase string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters in the keyword.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.len()
    }

    /// Number of keyword letters in {A, E, I, O, U}.
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.0.bytes().filter(|letter| VOWELS.contains(letter)).count()
    }

    /// Number of keyword letters outside {A, E, I, O, U}.
    #[must_use]
    pub fn consonant_count(&self) -> usize {
        self.letter_count() - self.vowel_count()
    }

    /// Number of distinct letters in the keyword.
    ///
    /// Column ranks are dense: every rank in `0..distinct_letters()` names
    /// exactly one column.
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        letter_frequencies(&self.0)
            .iter()
            .filter(|&&count| count > 0)
            .count()
    }

    /// The column rank of each keyword letter, in keyword order.
    ///
    /// Each distinct letter receives a dense rank assigned in alphabetical
    /// order of the letters themselves, so recurring letters share one
    /// rank. Position `i` of the returned sequence is the column of every
    /// `(i mod letter_count)`-th surviving character of a line.
    #[must_use]
    pub fn rank_sequence(&self) -> Vec<usize> {
        let frequencies = letter_frequencies(&self.0);
        let mut ranks = [0usize; 26];
        let mut next_rank = 0;
        for (letter, &count) in frequencies.iter().enumerate() {
            if count > 0 {
                ranks[letter] = next_rank;
                next_rank += 1;
            }
        }
        self.0
            .bytes()
            .map(|letter| ranks[usize::from(letter - b'A')])
            .collect()
    }
}

/// Whether `candidate` satisfies every keyword rule.
#[must_use]
pub fn is_valid_keyword(candidate: &str) -> bool {
    Keyword::parse(candidate).is_ok()
}

/// Per-letter occurrence counts over A-Z. Callers guarantee `keyword` is
/// uppercase ASCII.
fn letter_frequencies(keyword: &str) -> [u8; 26] {
    let mut frequencies = [0u8; 26];
    for letter in keyword.bytes() {
        frequencies[usize::from(letter - b'A')] += 1;
    }
    frequencies
}

impl FromStr for Keyword {
    type Err = KeywordError;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        Self::parse(candidate)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Keyword {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Keyword {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let candidate = String::deserialize(deserializer)?;
        Self::parse(&candidate).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("BALLOON")]
    #[test_case("SECRETS")]
    #[test_case("AABBC"; "shortest allowed length")]
    #[test_case("AABCDEFGHI"; "longest allowed length")]
    #[test_case("AAABBB"; "recurrence of exactly three")]
    fn accepts_valid_keywords(candidate: &str) {
        assert!(is_valid_keyword(candidate));
        assert_eq!(Keyword::parse(candidate).unwrap().as_str(), candidate);
    }

    #[test_case("AB" => matches Err(KeywordError::Length(2)); "too short")]
    #[test_case("ABCDEFGHIJK" => matches Err(KeywordError::Length(11)); "too long")]
    #[test_case("" => matches Err(KeywordError::Length(0)); "empty")]
    #[test_case("abcde" => matches Err(KeywordError::NotUppercase); "lowercase")]
    #[test_case("BALLOoN" => matches Err(KeywordError::NotUppercase); "mixed case")]
    #[test_case("ABCD3" => matches Err(KeywordError::NotAlphabetic); "digit")]
    #[test_case("AB CDE" => matches Err(KeywordError::NotAlphabetic); "space")]
    #[test_case("ABCDE" => matches Err(KeywordError::NoRecurringLetter); "all distinct")]
    #[test_case("AAAAB" => matches Err(KeywordError::TooManyRecurrences); "letter four times")]
    fn rejects_invalid_keywords(candidate: &str) -> Result<Keyword, KeywordError> {
        Keyword::parse(candidate)
    }

    #[test]
    fn digit_reports_alphabet_not_case() {
        // A digit is not lowercase, so the case check passes and the
        // alphabet check is the one that fires.
        assert!(matches!(
            Keyword::parse("1BCDE"),
            Err(KeywordError::NotAlphabetic)
        ));
    }

    #[test]
    fn derives_dense_alphabetical_ranks() {
        let keyword = Keyword::parse("BALLOON").unwrap();
        // A=0, B=1, L=2, N=3, O=4
        assert_eq!(keyword.distinct_letters(), 5);
        assert_eq!(keyword.rank_sequence(), vec![1, 0, 2, 2, 4, 4, 3]);
    }

    #[test]
    fn recurring_letters_share_one_rank() {
        let keyword = Keyword::parse("SECRETS").unwrap();
        // C=0, E=1, R=2, S=3, T=4
        assert_eq!(keyword.distinct_letters(), 5);
        assert_eq!(keyword.rank_sequence(), vec![3, 1, 0, 2, 1, 4, 3]);
    }

    #[test]
    fn counts_vowels_and_consonants() {
        let balloon = Keyword::parse("BALLOON").unwrap();
        assert_eq!(balloon.vowel_count(), 3);
        assert_eq!(balloon.consonant_count(), 4);

        // Y counts as a consonant.
        let rhythm = Keyword::parse("RHYTHM").unwrap();
        assert_eq!(rhythm.vowel_count(), 0);
        assert_eq!(rhythm.consonant_count(), 6);
    }

    #[test]
    fn parses_through_fromstr_and_displays_verbatim() {
        let keyword: Keyword = "BALLOON".parse().unwrap();
        assert_eq!(keyword.to_string(), "BALLOON");
        assert_eq!(keyword.letter_count(), 7);
    }

    #[test]
    fn serde_uses_the_string_form_and_validates() {
        let keyword = Keyword::parse("BALLOON").unwrap();
        assert_eq!(serde_json::to_string(&keyword).unwrap(), "\"BALLOON\"");

        let parsed: Keyword = serde_json::from_str("\"SECRETS\"").unwrap();
        assert_eq!(parsed.as_str(), "SECRETS");

        assert!(serde_json::from_str::<Keyword>("\"abcde\"").is_err());
    }
}
