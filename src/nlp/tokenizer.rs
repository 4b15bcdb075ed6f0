//! Sentence and word tokenization
//!
//! Splits raw text into sentences using Unicode sentence boundaries
//! (UAX #29) and each sentence into lower-cased Unicode words. Boundaries
//! that follow a known abbreviation or a single-letter initial are joined
//! back together, so "Mr. Smith" stays in one sentence.

use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations (lower-case, without the final period) that do not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "gen", "gov", "sen", "rep", "rev", "capt", "col", "lt", "sgt", "fig",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Unicode-aware sentence tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into sentences
    ///
    /// Sentence surface text is trimmed; sentences with no words are
    /// dropped, so indices stay contiguous.
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| s.unicode_words().next().is_some())
            .enumerate()
            .map(|(index, surface)| Sentence::new(index, surface, surface.unicode_words()))
            .collect()
    }
}

/// Split on UAX #29 boundaries, skipping those right after an abbreviation
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (offset, segment) in text.split_sentence_bound_indices() {
        let end = offset + segment.len();
        if end < text.len() && ends_with_abbreviation(segment) {
            continue;
        }
        sentences.push(&text[start..end]);
        start = end;
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Whether a segment's final word is an abbreviation or an initial
fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(word) = segment.trim_end().strip_suffix('.') else {
        return false;
    };
    let last = word
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or(word);

    let mut chars = last.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase();
    }
    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let sentences = Tokenizer::new().tokenize("The cat sat. The cat slept. Dogs bark loudly.");

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "The cat sat.");
        assert_eq!(sentences[0].tokens, vec!["the", "cat", "sat"]);
        assert_eq!(sentences[2].text, "Dogs bark loudly.");
        assert_eq!(sentences[2].index, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::new().tokenize("").is_empty());
        assert!(Tokenizer::new().tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_is_not_a_token() {
        let sentences = Tokenizer::new().tokenize("Wait, what?! Really.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].tokens, vec!["wait", "what"]);
        assert_eq!(sentences[1].tokens, vec!["really"]);
    }

    #[test]
    fn test_unicode_text() {
        let sentences = Tokenizer::new().tokenize("Café culture thrives. Naïve ideas fade.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].tokens, vec!["café", "culture", "thrives"]);
    }

    #[test]
    fn test_single_sentence_without_terminator() {
        let sentences = Tokenizer::new().tokenize("no terminal punctuation here");

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "no terminal punctuation here");
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = Tokenizer::new().tokenize(
            "Mr. Smith went to Washington. He met the president. The president liked Mr. Smith.",
        );

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "Mr. Smith went to Washington.");
        assert_eq!(sentences[1].text, "He met the president.");
        assert_eq!(sentences[2].text, "The president liked Mr. Smith.");
        assert_eq!(sentences[2].index, 2);
        assert_eq!(sentences[0].tokens[0], "mr");
    }

    #[test]
    fn test_initials_do_not_split() {
        let sentences = Tokenizer::new().tokenize("J. R. Tolkien wrote books. Dr. Who did not.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "J. R. Tolkien wrote books.");
        assert_eq!(sentences[1].text, "Dr. Who did not.");
    }

    #[test]
    fn test_trailing_abbreviation_ends_text() {
        let sentences = Tokenizer::new().tokenize("Apples, pears, etc.");

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "Apples, pears, etc.");
    }
}
