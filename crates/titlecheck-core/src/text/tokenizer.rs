//! # Basic English Tokenizer
//!
//! Splits book titles into lower-cased word tokens for the classifier.
//! Whitespace, semicolons, colons and `<br />` separate tokens and are
//! dropped. Double quotes are deleted without splitting, so `Don"t` is the
//! single token `dont`. Apostrophes and sentence punctuation become tokens
//! of their own.

use regex::Regex;

use crate::error::Result;

/// A token extracted from a title with positional information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The normalized (lower-cased) token text
    pub text: String,
    /// Start byte position in the original string
    pub start: usize,
    /// End byte position in the original string
    pub end: usize,
    /// Token index in the sequence
    pub index: usize,
}

/// Characters that are split off as standalone tokens.
const PUNCTUATION: &[char] = &['\'', '.', ',', '(', ')', '!', '?'];

/// Tokenizer for book titles.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    re_boundary: Regex,
}

impl Tokenizer {
    /// Create a new tokenizer instance.
    ///
    /// # Errors
    ///
    /// Returns `TitleCheckError::RegexError` if the boundary pattern fails to
    /// compile (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_boundary: Regex::new(r"(?i)<br />|[\s;:]+|['.,()!?]")?,
        })
    }

    /// Tokenize a title into a sequence of tokens.
    ///
    /// # Examples
    /// ```
    /// use titlecheck_core::text::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new().unwrap();
    /// let tokens = tokenizer.tokenize("The Hobbit");
    /// assert_eq!(tokens[0].text, "the");
    /// assert_eq!(tokens[1].text, "hobbit");
    /// ```
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_start = 0;

        for boundary in self.re_boundary.find_iter(input) {
            if boundary.start() > current_start {
                Self::push(&mut tokens, input, current_start, boundary.start());
            }

            let text = boundary.as_str();
            if text.len() == 1 && text.starts_with(PUNCTUATION) {
                Self::push(&mut tokens, input, boundary.start(), boundary.end());
            }
            current_start = boundary.end();
        }

        // Emit final token if non-empty
        if current_start < input.len() {
            Self::push(&mut tokens, input, current_start, input.len());
        }

        tokens
    }

    /// Tokenize and keep only the normalized token texts.
    pub fn tokenize_words(&self, input: &str) -> Vec<String> {
        self.tokenize(input).into_iter().map(|t| t.text).collect()
    }

    /// A span made only of double quotes yields no token.
    fn push(tokens: &mut Vec<Token>, input: &str, start: usize, end: usize) {
        let text = input[start..end].replace('"', "").to_lowercase();
        if text.is_empty() {
            return;
        }
        tokens.push(Token {
            text,
            start,
            end,
            index: tokens.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        Tokenizer::new().unwrap().tokenize_words(input)
    }

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("The Hobbit");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "the");
        assert_eq!(tokens[1].text, "hobbit");
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].end, 10);
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn test_punctuation_becomes_tokens() {
        assert_eq!(
            words("Ender's Game, Vol. 1 (Revised)!"),
            vec!["ender", "'", "s", "game", ",", "vol", ".", "1", "(", "revised", ")", "!"]
        );
    }

    #[test]
    fn test_separators_are_dropped() {
        assert_eq!(
            words("Banana: A \"Memoir\"; Part Two"),
            vec!["banana", "a", "memoir", "part", "two"]
        );
    }

    #[test]
    fn test_double_quotes_are_deleted_inside_words() {
        assert_eq!(words("Don\"t Panic"), vec!["dont", "panic"]);

        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("\" \"Dune\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "dune");
        assert_eq!(tokens[0].index, 0);
        assert_eq!((tokens[0].start, tokens[0].end), (2, 8));
    }

    #[test]
    fn test_line_break_is_separator() {
        assert_eq!(words("Dune<br />Messiah"), vec!["dune", "messiah"]);
        assert_eq!(words("Dune<BR />Messiah"), vec!["dune", "messiah"]);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(words("  Tales \t of\n a   Yeti  "), vec!["tales", "of", "a", "yeti"]);
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" ;: \"").is_empty());
    }

    #[test]
    fn test_unicode_offsets() {
        let tokenizer = Tokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("Élan Vital");
        assert_eq!(tokens[0].text, "élan");
        assert_eq!(&"Élan Vital"[tokens[1].start..tokens[1].end], "Vital");
    }
}
