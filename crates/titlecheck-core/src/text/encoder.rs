//! Title ↔ id-sequence conversion.

use super::tokenizer::Tokenizer;
use super::vocab::{Vocabulary, VocabularyBuilder};

/// Couples the tokenizer with a frozen vocabulary.
///
/// Built once per training run; inference reuses it unchanged so unseen
/// words fall back to the unknown id.
#[derive(Debug, Clone)]
pub struct TitleEncoder {
    tokenizer: Tokenizer,
    vocab: Vocabulary,
}

impl TitleEncoder {
    pub fn new(tokenizer: Tokenizer, vocab: Vocabulary) -> Self {
        Self { tokenizer, vocab }
    }

    /// Tokenizes every title and builds the vocabulary from the result.
    pub fn fit<I, S>(tokenizer: Tokenizer, titles: I, builder: &VocabularyBuilder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocab = builder.build(
            titles
                .into_iter()
                .map(|title| tokenizer.tokenize_words(title.as_ref())),
        );
        Self { tokenizer, vocab }
    }

    /// One id per token, in source order.
    pub fn encode(&self, title: &str) -> Vec<u32> {
        self.vocab.encode(&self.tokenizer.tokenize_words(title))
    }

    /// Inverse of [`encode`](Self::encode) for known tokens; unknown ones come
    /// back as the unknown marker.
    pub fn decode(&self, ids: &[u32]) -> Vec<String> {
        self.vocab
            .decode(ids)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}
