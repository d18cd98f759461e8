//! Frozen token → id mapping built once from the training corpus.

use std::collections::HashMap;

/// Reserved filler token, always id 0.
pub const PAD_TOKEN: &str = "<pad>";
/// Reserved out-of-vocabulary token, always id 1.
pub const UNK_TOKEN: &str = "<unk>";

const SPECIALS: [&str; 2] = [PAD_TOKEN, UNK_TOKEN];

/// Token vocabulary. Immutable once built.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    token_to_id: HashMap<String, u32>,
    id_to_token: Vec<String>,
}

impl Vocabulary {
    fn from_ordered(tokens: impl IntoIterator<Item = String>) -> Self {
        let mut id_to_token: Vec<String> = SPECIALS.iter().map(|s| s.to_string()).collect();
        id_to_token.extend(tokens);

        let token_to_id = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), id as u32))
            .collect();

        Self {
            token_to_id,
            id_to_token,
        }
    }

    pub fn pad_id(&self) -> u32 {
        0
    }

    pub fn unk_id(&self) -> u32 {
        1
    }

    /// Number of entries, specials included.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Always false: the specials are present even for an empty corpus.
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Id of `token`, or the unknown id when it was never seen.
    pub fn id(&self, token: &str) -> u32 {
        self.token_to_id
            .get(token)
            .copied()
            .unwrap_or_else(|| self.unk_id())
    }

    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        tokens.iter().map(|t| self.id(t.as_ref())).collect()
    }

    /// Maps ids back to tokens. Ids outside the table decode to [`UNK_TOKEN`].
    pub fn decode(&self, ids: &[u32]) -> Vec<&str> {
        ids.iter()
            .map(|&id| self.token(id).unwrap_or(UNK_TOKEN))
            .collect()
    }

    /// Tokens in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.id_to_token.iter().map(String::as_str)
    }
}

/// Builds a [`Vocabulary`] in one pass over a tokenized corpus.
///
/// Tokens are ordered by descending frequency; equally frequent tokens keep
/// the order in which they first appeared.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    min_freq: usize,
}

impl Default for VocabularyBuilder {
    fn default() -> Self {
        Self { min_freq: 1 }
    }
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop tokens seen fewer than `min_freq` times.
    pub fn with_min_freq(mut self, min_freq: usize) -> Self {
        self.min_freq = min_freq.max(1);
        self
    }

    pub fn build<I, T, S>(&self, corpus: I) -> Vocabulary
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for title in corpus {
            for token in title {
                let token = token.as_ref();
                if SPECIALS.contains(&token) {
                    continue;
                }
                match counts.get_mut(token) {
                    Some(count) => *count += 1,
                    None => {
                        counts.insert(token.to_string(), 1);
                        first_seen.push(token.to_string());
                    }
                }
            }
        }

        // Stable sort keeps first-occurrence order among ties
        first_seen.sort_by_key(|token| std::cmp::Reverse(counts[token]));
        first_seen.retain(|token| counts[token] >= self.min_freq);

        tracing::debug!(
            distinct = counts.len(),
            kept = first_seen.len(),
            "built vocabulary"
        );

        Vocabulary::from_ordered(first_seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Vec<&'static str>> {
        vec![vec!["the", "hobbit"], vec!["dancing", "banana", "quest"]]
    }

    #[test]
    fn specials_come_first() {
        let vocab = VocabularyBuilder::new().build(corpus());
        assert_eq!(vocab.token(0), Some(PAD_TOKEN));
        assert_eq!(vocab.token(1), Some(UNK_TOKEN));
        assert_eq!(vocab.id(PAD_TOKEN), vocab.pad_id());
        assert_eq!(vocab.id(UNK_TOKEN), vocab.unk_id());
    }

    #[test]
    fn unique_tokens_keep_insertion_order() {
        let vocab = VocabularyBuilder::new().build(corpus());
        let tokens: Vec<&str> = vocab.tokens().collect();
        assert_eq!(
            tokens,
            vec![PAD_TOKEN, UNK_TOKEN, "the", "hobbit", "dancing", "banana", "quest"]
        );
    }

    #[test]
    fn frequent_tokens_come_earlier() {
        let vocab = VocabularyBuilder::new().build(vec![
            vec!["a", "wizard"],
            vec!["the", "wizard"],
            vec!["the", "wizard", "the"],
        ]);
        assert_eq!(vocab.id("the"), 3);
        assert_eq!(vocab.id("wizard"), 2);
        assert_eq!(vocab.id("a"), 4);
    }

    #[test]
    fn size_is_distinct_tokens_plus_specials() {
        let vocab = VocabularyBuilder::new().build(vec![
            vec!["the", "king"],
            vec!["the", "last", "king"],
        ]);
        assert_eq!(vocab.len(), 3 + 2);

        let ids: std::collections::HashSet<u32> = vocab.tokens().map(|t| vocab.id(t)).collect();
        assert_eq!(ids.len(), vocab.len());
    }

    #[test]
    fn unknown_tokens_map_to_unk() {
        let vocab = VocabularyBuilder::new().build(corpus());
        assert_eq!(vocab.encode(&["the", "zombie"]), vec![2, vocab.unk_id()]);
        assert_eq!(vocab.decode(&[2, 1, 999]), vec!["the", UNK_TOKEN, UNK_TOKEN]);
    }

    #[test]
    fn min_freq_drops_rare_tokens() {
        let vocab = VocabularyBuilder::new()
            .with_min_freq(2)
            .build(vec![vec!["the", "yeti"], vec!["the", "robot"]]);
        assert_eq!(vocab.len(), 3);
        assert!(vocab.contains("the"));
        assert!(!vocab.contains("yeti"));
    }

    #[test]
    fn literal_specials_in_corpus_are_not_duplicated() {
        let vocab = VocabularyBuilder::new().build(vec![vec!["<pad>", "word", "<unk>"]]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("word"), 2);
    }
}
