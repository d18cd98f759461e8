//! # titlecheck Core
//!
//! Shared building blocks for the real/fake book title classifier:
//! labelled title records, the basic English tokenizer, the frozen
//! vocabulary, sequence padding, semicolon-delimited CSV I/O and seeded
//! train/test splitting.
//!
//! ## Quick Start
//!
//! ```rust
//! use titlecheck_core::text::{TitleEncoder, Tokenizer, VocabularyBuilder, pad_batch};
//!
//! let tokenizer = Tokenizer::new().unwrap();
//! let corpus = ["The Hobbit", "Dancing Banana Quest"];
//! let vocab = VocabularyBuilder::new()
//!     .build(corpus.iter().map(|title| tokenizer.tokenize_words(title)));
//! let encoder = TitleEncoder::new(tokenizer, vocab);
//!
//! let encoded: Vec<Vec<u32>> = corpus.iter().map(|t| encoder.encode(t)).collect();
//! let batch = pad_batch(&encoded, encoder.vocab().pad_id());
//!
//! assert_eq!(batch.rows(), &[vec![2, 3, 0], vec![4, 5, 6]]);
//! ```
pub mod dataset;
pub mod error;
pub mod text;
pub mod types;

// Re-export primary API
pub use dataset::{
    load_records, shuffle, train_test_split, write_labeled_titles, write_publishers,
    write_records, Split,
};
pub use error::{Result, TitleCheckError};
pub use text::{
    pad_batch, pad_to_width, PaddedBatch, TitleEncoder, Token, Tokenizer, Vocabulary,
    VocabularyBuilder, PAD_TOKEN, UNK_TOKEN,
};
pub use types::{Label, LabeledTitle, TitleRecord};
