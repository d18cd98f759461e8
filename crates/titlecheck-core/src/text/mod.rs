pub mod encoder;
pub mod padding;
pub mod tokenizer;
pub mod vocab;

pub use encoder::TitleEncoder;
pub use padding::{pad_batch, pad_to_width, PaddedBatch};
pub use tokenizer::{Token, Tokenizer};
pub use vocab::{Vocabulary, VocabularyBuilder, PAD_TOKEN, UNK_TOKEN};
