//! # titlecheck
//!
//! Tells genuine book titles from template-generated ones.
//!
//! - [`common`]: records, tokenizer, vocabulary, padding and corpus files
//! - [`corpus`]: Open Library fetching, fake title generation and merging
//! - [`trainer`]: the LSTM classifier with its training pipeline
//!
//! ```no_run
//! use titlecheck::trainer::{run_training, TrainConfig};
//!
//! let summary = run_training(TrainConfig::new().with_dataset("dataset.csv"))?;
//! println!("accuracy: {:.2}%", summary.evaluation.accuracy * 100.0);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub use titlecheck_core as common;
pub use titlecheck_corpus as corpus;
pub use titlecheck_trainer as trainer;

pub use titlecheck_core::{Label, LabeledTitle, TitleEncoder, TitleRecord};
pub use titlecheck_corpus::{FakeTitleGenerator, FetchConfig, OpenLibraryClient};
pub use titlecheck_trainer::{run_training, Pipeline, RunSummary, TrainConfig};
