//! # titlecheck Trainer
//!
//! Trains the real/fake book title classifier: an embedding layer feeding a
//! stacked LSTM whose final hidden state is projected onto two logits.
//! Everything runs on the CPU in a single process, and the trained weights
//! live only as long as the [`Pipeline`] that owns them.

pub mod config;
pub mod data;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod trainer;

pub use config::TrainConfig;
pub use data::{BatchIterator, LabeledBatch, PreparedData};
pub use metrics::{accuracy, Evaluation};
pub use model::{ClassifierConfig, TitleClassifier};
pub use pipeline::{run_training, Pipeline, RunSummary, Stage};
pub use trainer::{EpochReport, Prediction, Trainer};
