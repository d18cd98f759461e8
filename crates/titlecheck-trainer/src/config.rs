//! Training hyperparameters and file locations.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

/// Configuration for one training run.
///
/// Missing keys in a JSON config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Merged `Title;Label` (or extended) corpus.
    pub dataset_path: PathBuf,
    pub embed_dim: usize,
    pub hidden_dim: usize,
    /// Number of stacked LSTM layers.
    pub num_layers: usize,
    /// Dropout between LSTM layers, active only while training.
    pub dropout: f32,
    pub batch_size: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    /// Fraction of rows held out for evaluation.
    pub test_ratio: f64,
    /// Seed for the train/test split and the per-epoch shuffles.
    pub seed: u64,
    /// Tokens seen fewer times are left out of the vocabulary.
    pub min_freq: usize,
    /// Titles classified after evaluation.
    pub probe_titles: Vec<String>,
    /// Where to write the per-epoch loss report, if anywhere.
    pub loss_report: Option<PathBuf>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("dataset.csv"),
            embed_dim: 128,
            hidden_dim: 64,
            num_layers: 2,
            dropout: 0.3,
            batch_size: 32,
            epochs: 10,
            learning_rate: 1e-3,
            test_ratio: 0.2,
            seed: 42,
            min_freq: 1,
            probe_titles: vec![
                "The Lord of the Rings".to_string(),
                "Secret Alien Love Chronicles".to_string(),
            ],
            loss_report: None,
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    pub fn with_dims(mut self, embed_dim: usize, hidden_dim: usize) -> Self {
        self.embed_dim = embed_dim;
        self.hidden_dim = hidden_dim;
        self
    }

    pub fn with_num_layers(mut self, num_layers: usize) -> Self {
        self.num_layers = num_layers;
        self
    }

    pub fn with_dropout(mut self, dropout: f32) -> Self {
        self.dropout = dropout;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Drop tokens seen fewer than `min_freq` times from the vocabulary.
    pub fn with_min_freq(mut self, min_freq: usize) -> Self {
        self.min_freq = min_freq;
        self
    }

    pub fn with_probe_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.probe_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_loss_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.loss_report = Some(path.into());
        self
    }

    /// Reject configurations the model or batching cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.embed_dim > 0, "embed_dim must be positive");
        ensure!(self.hidden_dim > 0, "hidden_dim must be positive");
        ensure!(self.num_layers > 0, "num_layers must be at least 1");
        ensure!(self.batch_size > 0, "batch_size must be positive");
        ensure!(
            (0.0..1.0).contains(&self.dropout),
            "dropout must be in [0, 1), got {}",
            self.dropout
        );
        ensure!(
            self.learning_rate > 0.0,
            "learning_rate must be positive, got {}",
            self.learning_rate
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let cfg = TrainConfig::default();
        assert_eq!(cfg.embed_dim, 128);
        assert_eq!(cfg.hidden_dim, 64);
        assert_eq!(cfg.num_layers, 2);
        assert_eq!(cfg.batch_size, 32);
        assert_eq!(cfg.epochs, 10);
        assert!((cfg.learning_rate - 1e-3).abs() < 1e-12);
        assert!((cfg.test_ratio - 0.2).abs() < 1e-12);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.probe_titles.len(), 2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.json");
        std::fs::write(&path, r#"{"epochs": 3, "dataset_path": "merged.csv"}"#).unwrap();

        let cfg = TrainConfig::from_json_file(&path).unwrap();
        assert_eq!(cfg.epochs, 3);
        assert_eq!(cfg.dataset_path, PathBuf::from("merged.csv"));
        assert_eq!(cfg.hidden_dim, 64);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(TrainConfig::new().with_batch_size(0).validate().is_err());
        assert!(TrainConfig::new().with_num_layers(0).validate().is_err());
        assert!(TrainConfig::new().with_dropout(1.0).validate().is_err());
        assert!(TrainConfig::new().with_learning_rate(0.0).validate().is_err());
    }

    #[test]
    fn test_min_freq_setter() {
        assert_eq!(TrainConfig::default().min_freq, 1);
        assert_eq!(TrainConfig::new().with_min_freq(3).min_freq, 3);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = TrainConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
