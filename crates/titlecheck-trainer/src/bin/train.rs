use std::path::PathBuf;

use clap::Parser;
use titlecheck_trainer::{run_training, TrainConfig};

/// Train the real/fake book title classifier
#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train and evaluate the real/fake book title classifier")]
#[command(version)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Merged corpus (semicolon-delimited, Title;Label)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Mini-batch size
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Adam learning rate
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Embedding width
    #[arg(long)]
    embed_dim: Option<usize>,

    /// LSTM hidden width
    #[arg(long)]
    hidden_dim: Option<usize>,

    /// Seed for the split and shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Minimum token count for a vocabulary entry
    #[arg(long)]
    min_freq: Option<usize>,

    /// Fraction of rows held out for evaluation
    #[arg(long)]
    test_ratio: Option<f64>,

    /// Write the loss history as JSON to this path
    #[arg(long)]
    loss_report: Option<PathBuf>,

    /// Title to classify after training (repeatable; replaces the defaults)
    #[arg(short, long = "predict")]
    predict: Vec<String>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<TrainConfig> {
        let mut config = match &self.config {
            Some(path) => TrainConfig::from_json_file(path)?,
            None => TrainConfig::default(),
        };

        if let Some(dataset) = self.dataset {
            config.dataset_path = dataset;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(learning_rate) = self.learning_rate {
            config.learning_rate = learning_rate;
        }
        if let Some(embed_dim) = self.embed_dim {
            config.embed_dim = embed_dim;
        }
        if let Some(hidden_dim) = self.hidden_dim {
            config.hidden_dim = hidden_dim;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(min_freq) = self.min_freq {
            config.min_freq = min_freq;
        }
        if let Some(test_ratio) = self.test_ratio {
            config.test_ratio = test_ratio;
        }
        if self.loss_report.is_some() {
            config.loss_report = self.loss_report;
        }
        if !self.predict.is_empty() {
            config.probe_titles = self.predict;
        }

        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let result = Cli::parse().into_config().and_then(run_training);
    match result {
        Ok(summary) => {
            println!("Test Accuracy: {:.2}%", summary.evaluation.accuracy * 100.0);
            for prediction in &summary.predictions {
                println!("{} -> {}", prediction.title, prediction.label);
            }
            println!("Loss per epoch: {:?}", summary.loss_history());
        }
        Err(e) => {
            eprintln!("Training failed: {e:#}");
            std::process::exit(1);
        }
    }
}
