//! End-to-end run: load → prepare → train → evaluate → probe.
//!
//! All inputs come from a [`TrainConfig`]; nothing is read or trained until
//! the caller asks for it.

use std::fmt;
use std::path::Path;

use anyhow::Context;
use candle_core::Device;
use serde::Serialize;
use titlecheck_core::{load_records, TitleEncoder, TitleRecord};
use tracing::info;

use crate::config::TrainConfig;
use crate::data::PreparedData;
use crate::metrics::Evaluation;
use crate::trainer::{EpochReport, Prediction, Trainer};

/// Where a pipeline is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Training,
    Evaluation,
    AdHocInference,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Training => write!(f, "training"),
            Self::Evaluation => write!(f, "evaluation"),
            Self::AdHocInference => write!(f, "ad-hoc inference"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// One training run's data, model and progress.
pub struct Pipeline {
    config: TrainConfig,
    data: PreparedData,
    trainer: Trainer,
    stage: Stage,
}

impl Pipeline {
    /// Prepare data and a fresh model from in-memory records.
    pub fn from_records(config: TrainConfig, records: &[TitleRecord]) -> anyhow::Result<Self> {
        config.validate()?;
        let data = PreparedData::from_records(records, &config)?;
        let trainer = Trainer::new(&config, data.vocab_size(), &Device::Cpu)?;
        info!(parameters = trainer.num_parameters(), "model initialized");

        Ok(Self {
            config,
            data,
            trainer,
            stage: Stage::Init,
        })
    }

    /// Read `config.dataset_path` and prepare from it.
    pub fn load(config: TrainConfig) -> anyhow::Result<Self> {
        let records = load_records(&config.dataset_path)
            .with_context(|| format!("failed to load {}", config.dataset_path.display()))?;
        Self::from_records(config, &records)
    }

    fn enter(&mut self, stage: Stage) {
        info!(from = %self.stage, to = %stage, "pipeline stage");
        self.stage = stage;
    }

    pub fn train(&mut self) -> anyhow::Result<Vec<EpochReport>> {
        self.enter(Stage::Training);
        let train = self.data.train();
        self.trainer.fit(&train, self.config.epochs)
    }

    pub fn evaluate(&mut self) -> anyhow::Result<Evaluation> {
        self.enter(Stage::Evaluation);
        let test = self.data.test();
        self.trainer.evaluate(&test)
    }

    /// Classify an arbitrary title with the current weights.
    pub fn predict(&self, title: &str) -> anyhow::Result<Prediction> {
        self.trainer.predict(&self.data.encoder, title)
    }

    /// Train, evaluate, classify the probe titles and write the loss report
    /// if one is configured.
    pub fn run(mut self) -> anyhow::Result<RunSummary> {
        let epochs = self.train()?;
        let evaluation = self.evaluate()?;

        self.enter(Stage::AdHocInference);
        let predictions = self
            .config
            .probe_titles
            .iter()
            .map(|title| self.predict(title))
            .collect::<anyhow::Result<Vec<_>>>()?;
        for prediction in &predictions {
            info!(
                title = %prediction.title,
                label = %prediction.label,
                real_probability = prediction.real_probability,
                "prediction"
            );
        }

        let summary = RunSummary {
            epochs,
            evaluation,
            predictions,
        };
        if let Some(path) = &self.config.loss_report {
            summary.write_report(path)?;
        }

        self.enter(Stage::Done);
        Ok(summary)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn data(&self) -> &PreparedData {
        &self.data
    }

    pub fn encoder(&self) -> &TitleEncoder {
        &self.data.encoder
    }
}

/// Outcome of [`Pipeline::run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub epochs: Vec<EpochReport>,
    pub evaluation: Evaluation,
    pub predictions: Vec<Prediction>,
}

#[derive(Serialize)]
struct LossReport<'a> {
    loss: Vec<f64>,
    test_accuracy: f64,
    predictions: Vec<ReportedPrediction<'a>>,
}

#[derive(Serialize)]
struct ReportedPrediction<'a> {
    title: &'a str,
    label: String,
}

impl RunSummary {
    /// Per-epoch mean loss rounded to four decimals.
    pub fn loss_history(&self) -> Vec<f64> {
        self.epochs.iter().map(EpochReport::rounded_loss).collect()
    }

    /// Write the loss history, test accuracy and probe predictions as JSON.
    pub fn write_report<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let report = LossReport {
            loss: self.loss_history(),
            test_accuracy: self.evaluation.accuracy,
            predictions: self
                .predictions
                .iter()
                .map(|p| ReportedPrediction {
                    title: &p.title,
                    label: p.label.to_string(),
                })
                .collect(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write loss report {}", path.display()))?;
        info!(path = %path.display(), "loss report written");
        Ok(())
    }
}

/// Load the configured dataset and run the whole pipeline.
pub fn run_training(config: TrainConfig) -> anyhow::Result<RunSummary> {
    let dataset = &config.dataset_path;
    if !dataset.exists() {
        anyhow::bail!("Training data not found: {}", dataset.display());
    }

    info!(dataset = %dataset.display(), "starting training");
    let summary = Pipeline::load(config)?.run()?;
    info!(
        accuracy = %format!("{:.2}%", summary.evaluation.accuracy * 100.0),
        "training finished"
    );
    Ok(summary)
}
