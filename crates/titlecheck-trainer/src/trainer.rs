//! Training loop, evaluation and single-title inference.

use anyhow::Context;
use candle_core::{DType, Device, Tensor, D};
use candle_nn::{AdamW, Optimizer, ParamsAdamW, VarBuilder, VarMap};
use serde::Serialize;
use titlecheck_core::{pad_batch, Label, TitleEncoder};
use tracing::{info, warn};

use crate::config::TrainConfig;
use crate::data::{BatchIterator, LabeledBatch};
use crate::metrics::Evaluation;
use crate::model::{ClassifierConfig, TitleClassifier};

/// Mean training loss of one epoch (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochReport {
    pub epoch: usize,
    pub mean_loss: f64,
}

impl EpochReport {
    /// Loss rounded to four decimals, as reported in the loss history.
    pub fn rounded_loss(&self) -> f64 {
        (self.mean_loss * 1e4).round() / 1e4
    }
}

/// Classification of a single title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub title: String,
    pub label: Label,
    /// Softmax probability of the real class.
    pub real_probability: f32,
}

/// Owns the model parameters and optimizer for one run.
pub struct Trainer {
    model: TitleClassifier,
    varmap: VarMap,
    optimizer: AdamW,
    device: Device,
    batch_size: usize,
    seed: u64,
}

impl Trainer {
    pub fn new(config: &TrainConfig, vocab_size: usize, device: &Device) -> anyhow::Result<Self> {
        config.validate()?;

        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, device);
        let model = TitleClassifier::new(&ClassifierConfig::from_train_config(config, vocab_size), vb)
            .context("failed to create classifier")?;

        // Adam: AdamW without weight decay
        let optimizer = AdamW::new(
            varmap.all_vars(),
            ParamsAdamW {
                lr: config.learning_rate,
                beta1: 0.9,
                beta2: 0.999,
                eps: 1e-8,
                weight_decay: 0.0,
            },
        )
        .context("failed to create optimizer")?;

        Ok(Self {
            model,
            varmap,
            optimizer,
            device: device.clone(),
            batch_size: config.batch_size,
            seed: config.seed,
        })
    }

    /// One pass over `data` in shuffled mini-batches. Returns the mean batch loss.
    pub fn train_epoch(&mut self, data: &LabeledBatch, epoch: usize) -> anyhow::Result<f64> {
        let mut total_loss = 0.0;
        let mut batch_count = 0usize;

        for indices in BatchIterator::shuffled(data.len(), self.batch_size, self.seed, epoch) {
            let (inputs, labels) = data.select(&indices).to_tensors(&self.device)?;

            let logits = self.model.forward_t(&inputs, true)?;
            let loss = candle_nn::loss::cross_entropy(&logits, &labels)?;
            self.optimizer.backward_step(&loss)?;

            total_loss += f64::from(loss.to_scalar::<f32>()?);
            batch_count += 1;
        }

        if batch_count == 0 {
            warn!(epoch, "training split is empty, nothing to learn from");
            return Ok(0.0);
        }
        Ok(total_loss / batch_count as f64)
    }

    /// Train for `epochs` epochs, logging the mean loss of each.
    pub fn fit(&mut self, data: &LabeledBatch, epochs: usize) -> anyhow::Result<Vec<EpochReport>> {
        let mut history = Vec::with_capacity(epochs);
        for epoch in 0..epochs {
            let mean_loss = self
                .train_epoch(data, epoch)
                .with_context(|| format!("epoch {} failed", epoch + 1))?;
            info!(epoch = epoch + 1, epochs, loss = %format!("{mean_loss:.4}"), "epoch complete");
            history.push(EpochReport {
                epoch: epoch + 1,
                mean_loss,
            });
        }
        Ok(history)
    }

    /// Inference-mode logits cut off from the autograd graph.
    fn forward_detached(&self, inputs: &Tensor) -> candle_core::Result<Tensor> {
        Ok(self.model.forward(inputs)?.detach())
    }

    /// Predict every row of `data` in order, with dropout disabled and no
    /// gradient tracking.
    pub fn evaluate(&self, data: &LabeledBatch) -> anyhow::Result<Evaluation> {
        let mut predictions = Vec::with_capacity(data.len());
        let mut actuals = Vec::with_capacity(data.len());

        for indices in BatchIterator::sequential(data.len(), self.batch_size) {
            let batch = data.select(&indices);
            let (inputs, _) = batch.to_tensors(&self.device)?;

            let logits = self.forward_detached(&inputs)?;
            let preds = logits.argmax(D::Minus1)?.to_vec1::<u32>()?;

            predictions.extend(preds);
            actuals.extend_from_slice(&batch.labels);
        }

        let evaluation = Evaluation::from_predictions(predictions, actuals);
        info!(
            total = evaluation.total(),
            accuracy = %format!("{:.2}%", evaluation.accuracy * 100.0),
            "evaluation complete"
        );
        Ok(evaluation)
    }

    /// Encode, pad to a batch of one and classify. Unknown words map to the
    /// unknown id.
    pub fn predict(&self, encoder: &TitleEncoder, title: &str) -> anyhow::Result<Prediction> {
        let encoded = encoder.encode(title);
        let padded = pad_batch(&[encoded], encoder.vocab().pad_id());
        let inputs = Tensor::from_vec(padded.flatten(), (1, padded.width()), &self.device)?;

        let logits = self.forward_detached(&inputs)?;
        let class = logits.argmax(D::Minus1)?.to_vec1::<u32>()?;
        let probabilities = candle_nn::ops::softmax(&logits, D::Minus1)?.to_vec2::<f32>()?;

        let label = Label::from_index(class.first().copied().unwrap_or_default());
        let real_probability = probabilities
            .first()
            .and_then(|row| row.get(Label::Real.index() as usize))
            .copied()
            .unwrap_or_default();

        Ok(Prediction {
            title: title.to_string(),
            label,
            real_probability,
        })
    }

    /// Total number of trainable scalars.
    pub fn num_parameters(&self) -> usize {
        self.varmap.all_vars().iter().map(|v| v.elem_count()).sum()
    }

    pub fn model(&self) -> &TitleClassifier {
        &self.model
    }
}
