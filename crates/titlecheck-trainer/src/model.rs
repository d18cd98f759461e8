//! Embedding → stacked LSTM → linear classifier.

use candle_core::{DType, Result, Tensor};
use candle_nn::{
    Dropout, Embedding, LSTMConfig, Linear, Module, ModuleT, VarBuilder, LSTM, RNN,
};
use titlecheck_core::Label;

use crate::config::TrainConfig;

/// Shape of the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    pub vocab_size: usize,
    pub embed_dim: usize,
    pub hidden_dim: usize,
    pub num_layers: usize,
    pub dropout: f32,
}

impl ClassifierConfig {
    pub fn from_train_config(config: &TrainConfig, vocab_size: usize) -> Self {
        Self {
            vocab_size,
            embed_dim: config.embed_dim,
            hidden_dim: config.hidden_dim,
            num_layers: config.num_layers,
            dropout: config.dropout,
        }
    }
}

/// Recurrent title classifier.
///
/// Sequences are consumed in full, trailing pad ids included; there is no
/// masking, so padding does shift the final hidden state.
pub struct TitleClassifier {
    embedding: Embedding,
    layers: Vec<LSTM>,
    dropout: Dropout,
    head: Linear,
    hidden_dim: usize,
}

impl TitleClassifier {
    /// Variables are created as `embedding.weight`, `lstm.{weight,bias}_{ih,hh}_l{n}`
    /// and `fc.{weight,bias}`.
    pub fn new(config: &ClassifierConfig, vb: VarBuilder) -> Result<Self> {
        let embedding = candle_nn::embedding(config.vocab_size, config.embed_dim, vb.pp("embedding"))?;

        let lstm_vb = vb.pp("lstm");
        let layers = (0..config.num_layers)
            .map(|layer_idx| {
                let in_dim = if layer_idx == 0 {
                    config.embed_dim
                } else {
                    config.hidden_dim
                };
                let lstm_config = LSTMConfig {
                    layer_idx,
                    ..Default::default()
                };
                candle_nn::lstm(in_dim, config.hidden_dim, lstm_config, lstm_vb.clone())
            })
            .collect::<Result<Vec<_>>>()?;

        let head = candle_nn::linear(config.hidden_dim, Label::NUM_CLASSES, vb.pp("fc"))?;

        Ok(Self {
            embedding,
            layers,
            dropout: Dropout::new(config.dropout),
            head,
            hidden_dim: config.hidden_dim,
        })
    }

    /// `ids`: `[batch, seq_len]` u32. Returns `[batch, 2]` unnormalized scores.
    pub fn forward_t(&self, ids: &Tensor, train: bool) -> Result<Tensor> {
        let (batch, seq_len) = ids.dims2()?;

        let mut last_hidden = None;
        if seq_len > 0 {
            let mut xs = self.embedding.forward(ids)?;
            for (idx, layer) in self.layers.iter().enumerate() {
                if idx > 0 {
                    xs = self.dropout.forward_t(&xs, train)?;
                }
                let states = layer.seq(&xs)?;
                xs = layer.states_to_tensor(&states)?;
                last_hidden = states.last().map(|state| state.h().clone());
            }
        }

        // Nothing to read: classify from the zero initial state
        let hidden = match last_hidden {
            Some(hidden) => hidden,
            None => Tensor::zeros((batch, self.hidden_dim), DType::F32, ids.device())?,
        };

        self.head.forward(&hidden)
    }

    /// Inference-mode forward pass.
    pub fn forward(&self, ids: &Tensor) -> Result<Tensor> {
        self.forward_t(ids, false)
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}
