//! Preprocessing and mini-batch iteration.
//!
//! The whole corpus is encoded and right-padded once, so every mini-batch
//! shares the corpus-wide width.

use candle_core::{Device, Tensor};
use oorandom::Rand64;
use titlecheck_core::{
    pad_batch, shuffle, train_test_split, PaddedBatch, Split, TitleEncoder, TitleRecord, Tokenizer,
    VocabularyBuilder,
};

use crate::config::TrainConfig;

/// Padded id rows with their class indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledBatch {
    pub inputs: PaddedBatch,
    pub labels: Vec<u32>,
}

impl LabeledBatch {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Gather the given rows.
    pub fn select(&self, indices: &[usize]) -> LabeledBatch {
        LabeledBatch {
            inputs: self.inputs.select(indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    /// `[batch, width]` u32 ids and `[batch]` u32 targets.
    pub fn to_tensors(&self, device: &Device) -> candle_core::Result<(Tensor, Tensor)> {
        let inputs = Tensor::from_vec(
            self.inputs.flatten(),
            (self.len(), self.inputs.width()),
            device,
        )?;
        let labels = Tensor::from_vec(self.labels.clone(), self.len(), device)?;
        Ok((inputs, labels))
    }
}

/// The encoded corpus plus its train/test partition.
pub struct PreparedData {
    pub encoder: TitleEncoder,
    pub rows: LabeledBatch,
    pub split: Split,
}

impl PreparedData {
    /// Tokenize, build the vocabulary, encode, pad and split.
    pub fn from_records(records: &[TitleRecord], config: &TrainConfig) -> anyhow::Result<Self> {
        let encoder = TitleEncoder::fit(
            Tokenizer::new()?,
            records.iter().map(|r| r.title.as_str()),
            &VocabularyBuilder::new().with_min_freq(config.min_freq),
        );

        let encoded: Vec<Vec<u32>> = records.iter().map(|r| encoder.encode(&r.title)).collect();
        let inputs = pad_batch(&encoded, encoder.vocab().pad_id());
        let labels = records.iter().map(|r| r.label.index()).collect();
        let split = train_test_split(records.len(), config.test_ratio, config.seed)?;

        tracing::info!(
            rows = records.len(),
            vocab_size = encoder.vocab().len(),
            width = inputs.width(),
            train = split.train.len(),
            test = split.test.len(),
            "prepared dataset"
        );

        Ok(Self {
            encoder,
            rows: LabeledBatch { inputs, labels },
            split,
        })
    }

    pub fn vocab_size(&self) -> usize {
        self.encoder.vocab().len()
    }

    pub fn train(&self) -> LabeledBatch {
        self.rows.select(&self.split.train)
    }

    pub fn test(&self) -> LabeledBatch {
        self.rows.select(&self.split.test)
    }
}

/// Yields row indices in chunks of `batch_size`; the last chunk may be short.
#[derive(Debug, Clone)]
pub struct BatchIterator {
    indices: Vec<usize>,
    batch_size: usize,
    pos: usize,
}

impl BatchIterator {
    /// Rows in order, as for evaluation.
    pub fn sequential(len: usize, batch_size: usize) -> Self {
        Self {
            indices: (0..len).collect(),
            batch_size: batch_size.max(1),
            pos: 0,
        }
    }

    /// Rows shuffled with a generator seeded from `seed + epoch`.
    pub fn shuffled(len: usize, batch_size: usize, seed: u64, epoch: usize) -> Self {
        let mut iter = Self::sequential(len, batch_size);
        let mut rng = Rand64::new(u128::from(seed.wrapping_add(epoch as u64)));
        shuffle(&mut iter.indices, &mut rng);
        iter
    }

    /// Number of batches in a full pass.
    pub fn num_batches(&self) -> usize {
        self.indices.len().div_ceil(self.batch_size)
    }
}

impl Iterator for BatchIterator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.indices.len() {
            return None;
        }
        let end = (self.pos + self.batch_size).min(self.indices.len());
        let batch = self.indices[self.pos..end].to_vec();
        self.pos = end;
        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecheck_core::Label;

    fn example_records() -> Vec<TitleRecord> {
        vec![
            TitleRecord::new("The Hobbit", Label::Real),
            TitleRecord::new("Dancing Banana Quest", Label::Fake),
        ]
    }

    #[test]
    fn test_prepares_reference_example() {
        let config = TrainConfig::new().with_test_ratio(0.0);
        let data = PreparedData::from_records(&example_records(), &config).unwrap();

        assert_eq!(data.vocab_size(), 7);
        assert_eq!(data.rows.inputs.rows(), &[vec![2, 3, 0], vec![4, 5, 6]]);
        assert_eq!(data.rows.labels, vec![1, 0]);
        assert_eq!(data.train().len(), 2);
        assert!(data.test().is_empty());
    }

    #[test]
    fn test_split_partitions_rows() {
        let records: Vec<TitleRecord> = (0..10)
            .map(|i| TitleRecord::new(format!("Title {i}"), Label::Real))
            .collect();
        let data = PreparedData::from_records(&records, &TrainConfig::new()).unwrap();

        assert_eq!(data.train().len(), 8);
        assert_eq!(data.test().len(), 2);
        assert_eq!(data.train().inputs.width(), data.rows.inputs.width());
    }

    #[test]
    fn test_to_tensors_shapes() {
        let config = TrainConfig::new().with_test_ratio(0.0);
        let data = PreparedData::from_records(&example_records(), &config).unwrap();
        let (inputs, labels) = data.rows.to_tensors(&Device::Cpu).unwrap();

        assert_eq!(inputs.dims(), &[2, 3]);
        assert_eq!(labels.dims(), &[2]);
        assert_eq!(labels.to_vec1::<u32>().unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_batches_cover_every_row_once() {
        let batches: Vec<Vec<usize>> = BatchIterator::shuffled(10, 4, 42, 0).collect();
        assert_eq!(batches.iter().map(Vec::len).collect::<Vec<_>>(), vec![4, 4, 2]);

        let mut seen: Vec<usize> = batches.into_iter().flatten().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_reshuffle_depends_on_epoch() {
        let a: Vec<_> = BatchIterator::shuffled(32, 32, 42, 0).collect();
        let b: Vec<_> = BatchIterator::shuffled(32, 32, 42, 0).collect();
        let c: Vec<_> = BatchIterator::shuffled(32, 32, 42, 1).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sequential_and_counts() {
        let iter = BatchIterator::sequential(5, 2);
        assert_eq!(iter.num_batches(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![vec![0, 1], vec![2, 3], vec![4]]);
        assert_eq!(BatchIterator::sequential(0, 8).count(), 0);
    }

    #[test]
    fn test_min_freq_prunes_rare_tokens() {
        let mut records = example_records();
        records.push(TitleRecord::new("The Silmarillion", Label::Real));

        let config = TrainConfig::new().with_min_freq(2);
        let data = PreparedData::from_records(&records, &config).unwrap();

        // only "the" appears twice
        assert_eq!(data.vocab_size(), 3);
        assert_eq!(data.encoder.encode("The Hobbit"), vec![2, 1]);
    }
}
