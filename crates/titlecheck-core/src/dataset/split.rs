//! Seeded shuffling and train/test partitioning.

use oorandom::Rand64;

use crate::error::{Result, TitleCheckError};

/// Row indices of a train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// In-place Fisher–Yates shuffle driven by the given generator.
pub fn shuffle<T>(items: &mut [T], rng: &mut Rand64) {
    for i in (1..items.len()).rev() {
        let j = rng.rand_range(0..(i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

/// Randomly partitions `n` rows into train and test sets.
///
/// The test set holds `ceil(n * test_ratio)` rows. Identical inputs and seed
/// always give the same partition. No stratification is performed.
///
/// # Errors
///
/// Returns `TitleCheckError::InvalidSplitRatio` unless `0 <= test_ratio < 1`.
pub fn train_test_split(n: usize, test_ratio: f64, seed: u64) -> Result<Split> {
    if !(0.0..1.0).contains(&test_ratio) {
        return Err(TitleCheckError::InvalidSplitRatio(test_ratio));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = Rand64::new(u128::from(seed));
    shuffle(&mut indices, &mut rng);

    let test_len = ((n as f64) * test_ratio).ceil() as usize;
    let train = indices.split_off(test_len);

    Ok(Split {
        train,
        test: indices,
    })
}
