//! Right-padding of id sequences into rectangular batches.

/// A rectangular batch of id sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBatch {
    width: usize,
    rows: Vec<Vec<u32>>,
}

impl PaddedBatch {
    /// Number of columns shared by every row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Row-major copy of the ids, `len() * width()` long.
    pub fn flatten(&self) -> Vec<u32> {
        self.rows.iter().flatten().copied().collect()
    }

    /// Gathers the given rows into a new batch of the same width.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> PaddedBatch {
        PaddedBatch {
            width: self.width,
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

/// Pads every sequence with `pad_id` up to the longest one.
pub fn pad_batch<S: AsRef<[u32]>>(sequences: &[S], pad_id: u32) -> PaddedBatch {
    pad_to_width(sequences, 0, pad_id)
}

/// Pads every sequence with `pad_id` up to `width` columns. Sequences longer
/// than `width` widen the batch instead of being truncated.
pub fn pad_to_width<S: AsRef<[u32]>>(sequences: &[S], width: usize, pad_id: u32) -> PaddedBatch {
    let width = sequences
        .iter()
        .map(|s| s.as_ref().len())
        .max()
        .unwrap_or(0)
        .max(width);

    let rows = sequences
        .iter()
        .map(|s| {
            let mut row = Vec::with_capacity(width);
            row.extend_from_slice(s.as_ref());
            row.resize(width, pad_id);
            row
        })
        .collect();

    PaddedBatch { width, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_longest_row() {
        let batch = pad_batch(&[vec![2, 3], vec![4, 5, 6]], 0);
        assert_eq!(batch.width(), 3);
        assert_eq!(batch.rows(), &[vec![2, 3, 0], vec![4, 5, 6]]);
        assert_eq!(batch.flatten(), vec![2, 3, 0, 4, 5, 6]);
    }

    #[test]
    fn padding_is_idempotent() {
        let once = pad_batch(&[vec![7], vec![8, 9, 10], vec![]], 0);
        let twice = pad_batch(once.rows(), 0);
        assert_eq!(once, twice);
        assert!(twice.rows().iter().all(|r| r.len() == twice.width()));
    }

    #[test]
    fn explicit_width_never_truncates() {
        let batch = pad_to_width(&[vec![1, 2, 3]], 2, 0);
        assert_eq!(batch.width(), 3);

        let batch = pad_to_width(&[vec![1]], 4, 0);
        assert_eq!(batch.rows(), &[vec![1, 0, 0, 0]]);
    }

    #[test]
    fn empty_input_gives_empty_batch() {
        let batch = pad_batch::<Vec<u32>>(&[], 0);
        assert!(batch.is_empty());
        assert_eq!(batch.width(), 0);
    }

    #[test]
    fn select_keeps_width() {
        let batch = pad_batch(&[vec![1], vec![2, 3], vec![4, 5, 6]], 0);
        let picked = batch.select(&[1, 0]);
        assert_eq!(picked.width(), 3);
        assert_eq!(picked.rows(), &[vec![2, 3, 0], vec![1, 0, 0]]);
    }
}
