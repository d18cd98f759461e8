//! Held-out evaluation metrics.
//!
//! Class 0 = fake, class 1 = real. Precision and recall are reported for the
//! real class.

use std::fmt;

/// Fraction of predictions equal to their label; 0.0 for empty input.
///
/// Only positions present in both slices are scored.
pub fn accuracy(predictions: &[u32], actuals: &[u32]) -> f64 {
    let scored = predictions.len().min(actuals.len());
    if scored == 0 {
        return 0.0;
    }
    let correct = predictions
        .iter()
        .zip(actuals)
        .filter(|(p, a)| p == a)
        .count();
    correct as f64 / scored as f64
}

/// Predictions over the test split with confusion-matrix summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub predictions: Vec<u32>,
    pub actuals: Vec<u32>,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    pub fn_count: usize,
}

impl Evaluation {
    pub fn from_predictions(predictions: Vec<u32>, actuals: Vec<u32>) -> Self {
        let accuracy = accuracy(&predictions, &actuals);

        let (mut tp, mut fp, mut tn, mut fn_count) = (0, 0, 0, 0);
        for (&pred, &label) in predictions.iter().zip(&actuals) {
            match (pred, label) {
                (1, 1) => tp += 1,
                (1, 0) => fp += 1,
                (0, 0) => tn += 1,
                (0, 1) => fn_count += 1,
                _ => {}
            }
        }

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if tp + fn_count > 0 {
            tp as f64 / (tp + fn_count) as f64
        } else {
            0.0
        };

        Self {
            predictions,
            actuals,
            accuracy,
            precision,
            recall,
            tp,
            fp,
            tn,
            fn_count,
        }
    }

    pub fn total(&self) -> usize {
        self.actuals.len()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "acc={:.2}% prec={:.4} rec={:.4} (tp={} fp={} tn={} fn={})",
            self.accuracy * 100.0,
            self.precision,
            self.recall,
            self.tp,
            self.fp,
            self.tn,
            self.fn_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_correct_is_one() {
        assert_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 1, 0]), 1.0);
    }

    #[test]
    fn test_all_wrong_is_zero() {
        assert_eq!(accuracy(&[1, 0, 0], &[0, 1, 1]), 0.0);
    }

    #[test]
    fn test_mismatched_lengths_score_the_overlap() {
        assert_eq!(accuracy(&[1, 0, 1], &[1, 0]), 1.0);
        assert_eq!(accuracy(&[1], &[0, 1, 1]), 0.0);
        assert_eq!(accuracy(&[], &[1, 1]), 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        let eval = Evaluation::from_predictions(vec![], vec![]);
        assert_eq!(eval.accuracy, 0.0);
        assert_eq!(eval.total(), 0);
    }

    #[test]
    fn test_confusion_counts() {
        let eval = Evaluation::from_predictions(vec![1, 1, 0, 0, 1], vec![1, 0, 0, 1, 1]);
        assert_eq!((eval.tp, eval.fp, eval.tn, eval.fn_count), (2, 1, 1, 1));
        assert!((eval.accuracy - 0.6).abs() < 1e-12);
        assert!((eval.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((eval.recall - 2.0 / 3.0).abs() < 1e-12);
        assert!(eval.to_string().starts_with("acc=60.00%"));
    }
}
