//! Combines per-source corpora into the single `Title;Label` file the
//! trainer reads.

use std::path::Path;

use oorandom::Rand64;
use titlecheck_core::{load_records, shuffle, LabeledTitle};
use tracing::info;

use crate::error::Result;

/// Concatenate the rows of every input (minimal or extended layout) in
/// input order, then shuffle them when a seed is given.
pub fn merge_corpora<P: AsRef<Path>>(inputs: &[P], seed: Option<u64>) -> Result<Vec<LabeledTitle>> {
    let mut merged = Vec::new();
    for input in inputs {
        let records = load_records(input)?;
        info!(path = %input.as_ref().display(), rows = records.len(), "merging corpus");
        merged.extend(records.into_iter().map(LabeledTitle::from));
    }

    if let Some(seed) = seed {
        shuffle(&mut merged, &mut Rand64::new(u128::from(seed)));
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use titlecheck_core::{write_labeled_titles, write_records, Label, TitleRecord};

    fn fixtures(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let real = dir.join("real.csv");
        let fake = dir.join("fake.csv");

        let mut dune = TitleRecord::new("Dune", Label::Real);
        dune.genre = Some("fiction".into());
        write_records(&real, &[dune, TitleRecord::new("Emma", Label::Real)]).unwrap();
        write_labeled_titles(&fake, &[LabeledTitle::new("The Wacky Toast", Label::Fake)]).unwrap();

        (real, fake)
    }

    #[test]
    fn concatenates_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let (real, fake) = fixtures(dir.path());

        let merged = merge_corpora(&[real, fake], None).unwrap();
        assert_eq!(
            merged,
            vec![
                LabeledTitle::new("Dune", Label::Real),
                LabeledTitle::new("Emma", Label::Real),
                LabeledTitle::new("The Wacky Toast", Label::Fake),
            ]
        );
    }

    #[test]
    fn seeded_shuffle_keeps_all_rows() {
        let dir = tempfile::tempdir().unwrap();
        let (real, fake) = fixtures(dir.path());

        let a = merge_corpora(&[&real, &fake], Some(42)).unwrap();
        let b = merge_corpora(&[&real, &fake], Some(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.iter().filter(|r| r.label == Label::Fake).count(), 1);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(merge_corpora(&[dir.path().join("nope.csv")], None).is_err());
    }
}
