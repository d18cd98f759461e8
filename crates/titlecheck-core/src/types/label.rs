use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TitleCheckError;

/// Ground-truth class of a book title.
///
/// Serialized as the integer column used by the CSV corpora:
/// `0` for fabricated titles, `1` for genuine ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    /// Generated by the synthetic title engine.
    Fake,
    /// Fetched from a bibliographic catalogue.
    Real,
}

impl Label {
    /// Total number of classes the classifier predicts.
    pub const NUM_CLASSES: usize = 2;

    /// Class index used for tensor operations.
    #[must_use]
    pub fn index(self) -> u32 {
        match self {
            Self::Fake => 0,
            Self::Real => 1,
        }
    }

    /// Maps a predicted class index back to a label. Anything but 1 is fake.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        if index == 1 { Self::Real } else { Self::Fake }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.index() as u8
    }
}

impl TryFrom<u8> for Label {
    type Error = TitleCheckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fake),
            1 => Ok(Self::Real),
            other => Err(TitleCheckError::InvalidLabel(other)),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fake => write!(f, "Fake"),
            Self::Real => write!(f, "Real"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        assert_eq!(Label::from_index(Label::Fake.index()), Label::Fake);
        assert_eq!(Label::from_index(Label::Real.index()), Label::Real);
    }

    #[test]
    fn rejects_out_of_range_labels() {
        assert!(matches!(
            Label::try_from(2u8),
            Err(TitleCheckError::InvalidLabel(2))
        ));
    }

    #[test]
    fn display_matches_prediction_output() {
        assert_eq!(Label::Real.to_string(), "Real");
        assert_eq!(Label::Fake.to_string(), "Fake");
    }
}
