use serde::{Deserialize, Serialize};

use super::label::Label;

/// A single corpus row.
///
/// Serializes to the extended header
/// `Title;Author;ISBN;PublishYear;Publisher;Genre;Label`. When reading, the
/// metadata columns are optional so the minimal `Title;Label` corpora load
/// into the same type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// The book title as written in the source.
    #[serde(rename = "Title")]
    pub title: String,

    /// First listed author.
    #[serde(rename = "Author", default)]
    pub author: Option<String>,

    /// First listed ISBN.
    #[serde(rename = "ISBN", default)]
    pub isbn: Option<String>,

    /// Year of first publication.
    #[serde(rename = "PublishYear", default)]
    pub publish_year: Option<i32>,

    /// First listed publisher.
    #[serde(rename = "Publisher", default)]
    pub publisher: Option<String>,

    /// Subject the record was fetched under.
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,

    /// Ground-truth class.
    #[serde(rename = "Label")]
    pub label: Label,
}

impl TitleRecord {
    /// Column names of the extended layout, in serialization order.
    pub const HEADER: [&'static str; 7] =
        ["Title", "Author", "ISBN", "PublishYear", "Publisher", "Genre", "Label"];

    /// Creates a record carrying only a title and its label.
    #[must_use]
    pub fn new(title: impl Into<String>, label: Label) -> Self {
        Self {
            title: title.into(),
            author: None,
            isbn: None,
            publish_year: None,
            publisher: None,
            genre: None,
            label,
        }
    }

    /// Drops the metadata columns.
    #[must_use]
    pub fn to_labeled(&self) -> LabeledTitle {
        LabeledTitle {
            title: self.title.clone(),
            label: self.label,
        }
    }
}

/// The minimal `Title;Label` row used by generated and merged corpora.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTitle {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Label")]
    pub label: Label,
}

impl LabeledTitle {
    /// Column names of the minimal layout.
    pub const HEADER: [&'static str; 2] = ["Title", "Label"];

    pub fn new(title: impl Into<String>, label: Label) -> Self {
        Self {
            title: title.into(),
            label,
        }
    }
}

impl From<TitleRecord> for LabeledTitle {
    fn from(record: TitleRecord) -> Self {
        Self {
            title: record.title,
            label: record.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_metadata() {
        let record = TitleRecord::new("The Hobbit", Label::Real);
        assert_eq!(record.title, "The Hobbit");
        assert!(record.author.is_none());
        assert!(record.publish_year.is_none());
        assert_eq!(record.to_labeled(), LabeledTitle::new("The Hobbit", Label::Real));
    }
}
