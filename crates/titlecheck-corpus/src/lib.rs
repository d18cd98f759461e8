//! # titlecheck Corpus
//!
//! Builds the classifier's training data. Genuine titles come from the
//! Open Library search API, one subject at a time; fabricated titles come
//! from a template engine over fixed word pools. Both end up in the
//! semicolon-delimited files that `titlecheck-core` reads.

pub mod error;
pub mod fetch;
pub mod generator;
pub mod merge;
pub mod openlibrary;

pub use error::{CorpusError, Result};
pub use fetch::{fetch_all_publishers, fetch_all_titles, fetch_publishers, fetch_titles, FetchConfig};
pub use generator::FakeTitleGenerator;
pub use merge::merge_corpora;
pub use openlibrary::{
    OpenLibraryClient, SearchDoc, SearchPage, SearchQuery, SearchSource, DEFAULT_BASE_URL,
};
