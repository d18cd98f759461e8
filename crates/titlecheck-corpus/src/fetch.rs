//! Paginated subject fetching.
//!
//! Pages are requested until the per-subject target is reached or a page
//! comes back shorter than the requested page size. A non-success status
//! ends the current subject early; whatever was collected is kept.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use titlecheck_core::TitleRecord;
use tracing::{debug, info, warn};

use crate::error::{CorpusError, Result};
use crate::openlibrary::{SearchDoc, SearchQuery, SearchSource, DEFAULT_BASE_URL};

/// Configuration for catalogue fetching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Search endpoint.
    pub base_url: String,
    /// Subjects queried one after another.
    pub genres: Vec<String>,
    /// Stop requesting pages for a subject once this many items are collected.
    pub target_per_genre: usize,
    /// Documents requested per page.
    pub page_size: u32,
    /// Language filter passed to the API.
    pub language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            genres: ["fiction", "mystery", "romance", "thriller", "fantasy"]
                .into_iter()
                .map(String::from)
                .collect(),
            target_per_genre: 2000,
            page_size: 100,
            language: "eng".to_string(),
        }
    }
}

impl FetchConfig {
    /// Create a new fetch configuration with the title-fetching defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for the publisher listing: 35 per subject, 35 per page.
    pub fn publishers() -> Self {
        Self::default().with_target(35).with_page_size(35)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target_per_genre = target;
        self
    }

    /// Set the page size (at least 1).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Walks the pages of one subject, handing each page's docs to `on_page`,
/// which returns the running item count.
fn paginate<S, F>(source: &S, genre: &str, config: &FetchConfig, mut on_page: F) -> Result<()>
where
    S: SearchSource + ?Sized,
    F: FnMut(Vec<SearchDoc>) -> usize,
{
    let page_size = config.page_size.max(1);
    let mut page = 1u32;
    let mut collected = 0usize;

    while collected < config.target_per_genre {
        let query = SearchQuery {
            subject: genre,
            page,
            limit: page_size,
            language: &config.language,
        };

        let result = match source.search(&query) {
            Ok(result) => result,
            Err(CorpusError::Status { status }) => {
                warn!(genre, page, status, "error fetching data, keeping partial results");
                break;
            }
            Err(e) => return Err(e),
        };

        let returned = result.docs.len();
        collected = on_page(result.docs);
        info!(genre, page, returned, collected, "fetched page");

        if returned < page_size as usize {
            break;
        }
        page += 1;
    }

    Ok(())
}

/// Fetch genuine titles for one subject.
pub fn fetch_titles<S>(source: &S, genre: &str, config: &FetchConfig) -> Result<Vec<TitleRecord>>
where
    S: SearchSource + ?Sized,
{
    let mut records = Vec::new();
    paginate(source, genre, config, |docs| {
        for doc in &docs {
            match doc.to_record(genre) {
                Some(record) => records.push(record),
                None => debug!(genre, "skipping search hit without a title"),
            }
        }
        records.len()
    })?;
    Ok(records)
}

/// Fetch every publisher name listed for one subject, de-duplicated in
/// first-seen order.
pub fn fetch_publishers<S>(source: &S, genre: &str, config: &FetchConfig) -> Result<Vec<String>>
where
    S: SearchSource + ?Sized,
{
    let mut publishers = Vec::new();
    paginate(source, genre, config, |docs| {
        for doc in &docs {
            publishers.extend(doc.all("publisher"));
        }
        publishers.len()
    })?;

    let mut seen = HashSet::new();
    publishers.retain(|p| seen.insert(p.clone()));
    Ok(publishers)
}

/// Fetch titles for every configured subject, flattened in subject order.
pub fn fetch_all_titles<S>(source: &S, config: &FetchConfig) -> Result<Vec<TitleRecord>>
where
    S: SearchSource + ?Sized,
{
    let mut all = Vec::new();
    for genre in &config.genres {
        info!(genre = %genre, "fetching titles");
        all.extend(fetch_titles(source, genre, config)?);
    }
    Ok(all)
}

/// Fetch publishers for every configured subject, flattened in subject order.
pub fn fetch_all_publishers<S>(source: &S, config: &FetchConfig) -> Result<Vec<String>>
where
    S: SearchSource + ?Sized,
{
    let mut all = Vec::new();
    for genre in &config.genres {
        info!(genre = %genre, "fetching publishers");
        all.extend(fetch_publishers(source, genre, config)?);
    }
    Ok(all)
}
