//! Open Library search API client.
//!
//! One blocking GET per page, no retries. A non-success status surfaces as
//! [`CorpusError::Status`] so the pagination loop can stop the current
//! subject and keep what it already has.

use serde::Deserialize;
use serde_json::{Map, Value};
use titlecheck_core::{Label, TitleRecord};

use crate::error::{CorpusError, Result};

/// Public search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org/search.json";

/// Parameters of one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    pub subject: &'a str,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
    pub language: &'a str,
}

/// A decoded response page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

/// One search hit. Every field is optional and may hold a single value or a list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SearchDoc(pub Map<String, Value>);

impl SearchDoc {
    /// First value of `field`, rendered as a string.
    pub fn first(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::Array(items) => items.first().and_then(scalar_to_string),
            value => scalar_to_string(value),
        }
    }

    /// Every value of `field`, rendered as strings.
    pub fn all(&self, field: &str) -> Vec<String> {
        match self.0.get(field) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(value) => scalar_to_string(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Converts the hit into a genuine-title record. Hits without a title yield `None`.
    pub fn to_record(&self, genre: &str) -> Option<TitleRecord> {
        let mut record = TitleRecord::new(self.first("title")?, Label::Real);
        record.author = self.first("author_name");
        record.isbn = self.first("isbn");
        record.publish_year = self
            .first("first_publish_year")
            .and_then(|year| year.parse().ok());
        record.publisher = self.first("publisher");
        record.genre = Some(genre.to_string());
        Some(record)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Anything that can answer a paged subject search.
pub trait SearchSource {
    /// Fetch a single page.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Status` for non-success responses and
    /// `CorpusError::Http` for transport or decoding failures.
    fn search(&self, query: &SearchQuery<'_>) -> Result<SearchPage>;
}

/// Blocking HTTP client for the Open Library search endpoint.
pub struct OpenLibraryClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OpenLibraryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SearchSource for OpenLibraryClient {
    fn search(&self, query: &SearchQuery<'_>) -> Result<SearchPage> {
        let params = [
            ("subject", query.subject.to_string()),
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
            ("language", query.language.to_string()),
        ];

        let response = self.client.get(&self.base_url).query(&params).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CorpusError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<SearchPage>()?)
    }
}
