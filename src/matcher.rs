//! Keyword and author matching over parsed records

use crate::types::Record;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Keyword and author filters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Lowercased keywords, matched against title and abstract
    keywords: Vec<String>,

    /// Author names, matched verbatim against the authors field
    authors: Vec<String>,
}

impl Filter {
    /// Build a filter, dropping entries that are only whitespace.
    ///
    /// Keywords are lowercased here so that matching is case-insensitive on
    /// both sides. Padding is kept, so `" ai "` only matches a space-delimited word.
    /// Author names are kept as given.
    pub fn new<K, A>(keywords: K, authors: A) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .filter(|k| !k.as_ref().trim().is_empty())
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        let authors = authors
            .into_iter()
            .filter(|a| !a.as_ref().trim().is_empty())
            .map(|a| a.as_ref().to_string())
            .collect();

        Self { keywords, authors }
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// A filter with no keywords and no authors never matches
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.authors.is_empty()
    }

    /// Check a single record against the filter
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_keyword(&record.title)
            || self.matches_keyword(&record.abstract_text)
            || self
                .authors
                .iter()
                .any(|author| record.authors.contains(author.as_str()))
    }

    fn matches_keyword(&self, text: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

/// Collect the records matching `filter`, in their original order
#[must_use]
pub fn find_hits<'a>(records: &'a [Record], filter: &Filter) -> Vec<&'a Record> {
    let hits: Vec<&Record> = records.iter().filter(|r| filter.matches(r)).collect();
    info!("Found {} hit(s) in {} preprints", hits.len(), records.len());
    hits
}
