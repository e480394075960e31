//! Core types for parsed digests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base path that canonical preprint URLs are built from
pub const ABS_URL_BASE: &str = "https://arxiv.org/abs/";

/// One preprint announcement extracted from a digest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// arXiv identifier, absent when the entry carries no identifier line
    pub id: Option<String>,

    /// Title with whitespace collapsed
    pub title: String,

    /// Author list as announced, whitespace collapsed
    pub authors: String,

    /// Space separated subject classes
    pub categories: String,

    /// Abstract text, empty when the entry has none
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Reference URL, never empty
    pub url: String,
}

impl Record {
    /// Canonical abstract page for an identifier
    #[must_use]
    pub fn abs_url(id: &str) -> String {
        format!("{ABS_URL_BASE}{}", id.trim())
    }

    /// Label/value pairs in report order
    #[must_use]
    pub fn fields(&self) -> [(FieldLabel, &str); 6] {
        [
            (FieldLabel::Id, self.id.as_deref().unwrap_or_default()),
            (FieldLabel::Title, &self.title),
            (FieldLabel::Authors, &self.authors),
            (FieldLabel::Categories, &self.categories),
            (FieldLabel::Abstract, &self.abstract_text),
            (FieldLabel::Url, &self.url),
        ]
    }
}

/// Labelled fields of a digest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    Id,
    Title,
    Authors,
    Categories,
    Abstract,
    Url,
}

impl FieldLabel {
    /// Line prefix marking this field inside an entry's metadata
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Id => Some("arXiv:"),
            Self::Title => Some("Title:"),
            Self::Authors => Some("Authors:"),
            Self::Categories => Some("Categories:"),
            Self::Abstract | Self::Url => None,
        }
    }

    /// Classify a metadata line by its prefix
    #[must_use]
    pub fn classify(line: &str) -> Option<Self> {
        [Self::Id, Self::Title, Self::Authors, Self::Categories]
            .into_iter()
            .find(|label| label.prefix().is_some_and(|p| line.starts_with(p)))
    }

    /// Name used in reports
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Id => "arXiv Id",
            Self::Title => "Title",
            Self::Authors => "Authors",
            Self::Categories => "Categories",
            Self::Abstract => "Abstract",
            Self::Url => "URL",
        }
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One fetched digest message and the entries parsed from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digest {
    /// Mailbox sequence number the message was fetched by
    pub seq: u32,

    /// Subject header, if present
    pub subject: Option<String>,

    /// Date header, if present and valid RFC 2822
    pub date: Option<DateTime<Utc>>,

    /// Entries in the order they appear in the message
    pub records: Vec<Record>,
}

impl Digest {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "#{} ({subject})", self.seq),
            None => write!(f, "#{}", self.seq),
        }
    }
}
