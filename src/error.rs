//! Error types for digest retrieval and parsing

use thiserror::Error;

/// Errors that can occur while fetching or parsing digests
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to connect or log in to the mail server
    #[error("Failed to connect to mail server: {0}")]
    Connection(String),

    /// Failed to select the mailbox folder
    #[error("Failed to select folder {folder}: {details}")]
    Folder { folder: String, details: String },

    /// Failed to search the folder for digest messages
    #[error("Failed to search mailbox: {0}")]
    Search(String),

    /// A single message could not be retrieved
    #[error("Failed to fetch message {id}: {details}")]
    Fetch { id: u32, details: String },

    /// A digest entry with no usable reference URL
    #[error("Malformed digest entry: {0}")]
    MalformedBlock(String),

    /// Unusable configuration input
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error must abort the whole run
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Fetch { .. } | Self::MalformedBlock(_))
    }
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, Error>;
