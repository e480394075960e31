// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! arXiv Digest Checker
//!
//! Fetches arXiv mailing-list digests from an IMAP mailbox, splits each digest
//! into its preprint announcements and filters them by keyword or author.
//!
//! # Pipeline
//!
//! - [`split_blocks`] cuts a raw digest into one block per announcement
//! - [`parse_entry`] turns a block into a [`Record`]
//! - [`Filter`] and [`find_hits`] select the records of interest
//! - [`Report`] renders the hits as wrapped text or JSON
//!
//! Fetching goes through the [`Mailbox`] trait; [`ImapMailbox`] implements
//! it over IMAP with TLS.
//!
//! # Example
//!
//! ```rust
//! use arxiv_digest::{Filter, find_hits, records_from_digest};
//!
//! let raw = "Subject: cs daily\r\n\r\npreamble\r\n\
//!     ------------------------------------------------------------------------------\r\n\
//!     \\\\\r\n\
//!     arXiv:2101.00001\r\n\
//!     Title: Quantum widgets\r\n\
//!     Authors: A. Author\r\n\
//!     Categories: quant-ph\r\n\
//!     \\\\\r\n  We study widgets.\r\n\\\\ ( https://arxiv.org/abs/2101.00001 ,  1kb)\r\n";
//!
//! let records = records_from_digest(raw);
//! let hits = find_hits(&records, &Filter::new(["quantum"], Vec::<String>::new()));
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].url, "https://arxiv.org/abs/2101.00001");
//! ```

mod config;
mod error;
mod mailbox;
mod matcher;
mod parser;
mod pipeline;
mod report;
mod splitter;
mod types;

pub use config::{
    CredentialArgs, Prompt, Resolution, Source, TerminalPrompt, parse_login_file,
    resolve_credentials, resolve_word_list,
};
pub use error::{Error, Result};
pub use mailbox::{DEFAULT_FOLDER, DEFAULT_PORT, DEFAULT_SENDER, ImapConfig, ImapMailbox, Mailbox};
pub use matcher::{Filter, find_hits};
pub use parser::{CONTINUATION_MARKER, collapse_whitespace, join_lines, parse_entry};
pub use pipeline::{FetchOptions, collect_records, fetch_digests, parse_digest, records_from_digest};
pub use report::{OutputFormat, Report, Sink, WRAP_WIDTH, wrap_text};
pub use splitter::{DigestHeaders, parse_headers, split_blocks};
pub use types::*;
