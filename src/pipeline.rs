//! Fetch, split and parse stages wired together

use crate::error::Result;
use crate::mailbox::{DEFAULT_FOLDER, DEFAULT_SENDER, Mailbox};
use crate::parser::parse_entry;
use crate::splitter::{parse_headers, split_blocks};
use crate::types::{Digest, Record};
use tracing::{debug, info, warn};

/// Where to look for digests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub folder: String,
    pub sender: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            folder: DEFAULT_FOLDER.to_string(),
            sender: DEFAULT_SENDER.to_string(),
        }
    }
}

/// Parse every entry of one raw digest, skipping malformed blocks
#[must_use]
pub fn records_from_digest(raw: &str) -> Vec<Record> {
    split_blocks(raw)
        .into_iter()
        .filter_map(|block| {
            parse_entry(block)
                .inspect_err(|e| warn!("Skipping entry: {e}"))
                .ok()
        })
        .collect()
}

/// Build a [`Digest`] from the raw bytes of one message
#[must_use]
pub fn parse_digest(seq: u32, raw: &[u8]) -> Digest {
    let headers = parse_headers(raw);
    let text = String::from_utf8_lossy(raw);
    let records = records_from_digest(&text);

    let digest = Digest {
        seq,
        subject: headers.subject,
        date: headers.date,
        records,
    };
    debug!("Parsed digest {digest}: {} entries", digest.len());
    digest
}

/// Fetch and parse every digest from the configured sender.
///
/// Folder selection and search failures abort the run. A message that cannot
/// be fetched is logged and skipped. Digests come back in mailbox order.
pub fn fetch_digests<M: Mailbox + ?Sized>(
    mailbox: &mut M,
    options: &FetchOptions,
) -> Result<Vec<Digest>> {
    mailbox.select(&options.folder)?;
    let ids = mailbox.search_sender(&options.sender)?;
    info!("Found {} email(s) from {}", ids.len(), options.sender);

    let mut digests = Vec::with_capacity(ids.len());
    for id in ids {
        match mailbox.fetch(id) {
            Ok(raw) => digests.push(parse_digest(id, &raw)),
            Err(e) if !e.is_fatal() => warn!("Skipping message: {e}"),
            Err(e) => return Err(e),
        }
    }

    Ok(digests)
}

/// Flatten digests into one record sequence, message order then entry order
#[must_use]
pub fn collect_records(digests: &[Digest]) -> Vec<Record> {
    digests
        .iter()
        .flat_map(|d| d.records.iter().cloned())
        .collect()
}
