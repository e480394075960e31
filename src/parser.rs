//! Field extraction for single digest entries

use crate::error::{Error, Result};
use crate::types::{FieldLabel, Record};
use tracing::debug;

/// In-entry separator between metadata, abstract and URL sections
pub const CONTINUATION_MARKER: &str = "\\\\";

/// Leading text that marks a wrapped metadata line
pub const LINE_CONTINUATION: &str = " ";

/// Join a field that wraps over several lines.
///
/// Starts at `lines[idx]` and absorbs every following line that begins with
/// `delimiter`, stopping at the first line that does not or at the end of
/// `lines`. The result is whitespace collapsed. An out of range `idx` yields
/// an empty string.
#[must_use]
pub fn join_lines(lines: &[&str], idx: usize, delimiter: &str) -> String {
    let Some((first, rest)) = lines.get(idx..).and_then(<[&str]>::split_first) else {
        return String::new();
    };

    let continued = rest
        .iter()
        .take_while(|line| !delimiter.is_empty() && line.starts_with(delimiter));

    collapse_whitespace(
        &std::iter::once(first)
            .chain(continued)
            .copied()
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Replace every whitespace run with a single space and trim both ends
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse one entry block into a [`Record`].
///
/// Labelled fields missing from the block are left empty. The only failure
/// is a block from which no URL can be derived at all.
pub fn parse_entry(block: &str) -> Result<Record> {
    let mut chunks = block.splitn(3, CONTINUATION_MARKER);
    let metadata = chunks.next().unwrap_or_default();

    let (abstract_text, fallback_url) = match (chunks.next(), chunks.next()) {
        (Some(abstract_chunk), Some(url_chunk)) => {
            (collapse_whitespace(abstract_chunk), Some(url_chunk))
        }
        (Some(url_chunk), None) => (String::new(), Some(url_chunk)),
        _ => (String::new(), None),
    };

    let lines: Vec<&str> = metadata.lines().collect();
    let mut record = Record {
        abstract_text,
        ..Record::default()
    };

    for (idx, line) in lines.iter().enumerate() {
        let Some(label) = FieldLabel::classify(line) else {
            continue;
        };

        match label {
            FieldLabel::Id => {
                let id = strip_label(line.trim(), label);
                record.id = (!id.is_empty()).then_some(id);
            }
            FieldLabel::Title => record.title = labelled_field(&lines, idx, label),
            FieldLabel::Authors => record.authors = labelled_field(&lines, idx, label),
            FieldLabel::Categories => record.categories = labelled_field(&lines, idx, label),
            FieldLabel::Abstract | FieldLabel::Url => {}
        }
    }

    record.url = match (&record.id, fallback_url) {
        (Some(id), _) => Record::abs_url(id),
        (None, Some(url)) if !url.trim().is_empty() => url.to_string(),
        _ => {
            let head = lines.iter().find(|l| !l.trim().is_empty()).unwrap_or(&"");
            return Err(Error::MalformedBlock(format!(
                "no identifier or URL in entry starting {:?}",
                head.trim()
            )));
        }
    };

    debug!("Parsed entry {}: {}", record.url, record.title);

    Ok(record)
}

fn labelled_field(lines: &[&str], idx: usize, label: FieldLabel) -> String {
    strip_label(&join_lines(lines, idx, LINE_CONTINUATION), label)
}

fn strip_label(text: &str, label: FieldLabel) -> String {
    let prefix = label.prefix().unwrap_or_default();
    text.strip_prefix(prefix).unwrap_or(text).trim().to_string()
}
