//! Splitting raw digest messages into per-preprint blocks

use chrono::{DateTime, Utc};
use mailparse::MailHeaderMap;
use regex::Regex;
use tracing::debug;

/// Entry separator: a CRLF-framed rule line followed by a `\\` line
static BOUNDARY_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"\r\n(?:-{78}|={78})\r\n\\\\\r\n").unwrap()
});

/// Split a raw digest into entry blocks.
///
/// Everything before the first boundary (headers and preamble) is dropped.
/// A message without any boundary yields no blocks.
#[must_use]
pub fn split_blocks(raw: &str) -> Vec<&str> {
    let blocks: Vec<&str> = BOUNDARY_REGEX.split(raw).skip(1).collect();
    debug!("Split digest into {} block(s)", blocks.len());
    blocks
}

/// Header metadata of a digest message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigestHeaders {
    pub subject: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// Read `Subject` and `Date` from the message header section.
///
/// Header parse failures are not fatal to the digest; they just leave the
/// metadata empty.
#[must_use]
pub fn parse_headers(raw: &[u8]) -> DigestHeaders {
    let Ok((headers, _)) = mailparse::parse_headers(raw) else {
        debug!("Digest headers could not be parsed");
        return DigestHeaders::default();
    };

    let subject = headers.get_first_value("Subject");
    let date = headers
        .get_first_value("Date")
        .and_then(|d| DateTime::parse_from_rfc2822(d.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc));

    DigestHeaders { subject, date }
}
