//! Rendering and writing of search results

use crate::error::Result;
use crate::matcher::{Filter, find_hits};
use crate::types::Record;
use chrono::{DateTime, Local};
use regex::Regex;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Column width reports are wrapped to
pub const WRAP_WIDTH: usize = 79;

/// Report serialization format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where a report is written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Sink {
    #[default]
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Sink {
    /// No path means the terminal
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Hits of one run together with the totals they were drawn from
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Local>,
    pub total: usize,
    pub hit_count: usize,
    pub hits: Vec<&'a Record>,
}

impl<'a> Report<'a> {
    /// Match `records` against `filter`, stamped with the current time
    #[must_use]
    pub fn new(records: &'a [Record], filter: &Filter) -> Self {
        Self::from_hits(find_hits(records, filter), records.len(), Local::now())
    }

    #[must_use]
    pub fn from_hits(
        hits: Vec<&'a Record>,
        total: usize,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            generated_at,
            total,
            hit_count: hits.len(),
            hits,
        }
    }

    /// One `label: value` block per hit, each closed by a rule, wrapped
    #[must_use]
    pub fn render_hits(&self) -> String {
        let mut out = String::new();
        for hit in &self.hits {
            let fields: Vec<String> = hit
                .fields()
                .iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect();
            out.push_str(&fields.join("\n"));
            out.push_str("\n\n");
            out.push_str(&rule());
            out.push_str("\n\n");
        }
        wrap_text(&out, WRAP_WIDTH)
    }

    /// Text written to a terminal
    #[must_use]
    pub fn render_terminal(&self) -> String {
        format!(
            "{}\n\nFound {} hit(s) in {} preprints.\n",
            self.render_hits(),
            self.hit_count,
            self.total
        )
    }

    /// Text written to a report file, with a generation header
    #[must_use]
    pub fn render_file(&self) -> String {
        format!(
            "Generated by arxiv-digest on {}\n\nFound {} hits among {} preprints.\n\n{}\n\n{}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S"),
            self.hit_count,
            self.total,
            rule(),
            self.render_hits()
        )
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in `format` and write to `sink`
    pub fn write(&self, sink: &Sink, format: OutputFormat) -> Result<()> {
        match sink {
            Sink::Stdout => {
                let text = match format {
                    OutputFormat::Text => self.render_terminal(),
                    OutputFormat::Json => self.render_json()? + "\n",
                };
                std::io::stdout().lock().write_all(text.as_bytes())?;
            }
            Sink::File(path) => {
                let text = match format {
                    OutputFormat::Text => self.render_file(),
                    OutputFormat::Json => self.render_json()? + "\n",
                };
                std::fs::write(path, text)?;
                info!("Results saved to {}", path.display());
            }
        }
        Ok(())
    }
}

fn rule() -> String {
    "=".repeat(WRAP_WIDTH)
}

/// Spaces and words, the units a line is wrapped on
static CHUNK_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r" +|[^ ]+").unwrap());

/// Wrap every line of `text` to `width` columns.
///
/// Each whitespace character becomes a space; runs inside a line are kept.
/// Spaces at a break are dropped, words are only broken when longer than
/// `width`, and hyphens are not break points. Empty lines are kept.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let spaced: String = line
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    let mut chunks: Vec<&str> = CHUNK_REGEX.find_iter(&spaced).map(|m| m.as_str()).collect();
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        // Leading spaces survive only on the first line
        if !lines.is_empty() && chunks.last().is_some_and(|c| c.starts_with(' ')) {
            chunks.pop();
        }

        let mut current = String::new();
        let mut current_len = 0;
        while let Some(&chunk) = chunks.last() {
            let chunk_len = chunk.chars().count();
            if current_len + chunk_len > width {
                break;
            }
            current.push_str(chunk);
            current_len += chunk_len;
            chunks.pop();
        }

        if let Some(last) = chunks.last_mut()
            && last.chars().count() > width
        {
            let chunk = *last;
            let split = chunk
                .char_indices()
                .nth(width - current_len)
                .map_or(chunk.len(), |(i, _)| i);
            current.push_str(&chunk[..split]);
            *last = &chunk[split..];
        }

        let trimmed = current.trim_end_matches(' ');
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    lines
}
