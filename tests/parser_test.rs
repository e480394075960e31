mod common;

use arxiv_digest::{Error, collapse_whitespace, join_lines, parse_entry};

// --- join_lines ---

#[test]
fn test_join_single_line() {
    let lines = ["Title: Short title", "Authors: A. Author"];
    assert_eq!(join_lines(&lines, 0, " "), "Title: Short title");
}

#[test]
fn test_join_continuation_lines() {
    let lines = [
        "Title: A rather long title",
        "  that wraps onto",
        "  a third line",
        "Authors: A. Author",
    ];
    assert_eq!(
        join_lines(&lines, 0, " "),
        "Title: A rather long title that wraps onto a third line"
    );
}

#[test]
fn test_join_last_line() {
    let lines = ["Authors: A. Author", "Categories: gr-qc"];
    assert_eq!(join_lines(&lines, 1, " "), "Categories: gr-qc");
}

#[test]
fn test_join_continuation_at_end() {
    let lines = ["Categories: gr-qc", "  astro-ph.HE"];
    assert_eq!(join_lines(&lines, 0, " "), "Categories: gr-qc astro-ph.HE");
}

#[test]
fn test_join_out_of_range() {
    let lines = ["Title: Only"];
    assert_eq!(join_lines(&lines, 1, " "), "");
    assert_eq!(join_lines(&lines, 7, " "), "");
    assert_eq!(join_lines(&[], 0, " "), "");
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  a\r\n  b\t\tc  "), "a b c");
    assert_eq!(collapse_whitespace(" \r\n "), "");
}

// --- parse_entry ---

#[test]
fn test_parse_full_entry() {
    let block = common::entry(
        "2101.00001",
        "Black holes\r\n  in a box",
        "A. Einstein,\r\n  N. Rosen",
        "gr-qc hep-th",
        "We study black holes\r\n  confined to a box.",
    );
    let record = parse_entry(&block).unwrap();

    assert_eq!(record.id.as_deref(), Some("2101.00001"));
    assert_eq!(record.title, "Black holes in a box");
    assert_eq!(record.authors, "A. Einstein, N. Rosen");
    assert_eq!(record.categories, "gr-qc hep-th");
    assert_eq!(record.abstract_text, "We study black holes confined to a box.");
    assert_eq!(record.url, "https://arxiv.org/abs/2101.00001");
}

#[test]
fn test_parse_without_abstract_uses_second_chunk() {
    let block = "Title: No abstract\r\n\
                 Authors: B. Author\r\n\
                 Categories: math.GT\r\n\
                 \\\\ https://example.org/paper\r\n";
    let record = parse_entry(block).unwrap();

    assert!(record.id.is_none());
    assert_eq!(record.abstract_text, "");
    assert_eq!(record.url, " https://example.org/paper\r\n");
    assert_eq!(record.title, "No abstract");
}

#[test]
fn test_identifier_overrides_fallback_url() {
    let block = "arXiv:2101.00042 \r\n\
                 Title: Override\r\n\
                 \\\\\r\n  Abstract.\r\n\
                 \\\\ ( https://mirror.example.org/abs/9999.99999 ,  3kb)";
    let record = parse_entry(block).unwrap();

    assert_eq!(record.id.as_deref(), Some("2101.00042"));
    assert_eq!(record.url, "https://arxiv.org/abs/2101.00042");
}

#[test]
fn test_missing_fields_default_to_empty() {
    let block = "arXiv:2101.00077\r\n\\\\ ( https://arxiv.org/abs/2101.00077 ,  3kb)";
    let record = parse_entry(block).unwrap();

    assert_eq!(record.title, "");
    assert_eq!(record.authors, "");
    assert_eq!(record.categories, "");
    assert_eq!(record.abstract_text, "");
    assert_eq!(record.url, "https://arxiv.org/abs/2101.00077");
}

#[test]
fn test_entry_without_any_url_is_malformed() {
    let err = parse_entry("Title: Orphan\r\nAuthors: Nobody\r\n").unwrap_err();
    assert!(matches!(err, Error::MalformedBlock(_)));
    assert!(err.to_string().contains("Title: Orphan"));
}

#[test]
fn test_blank_fallback_url_is_malformed() {
    let err = parse_entry("Title: Orphan\r\n\\\\  \r\n").unwrap_err();
    assert!(matches!(err, Error::MalformedBlock(_)));
}

#[test]
fn test_abstract_with_extra_marker_stays_in_abstract_chunk() {
    let block = "arXiv:2101.00100\r\n\
                 Title: Markers\r\n\
                 \\\\\r\n  First part.\r\n\
                 \\\\ tail \\\\ more";
    let record = parse_entry(block).unwrap();

    assert_eq!(record.abstract_text, "First part.");
    assert_eq!(record.url, "https://arxiv.org/abs/2101.00100");
}

#[test]
fn test_label_not_at_line_start_is_ignored() {
    let block = "arXiv:2101.00200\r\n\
                 Comments: see Title: elsewhere\r\n\
                 Title: Real title\r\n\
                 \\\\ ( https://arxiv.org/abs/2101.00200 ,  1kb)";
    let record = parse_entry(block).unwrap();

    assert_eq!(record.title, "Real title");
}
