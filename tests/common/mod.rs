#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use arxiv_digest::{Error, Mailbox, Result};

pub const RULE: &str =
    "------------------------------------------------------------------------------";

pub fn separator() -> String {
    format!("\r\n{RULE}\r\n\\\\\r\n")
}

/// One announcement as it appears in a digest, without surrounding separators
pub fn entry(id: &str, title: &str, authors: &str, categories: &str, abstract_text: &str) -> String {
    format!(
        "arXiv:{id}\r\n\
         Date: Mon, 4 Jan 2021 18:59:59 GMT   (10kb)\r\n\
         \r\n\
         Title: {title}\r\n\
         Authors: {authors}\r\n\
         Categories: {categories}\r\n\
         Comments: 10 pages, 3 figures\r\n\
         \\\\\r\n  {abstract_text}\r\n\
         \\\\ ( https://arxiv.org/abs/{id} ,  10kb)"
    )
}

/// A full digest message with headers, preamble and footer
pub fn digest(entries: &[String]) -> String {
    let mut raw = String::from(
        "From: no-reply@arXiv.org\r\n\
         Subject: physics daily Subj-class mailing 1 1\r\n\
         Date: Tue, 5 Jan 2021 04:00:01 +0000\r\n\
         \r\n\
         ------------------------------------------------------------------------------\r\n\
         Submissions to:\r\n\
         General Relativity and Quantum Cosmology\r\n\
         received from  Fri  1 Jan 21 19:00:00 GMT  to  Mon  4 Jan 21 19:00:00 GMT",
    );
    for e in entries {
        raw.push_str(&separator());
        raw.push_str(e);
    }
    raw.push_str("\r\n");
    raw.push_str(RULE);
    raw.push_str("\r\nTo unsubscribe, e-mail To: physics@arXiv.org\r\n");
    raw
}

/// In-memory mailbox keyed by sequence number
#[derive(Default)]
pub struct MemoryMailbox {
    pub folders: HashSet<String>,
    pub messages: HashMap<u32, Vec<u8>>,
    pub broken: HashSet<u32>,
    pub fetched: Vec<u32>,
}

impl MemoryMailbox {
    pub fn with_messages(messages: Vec<String>) -> Self {
        Self {
            folders: HashSet::from(["INBOX".to_string()]),
            messages: messages
                .into_iter()
                .enumerate()
                .map(|(i, m)| (u32::try_from(i).unwrap() + 1, m.into_bytes()))
                .collect(),
            ..Self::default()
        }
    }
}

impl Mailbox for MemoryMailbox {
    fn select(&mut self, folder: &str) -> Result<()> {
        if self.folders.contains(folder) {
            Ok(())
        } else {
            Err(Error::Folder {
                folder: folder.to_string(),
                details: "no such mailbox".into(),
            })
        }
    }

    fn search_sender(&mut self, _sender: &str) -> Result<Vec<u32>> {
        let mut ids: Vec<u32> = self.messages.keys().chain(&self.broken).copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn fetch(&mut self, id: u32) -> Result<Vec<u8>> {
        self.fetched.push(id);
        self.messages.get(&id).cloned().ok_or(Error::Fetch {
            id,
            details: "connection reset".into(),
        })
    }
}
