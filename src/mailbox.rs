//! Mailbox access for digest retrieval

use crate::error::{Error, Result};
use native_tls::{TlsConnector, TlsStream};
use serde::{Deserialize, Serialize};
use std::net::TcpStream;
use tracing::{debug, info};

/// Default IMAPS port
pub const DEFAULT_PORT: u16 = 993;

/// Sender address arXiv digests are delivered from
pub const DEFAULT_SENDER: &str = "no-reply@arXiv.org";

/// Folder searched when none is given
pub const DEFAULT_FOLDER: &str = "INBOX";

/// Operations the digest pipeline needs from a mail server
pub trait Mailbox {
    /// Open `folder` for searching and fetching
    fn select(&mut self, folder: &str) -> Result<()>;

    /// Sequence numbers of messages from `sender`, ascending
    fn search_sender(&mut self, sender: &str) -> Result<Vec<u32>>;

    /// Full RFC 822 source of one message
    fn fetch(&mut self, id: u32) -> Result<Vec<u8>>;

    /// Close the session
    fn logout(&mut self) -> Result<()> {
        Ok(())
    }
}

/// IMAP connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImapConfig {
    pub server: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl ImapConfig {
    pub fn new(
        server: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            port: DEFAULT_PORT,
            user: user.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// IMAP over implicit TLS
pub struct ImapMailbox {
    session: imap::Session<TlsStream<TcpStream>>,
}

impl ImapMailbox {
    /// Connect and log in
    pub fn connect(config: &ImapConfig) -> Result<Self> {
        let tls = TlsConnector::builder()
            .build()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let client = imap::connect(
            (config.server.as_str(), config.port),
            config.server.as_str(),
            &tls,
        )
        .map_err(|e| Error::Connection(format!("{}:{}: {e}", config.server, config.port)))?;

        let session = client
            .login(&config.user, &config.password)
            .map_err(|(e, _)| Error::Connection(format!("login as {}: {e}", config.user)))?;

        info!("Logged in to {} as {}", config.server, config.user);

        Ok(Self { session })
    }
}

impl Mailbox for ImapMailbox {
    fn select(&mut self, folder: &str) -> Result<()> {
        let mailbox = self.session.select(folder).map_err(|e| Error::Folder {
            folder: folder.to_string(),
            details: e.to_string(),
        })?;
        debug!("Selected {folder}: {} message(s)", mailbox.exists);
        Ok(())
    }

    fn search_sender(&mut self, sender: &str) -> Result<Vec<u32>> {
        let query = format!("FROM \"{}\"", sender.replace('"', ""));
        let found = self
            .session
            .search(&query)
            .map_err(|e| Error::Search(e.to_string()))?;

        let mut ids: Vec<u32> = found.into_iter().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    fn fetch(&mut self, id: u32) -> Result<Vec<u8>> {
        let fetch_error = |details: String| Error::Fetch { id, details };

        let messages = self
            .session
            .fetch(id.to_string(), "RFC822")
            .map_err(|e| fetch_error(e.to_string()))?;

        messages
            .iter()
            .find_map(imap::types::Fetch::body)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| fetch_error("server returned no message body".into()))
    }

    fn logout(&mut self) -> Result<()> {
        self.session
            .logout()
            .map_err(|e| Error::Connection(e.to_string()))
    }
}
