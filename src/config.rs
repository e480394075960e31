//! Resolution of credentials and search terms

use crate::error::{Error, Result};
use crate::mailbox::{DEFAULT_PORT, ImapConfig};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::warn;

/// A resolved value tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    FromFile(T),
    FromArgs(T),
    FromPrompt(T),
}

/// Origin of a resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    File,
    Args,
    Prompt,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::File => "file",
            Self::Args => "command line",
            Self::Prompt => "prompt",
        };
        write!(f, "{name}")
    }
}

impl<T> Resolution<T> {
    #[must_use]
    pub const fn source(&self) -> Source {
        match self {
            Self::FromFile(_) => Source::File,
            Self::FromArgs(_) => Source::Args,
            Self::FromPrompt(_) => Source::Prompt,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::FromFile(v) | Self::FromArgs(v) | Self::FromPrompt(v) => v,
        }
    }

    #[must_use]
    pub const fn get(&self) -> &T {
        match self {
            Self::FromFile(v) | Self::FromArgs(v) | Self::FromPrompt(v) => v,
        }
    }
}

/// Interactive input used when credentials are incomplete
pub trait Prompt {
    /// Ask for a value. `secret` marks input that must not be echoed.
    fn ask(&mut self, label: &str, secret: bool) -> io::Result<String>;
}

/// Prompt on stderr, read answers from stdin.
///
/// Secret values are read from the terminal with echo disabled.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, label: &str, secret: bool) -> io::Result<String> {
        if secret {
            return rpassword::prompt_password(format!("{label}: "));
        }

        let mut stderr = io::stderr().lock();
        write!(stderr, "{label}: ")?;
        stderr.flush()?;

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no input for {label}"),
            ));
        }
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Credential values given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialArgs {
    pub user: Option<String>,
    pub server: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
}

/// Parse a login file: user, IMAP server and password on three lines
pub fn parse_login_file(contents: &str, port: u16) -> Result<ImapConfig> {
    let mut lines = contents.lines();
    let mut next = |what: &str| {
        lines
            .next()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .ok_or_else(|| Error::Config(format!("login file is missing the {what} line")))
    };

    let user = next("user")?;
    let server = next("server")?;
    let password = next("password")?;

    Ok(ImapConfig::new(server, user, password).with_port(port))
}

/// Resolve IMAP credentials from `login_file`, falling back to `args` and `prompt`.
///
/// Values missing from `args` are asked for through `prompt`; the result is
/// tagged [`Resolution::FromPrompt`] when anything had to be asked.
pub fn resolve_credentials<P: Prompt + ?Sized>(
    login_file: &Path,
    args: &CredentialArgs,
    prompt: &mut P,
) -> Result<Resolution<ImapConfig>> {
    let port = args.port.unwrap_or(DEFAULT_PORT);

    let from_file = std::fs::read_to_string(login_file)
        .map_err(Error::from)
        .and_then(|contents| parse_login_file(&contents, port));

    match from_file {
        Ok(config) => return Ok(Resolution::FromFile(config)),
        Err(e) => warn!(
            "Could not use {}: {e}. Falling back to command line.",
            login_file.display()
        ),
    }

    let mut prompted = false;
    let mut value = |given: &Option<String>, label: &str, secret: bool| match given {
        Some(v) => Ok(v.clone()),
        None => {
            prompted = true;
            prompt.ask(label, secret)
        }
    };

    let user = value(&args.user, "Email", false)?;
    let server = value(&args.server, "IMAP server address", false)?;
    let password = value(&args.password, "Password", true)?;

    let config = ImapConfig::new(server, user, password).with_port(port);
    Ok(if prompted {
        Resolution::FromPrompt(config)
    } else {
        Resolution::FromArgs(config)
    })
}

/// Resolve a word list from `file`, falling back to `inline`.
///
/// Entries are kept verbatim; lines that are only whitespace are dropped.
#[must_use]
pub fn resolve_word_list(file: &Path, inline: &[String]) -> Resolution<Vec<String>> {
    match std::fs::read_to_string(file) {
        Ok(contents) => Resolution::FromFile(non_blank(contents.lines())),
        Err(e) => {
            warn!(
                "Could not read {}: {e}. Using command-line values.",
                file.display()
            );
            Resolution::FromArgs(non_blank(inline.iter().map(String::as_str)))
        }
    }
}

fn non_blank<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}
