use std::path::PathBuf;

use anyhow::Context;
use arxiv_digest::{
    CredentialArgs, DEFAULT_FOLDER, DEFAULT_PORT, DEFAULT_SENDER, FetchOptions, Filter,
    ImapMailbox, Mailbox, OutputFormat, Report, Sink, TerminalPrompt, collect_records,
    fetch_digests, resolve_credentials, resolve_word_list,
};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the IMAP password when no login file is used
const PASSWORD_ENV: &str = "ARXIV_DIGEST_PASSWORD";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "arxiv-digest",
    version,
    about = "arXiv mailing list checker",
    long_about = "Fetch arXiv digest emails over IMAP and report the preprints matching keywords or authors.",
    after_help = "Credentials, keywords and authors are read from their files first and fall back to the command line."
)]
struct Cli {
    #[arg(
        long = "login-file",
        value_name = "PATH",
        default_value = "login.txt",
        help = "File storing email login credentials: user, IMAP server, password"
    )]
    login_file: PathBuf,
    #[arg(long, help = "Email address")]
    user: Option<String>,
    #[arg(long = "imap", value_name = "HOST", help = "IMAP server address")]
    server: Option<String>,
    #[arg(long, default_value_t = DEFAULT_PORT, help = "IMAP port")]
    port: u16,
    #[arg(long, default_value = DEFAULT_FOLDER, help = "Folder to look for emails")]
    folder: String,
    #[arg(long, default_value = DEFAULT_SENDER, help = "Sender the digests come from")]
    sender: String,
    #[arg(
        long = "keywords-file",
        value_name = "PATH",
        default_value = "keywords.txt",
        help = "Text file storing keywords to be searched, one per line"
    )]
    keywords_file: PathBuf,
    #[arg(
        long = "authors-file",
        value_name = "PATH",
        default_value = "authors.txt",
        help = "Text file storing authors to be searched, one per line"
    )]
    authors_file: PathBuf,
    #[arg(long, num_args = 1.., help = "Space-separated keywords to search")]
    keywords: Vec<String>,
    #[arg(long, num_args = 1.., help = "Space-separated authors to search")]
    authors: Vec<String>,
    #[arg(short, long, value_name = "PATH", help = "Write results to this file")]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text", help = "Report format")]
    format: FormatArg,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let credentials = resolve_credentials(
        &cli.login_file,
        &CredentialArgs {
            user: cli.user.clone(),
            server: cli.server.clone(),
            password: std::env::var(PASSWORD_ENV).ok(),
            port: Some(cli.port),
        },
        &mut TerminalPrompt,
    )?;
    info!("Using credentials from {}", credentials.source());

    let keywords = resolve_word_list(&cli.keywords_file, &cli.keywords);
    let authors = resolve_word_list(&cli.authors_file, &cli.authors);
    let filter = Filter::new(keywords.into_inner(), authors.into_inner());
    if filter.is_empty() {
        info!("No keywords or authors configured, nothing can match");
    }

    let mut mailbox = ImapMailbox::connect(credentials.get()).context("connecting to mailbox")?;
    let options = FetchOptions {
        folder: cli.folder,
        sender: cli.sender,
    };
    let digests = fetch_digests(&mut mailbox, &options)?;
    if let Err(e) = mailbox.logout() {
        warn!("Logout failed: {e}");
    }

    let records = collect_records(&digests);
    let report = Report::new(&records, &filter);

    report.write(&Sink::from(cli.output), cli.format.into())?;

    Ok(())
}
