//! msglink library crate
//!
//! This crate provides the core functionality for the `msglink` CLI, which a
//! mail client runs to put a link to the selected message on the clipboard.
//! It is organized into small modules: `message` (the sender / subject /
//! message-id triple and its environment source), `rtf` (RTF Unicode
//! escaping), `payload` (building the five clipboard representations) and
//! `clipboard` (the clipboard sink). The binary `src/main.rs` calls
//! `msglink_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//! - `run_with()`: build and publish the payload for a message through any
//!   clipboard sink.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod error;
pub mod message;
pub mod payload;
pub mod rtf;

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{debug, info};

use crate::clipboard::{ClipboardSink, SystemClipboard};
pub use crate::error::{Error, Result};
use crate::message::Message;
use crate::payload::{LinkPayload, build};

/// Copy a link to the current mail message to the clipboard.
///
/// The message is read from MM_FROM, MM_SUBJECT and MM_MESSAGE_ID and
/// published as URL, URL title, HTML, RTF and plain text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Put a Markdown link instead of the bare URL in the plain-text slot
    #[arg(short = 'm', long = "markdown", action = ArgAction::SetTrue)]
    markdown: bool,
}

/// Run the msglink CLI.
///
/// Parses the command line, reads the message from the environment and
/// writes every representation to the system clipboard.
///
/// Exit codes:
/// - `0`: link copied, or help / version printed.
/// - `1`: unknown argument (usage is printed), missing environment variable
///   or clipboard failure.
///
/// Example:
///
/// ```no_run
/// msglink_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::try_parse_from(normalize_args(std::env::args_os())).unwrap_or_else(|e| {
        let code = match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = e.print();
        std::process::exit(code);
    });

    let result = Message::from_env().and_then(|message| {
        let mut clipboard = SystemClipboard::new()?;
        run_with(&message, cli.markdown, &mut clipboard)
    });
    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Build the payload for `message` and hand it to `sink`.
///
/// Returns the payload that was published.
pub fn run_with<S>(message: &Message, markdown: bool, sink: &mut S) -> Result<LinkPayload>
where
    S: ClipboardSink + ?Sized,
{
    debug!(
        "message id {:?} from {:?}, markdown plain text: {}",
        message.message_id(),
        message.sender(),
        markdown
    );

    let payload = build(message, markdown)?;
    sink.publish(&payload)?;
    info!("copied link to {}", payload.url);
    Ok(payload)
}

/// clap has no single-dash long flags; accept `-help` as `--help`.
fn normalize_args<I>(args: I) -> impl Iterator<Item = OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|a| if a == "-help" { OsString::from("--help") } else { a })
}
