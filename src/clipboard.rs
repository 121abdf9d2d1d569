//! Publishing a [`LinkPayload`] to the clipboard.
//!
//! [`ClipboardSink`] is the seam between payload assembly and the platform:
//! the binary uses [`SystemClipboard`], tests record what would have been
//! written.

use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext};
use log::debug;

use crate::error::{Error, Result};
use crate::payload::{ContentTag, LinkPayload};

/// Anything that can take all representations of a link at once.
pub trait ClipboardSink {
    /// Replace the current clipboard contents with every entry of `payload`.
    fn publish(&mut self, payload: &LinkPayload) -> Result<()>;
}

/// The OS clipboard, via `clipboard-rs`.
///
/// Initialisation fails in headless sessions (no display server, CI); the
/// error is surfaced to the caller instead of being ignored.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(format!("init: {}", e)))?;
        Ok(Self { ctx })
    }
}

impl ClipboardSink for SystemClipboard {
    fn publish(&mut self, payload: &LinkPayload) -> Result<()> {
        self.ctx
            .clear()
            .map_err(|e| Error::Clipboard(format!("clear: {}", e)))?;
        let contents: Vec<ClipboardContent> = payload.entries().map(to_content).collect();
        debug!("writing {} clipboard representations", contents.len());
        self.ctx
            .set(contents)
            .map_err(|e| Error::Clipboard(format!("set: {}", e)))
    }
}

/// Native content kind for HTML, RTF and text; a custom format named by the
/// UTI for the URL entries.
fn to_content((tag, value): (ContentTag, &str)) -> ClipboardContent {
    match tag {
        ContentTag::Html => ClipboardContent::Html(value.to_owned()),
        ContentTag::RichText => ClipboardContent::Rtf(value.to_owned()),
        ContentTag::PlainText => ClipboardContent::Text(value.to_owned()),
        ContentTag::Url | ContentTag::UrlName => {
            ClipboardContent::Other(tag.uti().to_owned(), value.as_bytes().to_vec())
        }
    }
}
