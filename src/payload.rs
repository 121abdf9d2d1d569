//! Clipboard payload assembly.
//!
//! A single message link is published in five representations at once so
//! that every kind of paste target gets something useful: a bare URL, a URL
//! title, an HTML anchor, an RTF hyperlink field and plain text (either the
//! URL or a Markdown link). All five carry the same URL and the same title.

use crate::message::Message;
use crate::rtf::{self, RtfEncodeError};

/// Scheme and `<` marker that prefix every message link.
pub const MESSAGE_URL_PREFIX: &str = "message://%3c";

/// The closed set of clipboard representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTag {
    Url,
    UrlName,
    Html,
    RichText,
    PlainText,
}

impl ContentTag {
    pub const ALL: [ContentTag; 5] = [
        ContentTag::Url,
        ContentTag::UrlName,
        ContentTag::Html,
        ContentTag::RichText,
        ContentTag::PlainText,
    ];

    /// Uniform type identifier the representation is registered under.
    pub fn uti(self) -> &'static str {
        match self {
            ContentTag::Url => "public.url",
            ContentTag::UrlName => "public.url-name",
            ContentTag::Html => "public.html",
            ContentTag::RichText => "public.rtf",
            ContentTag::PlainText => "public.utf8-plain-text",
        }
    }
}

/// One string per [`ContentTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPayload {
    pub url: String,
    pub url_name: String,
    pub html: String,
    pub rich_text: String,
    pub plain_text: String,
}

impl LinkPayload {
    pub fn get(&self, tag: ContentTag) -> &str {
        match tag {
            ContentTag::Url => &self.url,
            ContentTag::UrlName => &self.url_name,
            ContentTag::Html => &self.html,
            ContentTag::RichText => &self.rich_text,
            ContentTag::PlainText => &self.plain_text,
        }
    }

    /// All five `(tag, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (ContentTag, &str)> {
        ContentTag::ALL.into_iter().map(move |tag| (tag, self.get(tag)))
    }
}

/// Build every representation for `message`.
///
/// With `force_markdown` the plain-text entry becomes `[subject](url)`;
/// otherwise it is the URL alone. The subject is used verbatim in the URL
/// name and the HTML anchor, and RTF-escaped in the rich-text field.
///
/// # Errors
/// Only [`RtfEncodeError`], which indicates a bug in the escape table.
pub fn build(message: &Message, force_markdown: bool) -> Result<LinkPayload, RtfEncodeError> {
    let url = message_url(message.message_id());
    let subject = message.subject();
    let title = rtf::escape(subject)?;

    let plain_text = if force_markdown {
        format!("[{}]({})", subject, url)
    } else {
        url.clone()
    };

    Ok(LinkPayload {
        html: format!("<a href=\"{}\">{}</a>", url, subject),
        rich_text: format!(
            "{{\\rtf1\\ansi\\deff0{{\\field{{\\*\\fldinst{{HYPERLINK \"{}\"}}}}{{\\fldrslt {}}}}}}}",
            url, title
        ),
        url_name: subject.to_owned(),
        plain_text,
        url,
    })
}

/// `message://` link for a message identifier.
pub fn message_url(message_id: &str) -> String {
    format!("{}{}", MESSAGE_URL_PREFIX, percent_encode(message_id))
}

/// Percent-encode every byte outside `A-Z a-z 0-9 _ . - ~ /`.
///
/// The output has no `&`, `<`, `>`, quotes, backslashes or braces, so it can
/// go into an href attribute or an RTF field instruction as-is.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-' | b'~' | b'/') {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}
