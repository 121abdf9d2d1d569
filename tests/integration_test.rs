use std::collections::HashMap;

use msglink_lib::clipboard::ClipboardSink;
use msglink_lib::message::{ENV_FROM, ENV_MESSAGE_ID, ENV_SUBJECT, Message};
use msglink_lib::payload::{ContentTag, LinkPayload};
use msglink_lib::{Error, Result};

/// Records every payload instead of touching the OS clipboard.
#[derive(Default)]
struct RecordingSink {
    published: Vec<LinkPayload>,
}

impl ClipboardSink for RecordingSink {
    fn publish(&mut self, payload: &LinkPayload) -> Result<()> {
        self.published.clear();
        self.published.push(payload.clone());
        Ok(())
    }
}

struct FailingSink;

impl ClipboardSink for FailingSink {
    fn publish(&mut self, _payload: &LinkPayload) -> Result<()> {
        Err(Error::Clipboard("no display".into()))
    }
}

fn env(subject: &str, id: &str) -> HashMap<&'static str, String> {
    HashMap::from([
        (ENV_FROM, "Ann <ann@example.com>".to_string()),
        (ENV_SUBJECT, subject.to_string()),
        (ENV_MESSAGE_ID, id.to_string()),
    ])
}

#[test]
fn integration_env_to_clipboard() {
    let vars = env("Hello", "abc123");
    let message = Message::from_lookup(|k| vars.get(k).cloned()).expect("message");
    let mut sink = RecordingSink::default();

    let payload = msglink_lib::run_with(&message, false, &mut sink).expect("run");
    assert_eq!(sink.published, vec![payload.clone()]);
    assert_eq!(payload.get(ContentTag::Url), "message://%3cabc123");
    assert_eq!(payload.get(ContentTag::PlainText), "message://%3cabc123");
    assert_eq!(payload.get(ContentTag::UrlName), "Hello");
}

#[test]
fn integration_markdown_and_unicode_subject() {
    let vars = env("Café {draft}", "x@y");
    let message = Message::from_lookup(|k| vars.get(k).cloned()).expect("message");
    let mut sink = RecordingSink::default();

    let payload = msglink_lib::run_with(&message, true, &mut sink).expect("run");
    assert_eq!(payload.plain_text, "[Café {draft}](message://%3cx%40y)");
    assert!(
        payload
            .rich_text
            .ends_with("{\\fldrslt Caf\\u233? \\u123?draft\\u125?}}}")
    );
}

#[test]
fn integration_missing_env_is_fatal() {
    let mut vars = env("Hello", "abc123");
    vars.remove(ENV_SUBJECT);
    let err = Message::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
    assert_eq!(err.to_string(), "environment variable MM_SUBJECT is not set");
}

#[test]
fn integration_sink_error_propagates() {
    let message = Message::new("a", "b", "c");
    let err = msglink_lib::run_with(&message, false, &mut FailingSink).unwrap_err();
    assert!(matches!(err, Error::Clipboard(_)));
}
