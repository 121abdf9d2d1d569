//! The message being linked and where it comes from.
//!
//! The mail client hands the current message to the command through three
//! environment variables. [`Message::from_lookup`] takes the variable source
//! as a closure so tests never touch the process environment.

use std::env::{self, VarError};

use crate::error::{Error, Result};

pub const ENV_FROM: &str = "MM_FROM";
pub const ENV_SUBJECT: &str = "MM_SUBJECT";
pub const ENV_MESSAGE_ID: &str = "MM_MESSAGE_ID";

/// Immutable sender / subject / message-id triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: String,
    subject: String,
    message_id: String,
}

impl Message {
    pub fn new(
        sender: impl Into<String>,
        subject: impl Into<String>,
        message_id: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
            message_id: message_id.into(),
        }
    }

    /// Read the message from `MM_FROM`, `MM_SUBJECT` and `MM_MESSAGE_ID`.
    ///
    /// # Errors
    /// [`Error::MissingEnv`] if a variable is unset, [`Error::NotUnicode`] if
    /// it is set but not valid UTF-8.
    pub fn from_env() -> Result<Self> {
        Self::from_source(|name| match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::NotUnicode(name)),
        })
    }

    /// Build the message from an arbitrary variable source.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self::from_source(|name| Ok(lookup(name)))
    }

    fn from_source<F>(mut source: F) -> Result<Self>
    where
        F: FnMut(&'static str) -> Result<Option<String>>,
    {
        let mut var = |name: &'static str| -> Result<String> {
            source(name)?.ok_or(Error::MissingEnv(name))
        };
        let sender = var(ENV_FROM)?;
        let subject = var(ENV_SUBJECT)?;
        let message_id = var(ENV_MESSAGE_ID)?;
        Ok(Self::new(sender, subject, message_id))
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }
}
