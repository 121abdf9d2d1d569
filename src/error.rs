use thiserror::Error;

use crate::rtf::RtfEncodeError;

/// Everything that can stop a copy from reaching the clipboard.
#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("environment variable {0} is not valid UTF-8")]
    NotUnicode(&'static str),

    #[error("rtf encoding: {0}")]
    Encode(#[from] RtfEncodeError),

    #[error("clipboard: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
