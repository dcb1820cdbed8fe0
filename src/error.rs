// src/error.rs

//! Error types for lock file conversion

use thiserror::Error;

use crate::quote::QuoteError;

/// Errors that can occur while converting a lock file
///
/// Both conditions are terminal: the conversion aborts with no partial
/// descriptor, and callers surface the message to the end user verbatim.
#[derive(Error, Debug)]
pub enum Error {
    /// A field value failed quoted-string decoding
    #[error("{file}:{line}: invalid quoted string: {source}")]
    MalformedQuotedString {
        file: String,
        line: usize,
        #[source]
        source: QuoteError,
    },

    /// A project stanza ended the scan without both a path and a version
    #[error("{file}: empty [[projects]] stanza ({path})")]
    IncompleteProject { file: String, path: String },
}

pub type Result<T> = std::result::Result<T, Error>;
