// src/lib.rs

//! Lock file conversion for module-based dependency management
//!
//! Converts the pinned-revision lock files written by legacy dependency
//! managers into a normalized module requirement descriptor: an ordered
//! list of required module paths with exact versions, plus path
//! replacements derived from declared source URLs.
//!
//! # Architecture
//!
//! - Line-oriented: a single forward scan over the lock file text, tracking
//!   the current `[[projects]]` stanza; no full TOML parse
//! - Lenient by design: unknown keys, unknown stanzas, and lines outside
//!   any stanza are ignored; the source format carries many fields this
//!   conversion does not need
//! - Terminal errors only: a malformed quoted string or an incomplete
//!   project stanza aborts the whole conversion; there is no partial result

pub mod convert;
mod error;
pub mod modfile;
pub mod quote;
pub mod version;

pub use convert::convert_lock_file;
pub use error::{Error, Result};
pub use modfile::{ModFile, ModuleVersion, Replace, Require};
