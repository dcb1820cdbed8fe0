// src/modfile.rs

//! The module requirement descriptor produced by conversion
//!
//! A [`ModFile`] holds two ordered sequences: requirements (module path
//! plus exact version) and replacements (module path redirected to an
//! alternate source path, optionally pinned). Order follows the order
//! stanzas were encountered in the lock file. Downstream consumers merge
//! the descriptor into their own module file representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A module path with an exact pinned version
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleVersion {
    /// Module import path
    pub path: String,

    /// Exact version, empty when unset
    #[serde(default)]
    pub version: String,
}

impl ModuleVersion {
    /// Create a module/version pair
    pub fn new(path: &str, version: &str) -> Self {
        Self {
            path: path.to_string(),
            version: version.to_string(),
        }
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}@{}", self.path, self.version)
        }
    }
}

/// A single requirement entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Require {
    /// Required module and exact version
    pub module: ModuleVersion,
}

/// A path redirection entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Replace {
    /// Original module path; replacements key by bare path, so the version
    /// side is always empty
    pub old: ModuleVersion,

    /// Redirect target, optionally pinned
    pub new: ModuleVersion,
}

/// The assembled requirement descriptor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModFile {
    /// Required modules, in lock file order
    #[serde(default)]
    pub require: Vec<Require>,

    /// Path replacements, in lock file order
    #[serde(default)]
    pub replace: Vec<Replace>,
}

impl ModFile {
    /// Get a requirement by module path
    pub fn get_require(&self, path: &str) -> Option<&ModuleVersion> {
        self.require
            .iter()
            .map(|r| &r.module)
            .find(|m| m.path == path)
    }

    /// Get a replacement by original module path
    pub fn get_replace(&self, path: &str) -> Option<&Replace> {
        self.replace.iter().find(|r| r.old.path == path)
    }

    /// Check if the descriptor is empty
    pub fn is_empty(&self) -> bool {
        self.require.is_empty() && self.replace.is_empty()
    }
}
