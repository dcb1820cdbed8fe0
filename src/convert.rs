// src/convert.rs

//! Legacy lock file conversion
//!
//! Scans the `[[projects]]`-stanza lock format written by older dependency
//! managers and assembles a [`ModFile`] requirement descriptor. Only the
//! minimal subset of the format is recognized: stanza headers, quoted
//! string values, and `#` comments. Everything else is ignored.
//!
//! # Format
//!
//! ```toml
//! [[projects]]
//!   name = "github.com/pelletier/go-toml"
//!   packages = ["."]
//!   revision = "acdc4509485b587f5e675510c4f2c63e90ff68a8"
//!   version = "v1.1.0"
//!
//! [[projects]]
//!   name = "example.net/upstream/lib"
//!   revision = "c193cecd36b5f7bca6a88c0dca2e3c1e8b358ec9"
//!   source = "https://mirror.example.net/upstream/lib"
//!
//! [solve-meta]
//!   analyzer-name = "dep"
//! ```
//!
//! Keys inside a stanza are written alphabetically, so a `revision` is seen
//! before a `version`. A canonical `version` supersedes the revision; a
//! malformed or non-canonical one is ignored and the revision stands.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::modfile::{ModFile, ModuleVersion, Replace, Require};
use crate::{quote, version};

/// Stanza header opening a new project record
const PROJECT_STANZA: &str = "[[projects]]";

/// Convert a legacy lock file into a module requirement descriptor
///
/// `file` is used only for error messages. The scan is a single forward
/// pass; the returned descriptor lists requirements and replacements in
/// the order their stanzas appear. Fails on a malformed quoted string or
/// on any stanza that ends the scan without both a path and a version.
pub fn convert_lock_file(file: &str, data: &[u8]) -> Result<ModFile> {
    let content = String::from_utf8_lossy(data);

    let mut projects: Vec<ModuleVersion> = Vec::new();
    // Index of the stanza currently receiving key/value lines
    let mut current: Option<usize> = None;
    let mut replacements: HashMap<String, String> = HashMap::new();
    let mut versions: HashMap<String, String> = HashMap::new();

    for (idx, raw) in content.split('\n').enumerate() {
        let lineno = idx + 1;
        // Comment strip runs before quote detection, so a literal '#'
        // inside a quoted value truncates the line
        let line = match raw.find('#') {
            Some(i) => &raw[..i],
            None => raw,
        };
        let line = line.trim();

        if line == PROJECT_STANZA {
            projects.push(ModuleVersion::default());
            current = Some(projects.len() - 1);
            continue;
        }
        if line.starts_with('[') {
            // Some other table; its keys are not ours
            current = None;
            continue;
        }
        let Some(slot) = current else { continue };
        let Some((key, val)) = line.split_once('=') else { continue };
        let key = key.trim();
        let mut val = val.trim().to_string();
        if val.len() >= 2 && val.starts_with('"') && val.ends_with('"') {
            val = quote::unquote(&val).map_err(|source| Error::MalformedQuotedString {
                file: file.to_string(),
                line: lineno,
                source,
            })?;
        }

        let record = &mut projects[slot];
        match key {
            "name" => record.path = val,
            "revision" | "version" => {
                if accept_pinned_version(key, &val) {
                    versions.insert(record.path.clone(), val.clone());
                    record.version = val;
                }
            }
            "source" => {
                replacements.insert(record.path.clone(), normalize_source(&val));
            }
            _ => {}
        }
    }

    let mut mf = ModFile::default();
    for project in projects {
        if project.path.is_empty() || project.version.is_empty() {
            return Err(Error::IncompleteProject {
                file: file.to_string(),
                path: project.path,
            });
        }
        if let Some(new_path) = replacements.get(&project.path) {
            mf.replace.push(Replace {
                old: ModuleVersion::new(&project.path, ""),
                new: ModuleVersion {
                    path: new_path.clone(),
                    version: versions.get(&project.path).cloned().unwrap_or_default(),
                },
            });
        }
        mf.require.push(Require { module: project });
    }

    debug!(
        "converted {}: {} requirements, {} replacements",
        file,
        mf.require.len(),
        mf.replace.len()
    );
    Ok(mf)
}

/// Decide whether a pinned-version key/value pair is accepted
///
/// A `revision` is always accepted. A `version` is accepted only when it
/// is already canonical, so that a usable revision is never overwritten by
/// a malformed or abbreviated tag.
fn accept_pinned_version(key: &str, val: &str) -> bool {
    key != "version" || version::is_canonical(val)
}

/// Normalize a declared source URL to a bare module path
///
/// - `https://github.com/org/repo` → `github.com/org/repo`
/// - `ssh://git@github.com/org/repo` → `github.com/org/repo`
/// - `git@github.com:org/repo` → `github.com/org/repo`
/// - anything else is left unchanged
fn normalize_source(val: &str) -> String {
    if let Some(rest) = val.strip_prefix("https://") {
        rest.to_string()
    } else if let Some(rest) = val.strip_prefix("ssh://git@") {
        rest.to_string()
    } else if let Some(rest) = val.strip_prefix("git@") {
        rest.replacen(':', "/", 1)
    } else {
        val.to_string()
    }
}
