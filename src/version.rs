// src/version.rs

//! Validity and canonicalization of pinned module versions
//!
//! Pinned versions use the `v`-prefixed semantic version form (`v1.2.3`,
//! `v0.4.0-rc.1`). Minor and patch components may be omitted in valid
//! input; the canonical form always spells out all three and drops any
//! build metadata.

use semver::{BuildMetadata, Version};

/// Check whether a string is a well-formed pinned version
///
/// Examples:
/// - "v1.2.3" → true
/// - "v1.2" → true (omitted patch)
/// - "v1.2.3-rc.1" → true
/// - "1.2.3" → false (missing prefix)
/// - "master" → false
pub fn is_valid(v: &str) -> bool {
    parse(v).is_some()
}

/// Canonicalize a pinned version, or None if it is not valid
///
/// The canonical form is `v` plus the full major.minor.patch triple, with
/// any prerelease retained and any build metadata dropped:
/// - "v1.2" → "v1.2.0"
/// - "v1.2.3+build.7" → "v1.2.3"
/// - "v1.2.3-rc.1" → "v1.2.3-rc.1"
pub fn canonical(v: &str) -> Option<String> {
    let mut parsed = parse(v)?;
    parsed.build = BuildMetadata::EMPTY;
    Some(format!("v{parsed}"))
}

/// Check whether a pinned version is already in canonical form
pub fn is_canonical(v: &str) -> bool {
    canonical(v).as_deref() == Some(v)
}

/// Parse a `v`-prefixed version, zero-filling omitted minor/patch components
fn parse(v: &str) -> Option<Version> {
    let rest = v.strip_prefix('v')?;
    let core_end = rest.find(['-', '+']).unwrap_or(rest.len());
    let (core, suffix) = rest.split_at(core_end);
    let expanded = match core.matches('.').count() {
        0 => format!("{core}.0.0{suffix}"),
        1 => format!("{core}.0{suffix}"),
        2 => return Version::parse(rest).ok(),
        _ => return None,
    };
    Version::parse(&expanded).ok()
}
