// tests/conversion_integration.rs
//! Integration tests for legacy lock file conversion
//!
//! These tests validate the end-to-end conversion of realistic lock files,
//! including:
//! - Requirement extraction across multiple [[projects]] stanzas
//! - Field priority between revision and version keys
//! - Source URL normalization into replacements
//! - Terminal error reporting for malformed input

use lockconv::{Error, ModuleVersion, convert_lock_file};

// =============================================================================
// FIXTURES
// =============================================================================

/// A lock file the way the legacy tool writes it: memo header, aligned
/// fields, alphabetical keys, and a trailing solve-meta table.
const FULL_LOCK: &str = r#"# This file is autogenerated, do not edit; changes may be undone by the next update.


[[projects]]
  digest = "1:433763f10d88181ded95aedeb24fcca94a7f1a2a21f1b7fa3b299e904c2d194c"
  name = "github.com/pelletier/go-toml"
  packages = ["."]
  pruneopts = "UT"
  revision = "acdc4509485b587f5e675510c4f2c63e90ff68a8"
  version = "v1.1.0"

[[projects]]
  branch = "master"
  digest = "1:7e94be341e8ac260b6fa9259f77fa7f0866bce8b2c60dc9806e0b17ba542f534"
  name = "example.net/upstream/lib"
  packages = ["."]
  pruneopts = "UT"
  revision = "c193cecd36b5f7bca6a88c0dca2e3c1e8b358ec9"
  source = "https://mirror.example.net/upstream/lib"

[[projects]]
  name = "example.org/forked/tool"
  revision = "3f4c3b210e5fca88da16c1a1a79b8e2c9a2c3d4e"
  source = "git@forge.example.org:forked/tool"
  version = "v0.4.0-rc.1"

[[projects]]
  name = "example.org/ssh/hosted"
  revision = "9a1b2c3d4e5f60718293a4b5c6d7e8f901234567"
  source = "ssh://git@forge.example.org/ssh/hosted"

[solve-meta]
  analyzer-name = "dep"
  analyzer-version = 1
  input-imports = ["github.com/pelletier/go-toml"]
  solver-name = "gps-cdcl"
  solver-version = 1
"#;

// =============================================================================
// CONVERSION
// =============================================================================

#[test]
fn test_full_lock_requirements() {
    let mf = convert_lock_file("full.lock", FULL_LOCK.as_bytes()).unwrap();

    assert_eq!(mf.require.len(), 4);

    // File order is preserved
    let paths: Vec<&str> = mf.require.iter().map(|r| r.module.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "github.com/pelletier/go-toml",
            "example.net/upstream/lib",
            "example.org/forked/tool",
            "example.org/ssh/hosted",
        ]
    );

    // Canonical version tags supersede revisions; everything else keeps
    // the raw revision
    assert_eq!(
        mf.get_require("github.com/pelletier/go-toml").unwrap().version,
        "v1.1.0"
    );
    assert_eq!(
        mf.get_require("example.net/upstream/lib").unwrap().version,
        "c193cecd36b5f7bca6a88c0dca2e3c1e8b358ec9"
    );
    assert_eq!(
        mf.get_require("example.org/forked/tool").unwrap().version,
        "v0.4.0-rc.1"
    );
}

#[test]
fn test_full_lock_replacements() {
    let mf = convert_lock_file("full.lock", FULL_LOCK.as_bytes()).unwrap();

    assert_eq!(mf.replace.len(), 3);

    // https:// source, pinned by revision only
    let upstream = mf.get_replace("example.net/upstream/lib").unwrap();
    assert_eq!(upstream.old, ModuleVersion::new("example.net/upstream/lib", ""));
    assert_eq!(
        upstream.new,
        ModuleVersion::new(
            "mirror.example.net/upstream/lib",
            "c193cecd36b5f7bca6a88c0dca2e3c1e8b358ec9"
        )
    );

    // git@host:path source, pinned by the superseding version tag
    let forked = mf.get_replace("example.org/forked/tool").unwrap();
    assert_eq!(
        forked.new,
        ModuleVersion::new("forge.example.org/forked/tool", "v0.4.0-rc.1")
    );

    // ssh://git@ source
    let hosted = mf.get_replace("example.org/ssh/hosted").unwrap();
    assert_eq!(
        hosted.new,
        ModuleVersion::new(
            "forge.example.org/ssh/hosted",
            "9a1b2c3d4e5f60718293a4b5c6d7e8f901234567"
        )
    );

    // No source declared, no replacement
    assert!(mf.get_replace("github.com/pelletier/go-toml").is_none());
}

// =============================================================================
// ERROR REPORTING
// =============================================================================

#[test]
fn test_incomplete_stanza_is_terminal() {
    let lock = r#"
[[projects]]
  branch = "master"
  name = "example.net/unpinned"
"#;
    let err = convert_lock_file("broken.lock", lock.as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "broken.lock: empty [[projects]] stanza (example.net/unpinned)"
    );
}

#[test]
fn test_malformed_quote_is_terminal() {
    // The backslash escapes the closing quote, so the literal never ends
    let lock = "[[projects]]\n  name = \"example.net/lib\\\"\n  revision = \"deadbeef\"\n";
    let err = convert_lock_file("broken.lock", lock.as_bytes()).unwrap_err();
    match err {
        Error::MalformedQuotedString { file, line, .. } => {
            assert_eq!(file, "broken.lock");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}
