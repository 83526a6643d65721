//! Test-file path derivation.
//!
//! Pure string transforms — existence and collision checks on the derived
//! path are the caller's concern.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical Go source-file suffix.
pub const SOURCE_SUFFIX: &str = ".go";

/// Canonical Go test-file suffix.
pub const TEST_SUFFIX: &str = "_test.go";

/// A source-file path, with its derived test-file counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePath(String);

impl SourcePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this path already names a test file.
    pub fn is_test_path(&self) -> bool {
        self.0.ends_with(TEST_SUFFIX)
    }

    /// The path the generated test file should be written to: identity for
    /// a path that already is a test path, otherwise the `.go` suffix is
    /// rewritten to `_test.go`. A path without the source suffix keeps its
    /// full name and gets the test suffix appended. Idempotent.
    pub fn test_path(&self) -> SourcePath {
        if self.is_test_path() {
            return self.clone();
        }
        let stem = self.0.strip_suffix(SOURCE_SUFFIX).unwrap_or(&self.0);
        SourcePath(format!("{stem}{TEST_SUFFIX}"))
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourcePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for SourcePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}
