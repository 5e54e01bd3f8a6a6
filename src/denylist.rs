//! Denylist management module
//!
//! Holds the set of exact passwords rejected by the policy. The built-in
//! entries are always present; an optional file can add more.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Passwords rejected regardless of configuration.
pub const BUILTIN_DENYLIST: [&str; 4] = ["password", "12345678", "admin", "password123"];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of disallowed passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Denylist {
    /// Denylist with only the built-in entries.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in entries plus one entry per non-blank line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let mut denylist = Self::builtin();
        denylist.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", denylist.len(), path);

        Ok(denylist)
    }

    /// Adds entries, trimmed and lowercased. Blank entries are skipped.
    pub fn extend<'a, I: IntoIterator<Item = &'a str>>(&mut self, entries: I) {
        self.entries.extend(
            entries
                .into_iter()
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty()),
        );
    }

    /// Returns `true` if `password` matches an entry, ignoring case.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
