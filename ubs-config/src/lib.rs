//! Persisted state for the ubs converter.
//!
//! A single small JSON record remembering the last-used output directory.
//! Callers decide where the record lives; this crate never touches
//! environment variables or home-directory discovery. Loading is always
//! non-fatal: a missing or corrupt record degrades to the default
//! ("no directory selected").

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Last-used output directory, if one was ever chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl ToolConfig {
    /// Load the record from `path`. Missing or unreadable files and
    /// malformed JSON all yield the default record.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let Ok(raw) = fs::read_to_string(path.as_ref()) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Write the record to `path` as pretty JSON.
    ///
    /// Callers may ignore the error; losing the record only costs the
    /// saved directory default.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path.as_ref(), json)
    }
}
