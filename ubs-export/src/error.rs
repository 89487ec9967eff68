//! Export error type

use std::error::Error;
use std::fmt;

/// Errors surfaced by the generation and write layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The parse result holds no convertible rules; there is nothing to
    /// export.
    NoRules,
    /// Producing the serialized document failed.
    SerializationError(String),
    /// Building the ZIP archive failed.
    ArchiveError(String),
    /// Writing an output file failed.
    WriteError(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoRules => write!(f, "no convertible rules in input"),
            ExportError::SerializationError(msg) => write!(f, "serialization failed: {}", msg),
            ExportError::ArchiveError(msg) => write!(f, "archive creation failed: {}", msg),
            ExportError::WriteError(msg) => write!(f, "write failed: {}", msg),
        }
    }
}

impl Error for ExportError {}
