//! Error types for the folder_id crate.

use thiserror::Error;

/// Errors raised around folder ID extraction.
///
/// The extractor itself never fails; these come from validating raw IDs,
/// from callers that insist on a match, and from reading input files.
#[derive(Error, Debug)]
pub enum FolderIdError {
    #[error("Invalid folder ID: {0}")]
    InvalidFolderId(String),

    #[error("No folder ID found in: {0}")]
    NoFolderId(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("No files matched pattern: {0}")]
    NoFilesMatched(String),
}

/// Result type alias for FolderIdError.
pub type Result<T> = std::result::Result<T, FolderIdError>;
