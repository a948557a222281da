//! Data models for extraction results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FolderIdError, Result};
use crate::url_parser::{extract_folder_id, is_folder_id};

/// A well-formed Google Drive folder ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FolderId(String);

impl FolderId {
    /// Validate a raw ID (letters, digits, `-` and `_`, at least one).
    pub fn parse(raw: &str) -> Result<Self> {
        Self::try_from(raw.to_string())
    }

    /// Owned counterpart of [`extract_folder_id`].
    pub fn from_url(url: &str) -> Option<Self> {
        extract_folder_id(url).map(|id| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FolderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FolderId {
    type Err = FolderIdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FolderId {
    type Error = FolderIdError;

    fn try_from(value: String) -> Result<Self> {
        if is_folder_id(&value) {
            Ok(Self(value))
        } else {
            Err(FolderIdError::InvalidFolderId(value))
        }
    }
}

impl From<FolderId> for String {
    fn from(id: FolderId) -> Self {
        id.0
    }
}

/// Outcome of running the extractor on one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    pub input: String,
    pub folder_id: Option<FolderId>,
}

impl Extraction {
    pub fn of(input: &str) -> Self {
        Self {
            input: input.to_string(),
            folder_id: FolderId::from_url(input),
        }
    }

    pub fn is_match(&self) -> bool {
        self.folder_id.is_some()
    }
}

impl fmt::Display for Extraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.folder_id.as_ref().map(FolderId::as_str).unwrap_or("-");
        write!(f, "{}\t{}", id, self.input)
    }
}

/// A folder ID found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// File path, or `<stdin>`.
    pub source: String,
    /// 1-based line number.
    pub line: usize,
    pub folder_id: FolderId,
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}\t{}", self.source, self.line, self.folder_id)
    }
}
