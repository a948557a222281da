//! folder_id - Extract Google Drive folder IDs from folder URLs.
//!
//! This library provides functionality to:
//! - Pull the folder ID out of `https://drive.google.com/drive/u/<n>/folders/<ID>` URLs
//! - Validate raw folder IDs
//! - Scan text files for folder URLs
//!
//! A URL without a folder ID is not an error: the extractor returns `None`
//! and leaves the decision to the caller.
//!
//! # Example
//!
//! ```
//! use folder_id::{extract_folder_id, FolderId};
//!
//! let url = "https://drive.google.com/drive/u/1/folders/1A2b3C-xyz_9";
//! assert_eq!(extract_folder_id(url), Some("1A2b3C-xyz_9"));
//!
//! let owned = FolderId::from_url(url).unwrap();
//! assert_eq!(owned.as_str(), "1A2b3C-xyz_9");
//! ```

pub mod error;
pub mod models;
pub mod scan;
pub mod url_parser;

// Re-exports for convenience
pub use error::{FolderIdError, Result};
pub use models::{Extraction, FolderId, Occurrence};
pub use url_parser::{extract_folder_id, extract_folder_ids};
