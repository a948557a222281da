//! URL parser for extracting Google Drive folder IDs from URLs.

use regex::Regex;
use std::sync::LazyLock;

/// Folder listing URL for a signed-in user slot, e.g.
/// `https://drive.google.com/drive/u/0/folders/<ID>`.
///
/// The user index uses `[0-9]` rather than `\d`, which would also accept
/// non-ASCII digits.
static FOLDER_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://drive\.google\.com/drive/u/[0-9]+/folders/([a-zA-Z0-9_-]+)")
        .expect("Invalid folder URL regex")
});

/// Valid Google Drive ID pattern (alphanumeric, underscore, hyphen).
static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid ID regex"));

/// Extract the folder ID from a Google Drive folder URL.
///
/// The URL may appear anywhere in `url`; only the
/// `https://drive.google.com/drive/u/<digits>/folders/` prefix and the ID
/// itself have to be contiguous. The ID is returned exactly as written and
/// ends at the first character that is not a letter, digit, `-` or `_`.
///
/// Anything that does not contain such a URL, including the empty string,
/// yields `None`.
///
/// # Examples
///
/// ```
/// use folder_id::url_parser::extract_folder_id;
///
/// let id = extract_folder_id("https://drive.google.com/drive/u/3/folders/abcDEF-123?usp=sharing");
/// assert_eq!(id, Some("abcDEF-123"));
///
/// assert_eq!(extract_folder_id("https://drive.google.com/file/d/abc/view"), None);
/// ```
pub fn extract_folder_id(url: &str) -> Option<&str> {
    FOLDER_URL_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Extract every folder ID in `text`, in order of appearance.
pub fn extract_folder_ids(text: &str) -> Vec<&str> {
    FOLDER_URL_REGEX
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|id| id.as_str())
        .collect()
}

/// Check whether `candidate` as a whole is a well-formed Drive ID.
pub fn is_folder_id(candidate: &str) -> bool {
    ID_REGEX.is_match(candidate)
}
