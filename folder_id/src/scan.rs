//! Batch scanning of text files for folder URLs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glob::glob;
use tracing::{debug, warn};

use crate::error::{FolderIdError, Result};
use crate::models::{FolderId, Occurrence};
use crate::url_parser::extract_folder_ids;

/// Source name used for standard input.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Scan `reader` line by line and collect every folder ID found.
///
/// Lines are decoded lossily, so non-UTF-8 bytes never hide the folder
/// URLs around them.
pub fn scan_reader<R: BufRead>(source: &str, reader: R) -> Result<Vec<Occurrence>> {
    let mut occurrences = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        for id in extract_folder_ids(&line) {
            occurrences.push(Occurrence {
                source: source.to_string(),
                line: idx + 1,
                folder_id: FolderId::parse(id)?,
            });
        }
    }

    debug!(source, found = occurrences.len(), "scanned input");
    Ok(occurrences)
}

/// Scan a file on disk.
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<Vec<Occurrence>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    scan_reader(&path.display().to_string(), BufReader::new(file))
}

/// Expand file patterns into a sorted, de-duplicated list of files.
///
/// Each pattern goes through brace expansion first, then glob matching.
/// A pattern without glob matches is used as a literal path if that file
/// exists.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        for expanded_pattern in expand_braces(pattern) {
            let matches: Vec<PathBuf> = glob(&expanded_pattern)?
                .filter_map(|r| r.ok())
                .filter(|p| p.is_file())
                .collect();

            if matches.is_empty() {
                let path = PathBuf::from(&expanded_pattern);
                if path.is_file() {
                    files.push(path);
                } else {
                    warn!(pattern = %expanded_pattern, "no files matched pattern");
                }
            } else {
                files.extend(matches);
            }
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(FolderIdError::NoFilesMatched(patterns.join(" ")));
    }

    Ok(files)
}

/// Expand brace patterns like links_{1,2,3}.txt into multiple patterns.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    if let Some(start) = pattern.find('{') {
        if let Some(end) = pattern[start..].find('}') {
            let end = start + end;
            let prefix = &pattern[..start];
            let suffix = &pattern[end + 1..];
            let alternatives = &pattern[start + 1..end];

            return alternatives
                .split(',')
                .flat_map(|alt| {
                    let expanded = format!("{}{}{}", prefix, alt.trim(), suffix);
                    expand_braces(&expanded)
                })
                .collect();
        }
    }

    vec![pattern.to_string()]
}
