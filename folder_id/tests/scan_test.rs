//! Tests for scanning files on disk.

use std::fs;

use folder_id::error::FolderIdError;
use folder_id::scan::{expand_patterns, scan_file};
use tempfile::tempdir;

mod patterns {
    use super::*;

    #[test]
    fn test_glob_and_braces() {
        let dir = tempdir().unwrap();
        for name in ["a.txt", "b.txt", "c.csv"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let glob_pattern = format!("{}/*.txt", dir.path().display());
        let brace_pattern = format!("{}/{{a,c}}.*", dir.path().display());

        let files = expand_patterns(&[glob_pattern, brace_pattern]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.txt", "b.txt", "c.csv"]);
    }

    #[test]
    fn test_nothing_matched() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/*.missing", dir.path().display());

        let err = expand_patterns(&[pattern]).unwrap_err();
        assert!(matches!(err, FolderIdError::NoFilesMatched(_)));
    }

    #[test]
    fn test_literal_path_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links[1].txt");
        fs::write(&path, "").unwrap();

        // `[1]` is a character class to glob, so only the literal path matches.
        let pattern = path.display().to_string();
        let files = expand_patterns(&[pattern]).unwrap();

        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_invalid_glob() {
        let err = expand_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(err, FolderIdError::GlobPattern(_)));
    }
}

mod files {
    use super::*;

    #[test]
    fn test_scan_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.md");
        fs::write(
            &path,
            "# Shared folders\n\
             - [Docs](https://drive.google.com/drive/u/0/folders/docs_01)\n\
             - [Sheet](https://drive.google.com/file/d/sheet/view)\n\
             - https://drive.google.com/drive/u/1/folders/media-02?usp=sharing\n",
        )
        .unwrap();

        let found = scan_file(&path).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].line, 2);
        assert_eq!(found[0].folder_id.as_str(), "docs_01");
        assert_eq!(found[1].line, 4);
        assert_eq!(found[1].folder_id.as_str(), "media-02");
        assert_eq!(found[0].source, path.display().to_string());
    }

    #[test]
    fn test_scan_file_with_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        let mut content = b"https://drive.google.com/drive/u/0/folders/first\n".to_vec();
        content.extend_from_slice(b"caf\xe9 notes\n");
        content.extend_from_slice(b"https://drive.google.com/drive/u/1/folders/second\n");
        fs::write(&path, content).unwrap();

        let found = scan_file(&path).unwrap();
        let summary: Vec<(usize, &str)> = found
            .iter()
            .map(|o| (o.line, o.folder_id.as_str()))
            .collect();

        assert_eq!(summary, vec![(1, "first"), (3, "second")]);
    }

    #[test]
    fn test_scan_missing_file() {
        let err = scan_file("/nonexistent/path/links.txt").unwrap_err();
        assert!(matches!(err, FolderIdError::Io(_)));
    }
}

mod error_handling {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolderIdError::NoFolderId("https://example.com".to_string());
        assert!(format!("{}", err).contains("https://example.com"));

        let err = FolderIdError::InvalidFolderId("bad id".to_string());
        assert!(format!("{}", err).contains("bad id"));
    }
}
