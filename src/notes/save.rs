//! Writing the note buffer to disk

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// Write `contents` verbatim as UTF-8, replacing any existing file
pub fn save_notes(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents.as_bytes())
        .with_context(|| format!("Could not write notes to {}", path.display()))
}

/// File name proposed by the save dialog
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("notes-{}.txt", now.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn round_trip(text: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        save_notes(&path, text).unwrap();
        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_round_trip_empty() {
        assert_eq!(round_trip(""), "");
    }

    #[test]
    fn test_round_trip_multiline() {
        assert_eq!(round_trip("hello\nworld"), "hello\nworld");
    }

    #[test]
    fn test_round_trip_non_ascii() {
        let text = "Grüße, 世界! ☕\nnaïve café";
        assert_eq!(round_trip(text), text);
    }

    #[test]
    fn test_trailing_newlines_are_kept() {
        assert_eq!(round_trip("line\n\n"), "line\n\n");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        save_notes(&path, "a much longer first version").unwrap();
        save_notes(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("notes.txt");
        let err = save_notes(&path, "text").unwrap_err();
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_default_file_name() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(default_file_name(now), "notes-20240309-140507.txt");
    }
}
