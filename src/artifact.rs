//! Specification artifact writing
//!
//! The synthesized specification lands in a timestamped markdown file,
//! written atomically so a failed write leaves no partial artifact.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised while persisting the specification
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write specification to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Filename for a specification generated now, local wall-clock time
fn spec_filename() -> String {
    format!("spec-{}.md", chrono::Local::now().format("%Y%m%d-%H%M%S"))
}

/// Write the specification body under a timestamped name in `dir`.
///
/// Content goes to a temporary file in the same directory which is renamed
/// into place, so the artifact is either fully visible or absent.
pub fn write_spec(dir: &Path, body: &str) -> Result<PathBuf, ArtifactError> {
    std::fs::create_dir_all(dir).map_err(|e| ArtifactError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(spec_filename());

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| ArtifactError::Write {
        path: path.clone(),
        source: e,
    })?;
    tmp.write_all(body.as_bytes()).map_err(|e| ArtifactError::Write {
        path: path.clone(),
        source: e,
    })?;
    tmp.persist(&path).map_err(|e| ArtifactError::Write {
        path: path.clone(),
        source: e.error,
    })?;

    debug!(path = %path.display(), bytes = body.len(), "write_spec: persisted");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_is_byte_exact() {
        let dir = TempDir::new().unwrap();
        let body = "# Todo App Spec\n\nUnicode survives: café ✓\n";

        let path = write_spec(dir.path(), body).unwrap();
        let read_back = std::fs::read(&path).unwrap();

        assert_eq!(read_back, body.as_bytes());
    }

    #[test]
    fn test_filename_matches_timestamp_pattern() {
        let dir = TempDir::new().unwrap();
        let path = write_spec(dir.path(), "body").unwrap();

        // spec-YYYYMMDD-HHMMSS.md
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("spec-"), "unexpected name: {name}");
        assert!(name.ends_with(".md"), "unexpected name: {name}");

        let stamp = &name["spec-".len()..name.len() - ".md".len()];
        assert_eq!(stamp.len(), 15, "unexpected stamp: {stamp}");
        let (date, rest) = stamp.split_at(8);
        assert!(date.chars().all(|c| c.is_ascii_digit()), "unexpected date: {date}");
        assert_eq!(&rest[..1], "-");
        assert!(rest[1..].chars().all(|c| c.is_ascii_digit()), "unexpected time: {rest}");
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("specs");

        let path = write_spec(&nested, "body").unwrap();
        assert!(path.starts_with(&nested));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "body");
    }

    #[test]
    fn test_no_stray_files_after_write() {
        let dir = TempDir::new().unwrap();
        let path = write_spec(dir.path(), "body").unwrap();

        // Only the persisted artifact remains; the temp file was renamed.
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].as_ref().unwrap().path(), path);
    }
}
