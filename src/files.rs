//! Input reading, output naming, and output writing.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Suffix appended to the input stem to name the output file.
const OUTPUT_SUFFIX: &str = "_documentation.md";

/// `<input stem>_documentation.md`, e.g. `Sources/Counter.swift` →
/// `Counter_documentation.md`.
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| return s.to_string_lossy())
        .unwrap_or_default();
    return format!("{stem}{OUTPUT_SUFFIX}");
}

/// Read the whole input file.
///
/// # Errors
///
/// Returns `Error::FileNotFound` if `path` doesn't exist, or
/// `Error::ReadFailure` for any other I/O error (including invalid UTF-8).
pub fn read_source(path: &Path) -> Result<String, Error> {
    return std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Error::FileNotFound { path: path.to_path_buf() };
        }
        return Error::ReadFailure {
            path: path.to_path_buf(),
            source,
        };
    });
}

/// Write `content` to `path` via a sibling temporary file and a rename, so a
/// failed write never leaves a partial document behind. Creates the parent
/// directory if needed.
///
/// # Errors
///
/// Returns `Error::WriteFailure` if the directory, the temporary file, or the
/// rename fails. The temporary file is removed on failure.
pub fn write_document(path: &Path, content: &str) -> Result<(), Error> {
    let fail = |source: std::io::Error| {
        return Error::WriteFailure {
            path: path.to_path_buf(),
            source,
        };
    };

    if let Some(parent) = path.parent().filter(|p| return !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(fail)?;
    }

    let staging = staging_path(path);
    let written = std::fs::write(&staging, content).and_then(|()| return std::fs::rename(&staging, path));
    if let Err(source) = written {
        let _ = std::fs::remove_file(&staging);
        return Err(fail(source));
    }

    return Ok(());
}

/// Temporary sibling used while writing `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
    name.push(".tmp");
    return path.with_file_name(name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_from_stem() {
        assert_eq!(output_file_name(Path::new("Sources/Counter.swift")), "Counter_documentation.md");
        assert_eq!(output_file_name(Path::new("Counter")), "Counter_documentation.md");
        assert_eq!(output_file_name(Path::new("a.b.swift")), "a.b_documentation.md");
    }

    #[test]
    fn missing_input_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("nope.swift")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn directory_input_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ReadFailure { .. }));
    }

    #[test]
    fn invalid_utf8_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.swift");
        std::fs::write(&path, [0xff_u8, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_source(&path).unwrap_err(), Error::ReadFailure { .. }));
    }

    #[test]
    fn write_creates_directory_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs").join("A_documentation.md");
        write_document(&path, "# A\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# A\n");
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        // The destination is an existing non-empty directory, so the rename fails.
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = write_document(&path, "# A\n").unwrap_err();
        assert!(matches!(err, Error::WriteFailure { .. }));
        assert!(!staging_path(&path).exists());
        assert!(path.is_dir());
    }
}
