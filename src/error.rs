/// Crate-level error types for swiftdoc runs.
use std::path::PathBuf;

/// Every failure a run can end with. Each variant names the file involved so
/// the one-line diagnostic printed by `main` is actionable on its own.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `.swiftdoc.toml` exists but is not valid for this tool.
    #[error("invalid config {}: {source}", path.display())]
    ConfigMalformed {
        /// Path to the config file.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },

    /// `.swiftdoc.toml` exists but could not be read.
    #[error("reading config {}: {source}", path.display())]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input path does not exist.
    #[error("File '{}' not found.", path.display())]
    FileNotFound {
        /// Path given on the command line.
        path: PathBuf,
    },

    /// No `class`-like declaration matched anywhere in the input.
    #[error("No class declaration found in '{}'.", path.display())]
    NoDeclarationFound {
        /// Input file that was searched.
        path: PathBuf,
    },

    /// Any read error other than a missing file, including invalid UTF-8.
    #[error("reading file {}: {source}", path.display())]
    ReadFailure {
        /// Input file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The rendered document could not be written.
    #[error("writing documentation file {}: {source}", path.display())]
    WriteFailure {
        /// Destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
