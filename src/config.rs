use std::path::{Path, PathBuf};

use crate::error::Error;

/// Name of the optional per-directory config file.
pub const CONFIG_FILE: &str = ".swiftdoc.toml";

/// Run configuration loaded from `.swiftdoc.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Info string of the signature code fence.
    pub fence_language: String,
    /// Directory the generated markdown is written into.
    pub output_dir: PathBuf,
}

/// Raw TOML structure for `.swiftdoc.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct SwiftdocTomlConfig {
    /// Overrides `Config::fence_language`.
    fence_language: Option<String>,
    /// Overrides `Config::output_dir`.
    output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            fence_language: "swift".to_string(),
            output_dir: PathBuf::from("."),
        };
    }
}

impl Config {
    /// Load config from `.swiftdoc.toml` in the given directory.
    /// Returns the defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed; never silently
    /// falls back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigRead` if reading fails (other than not-found),
    /// or `Error::ConfigMalformed` if the TOML is invalid or has unknown keys.
    pub fn load(dir: &Path) -> Result<Self, Error> {
        let path = dir.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(Error::ConfigRead { path, source }),
        };

        return Self::parse(&path, &content);
    }

    /// Parse config file content, filling unset keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigMalformed` if the TOML is invalid or has unknown keys.
    pub fn parse(path: &Path, content: &str) -> Result<Self, Error> {
        let raw: SwiftdocTomlConfig = toml::from_str(content).map_err(|source| {
            return Error::ConfigMalformed {
                path: path.to_path_buf(),
                source,
            };
        })?;

        let defaults = Self::default();
        return Ok(Self {
            fence_language: raw.fence_language.unwrap_or(defaults.fence_language),
            output_dir: raw.output_dir.unwrap_or(defaults.output_dir),
        });
    }
}
