//! Loader for RON content files at startup.

use std::fs;
use std::path::{Path, PathBuf};

use ron::Options;
use thiserror::Error;

use super::data::CloneTuning;

pub const CONTENT_DIR: &str = "assets/data";
pub const CLONE_TUNING_FILE: &str = "clone_tuning.ron";

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read {}: {source}", file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl ContentLoadError {
    pub fn file(&self) -> &Path {
        match self {
            ContentLoadError::Io { file, .. } | ContentLoadError::Parse { file, .. } => file,
        }
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from text, attributing errors to `file`.
pub fn parse_single<T>(contents: &str, file: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_path_buf(),
            source,
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: path.to_path_buf(),
        source,
    })?;
    parse_single(&contents, path)
}

/// Load clone tuning from `base_path`/clone_tuning.ron.
pub fn load_clone_tuning(base_path: &Path) -> Result<CloneTuning, ContentLoadError> {
    load_single_file(&base_path.join(CLONE_TUNING_FILE))
}
