//! Policy file loading: locating, reading and deserializing `.json` policies.
//!
//! Every failure is returned as a [`LoadError`]; nothing here exits the process.

mod filesystem;
mod json;

pub use filesystem::read_json_from_file;
pub use json::parse_policy;

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Wrong file extension: expected a .json file, got '{}'", .path.display())]
    WrongExtension { path: PathBuf },
    #[error("No such file or directory: '{}'", .path.display())]
    NotFound { path: PathBuf },
    #[error("Error reading file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse policy JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Read `path` and deserialize it into a generic JSON tree.
pub async fn load_policy(path: impl AsRef<Path>) -> LoadResult<Value> {
    let content = read_json_from_file(path).await?;
    parse_policy(&content)
}
