use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures while reading a whole file into memory.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("{} is too large to buffer ({size} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64 },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("short read on {}: expected {expected} bytes, got {actual}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Utf8 {
        path: PathBuf,
        source: std::str::Utf8Error,
    },
}

impl ReadError {
    pub fn path(&self) -> &Path {
        match self {
            ReadError::Open { path, .. }
            | ReadError::Metadata { path, .. }
            | ReadError::TooLarge { path, .. }
            | ReadError::Read { path, .. }
            | ReadError::ShortRead { path, .. }
            | ReadError::Utf8 { path, .. } => path,
        }
    }
}
