use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    NotFound(PathBuf),
    InvalidData(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "io error: {err}"),
            StorageError::NotFound(path) => {
                write!(f, "no timetable stored at {}", path.display())
            }
            StorageError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Outcome of ensuring the data folder exists. Creation failure is reported,
/// not raised; the caller decides whether to carry on without persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderStatus {
    Created,
    AlreadyExists,
    Failed,
}

pub mod file;
pub mod format;

pub use file::{FileStore, write_to_file};
pub use format::{TimetableDecoder, encode_timetable};
