use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What already occupies a target path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingKind {
    File,
    Directory,
}

impl fmt::Display for ExistingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExistingKind::File => write!(f, "file"),
            ExistingKind::Directory => write!(f, "directory"),
        }
    }
}

/// Failure while materializing a generated project archive
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("a {} named '{}' already exists", .kind, .path.display())]
    TargetExists { path: PathBuf, kind: ExistingKind },

    #[error("invalid project archive: {0}")]
    InvalidArchive(#[from] zip::result::ZipError),

    #[error("archive entry '{0}' escapes the project directory")]
    UnsafeEntryPath(String),

    #[error("corrupt archive entry for {}: {}", .path.display(), .source)]
    CorruptEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("filesystem error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ExtractError {
    /// True when the archive itself is at fault rather than the filesystem
    pub fn is_invalid_archive(&self) -> bool {
        matches!(
            self,
            ExtractError::InvalidArchive(_)
                | ExtractError::UnsafeEntryPath(_)
                | ExtractError::CorruptEntry { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
