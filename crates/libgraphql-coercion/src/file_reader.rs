use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read the schema file at `file_path` as UTF-8 text.
pub(crate) fn read_content(file_path: &Path) -> Result<String> {
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::Io(file_path.to_path_buf(), err))?;
    String::from_utf8(bytes).map_err(|err| {
        ReadContentError::InvalidUtf8(file_path.to_path_buf(), err.utf8_error())
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Schema file {0:?} is not valid UTF-8: {1}")]
    InvalidUtf8(PathBuf, #[source] std::str::Utf8Error),

    #[error("Failed to read schema file {0:?}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    /// The path of the file that couldn't be read.
    pub fn file_path(&self) -> &Path {
        match self {
            Self::InvalidUtf8(file_path, _)
            | Self::Io(file_path, _)
            | Self::PathIsNotAFile(file_path) => file_path.as_path(),
        }
    }
}
/// `io::Error`s are compared by [`kind()`](std::io::Error::kind) only.
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        self.file_path() == other.file_path() && match (self, other) {
            (Self::InvalidUtf8(_, self_err), Self::InvalidUtf8(_, other_err)) =>
                self_err == other_err,
            (Self::Io(_, self_err), Self::Io(_, other_err)) =>
                self_err.kind() == other_err.kind(),
            (Self::PathIsNotAFile(_), Self::PathIsNotAFile(_)) => true,
            _ => false,
        }
    }
}
