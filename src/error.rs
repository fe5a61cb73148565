use std::path::PathBuf;

/// Errors produced while turning markdown into pages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element or fragment violated the shape the pipeline guarantees.
    #[error("malformed document tree: {0}")]
    Structural(String),
    /// The document has no `# ` heading to use as the page title.
    #[error("no h1 heading found")]
    MissingTitle,
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        Error::Structural(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(path)
        } else {
            Error::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
