use std::{fmt, path::PathBuf};

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse error classes. Every [`Error`] variant belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Download, extraction or disk failure.
    Io,
    /// Malformed dataset, unexpected layer contents, or bad configuration.
    Parse,
    /// Division by a zero area, or a centroid of an empty shape.
    Arithmetic,
    /// A lookup by key or column name found nothing (or found two).
    Key,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("GET {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to extract archive {}: {source}", .path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to read shapefile {}: {source}", .path.display())]
    Shapefile {
        path: PathBuf,
        #[source]
        source: shapefile::Error,
    },

    #[error("{0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write {}: {message}", .path.display())]
    Export { path: PathBuf, message: String },

    #[error("{0}")]
    Arithmetic(String),

    #[error("feature {feature:?} has no usable {column:?} attribute")]
    MissingAttribute { feature: String, column: String },

    #[error("no centroid computed for key {key:?}")]
    MissingCentroid { key: String },

    #[error("key {key:?} appears more than once")]
    DuplicateKey { key: String },
}

impl Error {
    /// Wrap an `std::io::Error` with a short description of what was being done.
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. }
            | Self::Download { .. }
            | Self::Extract { .. }
            | Self::Export { .. } => ErrorKind::Io,
            Self::Shapefile { .. } | Self::Parse(_) | Self::Config(_) => ErrorKind::Parse,
            Self::Arithmetic(_) => ErrorKind::Arithmetic,
            Self::MissingAttribute { .. }
            | Self::MissingCentroid { .. }
            | Self::DuplicateKey { .. } => ErrorKind::Key,
        }
    }
}

/// The pipeline stage in which an error surfaced.
///
/// Filtering and cropping cannot fail, so they have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Aggregate,
    Centroid,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Load => "load",
            Stage::Aggregate => "aggregate",
            Stage::Centroid => "centroid",
        })
    }
}

/// An [`Error`] tagged with the stage that produced it.
#[derive(Debug, thiserror::Error)]
#[error("{stage} stage failed")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: Error,
}

impl StageError {
    pub(crate) fn at(stage: Stage) -> impl FnOnce(Error) -> Self {
        move |source| Self { stage, source }
    }
}
