use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the conversion can hit. All of them abort the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source dictionary could not be opened or read.
    #[error("failed to read source dictionary {path:?}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A destination file could not be created.
    #[error("failed to create {path:?}: {source}")]
    DestinationOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing a destination file failed.
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Gboard archive could not be finalized.
    #[error("failed to build archive {path:?}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
