use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the frequency counter, the tree builder and the renderer.
#[derive(Error, Debug)]
pub enum Error {
    /// The frequency table had no symbols, so there is no root to build.
    #[error("frequency table is empty, no tree can be built")]
    EmptyInput,

    /// The command line did not name exactly one input file.
    #[error("Argument Error: expected exactly one input file, got {found}")]
    InvalidArgumentCount { found: usize },

    /// The input source could not be opened or read.
    #[error("File Error: cannot read {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write or a flush.
    #[error("failed to write tree: {0}")]
    SinkWriteFailure(#[source] io::Error),
}

impl Error {
    /// Process exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidArgumentCount { .. } => 2,
            Error::SourceUnreadable { .. } => 3,
            Error::EmptyInput => 4,
            Error::SinkWriteFailure(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
