//! Error taxonomy shared by every stage of the codec.
//!
//! All failures are fatal to the single encode or decode in progress.
//! Nothing is retried locally; the error is surfaced to whoever called the
//! pipeline, which decides whether other files should still be processed.

use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Open, read or write failure on either side of the pipeline.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The compressor or decompressor reported a failure.  The message is
    /// the compressor's own diagnostic.
    #[error("Compression error: {0}")]
    Compression(String),
    /// The payload inflated to a different length than the framing recorded.
    #[error("Size mismatch: expected {expected} bytes, decompressed {actual}")]
    SizeMismatch { expected: u64, actual: u64 },
    #[error("Allocation error: {0}")]
    Allocation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Wrap a failed `open` with the path and direction it was opened for.
pub(crate) fn open_error(path: &Path, purpose: &str, source: io::Error) -> Error {
    Error::Io(io::Error::new(
        source.kind(),
        format!("couldn't open '{}' for {purpose}: {source}", path.display()),
    ))
}

/// Sizes that do not fit the 32-bit fields of the bitmap header.
pub(crate) fn too_large(what: &str, value: u64) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{what} of {value} does not fit in the bitmap header"),
    ))
}
