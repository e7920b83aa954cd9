//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// a read ran past the end of the archive
    #[error("a read ran past the end of the archive")]
    TruncatedInput,

    /// an index record carries a type tag that is neither file nor folder
    #[error("unknown entry type tag {0:#010x}")]
    UnknownEntryType(u32),

    /// a declared file size does not fit the format's signed size field
    #[error("declared file size {0} exceeds the format limit")]
    OversizedFile(u32),

    /// writer self-check: the accounted and encoded name table sizes differ
    #[error("name table size mismatch: accounted {expected} bytes, encoded {actual}")]
    InconsistentNameTable {
        /// Size computed during layout accounting
        expected: u64,
        /// Byte length of the table as actually encoded
        actual: u64,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
