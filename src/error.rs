//! Error types for the mime-table crate.
//!
//! Lookups never fail. Errors only come from opening files through
//! [`NamedFile`](crate::file::NamedFile).

use std::io;
use thiserror::Error;

/// The main error type for the mime-table crate.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for mime-table operations.
pub type Result<T> = std::result::Result<T, Error>;
