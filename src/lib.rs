//! Static lookup between file extensions and MIME types.
//!
//! This crate provides:
//! - MIME type detection by file extension, URL, path or open file
//! - Reverse lookup from a MIME type to its registered extensions
//! - Named constants for every MIME type in the table
//!
//! The table is fixed at compile time and shared immutably, so every lookup
//! is safe to call from any thread or task without locking.

pub mod constants;
pub mod error;
pub mod file;
pub mod mime_type;
pub mod table;

// Re-export commonly used types
pub use constants::*;
pub use error::{Error, Result};
pub use file::{FileName, NamedFile};
pub use mime_type::{
    extension_for_mime_type, extension_name_for_mime_type, extensions_for_mime_type,
    is_known_extension, mime_type_for_extension, mime_type_for_open_file, mime_type_for_path,
    mime_type_for_url,
};
