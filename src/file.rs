//! Open files that remember the name they were opened under.
//!
//! `tokio::fs::File` does not keep its path, so lookups on an open file go
//! through the [`FileName`] trait instead.

use crate::error::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::fs::File;
use tokio::io::{AsyncRead, ReadBuf};
use tracing::debug;

/// Anything that knows the name of the file it refers to.
pub trait FileName {
    /// The path the file was opened or resolved from.
    fn name(&self) -> &Path;
}

impl FileName for Path {
    fn name(&self) -> &Path {
        self
    }
}

impl FileName for PathBuf {
    fn name(&self) -> &Path {
        self.as_path()
    }
}

impl<T: FileName + ?Sized> FileName for &T {
    fn name(&self) -> &Path {
        (**self).name()
    }
}

/// An open file paired with the path it was opened from.
///
/// Reads are forwarded to the inner file.
///
/// # Examples
///
/// ```no_run
/// use mime_table::{mime_type_for_open_file, NamedFile};
///
/// # async fn run() -> mime_table::Result<()> {
/// let file = NamedFile::open("report.pdf").await?;
/// assert_eq!(mime_type_for_open_file(&file), "application/pdf");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NamedFile {
    file: File,
    path: PathBuf,
}

impl NamedFile {
    /// Opens a file in read-only mode and remembers its path.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await?;
        debug!(path = %path.display(), "opened file");
        Ok(Self { file, path })
    }

    /// Wraps a file the caller already opened.
    pub fn from_parts(file: File, path: impl Into<PathBuf>) -> Self {
        Self {
            file,
            path: path.into(),
        }
    }

    /// The path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Borrows the underlying file.
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Mutably borrows the underlying file.
    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Consumes the wrapper, returning the file and its path.
    pub fn into_inner(self) -> (File, PathBuf) {
        (self.file, self.path)
    }
}

impl FileName for NamedFile {
    fn name(&self) -> &Path {
        &self.path
    }
}

impl AsyncRead for NamedFile {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.file).poll_read(cx, buf)
    }
}
