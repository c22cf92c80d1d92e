//! Output sink for generated documents.
//!
//! A [`DocSink`] is opened once before generation starts and closed once
//! afterwards. Closing flushes buffered bytes so that late write failures
//! surface as errors; dropping an unclosed sink still releases the handle.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::docgen::error::DocsError;

/// Where a generated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output.
    Stdout,
    /// A file, created or truncated on open.
    File(PathBuf),
}

impl Destination {
    /// Interpret a CLI path argument; `-` selects stdout.
    #[must_use]
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Buffered, UTF-8 document sink.
pub struct DocSink {
    destination: Destination,
    writer: BufWriter<Box<dyn Write>>,
}

impl DocSink {
    /// Open `destination` for writing.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::SinkUnavailable` if the file cannot be created.
    pub fn open(destination: Destination) -> Result<Self, DocsError> {
        let inner: Box<dyn Write> = match &destination {
            Destination::Stdout => Box::new(io::stdout()),
            Destination::File(path) => {
                let file = File::create(path).map_err(|source| DocsError::SinkUnavailable {
                    path: path.clone(),
                    source,
                })?;
                Box::new(file)
            }
        };

        tracing::debug!(destination = %destination, "opened document sink");
        Ok(Self {
            destination,
            writer: BufWriter::new(inner),
        })
    }

    /// The destination this sink writes to.
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Flush remaining bytes and release the destination.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Write` if the final flush fails.
    pub fn close(self) -> Result<(), DocsError> {
        let Self {
            destination,
            writer,
        } = self;
        let mut inner = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
        inner.flush()?;
        tracing::debug!(destination = %destination, "closed document sink");
        Ok(())
    }
}

impl Write for DocSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for DocSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocSink")
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}
