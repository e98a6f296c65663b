//! The download hook: metadata for the finished artifact and the `Transport`
//! seam it is handed through.
//!
//! The writer never speaks HTTP itself.  [`CsvDocument::stream_to`] derives
//! the three response strings below and passes them, together with the
//! artifact bytes, to whatever [`Transport`] the application supplies.
//!
//! [`CsvDocument::stream_to`]: crate::CsvDocument::stream_to

use std::io::{self, Write};

/// Response metadata derived from the document's encoding and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadMetadata {
    /// e.g. `windows-1252`
    pub content_encoding: String,
    /// e.g. `text/csv; charset=windows-1252`
    pub content_type: String,
    /// e.g. `attachment; filename="report.csv"`
    pub content_disposition: String,
}

impl DownloadMetadata {
    pub fn new(encoding: &str, file_name: &str) -> Self {
        Self {
            content_encoding:    encoding.to_owned(),
            content_type:        format!("text/csv; charset={encoding}"),
            content_disposition: format!("attachment; filename=\"{file_name}\""),
        }
    }
}

/// Trait implemented by whatever delivers a finalized artifact.
pub trait Transport {
    /// Deliver the artifact.  Called at most once per document.
    fn send(&mut self, metadata: &DownloadMetadata, body: &[u8]) -> io::Result<()>;
}

/// Streams the body into any `io::Write`, discarding the metadata envelope.
/// Enough for pipes and tests; HTTP transports live in application code.
#[derive(Debug)]
pub struct RawStream<W: Write>(pub W);

impl<W: Write> Transport for RawStream<W> {
    fn send(&mut self, _metadata: &DownloadMetadata, body: &[u8]) -> io::Result<()> {
        self.0.write_all(body)?;
        self.0.flush()
    }
}
