//! `tabex-writer` — single-document delimited text export.
//!
//! One [`CsvDocument`] produces one artifact, forward-only:
//! configure → (optional) header/keys → repeated writes → finalize/stream.
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`document`]  | `CsvDocument` — configuration, writes, seal lifecycle  |
//! | [`transport`] | `DownloadMetadata`, the `Transport` seam, `RawStream`  |
//! | [`error`]     | `ExportError`, `ExportResult`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tabex_writer::{CsvDocument, RawStream};
//!
//! let mut doc = CsvDocument::new("./out/report.csv");
//! doc.excel_compat()
//!     .set_delimiter(";")?
//!     .set_header([("sku", "SKU"), ("price", "Price")])
//!     .substitute("\u{a0}", " ")?;
//! doc.write_keyed([("sku", "A-1"), ("price", "9.99")])?;
//! doc.stream_to(&mut RawStream(std::io::stdout().lock()))?;
//! ```

pub mod document;
pub mod error;
pub mod transport;


pub use document::CsvDocument;
pub use error::{ExportError, ExportResult};
pub use transport::{DownloadMetadata, RawStream, Transport};
