//! `CsvDocument` — one configurable, sealable delimited-text artifact.
//!
//! # Lifecycle
//!
//! Configuration and key registration may happen any number of times before
//! the first write.  The destination file is created lazily on the first
//! write call; that call also emits the optional `sep=<delimiter>` hint line
//! and the optional header line.  [`finalize`][CsvDocument::finalize] seals
//! the document — every later write fails with
//! [`ExportError::DocumentSealed`] — and guarantees an artifact exists at
//! the path even when nothing was ever written.
//!
//! Dropping an unsealed document flushes and closes the destination
//! (`csv::Writer` flushes on drop), so the artifact is complete either way;
//! `finalize` exists to make the seal and the zero-byte guarantee explicit.
//!
//! # Serialization order
//!
//! Per field: substitution pairs first, then conversion into the target
//! encoding, then quoting.  Every field is quoted; an embedded quote is
//! doubled when the dialect's escape byte equals its quote byte and escaped
//! with that byte otherwise.  Rows terminate with `\n`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tabex_core::encoding::{self, Encoding};
use tabex_core::{Dialect, KeyRegistry, SubstitutionTable};

use crate::error::{ExportError, ExportResult};
use crate::transport::{DownloadMetadata, Transport};

/// A single delimited-text document bound to one output path.
///
/// All mutators return the document handle so calls chain:
///
/// ```rust,ignore
/// let mut doc = CsvDocument::new("/tmp/report.csv");
/// doc.excel_compat()
///     .set_delimiter(";")?
///     .set_header([("sku", "SKU"), ("price", "Price")])
///     .write_keyed([("sku", "A-1"), ("price", "9.99")])?;
/// doc.finalize()?;
/// ```
#[derive(Debug)]
pub struct CsvDocument {
    path:           Option<PathBuf>,
    dialect:        Dialect,
    encoding:       String,
    separator_hint: bool,
    registry:       KeyRegistry,
    header_labels:  Vec<String>,
    substitutions:  SubstitutionTable,
    sink:           Option<csv::Writer<File>>,
    sealed:         bool,
}

impl Default for CsvDocument {
    fn default() -> Self {
        Self {
            path:           None,
            dialect:        Dialect::default(),
            encoding:       "utf-8".to_owned(),
            separator_hint: false,
            registry:       KeyRegistry::default(),
            header_labels:  Vec::new(),
            substitutions:  SubstitutionTable::default(),
            sink:           None,
            sealed:         false,
        }
    }
}

impl CsvDocument {
    /// Create a document bound to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), ..Self::default() }
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// (Re)bind the output path.  The destination opens from whatever path
    /// is current at the first write; rebinding after that is unsupported.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    /// Set the field delimiter — exactly one single-byte character.
    pub fn set_delimiter(&mut self, delimiter: &str) -> ExportResult<&mut Self> {
        self.dialect.set_delimiter(delimiter)?;
        Ok(self)
    }

    /// Set the quote (enclosure) character — exactly one single-byte
    /// character.
    pub fn set_quote(&mut self, quote: &str) -> ExportResult<&mut Self> {
        self.dialect.set_quote(quote)?;
        Ok(self)
    }

    /// Set the escape character — exactly one single-byte character.  Equal
    /// to the quote character means embedded quotes are doubled instead.
    pub fn set_escape(&mut self, escape: &str) -> ExportResult<&mut Self> {
        self.dialect.set_escape(escape)?;
        Ok(self)
    }

    /// Set the target encoding label (stored verbatim, resolved at write
    /// time).  Fails on an empty label.
    pub fn set_encoding(&mut self, encoding: &str) -> ExportResult<&mut Self> {
        if encoding.trim().is_empty() {
            return Err(tabex_core::TabexError::InvalidConfig {
                what:   "encoding",
                detail: "label must not be empty".to_owned(),
            }
            .into());
        }
        self.encoding = encoding.to_owned();
        Ok(self)
    }

    /// Enable or disable the leading `sep=<delimiter>` line.  The line is
    /// only emitted when the delimiter is not the default comma.
    pub fn separator_hint(&mut self, enabled: bool) -> &mut Self {
        self.separator_hint = enabled;
        self
    }

    /// Spreadsheet-compat preset: separator hint on, `windows-1252`
    /// encoding.  Delimiter, quote, and escape stay as configured.
    pub fn excel_compat(&mut self) -> &mut Self {
        self.separator_hint = true;
        self.encoding = "windows-1252".to_owned();
        self
    }

    // ── Header and key registry ───────────────────────────────────────────

    /// Register the header row.  The pair keys fix the key registry (first
    /// occurrence wins); the pair values are emitted as the artifact's
    /// first data line.
    pub fn set_header<I, K, V>(&mut self, header: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> =
            header.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.registry = KeyRegistry::from_keys(pairs.iter().map(|(k, _)| k.clone()));
        self.header_labels = pairs.into_iter().map(|(_, v)| v).collect();
        self
    }

    /// Fix the key registry without emitting a header line.
    ///
    /// The registry is conceptually frozen once the first row write has
    /// happened; changing it afterwards is unsupported.
    pub fn set_keys<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry = KeyRegistry::from_keys(keys);
        self
    }

    /// Register a literal substitution applied to every field value before
    /// encoding conversion.  Fails if `search` is already registered.
    pub fn substitute(
        &mut self,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> ExportResult<&mut Self> {
        self.substitutions.register(search, replace)?;
        Ok(self)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True once the destination has been opened by a write call.
    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// True when no artifact exists at the path yet or it has zero bytes.
    /// Flushes a live sink first so buffered rows count.
    pub fn is_empty(&mut self) -> ExportResult<bool> {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        let Some(path) = self.path.as_deref().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(true);
        };
        Ok(std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true))
    }

    /// Response metadata for the finished artifact, derived from the
    /// configured encoding and the path's file name.
    pub fn download_metadata(&self) -> DownloadMetadata {
        let file_name = self
            .path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        DownloadMetadata::new(&self.encoding, &file_name)
    }

    // ── Writing ───────────────────────────────────────────────────────────

    /// Append one ordered row.  Fields are serialized as given; the key
    /// registry does not apply to ordered rows.
    pub fn write<I, S>(&mut self, fields: I) -> ExportResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.append(values)
    }

    /// Append one keyed row.  With a non-empty key registry the row is
    /// normalized first: registry order, missing keys default to the empty
    /// string, unknown keys are dropped, last value wins on duplicate keys.
    /// Without a registry the values are serialized in input order.
    pub fn write_keyed<I, K, V>(&mut self, row: I) -> ExportResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values: Vec<String> = if self.registry.is_empty() {
            row.into_iter().map(|(_, v)| v.into()).collect()
        } else {
            self.registry.normalize(row)
        };
        self.append(values)
    }

    fn append(&mut self, values: Vec<String>) -> ExportResult<&mut Self> {
        if self.sealed {
            return Err(ExportError::DocumentSealed);
        }
        let encoding = encoding::resolve(&self.encoding)?;
        match &mut self.sink {
            Some(sink) => {
                Self::append_line(sink, &self.substitutions, encoding, &values)?;
            }
            None => {
                let writer = Self::open_destination(
                    self.path.as_deref(),
                    &self.dialect,
                    self.separator_hint,
                    &self.header_labels,
                    &self.substitutions,
                    encoding,
                )?;
                // Keep the sink even if the row below fails: the preamble is
                // written exactly once, on open.
                let sink = self.sink.insert(writer);
                Self::append_line(sink, &self.substitutions, encoding, &values)?;
            }
        }
        Ok(self)
    }

    /// Validate the destination, create the file, and emit the first-write
    /// preamble (separator hint, header line).
    fn open_destination(
        path: Option<&Path>,
        dialect: &Dialect,
        separator_hint: bool,
        header_labels: &[String],
        substitutions: &SubstitutionTable,
        encoding: &'static Encoding,
    ) -> ExportResult<csv::Writer<File>> {
        let path = validated_path(path)?;
        let mut file = File::create(path)?;
        if separator_hint && dialect.delimiter != b',' {
            file.write_all(&[b's', b'e', b'p', b'=', dialect.delimiter, b'\n'])?;
        }
        log::debug!("opened export destination {}", path.display());

        let mut writer = writer_builder(dialect).from_writer(file);
        if !header_labels.is_empty() {
            // The header's own order is its output order; registry
            // normalization never applies to it.
            Self::append_line(&mut writer, substitutions, encoding, header_labels)?;
        }
        Ok(writer)
    }

    /// Serialize one line: substitution → encoding conversion → quoting.
    /// The record is only handed to the sink once every field converted, so
    /// a failed conversion appends nothing.
    fn append_line(
        sink: &mut csv::Writer<File>,
        substitutions: &SubstitutionTable,
        encoding: &'static Encoding,
        values: &[String],
    ) -> ExportResult<()> {
        let mut record = csv::ByteRecord::new();
        for value in values {
            let replaced = substitutions.apply(value);
            record.push_field(&encoding::encode_field(&replaced, encoding)?);
        }
        sink.write_byte_record(&record)?;
        Ok(())
    }

    // ── Finalize / output ─────────────────────────────────────────────────

    /// Seal the document and close the destination.
    ///
    /// Idempotent — the first call flushes and closes the sink (or, when no
    /// write ever happened, creates the file so a zero-byte artifact exists
    /// at the path); later calls are no-ops.  Once sealed, every write
    /// fails with [`ExportError::DocumentSealed`].
    pub fn finalize(&mut self) -> ExportResult<()> {
        if self.sealed {
            return Ok(());
        }
        self.sealed = true;
        match self.sink.take() {
            Some(mut sink) => {
                sink.flush()?;
                log::debug!("sealed export document");
            }
            None => {
                let path = validated_path(self.path.as_deref())?;
                File::create(path)?;
                log::debug!("sealed export document with empty artifact {}", path.display());
            }
        }
        Ok(())
    }

    /// Finalize (if not already sealed), read the artifact back, and hand
    /// it to `transport` together with its [`DownloadMetadata`].
    pub fn stream_to<T: Transport>(&mut self, transport: &mut T) -> ExportResult<()> {
        self.finalize()?;
        let metadata = self.download_metadata();
        let path = validated_path(self.path.as_deref())?;
        let body = std::fs::read(path)?;
        transport.send(&metadata, &body)?;
        Ok(())
    }
}

fn validated_path(path: Option<&Path>) -> ExportResult<&Path> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        return Err(ExportError::DestinationNotWritable("no output path configured".to_owned()));
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ExportError::DestinationNotWritable(format!(
            "parent directory {} does not exist",
            parent.display()
        )));
    }
    Ok(path)
}

fn writer_builder(dialect: &Dialect) -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .flexible(true)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'));
    if dialect.doubles_quotes() {
        builder.double_quote(true);
    } else {
        builder.double_quote(false);
        builder.escape(dialect.escape);
    }
    builder
}
