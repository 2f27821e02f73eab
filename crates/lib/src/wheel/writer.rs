use std::io::{Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::util::hash::RecordDigest;

use super::{ManifestEntry, WheelError};

/// Streams members into a wheel and keeps the `RECORD` ledger.
///
/// Every member gets the same fixed timestamp so identical inputs produce
/// identical archives.
pub struct WheelWriter<W: Write + Seek> {
  zip: ZipWriter<W>,
  records: Vec<ManifestEntry>,
}

impl<W: Write + Seek> WheelWriter<W> {
  pub fn new(inner: W) -> Self {
    Self {
      zip: ZipWriter::new(inner),
      records: Vec::new(),
    }
  }

  fn options() -> SimpleFileOptions {
    SimpleFileOptions::default()
      .compression_method(CompressionMethod::Deflated)
      .last_modified_time(DateTime::default())
      .unix_permissions(0o644)
  }

  /// Add one member at `archive_path`.
  pub fn add(&mut self, archive_path: &str, data: &[u8]) -> Result<(), WheelError> {
    if self.records.iter().any(|r| r.path == archive_path) {
      return Err(WheelError::DuplicateEntry(archive_path.to_string()));
    }
    self.zip.start_file(archive_path, Self::options())?;
    self.zip.write_all(data).map_err(WheelError::Write)?;

    let RecordDigest { digest, size } = RecordDigest::of(data);
    self.records.push(ManifestEntry {
      path: archive_path.to_string(),
      digest: Some(digest),
      size: Some(size),
    });
    Ok(())
  }

  /// Write `RECORD` at `record_path` and close the archive.
  ///
  /// Returns the underlying writer and the manifest, `RECORD` itself last
  /// with no digest.
  pub fn finish(mut self, record_path: &str) -> Result<(W, Vec<ManifestEntry>), WheelError> {
    self.records.push(ManifestEntry {
      path: record_path.to_string(),
      digest: None,
      size: None,
    });
    let record = render_record(&self.records);

    self.zip.start_file(record_path, Self::options())?;
    self.zip.write_all(record.as_bytes()).map_err(WheelError::Write)?;
    let inner = self.zip.finish()?;

    Ok((inner, self.records))
  }
}

/// Render `RECORD` as CSV: `path,digest,size` per line.
pub fn render_record(entries: &[ManifestEntry]) -> String {
  let mut out = String::new();
  for entry in entries {
    out.push_str(&csv_field(&entry.path));
    out.push(',');
    out.push_str(entry.digest.as_deref().unwrap_or(""));
    out.push(',');
    if let Some(size) = entry.size {
      out.push_str(&size.to_string());
    }
    out.push('\n');
  }
  out
}

fn csv_field(value: &str) -> String {
  if value.contains([',', '"', '\n']) {
    format!("\"{}\"", value.replace('"', "\"\""))
  } else {
    value.to_string()
  }
}
