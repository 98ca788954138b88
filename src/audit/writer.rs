//! CSV writer behind the append-record interface.

use super::record::{HEADER, LogRecord};
use crate::error::{AdminError, Result};
use crate::fs::atomic_write;
use crate::locks;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// The audit log file.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file with a header row if needed.
    ///
    /// A missing or empty file is written whole through a temporary file.
    /// An existing file must start with [`HEADER`]; the row is appended and
    /// synced without touching earlier rows. A missing final line ending is
    /// added when the last row is otherwise whole; a file ending in a torn
    /// row is refused. The append is guarded by the log's lock file.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::LogWrite` if the lock is held, the header does
    /// not match, the last row is torn, or any I/O fails.
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let _lock = locks::acquire_file_lock(&self.path, &record.action)?;

        let existing_len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => {
                return Err(self.io_error("failed to inspect", e));
            }
        };

        if existing_len == 0 {
            tracing::info!(path = %self.path.display(), "creating audit log");
            let content = encode(record, true)?;
            return atomic_write(&self.path, &content);
        }

        self.check_header()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error("failed to open", e))?;

        let mut row = Vec::new();
        if !ends_with_newline(&mut file).map_err(|e| self.io_error("failed to read", e))? {
            if !self.last_row_complete()? {
                return Err(AdminError::log_write(format!(
                    "'{}' ends with a partially written row; refusing to append",
                    self.path.display()
                )));
            }
            row.push(b'\n');
        }
        row.extend(encode(record, false)?);

        file.write_all(&row)
            .map_err(|e| self.io_error("failed to append to", e))?;
        file.sync_all()
            .map_err(|e| self.io_error("failed to sync", e))?;

        tracing::debug!(path = %self.path.display(), action = %record.action, "appended audit record");
        Ok(())
    }

    /// Refuse to append to a file written with a different column layout.
    fn check_header(&self) -> Result<()> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_error("failed to read", e))?;

        let headers = reader
            .headers()
            .map_err(|e| self.csv_error("failed to read header of", e))?;

        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(AdminError::log_write(format!(
                "'{}' does not start with the expected header ({}); refusing to append",
                self.path.display(),
                HEADER.join(",")
            )));
        }
        Ok(())
    }

    /// Whether the last row, lacking only its line ending, is whole: every
    /// column present and no quoted field left open.
    fn last_row_complete(&self) -> Result<bool> {
        let content = fs::read(&self.path).map_err(|e| self.io_error("failed to read", e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_slice());

        let mut record = csv::ByteRecord::new();
        let mut last_start = 0;
        let mut last_fields = 0;
        loop {
            let start = reader.position().byte();
            match reader.read_byte_record(&mut record) {
                Ok(true) => {
                    last_start = start;
                    last_fields = record.len();
                }
                Ok(false) => break,
                Err(_) => return Ok(false),
            }
        }

        let tail = content.get(last_start as usize..).unwrap_or_default();
        let quotes = tail.iter().filter(|b| **b == b'"').count();
        Ok(last_fields == HEADER.len() && quotes % 2 == 0)
    }

    fn io_error(&self, what: &str, e: std::io::Error) -> AdminError {
        AdminError::log_write(format!("{} '{}': {}", what, self.path.display(), e))
    }

    fn csv_error(&self, what: &str, e: csv::Error) -> AdminError {
        AdminError::log_write(format!("{} '{}': {}", what, self.path.display(), e))
    }
}

/// Encode one record as a CSV row, optionally preceded by the header.
fn encode(record: &LogRecord, with_header: bool) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(Vec::new());

    writer
        .serialize(record)
        .map_err(|e| AdminError::log_write(format!("failed to encode record: {}", e)))?;

    writer
        .into_inner()
        .map_err(|e| AdminError::log_write(format!("failed to encode record: {}", e)))
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    let len = file.seek(SeekFrom::End(0))?;
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Read every record in the log, oldest first.
#[cfg(test)]
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<LogRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        AdminError::log_write(format!("failed to read '{}': {}", path.display(), e))
    })?;

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<LogRecord>, _>>()
        .map_err(|e| AdminError::log_write(format!("failed to parse '{}': {}", path.display(), e)))
}
