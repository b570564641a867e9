//! Rotating log file writer with size-based rotation and backup retention.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Append-only log file that rotates once it grows past a size limit.
///
/// On rotation `dashboard.log` becomes `dashboard.log.1`, an existing `.1`
/// becomes `.2`, and so on; the backup past the retention limit is deleted.
///
/// The writer is not internally synchronized. Wrap it in a `Mutex` to use it
/// as a `tracing-subscriber` writer.
///
/// # Example
///
/// ```rust
/// use admin_dashboard::observability::RotatingFileWriter;
/// use std::io::Write;
///
/// let dir = tempfile::tempdir()?;
/// let mut writer = RotatingFileWriter::open(dir.path().join("dashboard.log"))?;
/// writeln!(writer, "dashboard started")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFileWriter {
    file_path: PathBuf,
    file: Option<File>,
    written: u64,
    max_bytes: u64,
    max_backups: usize,
}

impl RotatingFileWriter {
    /// Opens `file_path` for appending with the default limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened.
    pub fn open(file_path: impl Into<PathBuf>) -> io::Result<Self> {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Opens `file_path` with a custom size limit and backup count.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened.
    pub fn with_limits(file_path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> io::Result<Self> {
        let file_path = file_path.into();
        let file = open_append(&file_path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            file_path,
            file: Some(file),
            written,
            max_bytes,
            max_backups,
        })
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;

        if self.max_backups == 0 {
            fs::remove_file(&self.file_path)?;
        } else {
            let oldest = self.backup_path(self.max_backups);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for index in (1..self.max_backups).rev() {
                let from = self.backup_path(index);
                if from.exists() {
                    fs::rename(&from, self.backup_path(index + 1))?;
                }
            }
            fs::rename(&self.file_path, self.backup_path(1))?;
        }

        self.file = Some(open_append(&self.file_path)?);
        self.written = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }

        // a failed rotation leaves no handle open
        if self.file.is_none() {
            self.file = Some(open_append(&self.file_path)?);
        }
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))?;

        let n = file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.as_mut().map_or(Ok(()), Write::flush)
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}
