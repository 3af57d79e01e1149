//! Rotating file writer with size-based rotation and backup retention.
//!
//! Trace output grows without bound on a long-lived session; this writer caps
//! disk usage by rotating the file past a size threshold and pruning old
//! backups beyond a fixed retention count.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (8 MB).
const MAX_FILE_SIZE_BYTES: u64 = 8 * 1024 * 1024;

/// Number of backup files retained after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// Thread-safe rotating file writer.
///
/// The file handle is opened lazily on first write and guarded by a `Mutex`.
/// Before each write the current file size is checked; past the threshold the
/// file is renamed to a timestamped backup (`<name>.json.<unix_timestamp>`), a
/// fresh file is started, and backups beyond the retention count are removed.
pub struct RotatingFileWriter {
    /// Path to the primary trace file.
    file_path: PathBuf,
    /// Lazily-initialized file handle.
    handle: Mutex<Option<fs::File>>,
}

impl RotatingFileWriter {
    /// Creates a writer for the given path.
    ///
    /// The file is not opened until the first write, so construction succeeds
    /// even when the path is not writable yet.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line to the file, rotating first if it has grown too large.
    ///
    /// The line is written with a trailing newline and flushed immediately;
    /// the sandbox gives no shutdown hook reliable enough to defer flushing to.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk space) or if another
    /// thread panicked while holding the writer lock.
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut handle = self.handle.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Writer lock poisoned: {e}"))
        })?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No file available"))?;

        writeln!(file, "{json}")?;
        file.flush()?;

        Ok(())
    }

    /// Whether the current file has exceeded the size threshold.
    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path)
            .map(|metadata| metadata.len() > MAX_FILE_SIZE_BYTES)
            .unwrap_or(false)
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    fn rotate(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.prune_backups()
    }

    /// Removes backup files beyond the retention limit, newest kept first.
    ///
    /// Individual deletion failures are ignored so pruning continues across
    /// the remaining candidates.
    fn prune_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}
