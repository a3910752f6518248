//! Append-only line writer that rotates by size.
//!
//! When the active file would grow past its limit it is renamed to a
//! timestamped backup (`<stem>-<YYYYmmddHHMMSSfff>.<ext>`) and a fresh file is
//! started. Only the newest backups are kept. Backup names sort by age, so
//! retention works on names alone.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the active file is rotated (5 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept after a rotation.
pub const DEFAULT_BACKUPS: usize = 3;

/// Thread-safe rotating writer. The file is opened lazily on the first write.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Writer with the default limits.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails on any I/O error while rotating, opening or writing, or when a
    /// previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map_or(0, |m| m.len());
        if current > 0 && current + incoming > self.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };
        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Moves the active file aside and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path())?;
        }
        self.prune_backups()
    }

    fn backup_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
        let (stem, ext) = self.name_parts();
        let name = if ext.is_empty() {
            format!("{stem}-{stamp}")
        } else {
            format!("{stem}-{stamp}.{ext}")
        };
        self.path.with_file_name(name)
    }

    fn name_parts(&self) -> (String, String) {
        let part = |s: Option<&std::ffi::OsStr>| {
            s.and_then(|s| s.to_str()).unwrap_or_default().to_string()
        };
        (part(self.path.file_stem()), part(self.path.extension()))
    }

    /// Backups of this file, oldest first.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let Some(dir) = self.path.parent() else {
            return Ok(Vec::new());
        };
        let (stem, ext) = self.name_parts();
        let prefix = format!("{stem}-");
        let suffix = if ext.is_empty() { String::new() } else { format!(".{ext}") };

        let mut found: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .and_then(|rest| rest.strip_suffix(&suffix))
                    .is_some_and(|stamp| !stamp.is_empty() && stamp.chars().all(|c| c.is_ascii_digit()))
            })
            .collect();
        found.sort();
        Ok(found)
    }

    fn prune_backups(&self) -> io::Result<()> {
        let backups = self.backups()?;
        let excess = backups.len().saturating_sub(self.backups);
        for old in &backups[..excess] {
            if let Err(e) = fs::remove_file(old) {
                tracing::debug!(path = %old.display(), error = %e, "could not remove old trace backup");
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup_count(writer: &RotatingFile) -> usize {
        writer.backups().unwrap().len()
    }

    #[test]
    fn appends_lines_without_rotating_under_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"));
        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let content = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content, "{\"a\":1}\n{\"b\":2}\n");
        assert_eq!(backup_count(&writer), 0);
    }

    #[test]
    fn rotates_when_the_next_line_would_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 16, 3);
        writer.write_line("0123456789").unwrap();
        writer.write_line("abcdefghij").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "abcdefghij\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789\n");
    }

    #[test]
    fn keeps_only_the_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in ["20200101000000000", "20200102000000000", "20200103000000000"] {
            fs::write(dir.path().join(format!("trace-{stamp}.json")), "old\n").unwrap();
        }
        fs::write(dir.path().join("trace-notes.json"), "unrelated\n").unwrap();

        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 3);
        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 3);
        assert!(!dir.path().join("trace-20200101000000000.json").exists());
        assert!(dir.path().join("trace-20200102000000000.json").exists());
        assert!(dir.path().join("trace-notes.json").exists());
    }

    #[test]
    fn oversized_single_line_is_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 3);
        writer.write_line("far too long").unwrap();
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "far too long\n");
        assert_eq!(backup_count(&writer), 0);
    }
}
