use crate::errors::{KekiError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Atomic file operations so an interrupted save never leaves a half-written cake
pub mod atomic_file {
    use super::*;

    /// Write JSON data to a file atomically using a temporary file + rename strategy with file locking
    pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        write_string(path, &content)
    }

    /// Write string content to a file atomically using a temporary file + rename strategy with file locking
    pub fn write_string(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    KekiError::storage(format!("Failed to create directory {parent:?}: {e}"))
                })?;
            }
        }

        crate::utils::file_locking::with_file_lock(path, || write_string_unlocked(path, content))
    }

    fn write_string_unlocked(path: &Path, content: &str) -> Result<()> {
        // Temp file lives next to the target so the rename never crosses filesystems
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, content)
            .map_err(|e| KekiError::storage(format!("Failed to write temporary file: {e}")))?;

        atomic_rename(&temp_path, path)
    }

    #[cfg(windows)]
    fn atomic_rename(temp_path: &Path, final_path: &Path) -> Result<()> {
        const MAX_RETRIES: u32 = 3;
        const RETRY_DELAY: std::time::Duration = std::time::Duration::from_millis(100);

        let mut attempt = 1;
        loop {
            match fs::rename(temp_path, final_path) {
                Ok(()) => return Ok(()),
                Err(e) if attempt >= MAX_RETRIES => {
                    let _ = fs::remove_file(temp_path);
                    return Err(KekiError::storage(format!(
                        "Failed to finalize file write after {MAX_RETRIES} attempts on Windows: {e}"
                    )));
                }
                Err(_) => {
                    attempt += 1;
                    std::thread::sleep(RETRY_DELAY);
                }
            }
        }
    }

    #[cfg(not(windows))]
    fn atomic_rename(temp_path: &Path, final_path: &Path) -> Result<()> {
        fs::rename(temp_path, final_path).map_err(|e| {
            let _ = fs::remove_file(temp_path);
            KekiError::storage(format!("Failed to finalize file write: {e}"))
        })
    }
}

/// Cake name validation
pub mod path_validation {
    use super::*;

    /// Extension used for cake files inside the bakery
    pub const CAKE_EXTENSION: &str = "txt";

    /// Normalize a user supplied cake name into something safe to use as a file stem.
    ///
    /// Surrounding whitespace is trimmed and a single trailing `.txt` is stripped so
    /// `birthday.txt` and `birthday` name the same cake. The result must then pass
    /// [`validate_cake_name`], so normalizing an already normalized name is a no-op.
    pub fn normalize_cake_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        let suffix = format!(".{CAKE_EXTENSION}");
        let stem = trimmed.strip_suffix(suffix.as_str()).unwrap_or(trimmed);

        validate_cake_name(stem)?;
        Ok(stem.to_string())
    }

    /// Check that `name` can be stored as-is as a cake name.
    ///
    /// Rejects empty and reserved names, names that would escape the bakery
    /// directory, surrounding whitespace and a trailing `.txt`.
    pub fn validate_cake_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(KekiError::validation("Cake name cannot be empty"));
        }

        if name == "." || name == ".." {
            return Err(KekiError::validation(format!(
                "Cake name '{name}' is reserved"
            )));
        }

        if name.trim() != name {
            return Err(KekiError::validation(format!(
                "Cake name '{name}' has leading or trailing whitespace"
            )));
        }

        if name.ends_with(&format!(".{CAKE_EXTENSION}")) {
            return Err(KekiError::validation(format!(
                "Cake name '{name}' cannot end in .{CAKE_EXTENSION}"
            )));
        }

        if let Some(bad) = name
            .chars()
            .find(|c| matches!(c, '/' | '\\') || c.is_control())
        {
            return Err(KekiError::validation(format!(
                "Cake name '{}' contains an invalid character {bad:?}",
                name.escape_debug()
            )));
        }

        Ok(())
    }
}

/// File locking for the short window in which a file is being replaced
pub mod file_locking {
    use super::*;
    use std::fs::{File, OpenOptions};
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    /// A lock file held next to the file being written; removed when dropped
    pub struct FileLock {
        _file: File,
        lock_path: PathBuf,
    }

    impl FileLock {
        const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
        const RETRY_INTERVAL: Duration = Duration::from_millis(50);

        /// Attempt to acquire a lock on a file with timeout.
        ///
        /// Writers hold the lock for a single write and rename. A lock file that
        /// has existed for at least `timeout` was left behind by a process that
        /// died mid-save; it is removed and acquisition is retried.
        pub fn acquire_with_timeout(file_path: &Path, timeout: Duration) -> Result<Self> {
            let lock_path = file_path.with_extension("lock");
            let start_time = Instant::now();

            loop {
                match Self::try_acquire(&lock_path) {
                    Ok(lock) => return Ok(lock),
                    Err(e) => {
                        if Self::is_stale(&lock_path, timeout) {
                            warn!("Removing stale lock {}", lock_path.display());
                            let _ = fs::remove_file(&lock_path);
                            continue;
                        }
                        if start_time.elapsed() >= timeout {
                            return Err(KekiError::storage(format!(
                                "Timeout waiting for lock on {file_path:?} after {}ms: {e}",
                                timeout.as_millis()
                            )));
                        }
                        std::thread::sleep(Self::RETRY_INTERVAL);
                    }
                }
            }
        }

        fn is_stale(lock_path: &Path, max_age: Duration) -> bool {
            fs::metadata(lock_path)
                .and_then(|metadata| metadata.modified())
                .ok()
                .and_then(|modified| modified.elapsed().ok())
                .is_some_and(|age| age >= max_age)
        }

        /// Try to acquire a lock immediately (non-blocking)
        pub fn try_acquire(lock_path: &Path) -> Result<Self> {
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(lock_path)
                .map_err(|e| {
                    KekiError::storage(format!("Failed to acquire lock {lock_path:?}: {e}"))
                })?;

            Ok(Self {
                _file: file,
                lock_path: lock_path.to_path_buf(),
            })
        }

        /// Acquire a lock with the default timeout
        pub fn acquire(file_path: &Path) -> Result<Self> {
            Self::acquire_with_timeout(file_path, Self::DEFAULT_TIMEOUT)
        }
    }

    impl Drop for FileLock {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.lock_path);
        }
    }

    /// Execute an operation with file locking protection
    pub fn with_file_lock<F, R>(file_path: &Path, operation: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        let _lock = FileLock::acquire(file_path)?;
        operation()
    }
}
