//! Atomic TOML file operations.
//!
//! Thin layer for safe access to the small TOML files that make up a
//! profile (configuration and the two session entries). Writes go through
//! a temporary file plus rename so a crash never leaves a half-written
//! entry behind.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic TOML operations.
#[derive(Debug)]
pub enum AtomicTomlError {
    /// File I/O error.
    Io(std::io::Error),
    /// TOML deserialization error.
    Parse(toml::de::Error),
    /// TOML serialization error.
    Serialize(toml::ser::Error),
    /// File locking error.
    Lock(String),
}

impl std::fmt::Display for AtomicTomlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicTomlError::Io(e) => write!(f, "I/O error: {}", e),
            AtomicTomlError::Parse(e) => write!(f, "TOML parse error: {}", e),
            AtomicTomlError::Serialize(e) => write!(f, "TOML serialization error: {}", e),
            AtomicTomlError::Lock(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicTomlError {}

impl From<std::io::Error> for AtomicTomlError {
    fn from(e: std::io::Error) -> Self {
        AtomicTomlError::Io(e)
    }
}

impl From<toml::de::Error> for AtomicTomlError {
    fn from(e: toml::de::Error) -> Self {
        AtomicTomlError::Parse(e)
    }
}

impl From<toml::ser::Error> for AtomicTomlError {
    fn from(e: toml::ser::Error) -> Self {
        AtomicTomlError::Serialize(e)
    }
}

impl AtomicTomlError {
    /// Whether this error came from parsing stored content.
    pub fn is_parse(&self) -> bool {
        matches!(self, AtomicTomlError::Parse(_))
    }
}

/// A handle to a single TOML file with atomic write semantics.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Durability**: Explicit fsync before rename
/// - **Isolation**: Advisory file locking for transactional updates
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

// Manual impl: the handle is clonable regardless of T.
impl<T> Clone for AtomicTomlFile<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new handle for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Returns the underlying file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file and deserializes it.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the file atomically.
    ///
    /// Writes to a temporary file in the same directory, fsyncs it, then
    /// renames it over the target.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Removes the file. Succeeds when the file does not exist.
    pub fn delete(&self) -> Result<(), AtomicTomlError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Performs a transactional update under an advisory lock.
    ///
    /// The update function receives the current data (or `default_value`
    /// when nothing is stored) and may modify it; the result is written
    /// back atomically before the lock is released.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<(), AtomicTomlError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicTomlError>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)?;

        Ok(())
    }

    /// Builds the temporary file path used for atomic writes.
    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicTomlError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicTomlError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// Advisory file lock released on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    /// Acquires an exclusive lock next to the given path.
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicTomlError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped; removing the
        // lock file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<TestEntry>::new(temp_dir.path().join("entry.toml"));

        let entry = TestEntry {
            name: "test".to_string(),
            count: 42,
        };
        file.save(&entry).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn test_load_nonexistent_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<TestEntry>::new(temp_dir.path().join("missing.toml"));

        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.toml");
        fs::write(&path, "   \n").unwrap();
        let file = AtomicTomlFile::<TestEntry>::new(path);

        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_garbage_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garbage.toml");
        fs::write(&path, "not { valid toml").unwrap();
        let file = AtomicTomlFile::<TestEntry>::new(path);

        let err = file.load().unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<TestEntry>::new(temp_dir.path().join("entry.toml"));

        file.save(&TestEntry {
            name: "x".to_string(),
            count: 1,
        })
        .unwrap();

        file.delete().unwrap();
        assert!(file.load().unwrap().is_none());

        // Second delete must also succeed
        file.delete().unwrap();
    }

    #[test]
    fn test_update_applies_on_top_of_stored_value() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<TestEntry>::new(temp_dir.path().join("entry.toml"));

        let default = TestEntry {
            name: "default".to_string(),
            count: 0,
        };

        file.update(default.clone(), |entry| {
            entry.count += 10;
            Ok(())
        })
        .unwrap();
        file.update(default, |entry| {
            entry.count += 5;
            Ok(())
        })
        .unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.count, 15);
        assert_eq!(loaded.name, "default");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<TestEntry>::new(temp_dir.path().join("entry.toml"));

        file.save(&TestEntry {
            name: "x".to_string(),
            count: 1,
        })
        .unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
