//! String key-value persistence for letters and recipient labels.
//!
//! The store never touches a global; it is handed a [`KeyValueStorage`].
//! [`FileStorage`] keeps one file per key, [`MemoryStorage`] lives only as
//! long as the process.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read '{key}': {source}")]
    Read { key: String, source: io::Error },
    #[error("failed to write '{key}': {source}")]
    Write { key: String, source: io::Error },
    #[error("failed to encode '{key}': {source}")]
    Encode { key: String, source: serde_json::Error },
}

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under `root`. Writes go through a temp file and a rename,
/// so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(file_name_for(key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // Unreadable bytes count as corrupt data, which callers treat as empty.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(source) => Err(StorageError::Read { key: key.to_string(), source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let wrap = |source: io::Error| StorageError::Write { key: key.to_string(), source };

        fs::create_dir_all(&self.root).map_err(wrap)?;
        let mut temp = NamedTempFile::new_in(&self.root).map_err(wrap)?;
        temp.write_all(value.as_bytes()).map_err(wrap)?;
        temp.persist(self.path_for(key)).map_err(|e| wrap(e.error))?;
        Ok(())
    }
}

/// Longest escaped key kept verbatim in a file name. Well under the common
/// 255-byte limit once the digest and extension are added.
const MAX_ESCAPED_KEY: usize = 120;

/// Map a storage key to a portable file name: `[A-Za-z0-9._-]` pass through,
/// every other byte becomes `%XX`. Keys whose escaped form is too long keep a
/// prefix and gain a SHA-256 digest of the full key.
pub fn file_name_for(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 5);
    for b in key.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-') {
            name.push(b as char);
        } else {
            let _ = write!(name, "%{b:02X}");
        }
    }

    if name.len() > MAX_ESCAPED_KEY {
        // escaped names are ASCII, so any byte index is a char boundary
        name.truncate(MAX_ESCAPED_KEY);
        let digest = Sha256::digest(key.as_bytes());
        name.push('~');
        name.push_str(&hex::encode(digest));
    }
    name.push_str(".json");
    name
}
