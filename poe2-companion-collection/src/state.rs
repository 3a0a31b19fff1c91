//! Key-value persistence backends.
//!
//! The host exposes a flat string-keyed store (the browser extension storage
//! area in the original deployment). [`StateStore`] is the narrow contract
//! the collection store needs; [`JsonFileStore`] is the file-backed
//! implementation, writing one JSON file per key with a temp-file-then-rename
//! so a key either holds the new value or the previous one, never a torn
//! write. [`MemoryStore`] backs tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A flat key-value store for serialized forest state.
pub trait StateStore {
    /// Read the value persisted under `key`, or `None` if never written.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Durably record `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).write(key, value)
    }
}

/// File-backed store: one `<key>.json` file per key under a base directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        // Write atomically: the rename either lands or the old file stays.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at a stored value without going through the trait.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
