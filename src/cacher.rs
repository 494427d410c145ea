use crate::error::Result;
use std::fs::{create_dir_all, read, write};
use std::path::PathBuf;

pub const EPISODES_KEY: &str = "episodesData";
pub const CHARACTERS_KEY: &str = "charactersData";

/// Key-value persistence for raw API payloads. Entries are either present or
/// absent; there is no expiry.
pub trait Store {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// A [`Store`] keeping one JSON file per key under a directory.
pub struct FileStore {
	dir: PathBuf,
}

impl FileStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		FileStore { dir: dir.into() }
	}

	fn path_for(&self, key: &str) -> PathBuf {
		self.dir.join(format!("{}.json", key))
	}
}

impl Store for FileStore {
	fn get(&self, key: &str) -> Option<String> {
		let bytes = read(self.path_for(key)).ok()?;
		String::from_utf8(bytes).ok()
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		create_dir_all(&self.dir)?;
		write(self.path_for(key), value)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_keys_read_as_absent() {
		let dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(dir.path());
		assert!(store.get(EPISODES_KEY).is_none());
	}

	#[test]
	fn entries_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(dir.path());
		store.set(EPISODES_KEY, r#"{"results":[]}"#).unwrap();
		assert_eq!(store.get(EPISODES_KEY).as_deref(), Some(r#"{"results":[]}"#));
	}

	#[test]
	fn keys_are_independent() {
		let dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(dir.path());
		store.set(EPISODES_KEY, "a").unwrap();
		store.set(CHARACTERS_KEY, "b").unwrap();
		assert_eq!(store.get(EPISODES_KEY).as_deref(), Some("a"));
		assert_eq!(store.get(CHARACTERS_KEY).as_deref(), Some("b"));
	}

	#[test]
	fn set_creates_the_directory() {
		let dir = tempfile::tempdir().unwrap();
		let store = FileStore::new(dir.path().join("nested"));
		store.set(CHARACTERS_KEY, "x").unwrap();
		assert_eq!(store.get(CHARACTERS_KEY).as_deref(), Some("x"));
	}
}
