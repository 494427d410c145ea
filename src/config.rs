use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Settings read from an optional TOML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the episode/character API.
    pub base_url: String,
    /// Directory holding the cached raw payloads.
    pub cache_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.into(),
            cache_dir: PathBuf::from("./cache"),
        }
    }
}

impl Config {
    /// Read the file when it exists, otherwise fall back to defaults. A file
    /// that exists but does not parse is an error, not a silent default.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(path)?;
        let config = toml::from_str(&data)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_public_api() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_dir, PathBuf::from("./cache"));
    }

    #[test]
    fn parses_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rm-timeline.toml");
        fs::write(
            &path,
            "base_url = \"http://localhost:8080/api\"\ncache_dir = \"/tmp/rm\"\n",
        )
        .unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/rm"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rm-timeline.toml");
        fs::write(&path, "base_url = [not toml").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }
}
