//! Settings file for `maze-solve`.

use std::{fs, path::Path};

use anyhow::Context;
use maze::{Charset, Strategy};
use serde::Deserialize;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "maze-solve.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)] // missing fields fall back to their defaults
pub struct Config {
    pub strategy: Strategy,
    pub show_explored: bool,
    pub charset: Charset,
}

impl Config {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = basic_toml::from_str(text)?;
        config.charset.validate()?;
        Ok(config)
    }

    /// Load the given file, or the default file if it exists. An explicitly requested file must
    /// exist and parse; a broken default file is skipped with a warning.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_or(path, Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_or(path: Option<&Path>, default_path: &Path) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                let config = Self::from_toml(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => {
                let Ok(text) = fs::read_to_string(default_path) else {
                    return Ok(Self::default());
                };
                match Self::from_toml(&text) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", default_path.display());
                        Ok(config)
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config {}: {}", default_path.display(), e);
                        Ok(Self::default())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r##"
strategy = "breadth-first"
show_explored = true

[charset]
start = "S"
goal = "G"
wall = "#"
"##,
        )
        .unwrap();

        assert_eq!(config.strategy, Strategy::BreadthFirst);
        assert!(config.show_explored);
        assert_eq!(config.charset.start, 'S');
        assert_eq!(config.charset.goal, 'G');
        assert_eq!(config.charset.wall, '#');
        // untouched fields keep their defaults
        assert_eq!(config.charset.open, ' ');
        assert_eq!(config.charset.path, '*');
    }

    #[test]
    fn test_bad_config() {
        assert!(Config::from_toml("strategy = \"sideways\"").is_err());
        assert!(Config::from_toml("[charset]\nstart = \"AB\"").is_err());
    }

    #[test]
    fn test_shared_loader_characters() {
        assert!(Config::from_toml("[charset]\nopen = \"A\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        assert!(Config::load(Some(Path::new("no/such/maze-solve.toml"))).is_err());
    }

    #[test]
    fn test_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let default_path = temp_dir.path().join(DEFAULT_CONFIG_PATH);

        // no file, no problem
        assert_eq!(
            Config::load_or(None, &default_path).unwrap(),
            Config::default()
        );

        fs::write(&default_path, "strategy = \"breadth-first\"\n").unwrap();
        let config = Config::load_or(None, &default_path).unwrap();
        assert_eq!(config.strategy, Strategy::BreadthFirst);

        // a broken default file is skipped
        fs::write(&default_path, "strategy = [1, 2]\n").unwrap();
        assert_eq!(
            Config::load_or(None, &default_path).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn test_broken_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "show_explored = \"maybe\"\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
        // the explicit file wins over the default one
        assert!(Config::load_or(Some(&path), &temp_dir.path().join("unused.toml")).is_err());
    }
}
