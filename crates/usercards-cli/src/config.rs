use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use usercards_types::Directory;

pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "usercards.log";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. USERCARDS_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.usercards (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("USERCARDS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("usercards"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".usercards"));
    }

    anyhow::bail!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    )
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_debounce_ms() -> u64 {
    180
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// JSON file replacing the built-in directory; relative paths are
    /// resolved against the directory holding the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<PathBuf>,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            directory_path: None,
            base_dir: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_debounce_override(mut self, debounce_ms: Option<u64>) -> Self {
        if let Some(ms) = debounce_ms {
            self.debounce_ms = ms;
        }
        self
    }

    pub fn resolved_directory_path(&self) -> Option<PathBuf> {
        let path = self.directory_path.as_ref()?;
        if path.is_absolute() {
            return Some(path.clone());
        }
        Some(match &self.base_dir {
            Some(base) => base.join(path),
            None => path.clone(),
        })
    }

    /// The configured directory, or the built-in one
    pub fn load_directory(&self) -> Result<Directory> {
        match self.resolved_directory_path() {
            Some(path) => {
                let directory = Directory::load_from(&path)
                    .with_context(|| format!("Failed to load directory {}", path.display()))?;
                tracing::info!(path = %path.display(), records = directory.len(), "loaded directory file");
                Ok(directory)
            }
            None => Ok(Directory::built_in()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use usercards_testing::fixtures;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.debounce_ms, 180);
        assert_eq!(config.debounce(), Duration::from_millis(180));
        assert!(config.directory_path.is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let config = Config {
            debounce_ms: 50,
            directory_path: Some(PathBuf::from("people.json")),
            base_dir: None,
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.debounce_ms, 50);
        assert_eq!(
            loaded.resolved_directory_path(),
            Some(temp_dir.path().join("people.json"))
        );
        Ok(())
    }

    #[test]
    fn test_missing_fields_take_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.debounce_ms, 180);
        assert!(loaded.directory_path.is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "debounce_ms = \"soon\"")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_debounce_override() {
        let config = Config::default().with_debounce_override(Some(10));
        assert_eq!(config.debounce_ms, 10);
        let config = config.with_debounce_override(None);
        assert_eq!(config.debounce_ms, 10);
    }

    #[test]
    fn test_load_directory_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fixtures::write_directory_file(
            temp_dir.path(),
            "people.json",
            fixtures::SMALL_DIRECTORY_JSON,
        )?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "directory_path = \"people.json\"\n")?;

        let directory = Config::load_from(&config_path)?.load_directory()?;
        assert_eq!(directory.len(), 3);
        assert_eq!(directory.all()[2].bio, None);
        Ok(())
    }

    #[test]
    fn test_load_directory_defaults_to_built_in() -> Result<()> {
        let directory = Config::default().load_directory()?;
        assert_eq!(directory, Directory::built_in());
        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/usercards"), PathBuf::from("/tmp/usercards"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }
}
