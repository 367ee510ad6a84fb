//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::repository::{FileCharacterRepository, Result};

/// Where and how character slots are stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub save_data_dir: PathBuf,
    pub save_extension: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_data_dir: default_save_dir(),
            save_extension: FileCharacterRepository::DEFAULT_EXTENSION.to_owned(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR` - Directory for save slots (default: platform-specific)
    /// - `CHARSHEET_SAVE_EXTENSION` - Slot file extension (default: txt)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("SAVE_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.save_data_dir = PathBuf::from(dir);
        }

        if let Some(extension) = read_env::<String>("CHARSHEET_SAVE_EXTENSION") {
            let extension = extension.trim().trim_start_matches('.');
            if !extension.is_empty() {
                config.save_extension = extension.to_owned();
            }
        }

        config
    }

    pub fn with_save_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_data_dir = dir.into();
        self
    }

    /// Open the slot repository described by this configuration.
    pub fn open_repository(&self) -> Result<FileCharacterRepository> {
        FileCharacterRepository::with_extension(&self.save_data_dir, self.save_extension.clone())
    }
}

/// Get the platform-specific save directory
///
/// - macOS: `~/Library/Application Support/charsheet`
/// - Linux: `~/.local/share/charsheet` (or `$XDG_DATA_HOME/charsheet`)
/// - Windows: `%APPDATA%\charsheet\data`
/// - Fallback: `./save_data`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "charsheet")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_uses_txt_slots() {
        let config = RuntimeConfig::default();
        assert_eq!(config.save_extension, "txt");
        assert!(!config.save_data_dir.as_os_str().is_empty());
    }

    #[test]
    fn open_repository_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("slots");

        let config = RuntimeConfig::default().with_save_data_dir(&dir);
        let repo = config.open_repository().unwrap();

        assert_eq!(repo.base_dir(), dir.as_path());
        assert!(dir.is_dir());
    }
}
