//! Persisted CLI defaults
//!
//! Remembers the last template folder, output folder and recently packed
//! vehicles between runs. Only the command-line front end reads this; the
//! pack functions take everything as arguments.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum number of recent vehicle folders to track
const MAX_RECENT_VEHICLES: usize = 10;

/// Persistable configuration (saved to disk)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PersistedConfig {
    /// Template root used when none is given on the command line
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
    /// Output folder used when none is given on the command line
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Recently packed vehicle folders (most recent first)
    #[serde(default)]
    pub recent_vehicle_dirs: Vec<PathBuf>,
}

impl PersistedConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("PackCreator").join("config.json"))
    }

    /// Load config from the default location, or return default
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from `path`, falling back to default on any read or parse failure
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => {
                tracing::warn!("No config directory on this platform, settings not saved");
                Ok(())
            }
        }
    }

    /// Save config to `path`, creating parent folders
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Move `dirs` to the front of the recent list, dropping duplicates and old entries
    pub fn remember_vehicles(&mut self, dirs: &[PathBuf]) {
        for dir in dirs.iter().rev() {
            self.recent_vehicle_dirs.retain(|existing| existing != dir);
            self.recent_vehicle_dirs.insert(0, dir.clone());
        }
        self.recent_vehicle_dirs.truncate(MAX_RECENT_VEHICLES);
    }

    /// `dirs` when non-empty, otherwise the recently packed vehicle folders
    pub fn vehicles_or_recent(&self, dirs: &[PathBuf]) -> Vec<PathBuf> {
        if dirs.is_empty() {
            self.recent_vehicle_dirs.clone()
        } else {
            dirs.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = PersistedConfig::load_from(&temp.path().join("config.json"));
        assert_eq!(config, PersistedConfig::default());
    }

    #[test]
    fn test_load_corrupt_file_is_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(PersistedConfig::load_from(&path), PersistedConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");

        let config = PersistedConfig {
            template_dir: Some("/packs/template".into()),
            output_dir: Some("/packs/out".into()),
            recent_vehicle_dirs: vec!["/cars/alpha".into()],
        };
        config.save_to(&path).unwrap();

        assert_eq!(PersistedConfig::load_from(&path), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{ "template_dir": "/tpl" }"#).unwrap();

        let config = PersistedConfig::load_from(&path);
        assert_eq!(config.template_dir, Some(PathBuf::from("/tpl")));
        assert!(config.recent_vehicle_dirs.is_empty());
    }

    #[test]
    fn test_remember_vehicles() {
        let mut config = PersistedConfig {
            recent_vehicle_dirs: vec!["b".into(), "c".into()],
            ..Default::default()
        };
        config.remember_vehicles(&["a".into(), "b".into()]);
        assert_eq!(
            config.recent_vehicle_dirs,
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );

        let many: Vec<PathBuf> = (0..15).map(|i| PathBuf::from(format!("car{i}"))).collect();
        config.remember_vehicles(&many);
        assert_eq!(config.recent_vehicle_dirs.len(), MAX_RECENT_VEHICLES);
        assert_eq!(config.recent_vehicle_dirs[0], PathBuf::from("car0"));
    }

    #[test]
    fn test_vehicles_or_recent() {
        let config = PersistedConfig {
            recent_vehicle_dirs: vec!["recent".into()],
            ..Default::default()
        };
        assert_eq!(config.vehicles_or_recent(&[]), vec![PathBuf::from("recent")]);
        assert_eq!(
            config.vehicles_or_recent(&["given".into()]),
            vec![PathBuf::from("given")]
        );
        assert!(PersistedConfig::default().vehicles_or_recent(&[]).is_empty());
    }
}
