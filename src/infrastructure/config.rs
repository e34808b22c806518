//! Site configuration

use crate::domain::FALLBACK_EVENT_IMAGE;
use crate::error::{Result, SamawarunError};
use crate::infrastructure::adapter::{EVENTS_SLOT, GALLERY_SLOT};
use crate::infrastructure::storage::validate_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the directory that marks a site root
pub const SITE_DIR: &str = ".samawarun";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_events_slot")]
    pub events_slot: String,
    #[serde(default = "default_gallery_slot")]
    pub gallery_slot: String,
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
    pub created: DateTime<Utc>,
}

fn default_events_slot() -> String {
    EVENTS_SLOT.to_string()
}

fn default_gallery_slot() -> String {
    GALLERY_SLOT.to_string()
}

fn default_fallback_image() -> String {
    FALLBACK_EVENT_IMAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            events_slot: default_events_slot(),
            gallery_slot: default_gallery_slot(),
            fallback_image: default_fallback_image(),
            created: Utc::now(),
        }
    }

    /// Load config from .samawarun/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SITE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SamawarunError::NotSiteDirectory(path.to_path_buf())
            } else {
                SamawarunError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| SamawarunError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .samawarun/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let site_dir = path.join(SITE_DIR);
        let config_path = site_dir.join("config.toml");

        if !site_dir.exists() {
            fs::create_dir(&site_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Slot names must be usable storage keys and must not collide
    pub fn validate(&self) -> Result<()> {
        for (field, slot) in [
            ("events_slot", &self.events_slot),
            ("gallery_slot", &self.gallery_slot),
        ] {
            validate_key(slot).map_err(|_| {
                SamawarunError::Config(format!(
                    "Invalid {}: '{}'. Use letters, digits, '_' or '-'",
                    field, slot
                ))
            })?;
        }

        if self.events_slot == self.gallery_slot {
            return Err(SamawarunError::Config(
                "events_slot and gallery_slot must differ".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert_eq!(config.events_slot, "samawarun_events");
        assert_eq!(config.gallery_slot, "samawarun_gallery");
        assert_eq!(config.fallback_image, FALLBACK_EVENT_IMAGE);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".samawarun").exists());
        assert!(temp.path().join(".samawarun/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            SamawarunError::NotSiteDirectory(_) => {}
            other => panic!("Expected NotSiteDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(SITE_DIR)).unwrap();
        fs::write(
            temp.path().join(".samawarun/config.toml"),
            "created = \"2025-01-17T08:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.events_slot, EVENTS_SLOT);
        assert_eq!(loaded.gallery_slot, GALLERY_SLOT);
    }

    #[test]
    fn test_colliding_slots_rejected() {
        let mut config = Config::new();
        config.gallery_slot = config.events_slot.clone();
        assert!(matches!(config.validate(), Err(SamawarunError::Config(_))));
    }

    #[test]
    fn test_invalid_slot_name_rejected() {
        let mut config = Config::new();
        config.events_slot = "../events".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("events_slot"));
    }
}
