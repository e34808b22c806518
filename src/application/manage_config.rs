//! Config management use case

use crate::error::{Result, SamawarunError};
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};

/// Keys accepted by `get`
pub const CONFIG_KEYS: &str = "events_slot, gallery_slot, fallback_image, created";

/// Service for managing site configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "events_slot" => Ok(config.events_slot),
            "gallery_slot" => Ok(config.gallery_slot),
            "fallback_image" => Ok(config.fallback_image),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SamawarunError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value.
    ///
    /// Renaming a slot does not move stored content; the next run seeds the
    /// new slot with the defaults.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "events_slot" => config.events_slot = value.to_string(),
            "gallery_slot" => config.gallery_slot = value.to_string(),
            "fallback_image" => config.fallback_image = value.to_string(),
            "created" => {
                return Err(SamawarunError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SamawarunError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: events_slot, gallery_slot, fallback_image",
                    key
                )));
            }
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("events_slot").unwrap(), "samawarun_events");
        assert_eq!(service.get("gallery_slot").unwrap(), "samawarun_gallery");
        assert!(service.get("fallback_image").unwrap().starts_with("https://"));
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.set("fallback_image", "https://example.com/run.jpg").unwrap();
        assert_eq!(
            service.get("fallback_image").unwrap(),
            "https://example.com/run.jpg"
        );
        assert_eq!(service.list().unwrap().fallback_image, "https://example.com/run.jpg");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let err = service.set("created", "2025-01-01T00:00:00Z").unwrap_err();
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "x").is_err());
    }

    #[test]
    fn test_set_rejects_colliding_slot() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("gallery_slot", "samawarun_events").is_err());
        assert_eq!(service.get("gallery_slot").unwrap(), "samawarun_gallery");
    }
}
