//! File system site repository

use crate::error::{Result, SamawarunError};
use crate::infrastructure::config::SITE_DIR;
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for a site's on-disk state
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from .samawarun/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .samawarun/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .samawarun directory exists
    fn is_initialized(&self) -> bool;

    /// Create .samawarun directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover site root by walking up from current directory
    /// First checks SAMAWARUN_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SAMAWARUN_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_site_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SamawarunError::Config(format!(
                    "SAMAWARUN_ROOT is set to '{}' but no .samawarun directory found. \
                    Run 'samawarun init' in that directory or unset SAMAWARUN_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_site_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(SamawarunError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_site_dir(path: &Path) -> bool {
        path.join(SITE_DIR).is_dir()
    }

    /// Durable storage living inside the site directory
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.root.join(SITE_DIR))
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.validate()?;
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_site_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let site_dir = self.root.join(SITE_DIR);

        if site_dir.exists() {
            return Err(SamawarunError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&site_dir)?;
        Ok(())
    }
}
