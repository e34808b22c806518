//! Initialize site use case

use crate::application::{open_site_store, ContentStore};
use crate::error::Result;
use crate::infrastructure::{Config, FileStorage, FileSystemRepository, SiteRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new site at the specified path and seed its content.
pub fn init(path: &Path) -> Result<ContentStore<FileStorage>> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;
    repo.save_config(&Config::new())?;

    let store = open_site_store(&repo)?;
    info!(
        "initialized site at {} with {} events and {} photos",
        path.display(),
        store.events().len(),
        store.gallery().len()
    );

    Ok(store)
}
