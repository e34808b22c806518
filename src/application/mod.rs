//! Application layer - Content store and use cases

pub mod content_store;
pub mod init;
pub mod manage_config;
pub mod manage_events;
pub mod manage_gallery;
pub mod shared;

pub use content_store::ContentStore;
pub use manage_config::ConfigService;
pub use manage_events::EventService;
pub use manage_gallery::GalleryService;
pub use shared::SharedContentStore;

use crate::error::Result;
use crate::infrastructure::{FileStorage, FileSystemRepository, SiteRepository};

/// Open and initialize the content store of a site, using its configured slots
pub fn open_site_store(repo: &FileSystemRepository) -> Result<ContentStore<FileStorage>> {
    let config = repo.load_config()?;
    let mut store = ContentStore::with_slots(repo.storage(), config.events_slot, config.gallery_slot);
    store.initialize()?;
    Ok(store)
}
