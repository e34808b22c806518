//! Infrastructure layer - Durable storage and site configuration

pub mod adapter;
pub mod config;
pub mod repository;
pub mod storage;

pub use adapter::{SlotAdapter, EVENTS_SLOT, GALLERY_SLOT};
pub use config::Config;
pub use repository::{FileSystemRepository, SiteRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
