//! Domain layer - Content entities, seed data and identifiers

pub mod event;
pub mod gallery;
pub mod id;
pub mod seed;

pub use event::{Event, EventDate, EventDraft, FALLBACK_EVENT_IMAGE};
pub use gallery::{GalleryPhoto, PhotoDraft};
pub use id::{IdGenerator, GALLERY_ID_PREFIX};
pub use seed::{default_events, default_gallery};
