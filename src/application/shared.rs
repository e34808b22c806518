//! Thread-safe handle over a content store

use crate::application::ContentStore;
use crate::domain::{Event, EventDraft, GalleryPhoto, PhotoDraft};
use crate::error::Result;
use crate::infrastructure::KeyValueStorage;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle; every call holds the lock across read, compute and
/// persist, so read-modify-write operations never interleave.
#[derive(Debug)]
pub struct SharedContentStore<S> {
    inner: Arc<Mutex<ContentStore<S>>>,
}

impl<S> Clone for SharedContentStore<S> {
    fn clone(&self) -> Self {
        SharedContentStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStorage> SharedContentStore<S> {
    pub fn new(store: ContentStore<S>) -> Self {
        SharedContentStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ContentStore<S>> {
        // Mutations never leave a collection half-edited, so poisoning is ignored
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut ContentStore<S>) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn initialize(&self) -> Result<()> {
        self.lock().initialize()
    }

    /// Snapshot of the current events
    pub fn events(&self) -> Vec<Event> {
        self.lock().events().to_vec()
    }

    /// Snapshot of the current gallery
    pub fn gallery(&self) -> Vec<GalleryPhoto> {
        self.lock().gallery().to_vec()
    }

    pub fn add_event(&self, draft: EventDraft) -> Result<Event> {
        self.lock().add_event(draft)
    }

    pub fn update_event(&self, event: Event) -> Result<bool> {
        self.lock().update_event(event)
    }

    pub fn remove_event(&self, id: &str) -> Result<bool> {
        self.lock().remove_event(id)
    }

    pub fn add_gallery_photo(&self, draft: PhotoDraft) -> Result<GalleryPhoto> {
        self.lock().add_gallery_photo(draft)
    }

    pub fn remove_gallery_photo(&self, id: &str) -> Result<bool> {
        self.lock().remove_gallery_photo(id)
    }
}
