//! Gallery management use case

use crate::application::ContentStore;
use crate::domain::{GalleryPhoto, PhotoDraft};
use crate::error::{Result, SamawarunError};
use crate::infrastructure::KeyValueStorage;

/// Service for adding and removing gallery photos. Photos cannot be edited.
pub struct GalleryService<S> {
    store: ContentStore<S>,
}

impl<S: KeyValueStorage> GalleryService<S> {
    pub fn new(store: ContentStore<S>) -> Self {
        GalleryService { store }
    }

    pub fn into_store(self) -> ContentStore<S> {
        self.store
    }

    pub fn list(&self) -> &[GalleryPhoto] {
        self.store.gallery()
    }

    pub fn add(&mut self, draft: PhotoDraft) -> Result<GalleryPhoto> {
        if let Some(field) = draft.missing_required_field() {
            return Err(SamawarunError::Validation(field.to_string()));
        }
        self.store.add_gallery_photo(draft)
    }

    pub fn remove(&mut self, id: &str) -> Result<GalleryPhoto> {
        let photo = self
            .store
            .photo(id)
            .cloned()
            .ok_or_else(|| SamawarunError::PhotoNotFound(id.to_string()))?;
        self.store.remove_gallery_photo(id)?;
        Ok(photo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorage;

    fn service() -> GalleryService<MemoryStorage> {
        GalleryService::new(ContentStore::open(MemoryStorage::new()).unwrap())
    }

    #[test]
    fn test_add_photo() {
        let mut service = service();
        let photo = service
            .add(PhotoDraft::new("http://x/y.jpg", "Test"))
            .unwrap();
        assert_eq!(service.list().len(), 7);
        assert_eq!(service.list()[0], photo);
        assert!(photo.id.starts_with('g'));
    }

    #[test]
    fn test_add_requires_url_and_caption() {
        let mut service = service();
        assert!(matches!(
            service.add(PhotoDraft::new("", "Test")),
            Err(SamawarunError::Validation(f)) if f == "url"
        ));
        assert!(matches!(
            service.add(PhotoDraft::new("http://x/y.jpg", "")),
            Err(SamawarunError::Validation(f)) if f == "caption"
        ));
        assert_eq!(service.list().len(), 6);
    }

    #[test]
    fn test_remove_photo() {
        let mut service = service();
        let removed = service.remove("g2").unwrap();
        assert_eq!(removed.caption, "Speed Session at Stadium");
        assert_eq!(service.list().len(), 5);

        assert!(matches!(
            service.remove("g2"),
            Err(SamawarunError::PhotoNotFound(_))
        ));
    }
}
