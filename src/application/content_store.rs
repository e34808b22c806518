//! Content store: the events and gallery collections
//!
//! Owns both collections, seeds them on first run and routes every mutation
//! through the slot adapter. Each mutating call rewrites the whole collection
//! as its last step, so memory and storage agree after every successful call.
//!
//! Unknown identifiers are tolerated: `update_event` and the `remove_*`
//! calls leave the collection as it was, still persist it, and report the
//! miss only through their `bool` return value.

use crate::domain::{
    default_events, default_gallery, Event, EventDraft, GalleryPhoto, IdGenerator, PhotoDraft,
};
use crate::error::{Result, SamawarunError};
use crate::infrastructure::{KeyValueStorage, SlotAdapter, EVENTS_SLOT, GALLERY_SLOT};
use log::{info, warn};

#[derive(Debug)]
pub struct ContentStore<S> {
    adapter: SlotAdapter<S>,
    events_slot: String,
    gallery_slot: String,
    events: Vec<Event>,
    gallery: Vec<GalleryPhoto>,
    ids: IdGenerator,
}

impl<S: KeyValueStorage> ContentStore<S> {
    /// Store over `storage` using the default slot names. Collections stay
    /// empty until [`ContentStore::initialize`] runs.
    pub fn new(storage: S) -> Self {
        Self::with_slots(storage, EVENTS_SLOT, GALLERY_SLOT)
    }

    pub fn with_slots(
        storage: S,
        events_slot: impl Into<String>,
        gallery_slot: impl Into<String>,
    ) -> Self {
        ContentStore {
            adapter: SlotAdapter::new(storage),
            events_slot: events_slot.into(),
            gallery_slot: gallery_slot.into(),
            events: Vec::new(),
            gallery: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Construct and initialize in one step
    pub fn open(storage: S) -> Result<Self> {
        let mut store = Self::new(storage);
        store.initialize()?;
        Ok(store)
    }

    /// Load both collections. A slot that is empty or unreadable gets the
    /// built-in defaults, which are written back immediately.
    pub fn initialize(&mut self) -> Result<()> {
        match self.adapter.load::<Event>(&self.events_slot) {
            Ok(Some(events)) => self.events = events,
            outcome => {
                Self::log_fallback(&self.events_slot, outcome.err());
                self.events = default_events();
                self.adapter.save(&self.events_slot, &self.events)?;
            }
        }

        match self.adapter.load::<GalleryPhoto>(&self.gallery_slot) {
            Ok(Some(gallery)) => self.gallery = gallery,
            outcome => {
                Self::log_fallback(&self.gallery_slot, outcome.err());
                self.gallery = default_gallery();
                self.adapter.save(&self.gallery_slot, &self.gallery)?;
            }
        }

        Ok(())
    }

    fn log_fallback(slot: &str, error: Option<SamawarunError>) {
        match error {
            Some(e) => warn!("{}; installing default content", e),
            None => info!("slot {} is empty, installing default content", slot),
        }
    }

    /// Current events, newest first
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Current gallery photos, newest first
    pub fn gallery(&self) -> &[GalleryPhoto] {
        &self.gallery
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn photo(&self, id: &str) -> Option<&GalleryPhoto> {
        self.gallery.iter().find(|p| p.id == id)
    }

    /// Prepend a new event built from `draft`. Required fields are not
    /// checked here.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<Event> {
        let mut id = self.ids.next_event_id();
        while self.event(&id).is_some() {
            id = self.ids.next_event_id();
        }

        let event = Event::from_draft(id, draft);
        self.events.insert(0, event.clone());
        self.persist_events()?;
        Ok(event)
    }

    /// Replace the event carrying `event.id`, keeping its position.
    /// Returns whether such an event existed.
    pub fn update_event(&mut self, event: Event) -> Result<bool> {
        let found = match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event;
                true
            }
            None => false,
        };
        self.persist_events()?;
        Ok(found)
    }

    /// Drop the event with `id`. Returns whether one was removed.
    pub fn remove_event(&mut self, id: &str) -> Result<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;
        self.persist_events()?;
        Ok(removed)
    }

    /// Prepend a new photo; its identifier carries the gallery prefix
    pub fn add_gallery_photo(&mut self, draft: PhotoDraft) -> Result<GalleryPhoto> {
        let mut id = self.ids.next_gallery_id();
        while self.photo(&id).is_some() {
            id = self.ids.next_gallery_id();
        }

        let photo = GalleryPhoto::from_draft(id, draft);
        self.gallery.insert(0, photo.clone());
        self.persist_gallery()?;
        Ok(photo)
    }

    /// Drop the photo with `id`. Returns whether one was removed.
    pub fn remove_gallery_photo(&mut self, id: &str) -> Result<bool> {
        let before = self.gallery.len();
        self.gallery.retain(|p| p.id != id);
        let removed = self.gallery.len() != before;
        self.persist_gallery()?;
        Ok(removed)
    }

    /// Reinstall the built-in content in both collections
    pub fn reset(&mut self) -> Result<()> {
        self.events = default_events();
        self.gallery = default_gallery();
        self.persist_events()?;
        self.persist_gallery()
    }

    pub fn storage(&self) -> &S {
        self.adapter.storage()
    }

    pub fn into_storage(self) -> S {
        self.adapter.into_storage()
    }

    fn persist_events(&mut self) -> Result<()> {
        self.adapter.save(&self.events_slot, &self.events)
    }

    fn persist_gallery(&mut self) -> Result<()> {
        self.adapter.save(&self.gallery_slot, &self.gallery)
    }
}
