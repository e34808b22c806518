//! Event management use case
//!
//! The operator-facing side of the events collection: required fields are
//! checked here before anything reaches the store, and unknown identifiers
//! are reported instead of silently ignored.

use crate::application::ContentStore;
use crate::domain::{Event, EventDraft};
use crate::error::{Result, SamawarunError};
use crate::infrastructure::KeyValueStorage;

/// Service for creating, editing and removing events
pub struct EventService<S> {
    store: ContentStore<S>,
}

impl<S: KeyValueStorage> EventService<S> {
    pub fn new(store: ContentStore<S>) -> Self {
        EventService { store }
    }

    pub fn into_store(self) -> ContentStore<S> {
        self.store
    }

    pub fn list(&self) -> &[Event] {
        self.store.events()
    }

    pub fn show(&self, id: &str) -> Result<&Event> {
        self.store
            .event(id)
            .ok_or_else(|| SamawarunError::EventNotFound(id.to_string()))
    }

    /// Validate and add a new event
    pub fn add(&mut self, draft: EventDraft) -> Result<Event> {
        validate(&draft)?;
        self.store.add_event(draft)
    }

    /// Edit an event the way the admin form does: start from the stored
    /// record, apply the changes, then replace the record as a whole.
    pub fn edit(&mut self, id: &str, apply: impl FnOnce(&mut EventDraft)) -> Result<Event> {
        let mut draft = self.show(id)?.to_draft();
        apply(&mut draft);
        validate(&draft)?;

        let event = Event::from_draft(id.to_string(), draft);
        self.store.update_event(event.clone())?;
        Ok(event)
    }

    pub fn remove(&mut self, id: &str) -> Result<Event> {
        let event = self.show(id)?.clone();
        self.store.remove_event(id)?;
        Ok(event)
    }
}

fn validate(draft: &EventDraft) -> Result<()> {
    match draft.missing_required_field() {
        Some(field) => Err(SamawarunError::Validation(field.to_string())),
        None => Ok(()),
    }
}
