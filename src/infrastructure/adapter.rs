//! Slot adapter: collections to and from named JSON blobs

use crate::error::{Result, SamawarunError};
use crate::infrastructure::storage::KeyValueStorage;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default slot holding the events collection
pub const EVENTS_SLOT: &str = "samawarun_events";

/// Default slot holding the gallery collection
pub const GALLERY_SLOT: &str = "samawarun_gallery";

/// Serializes whole collections into storage slots. No business logic.
#[derive(Debug, Clone)]
pub struct SlotAdapter<S> {
    storage: S,
}

impl<S: KeyValueStorage> SlotAdapter<S> {
    pub fn new(storage: S) -> Self {
        SlotAdapter { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load the collection stored under `slot`.
    ///
    /// `Ok(None)` when the slot is empty; `Decode` when the blob does not
    /// parse as a collection of `T`.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<Vec<T>>> {
        let Some(text) = self.storage.get(slot)? else {
            debug!("slot {} is empty", slot);
            return Ok(None);
        };

        let items: Vec<T> = serde_json::from_str(&text).map_err(|source| SamawarunError::Decode {
            slot: slot.to_string(),
            source,
        })?;
        debug!("loaded {} records from slot {}", items.len(), slot);
        Ok(Some(items))
    }

    /// Overwrite `slot` with the full collection
    pub fn save<T: Serialize>(&mut self, slot: &str, items: &[T]) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.storage
            .set(slot, &text)
            .map_err(|source| SamawarunError::Persistence {
                slot: slot.to_string(),
                source,
            })?;
        debug!("saved {} records to slot {}", items.len(), slot);
        Ok(())
    }
}
