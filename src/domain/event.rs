//! Event entity and its creation draft

use serde::{Deserialize, Serialize};

/// Image shown for events that carry no image of their own
pub const FALLBACK_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1552674605-db6ffd4facb5?q=80&w=1000";

/// Display date of an event: two labels, no calendar semantics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDate {
    pub month: String,
    pub day: String,
}

impl EventDate {
    pub fn new(month: impl Into<String>, day: impl Into<String>) -> Self {
        EventDate {
            month: month.into(),
            day: day.into(),
        }
    }
}

/// A scheduled community activity.
///
/// Field names are encoded in camelCase so stored blobs keep the layout the
/// browser build wrote (`fullDescription`, `startTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub date: EventDate,
    pub title: String,
    pub location: String,
    pub description: String,
    pub full_description: String,
    pub image: String,
    pub categories: Vec<String>,
    pub price: String,
    /// Absent and empty are distinct and both round-trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perks: Option<Vec<String>>,
    pub start_time: String,
}

impl Event {
    /// Attach an identifier to a draft
    pub fn from_draft(id: String, draft: EventDraft) -> Self {
        Event {
            id,
            date: draft.date,
            title: draft.title,
            location: draft.location,
            description: draft.description,
            full_description: draft.full_description,
            image: draft.image,
            categories: draft.categories,
            price: draft.price,
            perks: draft.perks,
            start_time: draft.start_time,
        }
    }

    /// Strip the identifier, e.g. to pre-fill an edit form
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            date: self.date.clone(),
            title: self.title.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            full_description: self.full_description.clone(),
            image: self.image.clone(),
            categories: self.categories.clone(),
            price: self.price.clone(),
            perks: self.perks.clone(),
            start_time: self.start_time.clone(),
        }
    }

    /// Image URL to render, falling back to the built-in one
    pub fn display_image(&self) -> &str {
        self.display_image_or(FALLBACK_EVENT_IMAGE)
    }

    /// Image URL to render, falling back to `fallback`
    pub fn display_image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.image.is_empty() {
            fallback
        } else {
            &self.image
        }
    }

    /// Long description for detail views, or the short one when it is empty
    pub fn detail_description(&self) -> &str {
        if self.full_description.is_empty() {
            &self.description
        } else {
            &self.full_description
        }
    }

    /// Free events are styled differently by list views
    pub fn is_free(&self) -> bool {
        let price = self.price.trim();
        price.eq_ignore_ascii_case("gratis") || price.eq_ignore_ascii_case("free")
    }

    /// Perks as a slice; absent reads as empty
    pub fn perks(&self) -> &[String] {
        self.perks.as_deref().unwrap_or(&[])
    }
}

/// Everything an event carries except its identifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub date: EventDate,
    pub title: String,
    pub location: String,
    pub description: String,
    pub full_description: String,
    pub image: String,
    pub categories: Vec<String>,
    pub price: String,
    pub perks: Option<Vec<String>>,
    pub start_time: String,
}

impl EventDraft {
    /// First required field that is blank, by form order
    pub fn missing_required_field(&self) -> Option<&'static str> {
        let required = [
            ("title", &self.title),
            ("month", &self.date.month),
            ("day", &self.date.day),
            ("location", &self.location),
            ("price", &self.price),
            ("start time", &self.start_time),
        ];
        required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}
