//! Gallery photo entity

use serde::{Deserialize, Serialize};

/// A single community photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: String,
    pub url: String,
    pub caption: String,
}

impl GalleryPhoto {
    pub fn from_draft(id: String, draft: PhotoDraft) -> Self {
        GalleryPhoto {
            id,
            url: draft.url,
            caption: draft.caption,
        }
    }
}

/// A photo before the store has assigned its identifier
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoDraft {
    pub url: String,
    pub caption: String,
}

impl PhotoDraft {
    pub fn new(url: impl Into<String>, caption: impl Into<String>) -> Self {
        PhotoDraft {
            url: url.into(),
            caption: caption.into(),
        }
    }

    /// First blank required field, if any
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.url.trim().is_empty() {
            Some("url")
        } else if self.caption.trim().is_empty() {
            Some("caption")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft() {
        let photo = GalleryPhoto::from_draft("g7".to_string(), PhotoDraft::new("u", "c"));
        assert_eq!(photo.id, "g7");
        assert_eq!(photo.url, "u");
        assert_eq!(photo.caption, "c");
    }

    #[test]
    fn test_missing_required_field() {
        assert_eq!(PhotoDraft::new("", "c").missing_required_field(), Some("url"));
        assert_eq!(PhotoDraft::new("u", " ").missing_required_field(), Some("caption"));
        assert_eq!(PhotoDraft::new("u", "c").missing_required_field(), None);
    }
}
