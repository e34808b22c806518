//! Identifier generation
//!
//! Identifiers are millisecond timestamps rendered as text, the form the
//! browser build used. Each generator hands out strictly increasing values so
//! two additions within the same millisecond still get distinct identifiers.

use chrono::Utc;

/// Prefix that marks gallery identifiers
pub const GALLERY_ID_PREFIX: &str = "g";

/// Monotonic timestamp-based identifier source
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Next identifier for the given instant (milliseconds since epoch)
    pub fn next_at(&mut self, now_millis: i64) -> String {
        let value = now_millis.max(self.last + 1);
        self.last = value;
        value.to_string()
    }

    /// Next event identifier
    pub fn next_event_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next gallery identifier, carrying the gallery prefix
    pub fn next_gallery_id(&mut self) -> String {
        format!(
            "{}{}",
            GALLERY_ID_PREFIX,
            self.next_at(Utc::now().timestamp_millis())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_instant_yields_distinct_ids() {
        let mut ids = IdGenerator::new();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);
        assert_eq!(a, "1000");
        assert_eq!(b, "1001");
        assert_eq!(c, "1002");
    }

    #[test]
    fn test_follows_clock_when_it_moves_ahead() {
        let mut ids = IdGenerator::new();
        ids.next_at(1_000);
        assert_eq!(ids.next_at(5_000), "5000");
    }

    #[test]
    fn test_gallery_ids_are_prefixed() {
        let mut ids = IdGenerator::new();
        let id = ids.next_gallery_id();
        assert!(id.starts_with(GALLERY_ID_PREFIX));
        assert!(id[1..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_rapid_ids_unique() {
        let mut ids = IdGenerator::new();
        let seen: HashSet<String> = (0..500).map(|_| ids.next_event_id()).collect();
        assert_eq!(seen.len(), 500);
    }
}
