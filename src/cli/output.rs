//! Output formatting utilities

use crate::domain::{Event, GalleryPhoto};

/// Format the events list: one line per event
pub fn format_event_list(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found".to_string();
    }

    let mut output = String::new();
    for event in events {
        let price = if event.is_free() {
            format!("{} (free)", event.price)
        } else {
            event.price.clone()
        };
        output.push_str(&format!(
            "{:<14} {:>3} {:<3}  {}  [{}]\n",
            event.id, event.date.month, event.date.day, event.title, price
        ));
    }
    output
}

/// Format the detail view of one event
pub fn format_event_detail(event: &Event, fallback_image: &str) -> String {
    let mut output = format!(
        "{}\n\
        ID:         {}\n\
        Date:       {} {}\n\
        Start:      {}\n\
        Location:   {}\n\
        Price:      {}\n\
        Image:      {}\n",
        event.title,
        event.id,
        event.date.month,
        event.date.day,
        event.start_time,
        event.location,
        event.price,
        event.display_image_or(fallback_image),
    );

    if !event.categories.is_empty() {
        output.push_str(&format!("Categories: {}\n", event.categories.join(", ")));
    }
    if !event.perks().is_empty() {
        output.push_str(&format!("Perks:      {}\n", event.perks().join(", ")));
    }

    let description = event.detail_description();
    if !description.is_empty() {
        output.push('\n');
        output.push_str(description);
        output.push('\n');
    }

    output
}

/// Format the gallery list
pub fn format_gallery_list(photos: &[GalleryPhoto]) -> String {
    if photos.is_empty() {
        return "No photos found".to_string();
    }

    let mut output = String::new();
    for photo in photos {
        output.push_str(&format!("{:<15} {}\n", photo.id, photo.caption));
        output.push_str(&format!("{:<15} {}\n", "", photo.url));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_events, default_gallery, FALLBACK_EVENT_IMAGE};

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_event_list(&[]), "No events found");
        assert_eq!(format_gallery_list(&[]), "No photos found");
    }

    #[test]
    fn test_format_event_list() {
        let output = format_event_list(&default_events());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Samawa Half Marathon"));
        assert!(lines[0].contains("[Rp 250.000]"));
        assert!(lines[1].contains("[Gratis (free)]"));
        assert!(lines[1].starts_with("2 "));
    }

    #[test]
    fn test_format_event_detail() {
        let event = &default_events()[0];
        let output = format_event_detail(event, FALLBACK_EVENT_IMAGE);
        assert!(output.starts_with("Samawa Half Marathon\n"));
        assert!(output.contains("Date:       AGU 25"));
        assert!(output.contains("Categories: 5K Fun Run, 10K Road Race, 21K Half Marathon"));
        assert!(output.contains("Perks:      Jersey Eksklusif, BIB Number, Medali Finisher"));
        assert!(output.contains("event tahunan terbesar"));
    }

    #[test]
    fn test_format_event_detail_fallbacks() {
        let mut event = default_events()[1].clone();
        event.image.clear();
        event.full_description.clear();
        event.perks = None;

        let output = format_event_detail(&event, "https://example.com/fallback.jpg");
        assert!(output.contains("Image:      https://example.com/fallback.jpg"));
        assert!(output.contains("Sesi latihan kecepatan"));
        assert!(!output.contains("Perks:"));
    }

    #[test]
    fn test_format_gallery_list() {
        let output = format_gallery_list(&default_gallery());
        assert!(output.contains("g1              Sunday Morning Run"));
        assert_eq!(output.lines().count(), 12);
    }
}
