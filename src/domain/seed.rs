//! Built-in content installed when storage holds nothing usable

use crate::domain::{Event, EventDate, GalleryPhoto};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The two seed events, newest-first as displayed
pub fn default_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            date: EventDate::new("AGU", "25"),
            title: "Samawa Half Marathon".to_string(),
            location: "City Center, Jakarta".to_string(),
            description: "Tantang dirimu di jarak 21K dengan rute perkotaan yang menawan."
                .to_string(),
            full_description: "Samawa Half Marathon adalah event tahunan terbesar kami yang \
                melintasi jalanan protokol ibu kota. Rute yang steril dan pemandangan gedung \
                pencakar langit memberikan pengalaman lari yang tak terlupakan."
                .to_string(),
            image: "https://images.unsplash.com/photo-1452626038306-9aae5e071dd3?q=80&w=1000"
                .to_string(),
            categories: strings(&["5K Fun Run", "10K Road Race", "21K Half Marathon"]),
            price: "Rp 250.000".to_string(),
            perks: Some(strings(&["Jersey Eksklusif", "BIB Number", "Medali Finisher"])),
            start_time: "05:00 WIB".to_string(),
        },
        Event {
            id: "2".to_string(),
            date: EventDate::new("SEP", "12"),
            title: "Interval Training Session".to_string(),
            location: "Stadion Madya GBK".to_string(),
            description:
                "Sesi latihan kecepatan dipandu coach profesional untuk tingkatkan pace."
                    .to_string(),
            full_description: "Latihan interval adalah kunci untuk lari yang lebih cepat. \
                Dalam sesi ini, Anda akan dipandu oleh coach bersertifikat untuk melakukan \
                drill kecepatan dan teknik lari yang benar."
                .to_string(),
            image: "https://images.unsplash.com/photo-1596462502278-27bfad450216?q=80&w=1000"
                .to_string(),
            categories: strings(&["Beginner", "Advanced"]),
            price: "Gratis".to_string(),
            perks: Some(strings(&["Coaching Clinic", "Hydration"])),
            start_time: "06:00 WIB".to_string(),
        },
    ]
}

/// The six seed gallery photos
pub fn default_gallery() -> Vec<GalleryPhoto> {
    [
        (
            "g1",
            "https://images.unsplash.com/photo-1530143311094-34d807799e8f?q=80&w=1000",
            "Sunday Morning Run",
        ),
        (
            "g2",
            "https://images.unsplash.com/photo-1476480862126-209bfaa8edc8?q=80&w=1000",
            "Speed Session at Stadium",
        ),
        (
            "g3",
            "https://images.unsplash.com/photo-1502904550040-7534597429ae?q=80&w=1000",
            "Community Meetup",
        ),
        (
            "g4",
            "https://images.unsplash.com/photo-1486218119243-13883505764c?q=80&w=1000",
            "Marathon Finish Line",
        ),
        (
            "g5",
            "https://images.unsplash.com/photo-1533387558662-ee6920aa906e?q=80&w=1000",
            "Group Workout",
        ),
        (
            "g6",
            "https://images.unsplash.com/photo-1444491741275-3747c53c99b4?q=80&w=1000",
            "Evening City Run",
        ),
    ]
    .into_iter()
    .map(|(id, url, caption)| GalleryPhoto {
        id: id.to_string(),
        url: url.to_string(),
        caption: caption.to_string(),
    })
    .collect()
}
