//! CLI layer - Operator console

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, EventFields, EventsCommand, GalleryCommand};
pub use output::{format_event_detail, format_event_list, format_gallery_list};
