//! CLI command definitions

use crate::domain::EventDraft;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "samawarun")]
#[command(about = "Content manager for the Samawa Run community site", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site and seed its default content
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Manage events
    Events {
        #[command(subcommand)]
        action: EventsCommand,
    },

    /// Manage gallery photos
    Gallery {
        #[command(subcommand)]
        action: GalleryCommand,
    },

    /// Replace all events and photos with the default content
    Reset,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    /// List events, newest first
    List,

    /// Show all details of one event
    Show { id: String },

    /// Create an event
    Add {
        #[command(flatten)]
        fields: EventFields,
    },

    /// Edit an event; fields not given keep their current value
    Edit {
        id: String,

        #[command(flatten)]
        fields: EventFields,
    },

    /// Delete an event
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum GalleryCommand {
    /// List gallery photos, newest first
    List,

    /// Add a photo
    Add {
        /// Image URL
        #[arg(long)]
        url: String,

        /// Caption
        #[arg(long)]
        caption: String,
    },

    /// Delete a photo
    Remove { id: String },
}

/// Event form fields
#[derive(Args, Debug, Default)]
pub struct EventFields {
    #[arg(long)]
    pub title: Option<String>,

    /// Month label (e.g., AGU)
    #[arg(long)]
    pub month: Option<String>,

    /// Day label (e.g., 25)
    #[arg(long)]
    pub day: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Short description for list views
    #[arg(long)]
    pub description: Option<String>,

    /// Long description for the detail view
    #[arg(long)]
    pub full_description: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Comma-separated categories (e.g., "5K,10K")
    #[arg(long, value_delimiter = ',')]
    pub categories: Option<Vec<String>>,

    #[arg(long)]
    pub price: Option<String>,

    /// Comma-separated perks
    #[arg(long, value_delimiter = ',', conflicts_with = "no_perks")]
    pub perks: Option<Vec<String>>,

    /// Drop the perks list entirely
    #[arg(long)]
    pub no_perks: bool,

    #[arg(long)]
    pub start_time: Option<String>,
}

impl EventFields {
    /// Overwrite the draft with every field that was given
    pub fn apply(self, draft: &mut EventDraft) {
        fn set(target: &mut String, value: Option<String>) {
            if let Some(v) = value {
                *target = v;
            }
        }

        set(&mut draft.title, self.title);
        set(&mut draft.date.month, self.month);
        set(&mut draft.date.day, self.day);
        set(&mut draft.location, self.location);
        set(&mut draft.description, self.description);
        set(&mut draft.full_description, self.full_description);
        set(&mut draft.image, self.image);
        set(&mut draft.price, self.price);
        set(&mut draft.start_time, self.start_time);

        if let Some(categories) = self.categories {
            draft.categories = trimmed(categories);
        }
        if self.no_perks {
            draft.perks = None;
        } else if let Some(perks) = self.perks {
            draft.perks = Some(trimmed(perks));
        }
    }

    /// A blank form, as the admin panel opens it, filled from these fields
    pub fn into_draft(self) -> EventDraft {
        let mut draft = EventDraft {
            perks: Some(Vec::new()),
            ..EventDraft::default()
        };
        self.apply(&mut draft);
        draft
    }
}

fn trimmed(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
