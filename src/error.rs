//! Error types for samawarun

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the samawarun site store
#[derive(Debug, Error)]
pub enum SamawarunError {
    #[error("Not a samawarun site directory: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Gallery photo not found: {0}")]
    PhotoNotFound(String),

    #[error("Missing required field: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Stored data in slot '{slot}' is corrupt: {source}")]
    Decode {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to persist slot '{slot}': {source}")]
    Persistence {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SamawarunError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SamawarunError::NotSiteDirectory(_) => 2,
            SamawarunError::EventNotFound(_) | SamawarunError::PhotoNotFound(_) => 3,
            SamawarunError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SamawarunError::NotSiteDirectory(path) => {
                format!(
                    "Not a samawarun site directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'samawarun init' in this directory to create a new site\n\
                    • Navigate to an existing site directory\n\
                    • Set SAMAWARUN_ROOT environment variable to your site path",
                    path.display()
                )
            }
            SamawarunError::EventNotFound(id) => {
                format!(
                    "No event with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'samawarun events list' to see event ids",
                    id
                )
            }
            SamawarunError::PhotoNotFound(id) => {
                format!(
                    "No gallery photo with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'samawarun gallery list' to see photo ids\n\
                    • Gallery ids start with 'g' (e.g., g1)",
                    id
                )
            }
            SamawarunError::Validation(field) => {
                format!(
                    "Missing required field: {}\n\n\
                    Required for events: title, month, day, location, price, start time\n\
                    Required for gallery photos: url, caption\n\
                    Example: samawarun events add --title 'Night Run' --month OKT --day 03 \
                    --location 'Alun-alun' --price Gratis --start-time '19:00 WIB'",
                    field
                )
            }
            SamawarunError::Persistence { .. } => {
                format!(
                    "{}\n\n\
                    The change was applied in memory but not saved.\n\
                    Check free disk space and permissions of the .samawarun directory.",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SamawarunError
pub type Result<T> = std::result::Result<T, SamawarunError>;
