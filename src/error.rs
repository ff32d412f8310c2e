//! Error types for the oz-streamer application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Stream resolution failed: {0}")]
    Resolution(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    // Navigation errors
    #[error("Nothing to choose from under '{0}'")]
    ExhaustedChoices(String),

    #[error("No playable item found within {0} levels")]
    DepthExceeded(usize),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // External tool errors
    #[error("Playback error: {0}")]
    Playback(String),

    #[error("{0} not found. Please install it and ensure it's in your PATH.")]
    PlayerNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Exit code for this error when it terminates the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Authentication(_)
            | Error::Catalog(_)
            | Error::Resolution(_)
            | Error::ChannelNotFound(_)
            | Error::Http(_) => exit_codes::API_ERROR,
            Error::ExhaustedChoices(_) | Error::DepthExceeded(_) | Error::InvalidSelection(_) => {
                exit_codes::NAVIGATION_ERROR
            }
            Error::Playback(_) | Error::PlayerNotFound(_) | Error::InvalidFilename(_) => {
                exit_codes::PLAYBACK_ERROR
            }
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const NAVIGATION_ERROR: i32 = 4;
    pub const PLAYBACK_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
