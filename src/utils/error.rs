use crate::domain::model::CharacterId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Malformed team document: {0}")]
    MalformedEncoding(#[source] serde_json::Error),

    #[error("Invalid team document shape at {location}: {reason}")]
    InvalidShape { location: String, reason: String },

    #[error("Team has {len} members, at most {capacity} are allowed")]
    CapacityExceeded { len: usize, capacity: usize },

    #[error("Character id {id} appears more than once in the team")]
    DuplicateId { id: CharacterId },

    #[error("No character with id {id} in the catalog")]
    UnknownCharacter { id: CharacterId },

    #[error("Invalid file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("Unknown command: {input}")]
    UnknownCommand { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Import,
    Selection,
    Input,
    Storage,
    Catalog,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TeamError {
    pub fn invalid_shape(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            location: location.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedEncoding(_) | Self::InvalidShape { .. } => ErrorCategory::Import,
            Self::CapacityExceeded { .. } | Self::DuplicateId { .. } => ErrorCategory::Selection,
            Self::UnknownCharacter { .. }
            | Self::UnknownCommand { .. }
            | Self::InvalidFileName { .. } => ErrorCategory::Input,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::CatalogError { .. } => ErrorCategory::Catalog,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Everything a user can fix by trying again is at most `Medium`;
    /// `High` and above are fatal at startup.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Import | ErrorCategory::Selection | ErrorCategory::Storage => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::Critical,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MalformedEncoding(_) => {
                "The imported file is not valid JSON. Your team was not changed.".to_string()
            }
            Self::InvalidShape { location, reason } => format!(
                "The imported file does not have the expected format ({}: {}). Your team was not changed.",
                location, reason
            ),
            Self::CapacityExceeded { len, capacity } => format!(
                "The imported team has {} characters but a team holds at most {}. Your team was not changed.",
                len, capacity
            ),
            Self::DuplicateId { id } => format!(
                "The imported team lists character {} twice. Your team was not changed.",
                id
            ),
            Self::UnknownCharacter { id } => format!("There is no character with id {}.", id),
            Self::UnknownCommand { input } => format!("Unrecognized command '{}'.", input),
            Self::InvalidFileName { name, reason } => {
                format!("Cannot export to '{}': {}", name, reason)
            }
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::SerializationError(e) => format!("Could not encode the team: {}", e),
            Self::CatalogError { message } => format!("The character catalog is unusable: {}", message),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has an invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MalformedEncoding(_) | Self::InvalidShape { .. } => {
                "Choose a file previously produced by the export command"
            }
            Self::CapacityExceeded { .. } | Self::DuplicateId { .. } => {
                "Edit the file down to four distinct characters, or set import policy to 'truncate'"
            }
            Self::UnknownCharacter { .. } => "Run 'list' to see the available character ids",
            Self::UnknownCommand { .. } => "Run 'help' to see the available commands",
            Self::InvalidFileName { .. } => {
                "Give a plain file name; exports always go to the configured output directory"
            }
            Self::IoError(_) => "Check that the path exists and is readable/writable",
            Self::SerializationError(_) => "Retry the export; if it persists, report a bug",
            Self::CatalogError { .. } => "Fix the catalog file or omit --catalog to use the built-in one",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TeamError>;
