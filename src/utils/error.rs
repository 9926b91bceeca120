use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to parse project file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: quick_xml::Error,
    },

    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    AttrError(#[from] quick_xml::events::attributes::AttrError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Serialized document is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FixError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FixError::DirectoryNotFound { path } => {
                format!("The root directory '{}' does not exist", path.display())
            }
            FixError::ParseError { path, .. } => {
                format!("'{}' is not a valid project file", path.display())
            }
            FixError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixError::DirectoryNotFound { .. } => "Check the --root path and that it is readable",
            FixError::ParseError { .. } => "Fix or exclude the malformed project file and re-run",
            FixError::IoError(_) | FixError::WalkError(_) => {
                "Check file permissions and that no other process holds the file open"
            }
            FixError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
            _ => "Re-run with --verbose for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, FixError>;
