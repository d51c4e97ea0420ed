use anyhow::Result as _Result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipgenError {
    #[error("Config Error: {message}")]
    Config { message: String },

    #[error("Invalid template set: {name}")]
    InvalidTemplateSet { name: String },

    #[error("Snippet source not found: {path}")]
    SourceNotFound { path: String },

    #[error("File already exists: {path}")]
    OutputExists { path: String },

    #[error("No template set given and stdin is not a terminal")]
    NonInteractive,

    #[error("Strict mode rejected {count} issue(s):\n{details}")]
    StrictViolations { count: usize, details: String },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inquire Error: {0}")]
    Inquire(#[from] inquire::InquireError),

    #[error("JSON Parse Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML Parse Error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SnipgenError {
    pub fn display_localized(&self) -> String {
        match self {
            SnipgenError::Config { message } => {
                t!("errors.config_error", message = message).to_string()
            }
            SnipgenError::InvalidTemplateSet { name } => {
                t!("errors.invalid_template_set", name = name).to_string()
            }
            SnipgenError::SourceNotFound { path } => {
                t!("errors.source_not_found", path = path).to_string()
            }
            SnipgenError::OutputExists { path } => {
                t!("errors.output_exists", path = path).to_string()
            }
            SnipgenError::NonInteractive => t!("errors.non_interactive").to_string(),
            SnipgenError::StrictViolations { count, details } => {
                t!("errors.strict_violations", count = count, details = details).to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = _Result<T, SnipgenError>;
