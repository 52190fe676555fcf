use thiserror::Error;

pub type BlockmailResult<T> = Result<T, BlockmailError>;

/// Hard failures at the crate boundary.
///
/// The engine itself degrades softly (skipped updates, omitted blocks) and
/// never returns these; they surface from template loading, document
/// parsing, and settings validation.
#[derive(Error, Debug)]
pub enum BlockmailError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse block document: {0}")]
    DocumentError(String),

    #[error("Invalid color value '{value}' for '{field}': expected a #rrggbb hex color")]
    InvalidColor { field: String, value: String },

    #[error("Invalid font family '{family}': must be a non-empty string")]
    InvalidFontFamily { family: String },

    #[error("Invalid max width {value}: must be between {min} and {max} pixels")]
    InvalidMaxWidth { value: u32, min: u32, max: u32 },
}

impl From<serde_json::Error> for BlockmailError {
    fn from(err: serde_json::Error) -> Self {
        BlockmailError::DocumentError(err.to_string())
    }
}

impl From<serde_yaml::Error> for BlockmailError {
    fn from(err: serde_yaml::Error) -> Self {
        BlockmailError::DocumentError(err.to_string())
    }
}
