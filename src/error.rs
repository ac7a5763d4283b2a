use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StarError {
    #[error("star point count must be between 1 and {max}, got {0}", max = crate::star::MAX_STAR_POINTS)]
    InvalidPointCount(i64),
    #[error("unknown fill direction: {0}")]
    InvalidFillDirection(String),
    #[error("invalid star parameters: {0}")]
    InvalidParameters(String),
}

impl From<serde_json::Error> for StarError {
    fn from(e: serde_json::Error) -> Self {
        StarError::InvalidParameters(e.to_string())
    }
}
