use thiserror::Error;

/// Application error types
///
/// The estimator never fails; these cover the session and report layers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session assignment names a field that does not exist
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// Session line is not of the form `field=value`
    #[error("Malformed assignment: {0}")]
    MalformedAssignment(String),
    /// Report serialization error
    #[error("Render error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(format!("JSON error: {}", err))
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Render(format!("TOML error: {}", err))
    }
}
