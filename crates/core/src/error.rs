#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl CoreError {
    /// Shorthand for a missing activity looked up by `key` (an id or a name).
    pub fn activity_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Activity",
            key: key.into(),
        }
    }
}
