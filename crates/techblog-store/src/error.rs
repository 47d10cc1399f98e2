//! Error types for post stores.

/// Errors that can occur when reading posts from a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The connection secret is missing or invalid.
    #[error("store configuration error: {0}")]
    Configuration(String),

    /// The store could not be reached, or the driver failed mid-query.
    #[error("store unreachable: {reason}")]
    Connectivity { reason: String },

    /// A stored document could not be decoded into a post.
    #[error("query failed: {reason}")]
    Query { reason: String },
}

impl StoreError {
    /// Creates a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a new connectivity error.
    pub fn connectivity(reason: impl Into<String>) -> Self {
        Self::Connectivity {
            reason: reason.into(),
        }
    }

    /// Creates a new query error.
    pub fn query(reason: impl Into<String>) -> Self {
        Self::Query {
            reason: reason.into(),
        }
    }

    /// Returns true if this error comes from configuration rather than
    /// from the store itself.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::InvalidArgument { .. } => Self::configuration(err.to_string()),
            ErrorKind::BsonDeserialization(_) => Self::query(err.to_string()),
            _ => Self::connectivity(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::configuration("MONGO_URI is not set");
        assert_eq!(
            err.to_string(),
            "store configuration error: MONGO_URI is not set"
        );

        let err = StoreError::connectivity("connection refused");
        assert_eq!(err.to_string(), "store unreachable: connection refused");

        let err = StoreError::query("missing field `title`");
        assert_eq!(err.to_string(), "query failed: missing field `title`");
    }

    #[test]
    fn test_is_configuration() {
        assert!(StoreError::configuration("x").is_configuration());
        assert!(!StoreError::connectivity("x").is_configuration());
        assert!(!StoreError::query("x").is_configuration());
    }
}
