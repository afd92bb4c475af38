use std::fmt;

/// Everything that can go wrong while loading the trees payload.
///
/// The loader treats every variant the same way (empty chart, logged
/// diagnostic); the variants only exist to make the log line useful.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request never produced a response.
    Network(String),
    /// The endpoint answered with a non-success status code.
    Status(u16),
    /// The body was not a JSON array of tree objects.
    Malformed(String),
    /// The payload held no dated records to derive a range from.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "network error: {}", msg),
            LoadError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            LoadError::Malformed(msg) => write!(f, "malformed trees payload: {}", msg),
            LoadError::Empty => write!(f, "trees payload contained no dated records"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        assert_eq!(
            LoadError::Status(503).to_string(),
            "unexpected HTTP status 503"
        );
        assert!(LoadError::Network("offline".to_string())
            .to_string()
            .contains("offline"));
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(LoadError::from(err), LoadError::Malformed(_)));
    }
}
