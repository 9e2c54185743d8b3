use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Everything that can go wrong talking to the activities API.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl BoardError {
    /// Server-provided explanation, only present on `Status` errors.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BoardError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for BoardError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => BoardError::Decode(e.to_string()),
            other => BoardError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_only_on_status_errors() {
        let status = BoardError::Status {
            status: 400,
            detail: Some("Student already signed up for this activity".into()),
        };
        assert_eq!(
            status.detail(),
            Some("Student already signed up for this activity")
        );
        assert_eq!(BoardError::Network("offline".into()).detail(), None);
        assert_eq!(BoardError::Decode("eof".into()).detail(), None);
    }

    #[test]
    fn serde_errors_are_decode_errors() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(BoardError::from(err), BoardError::Decode(_)));
    }

    #[test]
    fn display_includes_status_code() {
        let err = BoardError::Status {
            status: 404,
            detail: None,
        };
        assert_eq!(err.to_string(), "server returned HTTP 404");
    }
}
