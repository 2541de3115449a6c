use contracts::shared::upload::FileValidationError;
use thiserror::Error;

/// Failure reported by the transport: network error, timeout, non-2xx status
/// or an undecodable body.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
    /// Parsed JSON body of an error response, if any
    pub body: Option<serde_json::Value>,
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            body: None,
        }
    }

    pub fn status(status: u16, body: Option<serde_json::Value>) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {}", status),
            body,
        }
    }

    pub fn decode(err: serde_json::Error) -> Self {
        Self::network(format!("Failed to parse response: {}", err))
    }

    /// The `error` field of the response body, when it is a non-empty string
    pub fn backend_message(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.get("error"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Normalized error surfaced to views: one display string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    /// Backend `error` field, then transport message, then `fallback`
    pub fn normalize(err: &TransportError, fallback: &str) -> Self {
        let message = err
            .backend_message()
            .map(str::to_string)
            .or_else(|| Some(err.message.clone()).filter(|m| !m.is_empty()))
            .unwrap_or_else(|| fallback.to_string());
        Self { message }
    }
}

/// Error of an upload-bearing or mutating call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error(transparent)]
    Validation(#[from] FileValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_error_field_wins() {
        let err = TransportError::status(400, Some(json!({"error": "X"})));
        assert_eq!(ApiError::normalize(&err, "default").message, "X");
    }

    #[test]
    fn test_falls_back_to_transport_message() {
        let err = TransportError::status(500, Some(json!({"detail": "nope"})));
        assert_eq!(
            ApiError::normalize(&err, "default").message,
            "Request failed with status code 500"
        );

        let err = TransportError::status(502, Some(json!({"error": ""})));
        assert_eq!(
            ApiError::normalize(&err, "default").message,
            "Request failed with status code 502"
        );
    }

    #[test]
    fn test_falls_back_to_default() {
        let err = TransportError::network("");
        assert_eq!(ApiError::normalize(&err, "Error submitting report").message, "Error submitting report");
    }

    #[test]
    fn test_report_error_displays_inner_message() {
        let err: ReportError = FileValidationError::NoFiles.into();
        assert_eq!(err.to_string(), "No files provided");

        let err: ReportError = ApiError { message: "boom".into() }.into();
        assert_eq!(err.to_string(), "boom");
    }
}
