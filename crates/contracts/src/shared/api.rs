use serde::{Deserialize, Serialize};

/// Тело ответа с ошибкой: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/test/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConnectionResponse {
    pub status: String,
    pub message: String,
}

/// POST /api/travel-requests/submit-report/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReportResponse {
    pub message: String,
    pub request_id: String,
}
