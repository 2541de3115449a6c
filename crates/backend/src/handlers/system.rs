use axum::Json;
use contracts::shared::api::TestConnectionResponse;

/// GET /api/test/
pub async fn test_connection() -> Json<TestConnectionResponse> {
    Json(TestConnectionResponse {
        status: "ok".into(),
        message: "Backend connection successful".into(),
    })
}
