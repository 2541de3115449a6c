//! Request Detail - Model (API functions)

use crate::shared::api::ApiClient;
use contracts::domain::a001_travel_request::{ReportDraft, TravelRequest};

/// Получить заявку по ID
pub async fn fetch_by_id(client: &ApiClient, id: &str) -> Result<TravelRequest, String> {
    client
        .get_request(id)
        .await
        .map_err(|e| format!("Failed to load request: {}", e))
}

/// Сохранить отредактированный отчет
pub async fn save(client: &ApiClient, id: &str, draft: &ReportDraft) -> Result<TravelRequest, String> {
    client.update_report(id, draft).await.map_err(|e| e.to_string())
}
