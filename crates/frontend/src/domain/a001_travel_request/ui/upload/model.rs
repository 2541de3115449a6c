//! Upload Report - Model (API functions)

use crate::shared::api::{ApiClient, UploadFile};
use contracts::domain::a001_travel_request::ReportDraft;

/// Отправить PDF на разбор и получить черновик отчета
pub async fn generate(client: &ApiClient, files: &[UploadFile]) -> Result<ReportDraft, String> {
    client.generate_report(files).await.map_err(|e| e.to_string())
}

/// Отправить проверенный пользователем отчет; возвращает id созданной заявки
pub async fn submit(
    client: &ApiClient,
    draft: &ReportDraft,
    files: &[UploadFile],
) -> Result<String, String> {
    let response = client
        .submit_report(draft, files)
        .await
        .map_err(|e| e.to_string())?;
    log::info!("{} (request {})", response.message, response.request_id);
    Ok(response.request_id)
}
