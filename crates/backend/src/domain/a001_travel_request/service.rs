use contracts::domain::a001_travel_request::{
    Document, ReportDraft, ReportPatch, RequestHistory, RequestStatus, TravelRequest,
};
use uuid::Uuid;

use super::extractor::ReportExtractor;
use super::repository;
use super::upload::ReceivedFile;

/// Пользователь для записей истории, пока нет аутентификации
pub const ANONYMOUS_USER: &str = "anonymous";
pub const PLACEHOLDER_FILE_URL: &str = "placeholder_url";

/// Черновик отчета по загруженным файлам
pub async fn generate_report(
    extractor: &dyn ReportExtractor,
    files: &[ReceivedFile],
) -> anyhow::Result<ReportDraft> {
    let mut draft = extractor.extract(files).await?;
    draft.uploaded_files = files.iter().map(ReceivedFile::info).collect();
    tracing::info!(
        "Report draft generated by '{}' from {} file(s)",
        extractor.extractor_name(),
        files.len()
    );
    Ok(draft)
}

/// Новая заявка на проверку из черновика
pub fn new_submitted_request(draft: &ReportDraft, files: &[ReceivedFile]) -> TravelRequest {
    let mut request = TravelRequest::from_draft(draft, RequestStatus::PendingReview);

    // без файлов в запросе документы берутся из метаданных черновика
    request.documents = if files.is_empty() {
        draft
            .uploaded_files
            .iter()
            .map(|f| Document::new(f.name.clone(), f.size, PLACEHOLDER_FILE_URL.into()))
            .collect()
    } else {
        files
            .iter()
            .map(|f| Document::new(f.name.clone(), f.size(), PLACEHOLDER_FILE_URL.into()))
            .collect()
    };

    request.history.push(RequestHistory::new(
        "submitted",
        "Report Submitted",
        ANONYMOUS_USER,
        Some("Travel request submitted for review".into()),
    ));
    request
}

/// Применить правки к существующей заявке
pub fn apply_update(request: &mut TravelRequest, patch: &ReportPatch) {
    request.apply_patch(patch);
    request.history.push(RequestHistory::new(
        "updated",
        "Report Updated",
        ANONYMOUS_USER,
        Some("Report details were updated".into()),
    ));
}

pub async fn submit_report(draft: &ReportDraft, files: &[ReceivedFile]) -> anyhow::Result<Uuid> {
    let request = new_submitted_request(draft, files);
    let id = repository::insert(&request).await?;
    tracing::info!(
        "Travel request {} submitted by '{}' with {} document(s)",
        id,
        request.requester,
        request.documents.len()
    );
    Ok(id)
}

/// `None`, если заявка не найдена
pub async fn update_report(id: Uuid, patch: &ReportPatch) -> anyhow::Result<Option<TravelRequest>> {
    let Some(mut request) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    apply_update(&mut request, patch);
    repository::update(&request).await?;
    tracing::info!("Travel request {} updated", id);
    Ok(Some(request))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<TravelRequest>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<TravelRequest>> {
    repository::list_all().await
}
