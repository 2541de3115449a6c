use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_travel_request::{
    ReportDraft, ReportPatch, TravelRequest, TravelRequestId,
};
use contracts::domain::common::AggregateId;
use contracts::shared::api::SubmitReportResponse;
use uuid::Uuid;

use crate::domain::a001_travel_request::service;
use crate::domain::a001_travel_request::upload::{validate_received_files, ReceivedFile};
use crate::routes::AppState;
use crate::shared::error::AppError;

/// Разобранная multipart-форма отчета
#[derive(Debug, Default)]
pub struct ReportForm {
    /// JSON черновика из части `data`
    pub data: Option<String>,
    pub files: Vec<ReceivedFile>,
}

async fn read_report_form(mut multipart: Multipart) -> Result<ReportForm, AppError> {
    let mut form = ReportForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("data") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.data = Some(text);
            }
            Some("files") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                form.files
                    .push(ReceivedFile::new(file_name, content_type, bytes.to_vec()));
            }
            other => tracing::debug!("Ignoring multipart field {:?}", other),
        }
    }

    Ok(form)
}

/// Неизвестный или некорректный id - такой заявки нет
fn parse_id(id: &str) -> Result<Uuid, AppError> {
    TravelRequestId::from_string(id)
        .map(|id| id.0)
        .map_err(|_| AppError::NotFound)
}

/// GET /api/travel-requests/
pub async fn list_all() -> Result<Json<Vec<TravelRequest>>, AppError> {
    service::list_all()
        .await
        .map(Json)
        .map_err(|e| AppError::internal("listing travel requests", e))
}

/// GET /api/travel-requests/:id/
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<TravelRequest>, AppError> {
    let uuid = parse_id(&id)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(AppError::NotFound),
        Err(e) => Err(AppError::internal("loading travel request", e)),
    }
}

/// POST /api/travel-requests/generate-report/
pub async fn generate_report(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReportDraft>, AppError> {
    let form = read_report_form(multipart).await?;
    validate_received_files(&form.files)?;

    service::generate_report(state.extractor.as_ref(), &form.files)
        .await
        .map(Json)
        .map_err(|e| AppError::internal("generating report", e))
}

/// POST /api/travel-requests/submit-report/
pub async fn submit_report(
    multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitReportResponse>), AppError> {
    let form = read_report_form(multipart).await?;
    let data = form
        .data
        .ok_or_else(|| AppError::BadRequest("Missing report data".into()))?;
    let draft: ReportDraft = serde_json::from_str(&data)
        .map_err(|e| AppError::BadRequest(format!("Invalid report data: {}", e)))?;

    let id = service::submit_report(&draft, &form.files)
        .await
        .map_err(|e| AppError::internal("submitting report", e))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitReportResponse {
            message: "Report submitted successfully".into(),
            request_id: id.to_string(),
        }),
    ))
}

/// PUT /api/travel-requests/:id/update-report/
///
/// Тело - частичный черновик, отсутствующие поля не меняются.
pub async fn update_report(
    Path(id): Path<String>,
    payload: Result<Json<ReportPatch>, JsonRejection>,
) -> Result<Json<TravelRequest>, AppError> {
    let uuid = parse_id(&id)?;
    let Json(patch) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    match service::update_report(uuid, &patch).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(AppError::NotFound),
        Err(e) => Err(AppError::internal("updating report", e)),
    }
}
