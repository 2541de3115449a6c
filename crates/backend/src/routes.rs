use std::path::Path;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use contracts::shared::upload::{MAX_UPLOAD_FILES, MAX_UPLOAD_FILE_SIZE};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::domain::a001_travel_request::extractor::ReportExtractor;
use crate::{handlers, system};

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn ReportExtractor>,
}

/// Лимит тела запроса: все файлы максимального размера плюс запас на форму
pub const BODY_LIMIT: usize = MAX_UPLOAD_FILES * MAX_UPLOAD_FILE_SIZE as usize + 1024 * 1024;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // SPA: неизвестные пути отдают index.html, роутинг делает клиент
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/test/", get(handlers::system::test_connection))
        // A001 Travel request handlers
        .route(
            "/api/travel-requests/",
            get(handlers::a001_travel_request::list_all),
        )
        .route(
            "/api/travel-requests/:id/",
            get(handlers::a001_travel_request::get_by_id),
        )
        .route(
            "/api/requests/:id/",
            get(handlers::a001_travel_request::get_by_id),
        )
        .route(
            "/api/travel-requests/generate-report/",
            post(handlers::a001_travel_request::generate_report),
        )
        .route(
            "/api/travel-requests/submit-report/",
            post(handlers::a001_travel_request::submit_report),
        )
        .route(
            "/api/travel-requests/:id/update-report/",
            put(handlers::a001_travel_request::update_report),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback_service(spa)
        .layer(middleware::from_fn(system::middleware::request_logger::request_logger))
        .layer(cors)
}
