use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_size;

/// Цвет времени по классу статуса: 2xx голубой, 4xx коричневый, 5xx красный
fn status_color(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "31"
    } else if status.is_client_error() {
        "33"
    } else {
        "36"
    }
}

/// Строка лога: `время | длительность | размер | статус метод путь`
pub fn format_line(
    status: StatusCode,
    method: &Method,
    path: &str,
    millis: u128,
    size: Option<usize>,
) -> String {
    let size = size.map(format_size).unwrap_or_else(|| "error".to_string());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {}",
        status_color(status),
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}

/// Middleware для логирования HTTP запросов в консоль
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            println!(
                "{}",
                format_line(parts.status, &method, &path, start.elapsed().as_millis(), Some(bytes.len()))
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to read response body for {} {}: {}", method, path, e);
            println!(
                "{}",
                format_line(parts.status, &method, &path, start.elapsed().as_millis(), None)
            );
            Response::from_parts(parts, Body::empty())
        }
    }
}
