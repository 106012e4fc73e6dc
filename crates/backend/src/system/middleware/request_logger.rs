use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Одна строка лога: время, длительность, размер, статус, метод, путь
fn print_line(status: StatusCode, method: &Method, path: &str, elapsed: Duration, size: &str) {
    // голубой для 2xx, коричневый для остальных
    let color_code = if status.is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
}

/// Middleware для логирования HTTP запросов каталога
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            print_line(
                parts.status,
                &method,
                &path,
                start.elapsed(),
                &format_number(bytes.len()),
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Cannot read response body for {} {}: {}", method, path, e);
            print_line(parts.status, &method, &path, start.elapsed(), "error");
            Response::from_parts(parts, Body::default())
        }
    }
}
