use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn ping_handler() -> impl IntoResponse {
    (StatusCode::OK, "pong")
}
