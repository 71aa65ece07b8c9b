use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TranscriptionEngine;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    login_handler, ping_handler, register_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E>(state: AppState<E>) -> Router
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/upload", post(upload_handler::<E>))
        .route("/register", post(register_handler::<E>))
        .route("/login", post(login_handler::<E>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
