use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::TranscriptionEngine;
use crate::application::services::IdentityError;
use crate::domain::Session;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[tracing::instrument(skip(state, body))]
pub async fn register_handler<E>(
    State(state): State<AppState<E>>,
    Json(body): Json<RegisterRequest>,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    match state
        .identity_service
        .register(&body.name, &body.email, &body.password)
        .await
    {
        Ok(session) => session_response(session),
        Err(err) => identity_error_response(err),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn login_handler<E>(
    State(state): State<AppState<E>>,
    Json(body): Json<LoginRequest>,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    match state
        .identity_service
        .login(&body.email, &body.password)
        .await
    {
        Ok(session) => session_response(session),
        Err(err) => identity_error_response(err),
    }
}

fn session_response(session: Session) -> axum::response::Response {
    (StatusCode::OK, Json(session)).into_response()
}

fn identity_error_response(err: IdentityError) -> axum::response::Response {
    let status = match &err {
        IdentityError::Validation(_)
        | IdentityError::EmailTaken
        | IdentityError::InvalidCredentials => StatusCode::BAD_REQUEST,
        IdentityError::Repository(_) | IdentityError::Token(_) | IdentityError::Hash(_) => {
            tracing::error!(error = %err, "Identity operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        err.to_string()
    };
    (status, Json(ErrorMessage { message })).into_response()
}
