use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::TranscribeUploadError;
use crate::presentation::state::AppState;

const AUDIO_FIELD: &str = "audio";
const DEFAULT_AUDIO_MIME: &str = "audio/m4a";

#[derive(Serialize)]
pub struct UploadResponse {
    pub transcription: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<E>(
    State(state): State<AppState<E>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let mut audio: Option<(Option<String>, String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return bad_request(format!("Failed to read multipart: {}", e));
            }
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().map(String::from);
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_AUDIO_MIME)
            .to_string();
        let data = match field.bytes().await {
            Ok(d) => d.to_vec(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read audio bytes");
                return bad_request(format!("Failed to read file: {}", e));
            }
        };
        audio = Some((filename, content_type, data));
        break;
    }

    let Some((filename, content_type, data)) = audio else {
        tracing::warn!("Upload request without an audio field");
        return bad_request("No audio file uploaded".to_string());
    };
    if data.is_empty() {
        tracing::warn!("Upload request with an empty audio field");
        return bad_request("No audio file uploaded".to_string());
    }

    tracing::debug!(
        filename = filename.as_deref().unwrap_or("unnamed"),
        content_type = %content_type,
        bytes = data.len(),
        "Processing audio upload"
    );

    match state
        .transcription_service
        .transcribe_upload(filename.as_deref(), &data, &content_type)
        .await
    {
        Ok(transcription) => (StatusCode::OK, Json(UploadResponse { transcription })).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Transcription failed");
            let message = match err {
                TranscribeUploadError::Transcription(e) => e.to_string(),
                TranscribeUploadError::Spooling(e) => e.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: message }),
            )
                .into_response()
        }
    }
}

fn bad_request(error: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}
