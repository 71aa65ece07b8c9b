use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "whisper-large-v3-turbo";

/// Whisper transcription through Groq's OpenAI-compatible endpoint.
pub struct GroqWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for GroqWhisperEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        content_type: &str,
    ) -> Result<String, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name("audio.m4a")
            .mime_str(content_type)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, "Sending audio to Groq Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("body: {}", e)))?;

        tracing::info!(
            chars = payload.text.len(),
            "Groq Whisper transcription completed"
        );

        Ok(payload.text.trim().to_string())
    }
}

#[derive(Debug, serde::Deserialize)]
struct TranscriptionResponse {
    text: String,
}
