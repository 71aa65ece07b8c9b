use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{RelayError, TranscriptRelay};
use crate::domain::{Session, User};

const AUDIO_FIELD: &str = "audio";
const DEFAULT_AUDIO_MIME: &str = "audio/m4a";

/// HTTP client for the relay service, covering upload and identity.
pub struct HttpRelayClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    transcription: String,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

impl HttpRelayClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `PLAINT_RELAY_BASE_URL`, defaulting to the local dev relay.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PLAINT_RELAY_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, RelayError> {
        self.auth_request(
            "register",
            &serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, RelayError> {
        self.auth_request(
            "login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn auth_request(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<Session, RelayError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| RelayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| RelayError::RequestFailed(format!("body: {}", e)))?;
        Ok(Session {
            token: auth.token,
            user: auth.user,
        })
    }

    async fn rejection(response: reqwest::Response) -> RelayError {
        let status = response.status().as_u16();
        let raw = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw)
            .map(|b| b.error)
            .unwrap_or(raw);
        RelayError::Rejected { status, message }
    }
}

#[async_trait]
impl TranscriptRelay for HttpRelayClient {
    #[tracing::instrument(skip(self))]
    async fn transcribe(&self, audio_path: &Path) -> Result<String, RelayError> {
        let data = tokio::fs::read(audio_path)
            .await
            .map_err(|e| RelayError::RequestFailed(format!("reading clip: {}", e)))?;

        let filename = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.m4a".to_string());

        let file_part = multipart::Part::bytes(data)
            .file_name(filename)
            .mime_str(DEFAULT_AUDIO_MIME)
            .map_err(|e| RelayError::RequestFailed(format!("mime: {}", e)))?;
        let form = multipart::Form::new().part(AUDIO_FIELD, file_part);

        let url = format!("{}/upload", self.base_url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| RelayError::RequestFailed(format!("body: {}", e)))?;
        Ok(upload.transcription)
    }
}
