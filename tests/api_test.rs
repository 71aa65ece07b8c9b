use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use plaint::application::ports::{TranscriptionEngine, TranscriptionError};
use plaint::application::services::{IdentityService, TranscriptionService};
use plaint::infrastructure::identity::{BcryptPasswordHasher, JwtTokenIssuer};
use plaint::infrastructure::persistence::InMemoryUserRepository;
use plaint::infrastructure::staging::LocalUploadSpool;
use plaint::infrastructure::transcription::MockTranscriptionEngine;
use plaint::presentation::{create_router, AppState};

const BOUNDARY: &str = "plaint-test-boundary";

struct FailingEngine;

#[async_trait::async_trait]
impl TranscriptionEngine for FailingEngine {
    async fn transcribe(
        &self,
        _audio_data: &[u8],
        _content_type: &str,
    ) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ApiRequestFailed(
            "status 500: upstream exploded".to_string(),
        ))
    }
}

fn create_test_app<E>(engine: Arc<E>, spool_dir: &std::path::Path) -> axum::Router
where
    E: TranscriptionEngine + 'static,
{
    let spool = Arc::new(LocalUploadSpool::new(spool_dir.to_path_buf()).unwrap());
    let transcription_service = Arc::new(TranscriptionService::new(engine, spool));

    let identity_service = Arc::new(IdentityService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::new(JwtTokenIssuer::new("test-secret")),
    ));

    create_router(AppState {
        transcription_service,
        identity_service,
    })
}

fn multipart_body(field: &str, filename: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_relay_when_pinged_then_returns_pong() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"pong");
}

#[tokio::test]
async fn given_audio_upload_when_engine_succeeds_then_returns_transcription() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::new("fix the light"));
    let app = create_test_app(Arc::clone(&engine), dir.path());

    let body = multipart_body("audio", "clip.m4a", "audio/m4a", b"fake audio bytes");
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["transcription"], "fix the light");
    assert_eq!(engine.call_count(), 1);
}

#[tokio::test]
async fn given_upload_without_audio_field_when_posted_then_400_and_engine_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::new("unused"));
    let app = create_test_app(Arc::clone(&engine), dir.path());

    let body = multipart_body("photo", "pic.png", "image/png", b"not audio");
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["error"], "No audio file uploaded");
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn given_empty_audio_field_when_posted_then_400_and_engine_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(MockTranscriptionEngine::new("unused"));
    let app = create_test_app(Arc::clone(&engine), dir.path());

    let body = multipart_body("audio", "clip.m4a", "audio/m4a", b"");
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn given_failing_engine_when_uploading_then_500_with_engine_message() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(FailingEngine), dir.path());

    let body = multipart_body("audio", "clip.m4a", "audio/m4a", b"fake audio bytes");
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response_json(response).await;
    assert_eq!(json["error"], "api request failed: status 500: upstream exploded");
}

#[tokio::test]
async fn given_upload_when_handled_then_spool_directory_is_left_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let body = multipart_body("audio", "clip.m4a", "audio/m4a", b"fake audio bytes");
    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn given_new_user_when_registering_then_returns_token_and_profile() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let response = app
        .oneshot(json_request(
            "/register",
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secret1"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert!(!json["token"].as_str().unwrap().is_empty());
    assert_eq!(json["user"]["name"], "Ana");
    assert_eq!(json["user"]["email"], "ana@example.com");
}

#[tokio::test]
async fn given_registered_email_when_registering_again_then_400() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let payload = serde_json::json!({
        "name": "Ana",
        "email": "ana@example.com",
        "password": "secret1"
    });
    let first = app
        .clone()
        .oneshot(json_request("/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(json_request("/register", payload)).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let json = response_json(second).await;
    assert_eq!(json["message"], "Email already registered");
}

#[tokio::test]
async fn given_short_password_when_registering_then_400_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let response = app
        .oneshot(json_request(
            "/register",
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "abc"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("Password"));
}

#[tokio::test]
async fn given_wrong_password_and_unknown_email_when_logging_in_then_identical_errors() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let register = app
        .clone()
        .oneshot(json_request(
            "/register",
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secret1"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::OK);

    let wrong_password = app
        .clone()
        .oneshot(json_request(
            "/login",
            serde_json::json!({ "email": "ana@example.com", "password": "wrong-1" }),
        ))
        .await
        .unwrap();
    let unknown_email = app
        .oneshot(json_request(
            "/login",
            serde_json::json!({ "email": "nobody@example.com", "password": "secret1" }),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
    let first = response_json(wrong_password).await;
    let second = response_json(unknown_email).await;
    assert_eq!(first, second);
    assert_eq!(first["message"], "Invalid credentials");
}

#[tokio::test]
async fn given_registered_user_when_logging_in_then_fresh_token() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let register = app
        .clone()
        .oneshot(json_request(
            "/register",
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secret1"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::OK);

    let login = app
        .oneshot(json_request(
            "/login",
            serde_json::json!({ "email": "ana@example.com", "password": "secret1" }),
        ))
        .await
        .unwrap();

    assert_eq!(login.status(), StatusCode::OK);
    let json = response_json(login).await;
    assert!(!json["token"].as_str().unwrap().is_empty());
    assert_eq!(json["user"]["email"], "ana@example.com");
}

#[tokio::test]
async fn given_any_request_when_handled_then_response_carries_request_id() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let response = app
        .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn given_caller_request_id_when_handled_then_same_id_echoed() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(MockTranscriptionEngine::new("ok")), dir.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/ping")
                .header("x-request-id", "caller-id-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "caller-id-42"
    );
}
