use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use plaint::application::services::{IdentityService, TranscriptionService};
use plaint::infrastructure::identity::{BcryptPasswordHasher, JwtTokenIssuer};
use plaint::infrastructure::observability::{init_tracing, TracingConfig};
use plaint::infrastructure::persistence::{create_pool, run_migrations, PgUserRepository};
use plaint::infrastructure::staging::LocalUploadSpool;
use plaint::infrastructure::transcription::GroqWhisperEngine;
use plaint::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(TracingConfig::default(), settings.server.port);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    run_migrations(&pool).await?;

    let engine = Arc::new(GroqWhisperEngine::new(
        settings.groq.api_key.clone(),
        settings.groq.base_url.clone(),
        None,
    ));
    let spool = Arc::new(LocalUploadSpool::new(settings.spool_dir.clone())?);
    let transcription_service = Arc::new(TranscriptionService::new(engine, spool));

    let users = Arc::new(PgUserRepository::new(pool));
    let hasher = Arc::new(BcryptPasswordHasher::default());
    let tokens = Arc::new(JwtTokenIssuer::new(&settings.auth.jwt_secret));
    let identity_service = Arc::new(IdentityService::new(users, hasher, tokens));

    let state = AppState {
        transcription_service,
        identity_service,
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
