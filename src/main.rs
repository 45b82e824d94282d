use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use skriva::application::ports::{AudioStore, TranscriptStore};
use skriva::application::services::TranscriptionService;
use skriva::infrastructure::observability::{TracingConfig, init_tracing};
use skriva::infrastructure::storage::{InMemoryTranscriptStore, LocalAudioStore};
use skriva::infrastructure::transcription::{TranscriptionEngineFactory, TranscriptionProvider};
use skriva::presentation::{AppState, Settings, TranscriptionProviderSetting, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            json_format: settings.logging.enable_json,
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let audio_store: Arc<dyn AudioStore> = Arc::new(LocalAudioStore::new(PathBuf::from(
        &settings.storage.audio_dir,
    ))?);
    let transcript_store: Arc<dyn TranscriptStore> = Arc::new(InMemoryTranscriptStore::new(
        settings.storage.transcript_cache_capacity,
    ));

    let provider = match settings.transcription.provider {
        TranscriptionProviderSetting::Mock => TranscriptionProvider::Mock,
        TranscriptionProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
    };
    let engine = TranscriptionEngineFactory::create(
        provider,
        &settings.transcription.model,
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        settings.transcription.mock_delay_ms,
    )?;

    let transcription_service = Arc::new(TranscriptionService::new(
        engine,
        Arc::clone(&audio_store),
        Arc::clone(&transcript_store),
    ));

    let state = AppState {
        transcription_service,
        transcript_store,
        audio_store,
        settings: settings.clone(),
    };

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Listening for requests");
    axum::serve(listener, app).await?;

    Ok(())
}
