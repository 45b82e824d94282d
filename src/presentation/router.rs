use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TranscriptionEngine;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_audio_handler, export_transcription_handler, get_audio_handler,
    get_transcription_handler, health_handler, transcribe_handler, update_transcription_handler,
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

    // multipart bodies carry the audio payload; allow headroom over the
    // configured limit so the handler can reject oversize uploads itself
    let body_limit = (state.settings.audio.max_upload_size_mb + 1) * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/transcriptions", post(transcribe_handler::<E>))
        .route(
            "/api/v1/transcriptions/{transcript_id}",
            get(get_transcription_handler::<E>).put(update_transcription_handler::<E>),
        )
        .route(
            "/api/v1/transcriptions/{transcript_id}/export",
            get(export_transcription_handler::<E>),
        )
        .route(
            "/api/v1/audio/{transcript_id}",
            get(get_audio_handler::<E>).delete(delete_audio_handler::<E>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
