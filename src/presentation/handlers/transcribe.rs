use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::TranscriptionEngine;
use crate::domain::AudioFormat;
use crate::presentation::handlers::transcript_response::TranscriptionResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E>(
    State(state): State<AppState<E>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("audio") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Transcription request with no audio field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No audio file provided".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    let filename = field.file_name().unwrap_or("recording").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    tracing::debug!(filename = %filename, content_type = %content_type, "Processing audio upload");

    let allowed = state
        .settings
        .audio
        .allowed_mime_types
        .iter()
        .any(|mime| mime == &content_type)
        || content_type.starts_with("audio/");
    if !allowed {
        tracing::warn!(content_type = %content_type, "Rejected upload content type");
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: "Invalid file type. Please upload an audio file".to_string(),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    let size_limit = state.settings.audio.max_upload_size_mb * 1024 * 1024;
    if data.len() > size_limit {
        tracing::warn!(bytes = data.len(), "Upload exceeds size limit");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "File size exceeds limit ({}MB)",
                    state.settings.audio.max_upload_size_mb
                ),
            }),
        )
            .into_response();
    }

    // recognized formats get a canonical extension; other audio/* subtypes
    // keep the subtype as-is
    let extension = match AudioFormat::from_mime(&content_type) {
        Some(format) => format.file_extension().to_string(),
        None => content_type
            .split('/')
            .nth(1)
            .unwrap_or("webm")
            .to_string(),
    };

    tracing::debug!(bytes = data.len(), extension = %extension, "Audio data received");

    match state
        .transcription_service
        .transcribe(data, content_type, &extension)
        .await
    {
        Ok(transcript) => {
            (StatusCode::OK, Json(TranscriptionResponse::from(&transcript))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Error processing transcription: {}", e),
                }),
            )
                .into_response()
        }
    }
}
