use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{AudioStoreError, TranscriptionEngine};
use crate::domain::{Transcript, TranscriptId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[tracing::instrument(skip(state))]
pub async fn get_audio_handler<E>(
    State(state): State<AppState<E>>,
    Path(transcript_id): Path<String>,
) -> Response
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let transcript = match lookup_transcript(&state, &transcript_id).await {
        Ok(t) => t,
        Err(response) => return response,
    };

    match state.audio_store.fetch(&transcript.audio_path).await {
        Ok(data) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, transcript.audio_content_type.clone())
            .header(
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", transcript.audio_path),
            )
            .body(Body::from(data))
            .unwrap(),
        Err(AudioStoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "File not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio file");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error retrieving file".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_audio_handler<E>(
    State(state): State<AppState<E>>,
    Path(transcript_id): Path<String>,
) -> Response
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let transcript = match lookup_transcript(&state, &transcript_id).await {
        Ok(t) => t,
        Err(response) => return response,
    };

    match state.audio_store.delete(&transcript.audio_path).await {
        Ok(()) => {
            tracing::info!(path = %transcript.audio_path, "Audio file deleted");
            (StatusCode::OK, Json(DeleteResponse { success: true })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete audio file");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "File not found or could not be deleted".to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn lookup_transcript<E>(
    state: &AppState<E>,
    transcript_id: &str,
) -> Result<Transcript, Response>
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let uuid = match Uuid::parse_str(transcript_id) {
        Ok(u) => u,
        Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid file ID: {}", transcript_id),
                }),
            )
                .into_response());
        }
    };

    match state
        .transcript_store
        .get(TranscriptId::from_uuid(uuid))
        .await
    {
        Ok(Some(transcript)) => Ok(transcript),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "File not found".to_string(),
            }),
        )
            .into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to resolve audio file");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Error retrieving file".to_string(),
                }),
            )
                .into_response())
        }
    }
}
