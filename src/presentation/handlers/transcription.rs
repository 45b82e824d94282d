use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::TranscriptionEngine;
use crate::domain::TranscriptId;
use crate::presentation::handlers::transcript_response::TranscriptionResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTranscriptionRequest {
    pub text: String,
}

#[tracing::instrument(skip(state))]
pub async fn get_transcription_handler<E>(
    State(state): State<AppState<E>>,
    Path(transcript_id): Path<String>,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let uuid = match Uuid::parse_str(&transcript_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid transcription ID: {}", transcript_id),
                }),
            )
                .into_response();
        }
    };

    match state
        .transcript_store
        .get(TranscriptId::from_uuid(uuid))
        .await
    {
        Ok(Some(transcript)) => {
            (StatusCode::OK, Json(TranscriptionResponse::from(&transcript))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Transcription not found: {}", transcript_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch transcription");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch transcription: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn update_transcription_handler<E>(
    State(state): State<AppState<E>>,
    Path(transcript_id): Path<String>,
    Json(request): Json<UpdateTranscriptionRequest>,
) -> impl IntoResponse
where
    E: TranscriptionEngine + 'static + ?Sized,
{
    let uuid = match Uuid::parse_str(&transcript_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid transcription ID: {}", transcript_id),
                }),
            )
                .into_response();
        }
    };

    if request.text.is_empty() {
        tracing::warn!("Update request with no text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No text provided for update".to_string(),
            }),
        )
            .into_response();
    }

    let id = TranscriptId::from_uuid(uuid);
    let mut transcript = match state.transcript_store.get(id).await {
        Ok(Some(t)) => t,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Transcription not found: {}", transcript_id),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch transcription for update");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch transcription: {}", e),
                }),
            )
                .into_response();
        }
    };

    transcript.text = request.text;
    // edited text invalidates the original timing; exports re-synthesize
    transcript.segments.clear();

    if let Err(e) = state.transcript_store.put(transcript.clone()).await {
        tracing::error!(error = %e, "Failed to store updated transcription");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to update transcription: {}", e),
            }),
        )
            .into_response();
    }

    tracing::info!(transcript_id = %uuid, "Transcription updated");

    (StatusCode::OK, Json(TranscriptionResponse::from(&transcript))).into_response()
}
