use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::export_transcript;
use crate::domain::{ExportFormat, TranscriptId};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn export_transcription_handler<E>(
    State(state): State<AppState<E>>,
    Path(transcript_id): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Response
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

    let transcript = match state
        .transcript_store
        .get(TranscriptId::from_uuid(uuid))
        .await
    {
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
            tracing::error!(error = %e, "Failed to fetch transcription for export");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to fetch transcription: {}", e),
                }),
            )
                .into_response();
        }
    };

    let format = match query.format.as_deref() {
        None => ExportFormat::Text,
        Some(param) => match ExportFormat::from_param(param) {
            Some(f) => f,
            None => {
                // unknown formats fall back to plain text rather than 400
                tracing::warn!(format = %param, "Unknown export format, falling back to text");
                ExportFormat::Text
            }
        },
    };

    let export = export_transcript(&transcript, format);
    let filename = format!("transcription-{}.{}", uuid, export.file_extension);

    tracing::info!(
        transcript_id = %uuid,
        format = %format,
        bytes = export.body.len(),
        "Transcription exported"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, export.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(Body::from(export.body))
        .unwrap()
}
