//! Handlers for the bulk pet importer.
//!
//! Provides endpoints for CSV upload (multipart), session retrieval,
//! import confirmation, cancellation, and the template download.

use axum::extract::{Multipart, Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use labka_core::importer::{template_csv, ImportFlow, ImportSnapshot};
use labka_core::types::DbId;
use labka_db::PgPetStore;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::handlers::shelters::find_shelter;
use crate::import_sessions::SessionHandle;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the CSV file.
const FILE_FIELD: &str = "file";

/// A session id together with the session's current view.
#[derive(Debug, Serialize)]
pub struct ImportSessionResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub session: ImportSnapshot,
}

/// Result of a confirmed import.
#[derive(Debug, Serialize)]
pub struct ImportCommitResult {
    pub shelter_id: DbId,
    pub created: usize,
}

// ── Upload ───────────────────────────────────────────────────────────

/// POST /api/v1/shelters/{id}/import
///
/// Accept a CSV file in the `file` field, parse it, and open a session in
/// `preview`. Non-CSV files are refused before parsing and no session is
/// created. Row errors do not fail the request; they are part of the
/// preview.
pub async fn upload_import(
    State(state): State<AppState>,
    Path(shelter_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<ImportSessionResponse>>)> {
    let shelter = find_shelter(&state, shelter_id).await?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((file_name, content_type, data));
        break;
    }

    let (file_name, content_type, data) = upload.ok_or_else(|| {
        AppError::BadRequest(format!("Missing '{FILE_FIELD}' field in multipart upload"))
    })?;

    if data.len() > state.config.import_max_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} byte import limit",
            state.config.import_max_bytes
        )));
    }

    let mut flow = ImportFlow::new(shelter.id, shelter.location);
    flow.accept_file(&file_name, content_type.as_deref(), &data)?;

    let session = flow.snapshot();
    let session_id = state.import_sessions.insert(flow).await;

    tracing::info!(
        %session_id,
        shelter_id,
        file_name = %file_name,
        records = session.records.len(),
        row_errors = session.error_count,
        "Import file parsed"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ImportSessionResponse {
                session_id,
                session,
            },
        }),
    ))
}

// ── Get Session ──────────────────────────────────────────────────────

/// GET /api/v1/import/{session_id}
pub async fn get_import_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<DataResponse<ImportSessionResponse>>> {
    let handle = find_session(&state, session_id).await?;
    let session = handle.lock().await.snapshot();

    Ok(Json(DataResponse {
        data: ImportSessionResponse {
            session_id,
            session,
        },
    }))
}

// ── Confirm ──────────────────────────────────────────────────────────

/// POST /api/v1/import/{session_id}/confirm
///
/// Store the previewed records as one batch. The storage call runs on its
/// own task that settles the session even if this request is dropped, and
/// the session lock is not held while it runs, so a second confirm while
/// the batch is in flight sees `uploading` and gets a conflict.
///
/// On success the session is closed and removed. On failure it returns to
/// `preview` with the message as a banner and the records unchanged.
pub async fn confirm_import(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<DataResponse<ImportCommitResult>>> {
    let handle = find_session(&state, session_id).await?;
    let shelter_id = handle.lock().await.shelter_id();

    let store = PgPetStore::new(state.pool.clone());
    let submission = state
        .import_sessions
        .start_submission(session_id, handle, store)
        .await?;

    let created = submission
        .await
        .map_err(|e| AppError::InternalError(format!("Import task failed: {e}")))??;
    tracing::info!(%session_id, shelter_id, created, "Import committed");

    Ok(Json(DataResponse {
        data: ImportCommitResult {
            shelter_id,
            created,
        },
    }))
}

// ── Cancel ───────────────────────────────────────────────────────────

/// POST /api/v1/import/{session_id}/cancel
///
/// Close the dialog and discard the parsed records. A batch already in
/// flight is not aborted.
pub async fn cancel_import(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let handle = state
        .import_sessions
        .remove(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    handle.lock().await.close();
    tracing::info!(%session_id, "Import cancelled");

    Ok(StatusCode::NO_CONTENT)
}

// ── Template ─────────────────────────────────────────────────────────

/// GET /api/v1/import/template
pub async fn download_template() -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=\"labka-import.csv\"",
            ),
        ],
        template_csv(),
    )
}

// ── Private helpers ──────────────────────────────────────────────────

async fn find_session(state: &AppState, session_id: Uuid) -> AppResult<SessionHandle> {
    state
        .import_sessions
        .get(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))
}

fn session_not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Import session {session_id} not found"))
}
