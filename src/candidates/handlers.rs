// src/candidates/handlers.rs

use crate::candidates::models::{Candidate, CandidateFilters, CandidateForm};
use crate::candidates::validators::SubmissionValidator;
use crate::common::{
    generate_raw_id, safe_email_log, ApiError, AppState, StagedUpload, Validator,
};
use axum::{
    extract::{multipart::MultipartRejection, Extension, Multipart, Path, Query},
    response::Json,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Collection holding candidate records
const COLLECTION: &str = "candidatos";

/// Blob store folder for uploaded resumes
const CV_FOLDER: &str = "cvs";

/// POST /api/candidatos - Register a candidate and upload their resume
pub async fn register_candidate(
    Extension(state): Extension<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Map extractor rejections (wrong content type, bad boundary) into the
    // JSON error envelope instead of axum's plain-text response
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut form = CandidateForm::default();
    let mut original_file_name: Option<String> = None;
    let mut staged: Option<StagedUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        match field.name() {
            Some("name") => form.name = read_text(field).await?,
            Some("email") => form.email = read_text(field).await?,
            Some("phone") => form.phone = read_text(field).await?,
            Some("position") => form.position = read_text(field).await?,
            Some("linkedinProfile") => form.linkedin_profile = Some(read_text(field).await?),
            Some("cv") => {
                original_file_name = Some(field.file_name().unwrap_or("cv").to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::BadRequest("Invalid file".to_string()))?;

                staged = Some(StagedUpload::write(&state.staging_dir, &data).await.map_err(
                    |e| {
                        error!(error = %e, "Failed to stage uploaded resume");
                        ApiError::InternalServer("Failed to stage uploaded file".to_string())
                    },
                )?);
            }
            _ => {}
        }
    }

    // `staged` owns the temp file from here on; its Drop removes the file on
    // every exit path below, including error returns.
    let staged = staged.ok_or_else(|| ApiError::BadRequest("No cv file provided".to_string()))?;
    let original_file_name = original_file_name.unwrap_or_else(|| "cv".to_string());

    let validation = SubmissionValidator.validate(&form);
    if !validation.is_valid {
        return Err(ApiError::from(validation));
    }

    // Stable key when preserving the original name: re-uploading cv.pdf
    // overwrites cvs/cv instead of accumulating copies.
    let (key, resume_file_name) = if state.preserve_original_filename {
        (
            format!("{}/{}", CV_FOLDER, file_stem(&original_file_name)),
            Some(original_file_name),
        )
    } else {
        (format!("{}/{}", CV_FOLDER, generate_raw_id(12)), None)
    };

    let resume_url = state.storage.upload_file(staged.path(), &key).await?;

    let mut candidate = Candidate {
        id: None,
        name: form.name,
        email: form.email,
        phone: form.phone,
        position: form.position,
        resume_url,
        resume_file_name,
        linkedin_profile: form.linkedin_profile,
        registered_at: chrono::Utc::now(),
    };

    let result = state
        .db
        .collection::<Candidate>(COLLECTION)
        .insert_one(&candidate, None)
        .await
        .map_err(ApiError::DatabaseError)?;
    candidate.id = result.inserted_id.as_object_id();

    info!(
        candidate_id = ?candidate.id,
        email = %safe_email_log(&candidate.email),
        position = %candidate.position,
        "Candidate registered"
    );

    Ok(Json(json!({ "ok": true, "candidate": candidate })))
}

/// GET /api/candidatos - List candidates, newest first
pub async fn list_candidates(
    Extension(state): Extension<Arc<AppState>>,
    Query(filters): Query<CandidateFilters>,
) -> Result<Json<Vec<Candidate>>, ApiError> {
    let mut filter = doc! {};
    if let Some(position) = &filters.position {
        filter.insert("position", position.as_str());
    }

    let options = FindOptions::builder()
        .sort(doc! { "registeredAt": -1 })
        .build();

    let cursor = state
        .db
        .collection::<Candidate>(COLLECTION)
        .find(filter, options)
        .await
        .map_err(ApiError::DatabaseError)?;

    let candidates: Vec<Candidate> = cursor.try_collect().await.map_err(ApiError::DatabaseError)?;

    Ok(Json(candidates))
}

/// DELETE /api/candidatos/:id - Delete a candidate by identifier
pub async fn delete_candidate(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // A malformed identifier can match no record
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::NotFound("Candidato no encontrado".to_string()))?;

    let removed = state
        .db
        .collection::<Candidate>(COLLECTION)
        .find_one_and_delete(doc! { "_id": oid }, None)
        .await
        .map_err(ApiError::DatabaseError)?;

    match removed {
        Some(_) => {
            info!(candidate_id = %id, "Candidate deleted");
            Ok(Json(json!({ "ok": true })))
        }
        None => Err(ApiError::NotFound("Candidato no encontrado".to_string())),
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid form field: {}", e)))
}

/// File name with its last extension stripped, path components discarded
fn file_stem(name: &str) -> &str {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    }
}
