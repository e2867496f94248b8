use axum::{extract::Multipart, extract::State, Json};
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::matching::ranking::{merge_and_rank, JobMatch};
use crate::matching::repo::fetch_jobs_by_ids;
use crate::state::AppState;
use crate::vector_index::DEFAULT_TOP_K;

/// POST /
///
/// The whole pipeline: résumé PDF → text → embedding → top-K index query →
/// job rows → merged, ranked response.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let file = read_file_field(multipart).await?;

    let text = extract_text(&file)?;
    let embedding = state.embedder.embed(&text).await?;
    let candidates = state.index.query(&embedding, DEFAULT_TOP_K).await?;

    let ids: Vec<i32> = candidates.iter().map(|c| c.id).collect();
    let jobs = fetch_jobs_by_ids(&state.db, &ids).await?;

    // Candidates without a row are silently dropped from the response;
    // the warn keeps the data loss visible in traces.
    for candidate in &candidates {
        if !jobs.iter().any(|job| job.id == candidate.id) {
            warn!("Index candidate {} has no job row; dropping", candidate.id);
        }
    }

    let ranked = merge_and_rank(candidates, jobs);
    info!("Returning {} ranked matches", ranked.len());
    Ok(Json(ranked))
}

/// Pulls the `file` field out of the multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            file = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            );
        }
    }

    file.filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::BadRequest("multipart field 'file' is required".to_string()))
}
