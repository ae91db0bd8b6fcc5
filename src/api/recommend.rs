use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sqlx::Connection;

use crate::corpus::db;
use crate::models::{BatchEntry, CourseQuery, JobCourseMatch, JobRecommendRequest, Recommendation};
use crate::recommend::{match_courses_to_job, FittedCatalogue, Selection, CATALOGUE_TOP_K};
use crate::state::AppState;

const INVALID_QUERY: &str = "Invalid input. 'courseName' and 'courseDetails' must be non-empty.";
const INVALID_BATCH: &str =
    "Invalid input. Provide a list of objects with 'courseName' and 'courseDetails'.";

/// POST /recommend - top 3 catalogue courses for a single name+details query.
pub async fn recommend_single(
    State(state): State<AppState>,
    Json(query): Json<CourseQuery>,
) -> Result<Json<Vec<Recommendation>>, (StatusCode, String)> {
    if !query.is_valid() {
        return Err((StatusCode::BAD_REQUEST, INVALID_QUERY.to_string()));
    }

    let fitted = FittedCatalogue::fit(&state.catalogue);
    let mut rng = state.sample_rng();
    let results = fitted.recommend(&query, Selection::TopK(CATALOGUE_TOP_K), &mut rng);
    Ok(Json(results))
}

/// POST /recommend/multiple - top 3 for each query in a batch.
pub async fn recommend_multiple(
    State(state): State<AppState>,
    Json(queries): Json<Vec<CourseQuery>>,
) -> Result<Json<Vec<BatchEntry>>, (StatusCode, String)> {
    batch_recommend(&state, queries, Selection::TopK(CATALOGUE_TOP_K))
}

/// POST /recommend/multiple/random - 3 drawn at random from each query's
/// top 20.
pub async fn recommend_multiple_random(
    State(state): State<AppState>,
    Json(queries): Json<Vec<CourseQuery>>,
) -> Result<Json<Vec<BatchEntry>>, (StatusCode, String)> {
    batch_recommend(&state, queries, Selection::SampleTop)
}

/// The vectorizer is fitted once per batch; each entry is then scored
/// independently. Invalid entries turn into per-item error envelopes instead
/// of failing the whole batch.
fn batch_recommend(
    state: &AppState,
    queries: Vec<CourseQuery>,
    policy: Selection,
) -> Result<Json<Vec<BatchEntry>>, (StatusCode, String)> {
    if queries.is_empty() {
        return Err((StatusCode::BAD_REQUEST, INVALID_BATCH.to_string()));
    }

    let fitted = FittedCatalogue::fit(&state.catalogue);
    let mut rng = state.sample_rng();

    let entries = queries
        .into_iter()
        .map(|query| {
            if !query.is_valid() {
                return BatchEntry::invalid(query, INVALID_QUERY);
            }
            let recommendations = fitted.recommend(&query, policy, &mut rng);
            BatchEntry::ok(query, recommendations)
        })
        .collect();

    Ok(Json(entries))
}

/// POST /recommend-courses - resolve a job id to its name, then return the
/// top 5 school courses by boosted similarity.
pub async fn recommend_for_job(
    State(state): State<AppState>,
    Json(req): Json<JobRecommendRequest>,
) -> Result<Json<Vec<JobCourseMatch>>, (StatusCode, String)> {
    let Some(job_id) = req.job_id else {
        return Err((StatusCode::BAD_REQUEST, "job_id is required.".to_string()));
    };
    let Some(database_url) = state.config.database_url.clone() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Database is not configured".to_string(),
        ));
    };

    // The connection lives for exactly this request.
    let mut conn = db::connect(&database_url).await.map_err(internal)?;
    let job_name = db::fetch_job_name(&mut conn, job_id).await.map_err(internal)?;
    if job_name.is_empty() {
        tracing::warn!("No job found for id {job_id}; scoring against an empty query");
    }
    let courses = db::fetch_school_courses(&mut conn).await.map_err(internal)?;
    let _ = conn.close().await;

    let matches = match_courses_to_job(courses, &job_name, state.config.boost_factor);
    Ok(Json(matches))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}"))
}
