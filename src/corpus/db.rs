use anyhow::{Context, Result};
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

use crate::models::SchoolCourse;

/// Open a connection for the duration of one request.
///
/// The job endpoint opens and closes its connection per request; there is no
/// pool to share state across requests.
pub async fn connect(database_url: &str) -> Result<MySqlConnection> {
    MySqlConnection::connect(database_url)
        .await
        .context("Failed to connect to MySQL")
}

/// Resolve a job id to its name.
///
/// A missing id is not an error: it degrades to an empty-string query, which
/// scores 0.0 against every course.
pub async fn fetch_job_name(conn: &mut MySqlConnection, job_id: i64) -> Result<String> {
    let name: Option<String> = sqlx::query_scalar("SELECT job_name FROM job WHERE id = ?")
        .bind(job_id)
        .fetch_optional(&mut *conn)
        .await
        .context("Failed to query job table")?;
    Ok(name.unwrap_or_default())
}

/// Load every school course, in table order.
pub async fn fetch_school_courses(conn: &mut MySqlConnection) -> Result<Vec<SchoolCourse>> {
    sqlx::query_as::<_, SchoolCourse>(
        "SELECT course_id, course_name, course_details, grade_score FROM school_course",
    )
    .fetch_all(&mut *conn)
    .await
    .context("Failed to query school_course table")
}
