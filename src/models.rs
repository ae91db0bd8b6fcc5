use serde::{Deserialize, Serialize};

/// A catalogue course loaded from the CSV export.
///
/// `name` and `details` are non-empty by construction: rows violating that
/// are dropped at load time, before a record exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "courseName")]
    pub name: String,
    #[serde(rename = "courseDetails")]
    pub details: String,
    #[serde(rename = "courseURL")]
    pub url: Option<String>,
    #[serde(rename = "imgURL")]
    pub image_url: Option<String>,
}

impl CourseRecord {
    /// The document text the catalogue is scored on.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.name, self.details)
    }
}

/// A single recommendation query: a course-shaped name+details pair.
///
/// Missing fields deserialize to empty strings and fail validation at the
/// handler, not at parse time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseQuery {
    #[serde(rename = "courseName", default)]
    pub course_name: String,
    #[serde(rename = "courseDetails", default)]
    pub course_details: String,
}

impl CourseQuery {
    /// Both fields must be non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.course_name.trim().is_empty() && !self.course_details.trim().is_empty()
    }

    pub fn combined_text(&self) -> String {
        format!("{} {}", self.course_name.trim(), self.course_details.trim())
    }
}

/// A scored catalogue course, ready for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "courseName")]
    pub name: String,
    #[serde(rename = "courseDetails")]
    pub details: String,
    #[serde(rename = "courseURL")]
    pub url: Option<String>,
    #[serde(rename = "imgURL")]
    pub image_url: Option<String>,
    pub similarity: f32,
}

impl Recommendation {
    pub fn new(course: &CourseRecord, similarity: f32) -> Self {
        Self {
            name: course.name.clone(),
            details: course.details.clone(),
            url: course.url.clone(),
            image_url: course.image_url.clone(),
            similarity,
        }
    }
}

/// One element of a batch response: the echoed input plus either the
/// recommendations or a per-item validation error.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub input: CourseQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn ok(input: CourseQuery, recommendations: Vec<Recommendation>) -> Self {
        Self {
            input,
            recommendations: Some(recommendations),
            error: None,
        }
    }

    pub fn invalid(input: CourseQuery, message: &str) -> Self {
        Self {
            input,
            recommendations: None,
            error: Some(message.to_string()),
        }
    }
}

/// Job-based recommendation request.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecommendRequest {
    #[serde(default)]
    pub job_id: Option<i64>,
}

/// A school course row from the relational store.
///
/// `grade_score` is carried through as payload; it never participates in
/// scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SchoolCourse {
    #[serde(rename = "course_id")]
    #[sqlx(rename = "course_id")]
    pub id: i64,
    #[serde(rename = "course_name")]
    #[sqlx(rename = "course_name")]
    pub name: String,
    #[serde(rename = "course_details")]
    #[sqlx(rename = "course_details")]
    pub details: String,
    pub grade_score: Option<f64>,
}

/// A school course with its boosted similarity to the job name.
#[derive(Debug, Clone, Serialize)]
pub struct JobCourseMatch {
    #[serde(flatten)]
    pub course: SchoolCourse,
    pub similarity: f32,
}
