//! The shared recommendation pipeline every endpoint consumes.
//!
//! The catalogue endpoints differ only in their selection policy, so the
//! fit-score-rank-select sequence lives here once and each route picks a
//! [`Selection`].

use rand::Rng;

use crate::corpus::Catalogue;
use crate::models::{CourseQuery, CourseRecord, JobCourseMatch, Recommendation, SchoolCourse};
use crate::scoring::rank;
use crate::scoring::similarity;
use crate::scoring::vectorize::TfidfVectorizer;

/// Recommendations returned by the single and batch catalogue endpoints.
pub const CATALOGUE_TOP_K: usize = 3;
/// Courses returned by the job-matching endpoint.
pub const JOB_TOP_K: usize = 5;

/// Selection policy applied after the stable descending sort.
#[derive(Debug, Clone, Copy)]
pub enum Selection {
    /// The first `k` records.
    TopK(usize),
    /// The best 20, then 3 drawn at random without replacement.
    SampleTop,
}

/// A TF-IDF vectorizer fitted over the catalogue's combined texts, reused
/// for every query within one request and then discarded.
pub struct FittedCatalogue<'a> {
    catalogue: &'a Catalogue,
    vectorizer: TfidfVectorizer,
    matrix: Vec<Vec<f32>>,
}

impl<'a> FittedCatalogue<'a> {
    /// Fit fresh over the catalogue. Nothing is cached across requests.
    pub fn fit(catalogue: &'a Catalogue) -> Self {
        let documents = catalogue.documents();
        let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&documents);
        Self {
            catalogue,
            vectorizer,
            matrix,
        }
    }

    /// Score one query against every catalogue course and select per
    /// `policy`. An empty catalogue yields an empty result.
    pub fn recommend(
        &self,
        query: &CourseQuery,
        policy: Selection,
        rng: &mut impl Rng,
    ) -> Vec<Recommendation> {
        let query_vector = self.vectorizer.transform(&query.combined_text());
        let scores = similarity::score_against(&query_vector, &self.matrix);

        let scored: Vec<(f32, &CourseRecord)> =
            scores.into_iter().zip(self.catalogue.courses()).collect();

        let selected = match policy {
            Selection::TopK(k) => rank::top_k(scored, k),
            Selection::SampleTop => rank::sample_top(scored, rng),
        };

        selected
            .into_iter()
            .map(|(similarity, course)| Recommendation::new(course, similarity))
            .collect()
    }
}

/// Score every school course's details against the job name and keep the
/// top 5.
///
/// An empty job name (a lookup miss) scores 0.0 everywhere; the selection
/// then falls back to table order, which still returns records rather than
/// failing.
pub fn match_courses_to_job(
    courses: Vec<SchoolCourse>,
    job_name: &str,
    boost: f32,
) -> Vec<JobCourseMatch> {
    let scored: Vec<(f32, SchoolCourse)> = courses
        .into_iter()
        .map(|course| {
            (
                similarity::pairwise_tfidf(&course.details, job_name, boost),
                course,
            )
        })
        .collect();

    rank::top_k(scored, JOB_TOP_K)
        .into_iter()
        .map(|(similarity, course)| JobCourseMatch { course, similarity })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::similarity::DEFAULT_BOOST;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn course(name: &str, details: &str) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            details: details.to_string(),
            url: None,
            image_url: None,
        }
    }

    fn query(name: &str, details: &str) -> CourseQuery {
        CourseQuery {
            course_name: name.to_string(),
            course_details: details.to_string(),
        }
    }

    fn school_course(id: i64, name: &str, details: &str) -> SchoolCourse {
        SchoolCourse {
            id,
            name: name.to_string(),
            details: details.to_string(),
            grade_score: None,
        }
    }

    #[test]
    fn test_self_query_scores_one() {
        let catalogue = Catalogue::new(vec![course(
            "Python Basics",
            "intro to python programming",
        )]);
        let fitted = FittedCatalogue::fit(&catalogue);
        let mut rng = StdRng::seed_from_u64(0);

        let results = fitted.recommend(
            &query("Python Basics", "intro to python programming"),
            Selection::TopK(CATALOGUE_TOP_K),
            &mut rng,
        );
        assert_eq!(results.len(), 1);
        assert!((results[0].similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_top_k_capped_by_corpus_size() {
        let catalogue = Catalogue::new(vec![
            course("A", "rust systems programming"),
            course("B", "python data analysis"),
        ]);
        let fitted = FittedCatalogue::fit(&catalogue);
        let mut rng = StdRng::seed_from_u64(0);

        let results = fitted.recommend(
            &query("Rust", "systems programming"),
            Selection::TopK(3),
            &mut rng,
        );
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_most_similar_course_ranks_first() {
        let catalogue = Catalogue::new(vec![
            course("Watercolor Painting", "brushes and pigments"),
            course("Rust Web Services", "rust web services with axum"),
            course("Gardening", "soil and seeds"),
        ]);
        let fitted = FittedCatalogue::fit(&catalogue);
        let mut rng = StdRng::seed_from_u64(0);

        let results = fitted.recommend(
            &query("Web Services", "building rust web services"),
            Selection::TopK(CATALOGUE_TOP_K),
            &mut rng,
        );
        assert_eq!(results[0].name, "Rust Web Services");
        assert!(results[0].similarity > results[1].similarity);
    }

    #[test]
    fn test_empty_catalogue_yields_empty_results() {
        let catalogue = Catalogue::default();
        let fitted = FittedCatalogue::fit(&catalogue);
        let mut rng = StdRng::seed_from_u64(0);

        let results = fitted.recommend(
            &query("Anything", "at all"),
            Selection::TopK(CATALOGUE_TOP_K),
            &mut rng,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_unrelated_query_scores_zero_but_still_returns() {
        let catalogue = Catalogue::new(vec![course("Gardening", "soil and seeds")]);
        let fitted = FittedCatalogue::fit(&catalogue);
        let mut rng = StdRng::seed_from_u64(0);

        let results = fitted.recommend(
            &query("Quantum", "entanglement"),
            Selection::TopK(CATALOGUE_TOP_K),
            &mut rng,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].similarity, 0.0);
    }

    #[test]
    fn test_sample_selection_draws_from_catalogue() {
        let courses: Vec<CourseRecord> = (0..30)
            .map(|i| course(&format!("Course {i}"), &format!("topic number {i}")))
            .collect();
        let catalogue = Catalogue::new(courses);
        let fitted = FittedCatalogue::fit(&catalogue);
        let mut rng = StdRng::seed_from_u64(7);

        let results = fitted.recommend(
            &query("Course 3", "topic number 3"),
            Selection::SampleTop,
            &mut rng,
        );
        assert_eq!(results.len(), 3);
        let mut names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_job_match_ranks_relevant_course_first() {
        let courses = vec![
            school_course(1, "Painting", "watercolor and oil techniques"),
            school_course(2, "Software Engineering", "software design and programming"),
            school_course(3, "Botany", "plants and soil"),
        ];
        let matches = match_courses_to_job(courses, "software programming", DEFAULT_BOOST);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].course.id, 2);
        assert!(matches[0].similarity > 0.0);
    }

    #[test]
    fn test_job_match_empty_name_scores_zero_everywhere() {
        let courses = vec![
            school_course(1, "Databases", "relational modeling and sql"),
            school_course(2, "Networks", "tcp ip and routing"),
        ];
        let matches = match_courses_to_job(courses, "", DEFAULT_BOOST);
        assert_eq!(matches.len(), 2);
        // Zero scores everywhere; table order is preserved by the stable sort.
        assert!(matches.iter().all(|m| m.similarity == 0.0));
        assert_eq!(matches[0].course.id, 1);
        assert_eq!(matches[1].course.id, 2);
    }

    #[test]
    fn test_job_match_keeps_at_most_five() {
        let courses: Vec<SchoolCourse> = (0..8)
            .map(|i| school_course(i, "Course", "programming practice"))
            .collect();
        let matches = match_courses_to_job(courses, "programming", DEFAULT_BOOST);
        assert_eq!(matches.len(), JOB_TOP_K);
    }
}
