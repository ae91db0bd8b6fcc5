//! # course-recommend
//!
//! A web service recommending courses by lexical text similarity.
//!
//! ## Pipeline
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────┐
//!   │ CSV catalogue │      │ MySQL tables  │
//!   │  (startup)    │      │ (per request) │
//!   └──────┬───────┘      └──────┬───────┘
//!          │ course documents     │ job name + school courses
//!          ▼                      ▼
//!   ┌─────────────────────────────────────┐
//!   │ TF-IDF vectorizer (fitted fresh per  │
//!   │ request, vocabulary never persisted) │
//!   └──────────────────┬──────────────────┘
//!                      │ query vector vs corpus matrix
//!                      ▼
//!   ┌─────────────────────────────────────┐
//!   │ Cosine similarity (boost × 1.5 and   │
//!   │ clamp to 1.0 on the job path)        │
//!   └──────────────────┬──────────────────┘
//!                      │ one score per course
//!                      ▼
//!   ┌─────────────────────────────────────┐
//!   │ Stable descending sort, then top-K   │
//!   │ or top-20-sample-3 selection         │
//!   └──────────────────┬──────────────────┘
//!                      │
//!                      ▼
//!               JSON recommendations
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration: catalogue path, bind
//!   address, database URL, boost factor, sampling seed
//! - [`models`] - Wire and record types: `CourseRecord`, `CourseQuery`,
//!   `Recommendation`, batch envelopes, `SchoolCourse`
//! - [`corpus`] - CSV catalogue loading and per-request MySQL queries
//! - [`scoring::vectorize`] - Term-count and TF-IDF vectorizers over a
//!   per-call vocabulary
//! - [`scoring::similarity`] - Cosine similarity, boosted variant, and
//!   pairwise two-document scorers
//! - [`scoring::rank`] - Stable descending sort, top-K, and
//!   top-20-sample-3 selection
//! - [`recommend`] - The shared fit-score-rank-select pipeline and the
//!   job-to-course matcher
//! - [`api`] - Axum HTTP handlers for the four recommendation routes
//! - [`state`] - Shared application state holding the catalogue snapshot

pub mod api;
pub mod config;
pub mod corpus;
pub mod models;
pub mod recommend;
pub mod scoring;
pub mod state;
