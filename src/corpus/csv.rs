use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use super::Catalogue;
use crate::models::CourseRecord;

/// Load the course catalogue from a CSV file.
///
/// Columns are taken by position (name, details, URL, image URL) because
/// the catalogue export's header names are unreliable. The header row is
/// skipped. Rows whose name or details are empty after trimming are dropped
/// before they can reach the scoring path.
pub fn load_catalogue(path: &Path) -> Result<Catalogue> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open course catalogue at {}", path.display()))?;

    let mut courses = Vec::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = record.context("Failed to read catalogue row")?;

        let name = record.get(0).map(str::trim).unwrap_or_default();
        let details = record.get(1).map(str::trim).unwrap_or_default();
        if name.is_empty() || details.is_empty() {
            dropped += 1;
            continue;
        }

        let optional = |idx: usize| {
            record
                .get(idx)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        courses.push(CourseRecord {
            name: name.to_string(),
            details: details.to_string(),
            url: optional(2),
            image_url: optional(3),
        });
    }

    if dropped > 0 {
        tracing::debug!("Dropped {dropped} catalogue rows missing name or details");
    }

    Ok(Catalogue::new(courses))
}
