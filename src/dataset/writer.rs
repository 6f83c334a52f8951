use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::AppResult,
    services::{PopularMovie, SimilarMovie},
};

/// File name for the popularity recommender's output
pub const POPULAR_FILE: &str = "popular_recommendations.csv";

/// File name for the content recommender's output
pub const SIMILAR_FILE: &str = "similar_recommendations.csv";

/// Writes the popularity recommendations CSV (`title,avg_rating,rating_count`)
///
/// Creates the output directory if it does not exist. An empty result still
/// produces a file with the header row. Returns the written path.
pub fn write_popular(output_dir: &Path, rows: &[PopularMovie]) -> AppResult<PathBuf> {
    write_rows(output_dir, POPULAR_FILE, rows, &["title", "avg_rating", "rating_count"])
}

/// Writes the similar-movies CSV (`title,genres`)
///
/// Callers only invoke this on a found outcome; a not-found query produces
/// no file. Returns the written path.
pub fn write_similar(output_dir: &Path, rows: &[SimilarMovie]) -> AppResult<PathBuf> {
    write_rows(output_dir, SIMILAR_FILE, rows, &["title", "genres"])
}

fn write_rows<T: Serialize>(
    output_dir: &Path,
    file_name: &str,
    rows: &[T],
    header: &[&str],
) -> AppResult<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);

    let mut writer = csv::Writer::from_path(&path)?;
    if rows.is_empty() {
        // serialize() derives the header from the first row, so an empty
        // result needs the header written by hand
        writer.write_record(header)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Recommendations written");

    Ok(path)
}
