use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    error::AppResult,
    models::{Catalog, Movie, Rating},
};

/// Loads the movie and rating tables into an immutable catalog
///
/// Reads both CSV files eagerly and fails loudly on a missing or malformed
/// source; the recommenders assume a fully-loaded catalog and never touch
/// the filesystem themselves. Record order in the files is preserved.
pub fn load_catalog(movies_path: &Path, ratings_path: &Path) -> AppResult<Catalog> {
    let movies: Vec<Movie> = read_records(movies_path)?;
    let ratings: Vec<Rating> = read_records(ratings_path)?;

    tracing::info!(
        movies = movies.len(),
        ratings = ratings.len(),
        "Catalog loaded"
    );

    Ok(Catalog::new(movies, ratings))
}

/// Reads every record of a headered CSV file into memory
fn read_records<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for record in reader.deserialize() {
        records.push(record?);
    }

    Ok(records)
}
