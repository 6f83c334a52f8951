use serde::Serialize;

use crate::models::Catalog;

/// A movie returned by the content recommender
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimilarMovie {
    /// Movie title
    pub title: String,
    /// The shared genre tag list
    pub genres: String,
}

/// Outcome of a content-based similarity query
///
/// A missing reference movie is an expected outcome, not a fault, so it is
/// carried as a variant rather than an error; callers must match on the
/// outcome before treating it as a list.
#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityResult {
    /// A reference movie was resolved; holds its genre-mates in catalog order
    Found(Vec<SimilarMovie>),
    /// No catalog title contained the queried string
    NotFound {
        /// The title string as the caller supplied it
        query: String,
    },
}

impl SimilarityResult {
    /// True when a reference movie was resolved
    pub fn is_found(&self) -> bool {
        matches!(self, SimilarityResult::Found(_))
    }
}

/// Recommends movies sharing a reference movie's exact genre tag list
///
/// The reference is the first movie, in catalog order, whose title contains
/// `movie_title` as a case-insensitive substring. Candidates must carry a
/// genre string exactly equal to the reference's (full-string equality, so
/// "Comedy|Romance" does not match "Comedy") and are returned unranked, in
/// catalog order, truncated to `top_n`.
///
/// Any movie whose title exactly equals the reference title is excluded.
/// That removes the reference itself, and also any unrelated movie reusing
/// the same title string.
pub fn recommend_similar(catalog: &Catalog, movie_title: &str, top_n: usize) -> SimilarityResult {
    // 1. Resolve the reference movie: first title-substring match wins,
    //    even when the query is ambiguous across many titles
    let Some(reference) = catalog
        .movies()
        .iter()
        .find(|movie| movie.matches_title(movie_title))
    else {
        return SimilarityResult::NotFound {
            query: movie_title.to_string(),
        };
    };

    // A reference without a genre list has nothing to match against
    let Some(reference_genres) = reference.genres.as_deref() else {
        return SimilarityResult::Found(Vec::new());
    };

    // 2. Collect movies with the identical genre string, skipping the
    //    reference title, in catalog order
    let matches = catalog
        .movies()
        .iter()
        .filter(|movie| movie.genres.as_deref() == Some(reference_genres))
        .filter(|movie| movie.title != reference.title)
        .take(top_n)
        .map(|movie| SimilarMovie {
            title: movie.title.clone(),
            genres: reference_genres.to_string(),
        })
        .collect();

    SimilarityResult::Found(matches)
}
