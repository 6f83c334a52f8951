use serde::Deserialize;

use super::MovieId;

/// Unique identifier for a user in the ratings table
pub type UserId = u32;

/// A single user's score for one movie
///
/// Deserialized from `ratings.csv` (`userId,movieId,rating`); columns the
/// core does not use, such as `timestamp`, are ignored. A rating whose
/// `movie_id` has no catalog row is silently dropped by join semantics.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Rating {
    /// User who gave the rating
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Movie the rating applies to
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    /// Numeric score, e.g. 0.5-5.0 on the MovieLens scale
    pub rating: f64,
}

impl Rating {
    /// Creates a new rating record
    pub fn new(user_id: UserId, movie_id: MovieId, rating: f64) -> Self {
        Self {
            user_id,
            movie_id,
            rating,
        }
    }
}
