use super::{Movie, MovieId, Rating};

/// The fully-loaded, immutable dataset shared by both recommenders
///
/// Holds the movie and rating tables in file order; dataset order is
/// load-bearing for both recommenders (reference-movie resolution and
/// unranked similarity results follow it). Loaded once at startup and
/// never mutated, so `&Catalog` can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
}

impl Catalog {
    /// Creates a catalog from already-loaded tables
    pub fn new(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        Self { movies, ratings }
    }

    /// All movie records, in dataset order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All rating records, in dataset order
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Looks up a movie by id
    pub fn movie(&self, movie_id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.movie_id == movie_id)
    }

    /// Number of movie and rating records
    pub fn counts(&self) -> (usize, usize) {
        (self.movies.len(), self.ratings.len())
    }
}
