use serde::Deserialize;

/// Unique identifier for a movie in the catalog
pub type MovieId = u32;

/// A movie record from the catalog
///
/// Deserialized from `movies.csv` (`movieId,title,genres`). Titles usually
/// carry a year suffix and are not guaranteed unique; `movie_id` is.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique identifier for the movie
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    /// Display title, e.g. "Heat (1995)"
    pub title: String,
    /// Pipe-delimited genre tag list, e.g. "Comedy|Romance"; absent for
    /// catalog rows without genre data
    pub genres: Option<String>,
}

impl Movie {
    /// Creates a new movie record
    pub fn new(movie_id: MovieId, title: impl Into<String>, genres: Option<&str>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genres: genres.map(str::to_string),
        }
    }

    /// Checks whether the genre tag list contains `genre` as a
    /// case-insensitive substring
    ///
    /// This is raw-text matching, not tag-aware: "com" matches "Comedy".
    /// Movies without a genre list never match.
    pub fn matches_genre(&self, genre: &str) -> bool {
        let needle = genre.to_lowercase();
        self.genres
            .as_deref()
            .map_or(false, |g| g.to_lowercase().contains(&needle))
    }

    /// Checks whether the title contains `query` as a case-insensitive
    /// substring
    pub fn matches_title(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_genre_case_insensitive() {
        let movie = Movie::new(1, "Toy Story (1995)", Some("Comedy|Animation"));
        assert!(movie.matches_genre("comedy"));
        assert!(movie.matches_genre("ANIMATION"));
    }

    #[test]
    fn test_matches_genre_substring() {
        let movie = Movie::new(1, "Toy Story (1995)", Some("Comedy|Animation"));
        // Raw substring semantics: a partial tag still matches
        assert!(movie.matches_genre("com"));
        assert!(!movie.matches_genre("Horror"));
    }

    #[test]
    fn test_missing_genres_never_match() {
        let movie = Movie::new(2, "Untagged (2001)", None);
        assert!(!movie.matches_genre("Comedy"));
        assert!(!movie.matches_genre(""));
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let movie = Movie::new(3, "Heat (1995)", Some("Action|Crime"));
        assert!(movie.matches_title("heat"));
        assert!(movie.matches_title("EAT"));
        assert!(!movie.matches_title("Speed"));
    }
}
