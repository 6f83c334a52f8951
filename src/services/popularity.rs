use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{Catalog, MovieId};

/// One ranked row produced by the popularity recommender
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PopularMovie {
    /// Movie title
    pub title: String,
    /// Arithmetic mean of all ratings for the movie
    pub avg_rating: f64,
    /// Number of ratings the mean was computed from
    pub rating_count: usize,
}

/// Running rating aggregate for one movie
#[derive(Debug, Default)]
struct RatingAccumulator {
    sum: f64,
    count: usize,
}

impl RatingAccumulator {
    fn push(&mut self, rating: f64) {
        self.sum += rating;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Recommends the top rated movies within a genre
///
/// Filters the catalog to movies whose genre tag list contains `genre` as a
/// case-insensitive substring, aggregates their ratings, drops movies with
/// fewer than `min_ratings` ratings, and ranks the rest by mean rating.
///
/// Movies with no ratings at all never appear (inner-join semantics), and a
/// genre with no matches yields an empty list rather than an error. Ties in
/// mean rating keep ascending movie id order, so identical inputs always
/// produce identical output.
pub fn recommend_popular(
    catalog: &Catalog,
    genre: &str,
    min_ratings: usize,
    top_n: usize,
) -> Vec<PopularMovie> {
    // 1. Filter movies by genre, indexing titles for the join-back below
    let titles_by_id: HashMap<MovieId, &str> = catalog
        .movies()
        .iter()
        .filter(|movie| movie.matches_genre(genre))
        .map(|movie| (movie.movie_id, movie.title.as_str()))
        .collect();

    // 2. Join with ratings and fold each group to (sum, count). The ordered
    //    map keys groups by ascending movie id, which fixes tie order.
    let mut stats: BTreeMap<MovieId, RatingAccumulator> = BTreeMap::new();
    for rating in catalog.ratings() {
        if titles_by_id.contains_key(&rating.movie_id) {
            stats.entry(rating.movie_id).or_default().push(rating.rating);
        }
    }

    // 3. Drop movies below the minimum rating count
    let mut ranked: Vec<(MovieId, f64, usize)> = stats
        .into_iter()
        .filter(|(_, acc)| acc.count >= min_ratings)
        .map(|(movie_id, acc)| (movie_id, acc.mean(), acc.count))
        .collect();

    // 4. Rank by mean rating, descending; the sort is stable so equal means
    //    keep the ascending id order established above
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    // 5. Join back to titles and truncate
    ranked
        .into_iter()
        .take(top_n)
        .filter_map(|(movie_id, avg_rating, rating_count)| {
            titles_by_id.get(&movie_id).map(|title| PopularMovie {
                title: title.to_string(),
                avg_rating,
                rating_count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movie, Rating};

    fn create_test_catalog() -> Catalog {
        Catalog::new(
            vec![
                Movie::new(1, "Toy Story (1995)", Some("Comedy|Animation")),
                Movie::new(2, "Heat (1995)", Some("Action")),
            ],
            vec![
                Rating::new(1, 1, 5.0),
                Rating::new(2, 1, 4.0),
                Rating::new(3, 1, 5.0),
                Rating::new(1, 2, 3.0),
            ],
        )
    }

    #[test]
    fn test_recommends_genre_movies_with_enough_ratings() {
        let catalog = create_test_catalog();
        let result = recommend_popular(&catalog, "Comedy", 2, 5);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Toy Story (1995)");
        assert_eq!(result[0].rating_count, 3);
        assert!((result[0].avg_rating - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_genre_match_is_case_insensitive_substring() {
        let catalog = create_test_catalog();
        // "com" matches "Comedy" under the raw-text semantics
        let result = recommend_popular(&catalog, "com", 1, 5);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Toy Story (1995)");
    }

    #[test]
    fn test_min_ratings_above_any_count_yields_empty() {
        let catalog = create_test_catalog();
        assert!(recommend_popular(&catalog, "Comedy", 5, 5).is_empty());
    }

    #[test]
    fn test_min_ratings_zero_keeps_every_rated_movie() {
        let catalog = create_test_catalog();
        let result = recommend_popular(&catalog, "Action", 0, 5);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Heat (1995)");
        assert_eq!(result[0].rating_count, 1);
    }

    #[test]
    fn test_unknown_genre_yields_empty() {
        let catalog = create_test_catalog();
        assert!(recommend_popular(&catalog, "Documentary", 0, 5).is_empty());
    }

    #[test]
    fn test_top_n_zero_yields_empty() {
        let catalog = create_test_catalog();
        assert!(recommend_popular(&catalog, "Comedy", 0, 0).is_empty());
    }

    #[test]
    fn test_unrated_movies_disappear_in_join() {
        let catalog = Catalog::new(
            vec![
                Movie::new(1, "Rated (2000)", Some("Drama")),
                Movie::new(2, "Never Rated (2001)", Some("Drama")),
            ],
            vec![Rating::new(1, 1, 4.0)],
        );

        let result = recommend_popular(&catalog, "Drama", 0, 5);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Rated (2000)");
    }

    #[test]
    fn test_movies_without_genres_are_excluded() {
        let catalog = Catalog::new(
            vec![
                Movie::new(1, "Tagged (2000)", Some("Drama")),
                Movie::new(2, "Untagged (2001)", None),
            ],
            vec![Rating::new(1, 1, 4.0), Rating::new(1, 2, 5.0)],
        );

        let result = recommend_popular(&catalog, "Drama", 0, 5);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Tagged (2000)");
    }

    #[test]
    fn test_sorted_by_mean_rating_descending() {
        let catalog = Catalog::new(
            vec![
                Movie::new(1, "Low (2000)", Some("Drama")),
                Movie::new(2, "High (2001)", Some("Drama")),
                Movie::new(3, "Mid (2002)", Some("Drama")),
            ],
            vec![
                Rating::new(1, 1, 2.0),
                Rating::new(1, 2, 5.0),
                Rating::new(1, 3, 3.5),
            ],
        );

        let result = recommend_popular(&catalog, "Drama", 0, 5);
        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["High (2001)", "Mid (2002)", "Low (2000)"]);
        for pair in result.windows(2) {
            assert!(pair[0].avg_rating >= pair[1].avg_rating);
        }
    }

    #[test]
    fn test_ties_keep_ascending_id_order() {
        let catalog = Catalog::new(
            vec![
                Movie::new(7, "Second (2001)", Some("Drama")),
                Movie::new(3, "First (2000)", Some("Drama")),
            ],
            vec![Rating::new(1, 7, 4.0), Rating::new(1, 3, 4.0)],
        );

        let result = recommend_popular(&catalog, "Drama", 0, 5);
        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        // Equal means: ascending movie id wins, regardless of dataset order
        assert_eq!(titles, vec!["First (2000)", "Second (2001)"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let catalog = Catalog::new(
            vec![
                Movie::new(1, "A (2000)", Some("Drama")),
                Movie::new(2, "B (2001)", Some("Drama")),
                Movie::new(3, "C (2002)", Some("Drama")),
            ],
            vec![
                Rating::new(1, 1, 5.0),
                Rating::new(1, 2, 4.0),
                Rating::new(1, 3, 3.0),
            ],
        );

        let result = recommend_popular(&catalog, "Drama", 0, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "A (2000)");
    }

    #[test]
    fn test_identical_inputs_yield_identical_output() {
        let catalog = create_test_catalog();
        let first = recommend_popular(&catalog, "Comedy", 1, 5);
        let second = recommend_popular(&catalog, "Comedy", 1, 5);
        assert_eq!(first, second);
    }
}
