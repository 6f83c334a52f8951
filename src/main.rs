use std::path::Path;

use anyhow::Context;

use mynextmovie::{
    cli,
    config::Config,
    dataset,
    services::{self, SimilarityResult},
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let catalog = dataset::load_catalog(
        Path::new(&config.movies_path),
        Path::new(&config.ratings_path),
    )
    .context("Failed to load the movie dataset")?;

    println!("Welcome to the MyNextMovie Recommender System!");

    // Popularity-based recommendations
    let genre = cli::prompt("Enter a genre (e.g., Comedy, Action): ")?;
    let min_ratings = cli::prompt_count("Enter the minimum number of ratings: ")?;
    let top_n = cli::prompt_count("Enter the number of recommendations: ")?;

    let popular = services::recommend_popular(&catalog, &genre, min_ratings, top_n);
    println!("\nPopularity-Based Recommendations:");
    cli::print_popular(&popular);
    dataset::write_popular(Path::new(&config.output_dir), &popular)?;

    // Content-based recommendations
    let movie_title = cli::prompt("\nEnter a movie title to find similar movies: ")?;
    let top_n = cli::prompt_count("Enter the number of similar movie recommendations: ")?;

    println!("\nContent-Based Recommendations:");
    match services::recommend_similar(&catalog, &movie_title, top_n) {
        SimilarityResult::Found(similar) => {
            cli::print_similar(&similar);
            dataset::write_similar(Path::new(&config.output_dir), &similar)?;
        }
        SimilarityResult::NotFound { query } => {
            println!("Movie '{}' not found in the dataset.", query);
        }
    }

    Ok(())
}
