use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// Only file locations live here; the query parameters (genre, thresholds,
/// result counts) come from the interactive prompts, never the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie catalog CSV
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Path to the ratings CSV
    #[serde(default = "default_ratings_path")]
    pub ratings_path: String,

    /// Directory the recommendation CSVs are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_movies_path() -> String {
    "movies.csv".to_string()
}

fn default_ratings_path() -> String {
    "ratings.csv".to_string()
}

fn default_output_dir() -> String {
    "outputs".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dataset_layout() {
        let config: Config = envy::from_iter::<_, Config>(std::iter::empty()).unwrap();
        assert_eq!(config.movies_path, "movies.csv");
        assert_eq!(config.ratings_path, "ratings.csv");
        assert_eq!(config.output_dir, "outputs");
    }
}
