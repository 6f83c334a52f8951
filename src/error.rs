/// Application-level errors
///
/// A dataset that cannot be read fails loudly here before the recommenders
/// run; a similarity query with no matching title is not an error (see
/// `services::SimilarityResult`).
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type AppResult<T> = Result<T, AppError>;
