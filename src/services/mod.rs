pub mod popularity;
pub mod similarity;

pub use popularity::{recommend_popular, PopularMovie};
pub use similarity::{recommend_similar, SimilarMovie, SimilarityResult};
