//! Movie recommendations over a static catalog of movies and user ratings.
//!
//! Two independent strategies: a popularity ranking within a genre
//! (`services::recommend_popular`) and a content match by exact genre
//! string (`services::recommend_similar`). Both are pure functions over an
//! injected, immutable [`models::Catalog`]; file loading, CSV output, and
//! console interaction live in their own modules.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod services;
