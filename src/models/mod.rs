pub mod catalog;
pub mod movie;
pub mod rating;

pub use catalog::Catalog;
pub use movie::{Movie, MovieId};
pub use rating::{Rating, UserId};
