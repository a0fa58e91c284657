// Service exports
pub mod catalog;
pub mod recommender;

pub use catalog::{Catalog, CatalogError};
pub use recommender::{RecommendError, Recommender};
