//! Intern Match - skill-based internship recommendation engine
//!
//! This library ranks internships (or any record carrying a skill list)
//! against a student's skills using TF-IDF weighting and cosine similarity.
//! The matcher is a pure function over its inputs; the service layer adds an
//! in-memory catalog and request validation on top.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, Tokenizer};
pub use models::{Internship, MatchReport, MatchSkillsRequest, ScoredCandidate, SkillProfile, SkillSet, Student};
pub use services::{Catalog, CatalogError, RecommendError, Recommender};
