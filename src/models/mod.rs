// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{normalize_label, Internship, ScoredCandidate, SkillProfile, SkillSet, Student};
pub use requests::MatchSkillsRequest;
pub use responses::{ErrorResponse, MatchReport};
