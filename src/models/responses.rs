use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredCandidate;

/// Ranked result set returned by the recommender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport<C> {
    pub matches: Vec<ScoredCandidate<C>>,
    pub total_candidates: usize,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Error document printed in JSON output mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
