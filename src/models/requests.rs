use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ad-hoc skill submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchSkillsRequest {
    #[validate(length(min = 1, message = "No skills provided"))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl MatchSkillsRequest {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
