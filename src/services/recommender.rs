use std::sync::Arc;
use thiserror::Error;
use validator::Validate;
use crate::core::Matcher;
use crate::models::{Internship, MatchReport, MatchSkillsRequest, SkillProfile, SkillSet, Student};
use crate::services::catalog::Catalog;

/// Errors surfaced to callers of the recommender
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Internship not found: {0}")]
    InternshipNotFound(u32),

    #[error("No skills provided")]
    NoSkills,

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl RecommendError {
    /// Short machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            RecommendError::StudentNotFound(_) => "student_not_found",
            RecommendError::InternshipNotFound(_) => "internship_not_found",
            RecommendError::NoSkills => "no_skills",
            RecommendError::Validation(_) => "validation_failed",
        }
    }
}

/// Recommendation facade over the catalog and the matcher
///
/// Transport-agnostic: a CLI, an HTTP handler or a test can drive it.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    matcher: Matcher,
    default_limit: Option<usize>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, matcher: Matcher) -> Self {
        Self {
            catalog,
            matcher,
            default_limit: None,
        }
    }

    /// Cap applied when a call does not pass its own limit
    pub fn with_default_limit(mut self, limit: Option<usize>) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Rank every internship against a stored student's skills
    pub fn recommend_for_student(
        &self,
        student_id: &str,
        limit: Option<usize>,
    ) -> Result<MatchReport<Internship>, RecommendError> {
        let student = self
            .catalog
            .find_student(student_id)
            .ok_or_else(|| RecommendError::StudentNotFound(student_id.to_string()))?;

        tracing::info!(
            "Recommending internships for student {} ({} skills)",
            student.id,
            student.skills.len()
        );

        Ok(self.rank(&student.skills, self.catalog.internships().to_vec(), limit))
    }

    /// Rank every internship against an ad-hoc skill list
    pub fn match_skills(
        &self,
        request: &MatchSkillsRequest,
    ) -> Result<MatchReport<Internship>, RecommendError> {
        if request.skills.is_empty() {
            return Err(RecommendError::NoSkills);
        }
        request.validate()?;

        let query = SkillSet::new(request.skills.iter().cloned());
        if query.is_blank() {
            return Err(RecommendError::NoSkills);
        }

        tracing::info!("Matching {} submitted skills", query.len());

        Ok(self.rank(&query, self.catalog.internships().to_vec(), request.limit))
    }

    /// Rank every student against an internship's required skills
    pub fn shortlist_for_internship(
        &self,
        internship_id: u32,
        limit: Option<usize>,
    ) -> Result<MatchReport<Student>, RecommendError> {
        let internship = self
            .catalog
            .find_internship(internship_id)
            .ok_or(RecommendError::InternshipNotFound(internship_id))?;

        tracing::info!(
            "Shortlisting students for internship {} ({})",
            internship.id,
            internship.title
        );

        Ok(self.rank(internship.skills(), self.catalog.students().to_vec(), limit))
    }

    fn rank<C: SkillProfile>(
        &self,
        query: &SkillSet,
        candidates: Vec<C>,
        limit: Option<usize>,
    ) -> MatchReport<C> {
        let total_candidates = candidates.len();
        let mut matches = self.matcher.rank(query, candidates);

        if let Some(limit) = limit.or(self.default_limit) {
            matches.truncate(limit);
        }

        tracing::debug!(
            "Ranked {} candidates, returning {}",
            total_candidates,
            matches.len()
        );

        MatchReport {
            matches,
            total_candidates,
            generated_at: chrono::Utc::now(),
        }
    }
}
