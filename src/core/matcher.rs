use crate::core::{
    scoring::{cosine_similarity, to_match_score},
    tokenize::Tokenizer,
    vectorize::TfidfVectorizer,
};
use crate::models::{ScoredCandidate, SkillProfile, SkillSet};

/// Skill matcher - ranks candidates by TF-IDF cosine similarity to a query
///
/// # Pipeline Stages
/// 1. Normalization and tokenization of every skill set
/// 2. TF-IDF fit over the joint corpus (all candidates + the query)
/// 3. Cosine similarity between the query and each candidate
/// 4. Scaling to 0-100 and stable ranking
///
/// The matcher carries configuration only, so a single instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    tokenizer: Tokenizer,
    vectorizer: TfidfVectorizer,
}

impl Matcher {
    pub fn new(tokenizer: Tokenizer, smooth_idf: bool) -> Self {
        Self {
            tokenizer,
            vectorizer: TfidfVectorizer::new(smooth_idf),
        }
    }

    pub fn with_default_settings() -> Self {
        Self::default()
    }

    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    pub fn smooth_idf(&self) -> bool {
        self.vectorizer.smooth_idf
    }

    /// Score every candidate against `query`, in input order
    ///
    /// # Returns
    /// One score in [0, 100] per candidate, rounded to one decimal place
    pub fn score<C: SkillProfile>(&self, query: &SkillSet, candidates: &[C]) -> Vec<f64> {
        if candidates.is_empty() {
            return Vec::new();
        }

        // Stage 1: tokenize, query goes last in the corpus
        let mut corpus: Vec<Vec<String>> = candidates
            .iter()
            .map(|c| self.tokenizer.tokenize(c.skills()))
            .collect();
        corpus.push(self.tokenizer.tokenize(query));

        // Stage 2: TF-IDF over the joint corpus
        let mut vectors = self.vectorizer.fit_transform(&corpus);
        let query_vec = vectors.pop().unwrap_or_default();

        // Stage 3: similarity and scaling
        vectors
            .iter()
            .map(|v| to_match_score(cosine_similarity(&query_vec, v)))
            .collect()
    }

    /// Rank candidates by relevance to `query`
    ///
    /// # Arguments
    /// * `query` - Skills to match against
    /// * `candidates` - Records to rank; ownership passes through untouched
    ///
    /// # Returns
    /// Every candidate with its score, highest first. Equal scores keep their
    /// input order.
    pub fn rank<C: SkillProfile>(&self, query: &SkillSet, candidates: Vec<C>) -> Vec<ScoredCandidate<C>> {
        let scores = self.score(query, &candidates);

        let mut ranked: Vec<ScoredCandidate<C>> = candidates
            .into_iter()
            .zip(scores)
            .map(|(candidate, match_score)| ScoredCandidate { candidate, match_score })
            .collect();

        // Stage 4: sort_by is stable, ties stay in input order
        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }
}
