use serde::{Deserialize, Serialize};
use crate::models::{normalize_label, SkillSet};

/// How a skill set is broken into terms before weighting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tokenizer {
    /// One term per skill label; "Machine Learning" stays a single term
    #[default]
    Phrase,
    /// Word terms of two or more word characters; "Machine Learning" yields
    /// "machine" and "learning"
    Word,
}

impl Tokenizer {
    /// Turn a skill set into its term sequence (duplicates preserved)
    pub fn tokenize(&self, skills: &SkillSet) -> Vec<String> {
        match self {
            Tokenizer::Phrase => skills
                .labels()
                .iter()
                .map(|label| normalize_label(label))
                .filter(|term| !term.is_empty())
                .collect(),
            Tokenizer::Word => skills
                .labels()
                .iter()
                .flat_map(|label| word_terms(label))
                .collect(),
        }
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_terms(label: &str) -> impl Iterator<Item = String> + '_ {
    label
        .split(|c: char| !is_word_char(c))
        .filter(|w| w.chars().count() >= 2)
        .map(str::to_lowercase)
}
