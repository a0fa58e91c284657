use serde::{ser::Error as _, Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Collection of free-text skill labels as submitted by a caller
///
/// Labels are kept verbatim; normalization (case folding, whitespace
/// collapsing) happens at match time so pass-through data is never altered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(skills.into_iter().map(Into::into).collect())
    }

    /// Raw labels in submission order
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no label contains anything but whitespace
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|s| s.trim().is_empty())
    }

    /// Case-insensitive membership test
    pub fn contains(&self, skill: &str) -> bool {
        let needle = normalize_label(skill);
        self.0.iter().any(|s| normalize_label(s) == needle)
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Lowercase, trim and collapse inner whitespace runs to a single space
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Anything that can be ranked by the matcher
pub trait SkillProfile {
    fn skills(&self) -> &SkillSet;
}

impl SkillProfile for SkillSet {
    fn skills(&self) -> &SkillSet {
        self
    }
}

impl<T: SkillProfile + ?Sized> SkillProfile for &T {
    fn skills(&self) -> &SkillSet {
        (**self).skills()
    }
}

/// Government internship listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: u32,
    pub title: String,
    pub ministry: String,
    pub location: String,
    #[serde(default)]
    pub required_skills: SkillSet,
    /// Extra attributes carried through untouched (stipend, duration, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillProfile for Internship {
    fn skills(&self) -> &SkillSet {
        &self.required_skills
    }
}

/// Student record with declared skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillProfile for Student {
    fn skills(&self) -> &SkillSet {
        &self.skills
    }
}

/// Candidate paired with its relevance score
///
/// Serializes as the candidate's own fields plus `match_score`. A
/// `match_score` already present on the candidate is replaced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoredCandidate<C> {
    #[serde(flatten)]
    pub candidate: C,
    pub match_score: f64,
}

impl<C: Serialize> Serialize for ScoredCandidate<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut fields = match serde_json::to_value(&self.candidate).map_err(S::Error::custom)? {
            Value::Object(map) => map,
            other => {
                return Err(S::Error::custom(format!(
                    "scored candidate must serialize as an object, got {}",
                    other
                )))
            }
        };

        fields.insert("match_score".to_string(), Value::from(self.match_score));
        fields.serialize(serializer)
    }
}
