use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use crate::models::{Internship, Student};

const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate internship id: {0}")]
    DuplicateInternship(u32),

    #[error("Duplicate student id: {0}")]
    DuplicateStudent(String),
}

/// In-memory students and internships
///
/// Read-only once loaded; share it behind an `Arc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    students: Vec<Student>,
    #[serde(default)]
    internships: Vec<Internship>,
}

impl Catalog {
    /// Build a catalog from already-parsed records
    pub fn new(students: Vec<Student>, internships: Vec<Internship>) -> Result<Self, CatalogError> {
        let mut catalog = Self { students, internships };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Built-in sample data set
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_internship(&self, id: u32) -> Option<&Internship> {
        self.internships.iter().find(|i| i.id == id)
    }

    /// Reject duplicate ids and drop stale `match_score` attributes, which
    /// the matcher owns
    fn validate(&mut self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for internship in &mut self.internships {
            if !seen.insert(internship.id) {
                return Err(CatalogError::DuplicateInternship(internship.id));
            }
            if internship.extra.remove("match_score").is_some() {
                tracing::warn!("Dropping stored match_score on internship {}", internship.id);
            }
        }

        let mut seen = HashSet::new();
        for student in &mut self.students {
            if !seen.insert(student.id.clone()) {
                return Err(CatalogError::DuplicateStudent(student.id.clone()));
            }
            if student.extra.remove("match_score").is_some() {
                tracing::warn!("Dropping stored match_score on student {}", student.id);
            }
        }

        tracing::debug!(
            "Catalog validated: {} students, {} internships",
            self.students.len(),
            self.internships.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.students().len(), 3);
        assert_eq!(catalog.internships().len(), 8);
        assert_eq!(catalog.find_student("2").unwrap().name, "Aman Verma");
        assert_eq!(catalog.find_internship(8).unwrap().title, "Data Analytics Intern");
        assert!(catalog.find_student("99").is_none());
    }

    #[test]
    fn test_duplicate_internship_rejected() {
        let json = r#"{
            "internships": [
                {"id": 1, "title": "A", "ministry": "M", "location": "L", "required_skills": []},
                {"id": 1, "title": "B", "ministry": "M", "location": "L", "required_skills": []}
            ]
        }"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateInternship(1))
        ));
    }

    #[test]
    fn test_duplicate_student_rejected() {
        let json = r#"{
            "students": [
                {"id": "a", "name": "A", "skills": []},
                {"id": "a", "name": "B", "skills": []}
            ]
        }"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateStudent(id)) if id == "a"
        ));
    }

    #[test]
    fn test_stored_match_score_dropped() {
        let json = r#"{
            "internships": [
                {"id": 1, "title": "A", "ministry": "M", "location": "L",
                 "required_skills": ["SQL"], "match_score": 99, "stipend": 8000}
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        let internship = catalog.find_internship(1).unwrap();
        assert!(!internship.extra.contains_key("match_score"));
        assert!(internship.extra.contains_key("stipend"));
    }

    #[test]
    fn test_malformed_skills_rejected() {
        let json = r#"{"students": [{"id": "1", "name": "A", "skills": "Python"}]}"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::from_path("/nonexistent/catalog.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
