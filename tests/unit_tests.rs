// Unit tests for Intern Match

use intern_match::core::{
    scoring::{cosine_similarity, to_match_score},
    tokenize::Tokenizer,
    vectorize::TfidfVectorizer,
};
use intern_match::models::{normalize_label, SkillSet};

fn tokenize_all(tokenizer: Tokenizer, sets: &[SkillSet]) -> Vec<Vec<String>> {
    sets.iter().map(|s| tokenizer.tokenize(s)).collect()
}

#[test]
fn test_normalization_is_case_insensitive() {
    assert_eq!(normalize_label("Python"), normalize_label("PYTHON"));
    assert_eq!(normalize_label("Data Analysis"), normalize_label(" data\tanalysis "));
}

#[test]
fn test_phrase_tokens_match_labels() {
    let terms = Tokenizer::Phrase.tokenize(&SkillSet::new(["Project Management", "Excel"]));
    assert_eq!(terms, vec!["project management", "excel"]);
}

#[test]
fn test_word_tokens_split_labels() {
    let terms = Tokenizer::Word.tokenize(&SkillSet::new(["Project Management", "Excel"]));
    assert_eq!(terms, vec!["project", "management", "excel"]);
}

#[test]
fn test_identical_sets_have_unit_similarity() {
    let sets = vec![
        SkillSet::new(["Python", "SQL"]),
        SkillSet::new(["sql", "python"]),
        SkillSet::new(["Excel"]),
    ];
    let vectors = TfidfVectorizer::default().fit_transform(&tokenize_all(Tokenizer::Phrase, &sets));

    let sim = cosine_similarity(&vectors[0], &vectors[1]);
    assert!((sim - 1.0).abs() < 1e-12, "expected 1.0, got {}", sim);
    assert_eq!(to_match_score(sim), 100.0);
}

#[test]
fn test_duplicates_only_raise_term_frequency() {
    let sets = vec![
        SkillSet::new(["Python", "Python", "SQL"]),
        SkillSet::new(["Python", "SQL"]),
        SkillSet::new(["Python"]),
    ];
    let vectors = TfidfVectorizer::default().fit_transform(&tokenize_all(Tokenizer::Phrase, &sets));

    // doubled python pulls the first document towards the python-only one
    let doubled = cosine_similarity(&vectors[0], &vectors[2]);
    let single = cosine_similarity(&vectors[1], &vectors[2]);
    assert!(doubled > single);
    assert!(doubled < 1.0);
}

#[test]
fn test_similarity_bounds() {
    let sets = vec![
        SkillSet::new(["Python", "Data Analysis"]),
        SkillSet::new(["Python", "Excel", "SQL"]),
        SkillSet::new([] as [&str; 0]),
        SkillSet::new(["Research"]),
    ];
    let vectors = TfidfVectorizer::default().fit_transform(&tokenize_all(Tokenizer::Phrase, &sets));

    for a in &vectors {
        for b in &vectors {
            let sim = cosine_similarity(a, b);
            assert!((0.0..=1.0).contains(&sim), "similarity {} out of range", sim);
        }
    }
}

#[test]
fn test_smoothing_changes_values_not_order() {
    let sets = vec![
        SkillSet::new(["Python", "Deep Learning", "Research"]),
        SkillSet::new(["Python", "Data Analysis", "Machine Learning"]),
        SkillSet::new(["Python", "Machine Learning"]),
    ];
    let docs = tokenize_all(Tokenizer::Phrase, &sets);

    let smooth = TfidfVectorizer::new(true).fit_transform(&docs);
    let raw = TfidfVectorizer::new(false).fit_transform(&docs);

    let smooth_scores = [
        cosine_similarity(&smooth[2], &smooth[0]),
        cosine_similarity(&smooth[2], &smooth[1]),
    ];
    let raw_scores = [
        cosine_similarity(&raw[2], &raw[0]),
        cosine_similarity(&raw[2], &raw[1]),
    ];

    assert_ne!(smooth_scores, raw_scores);
    assert!(smooth_scores[1] > smooth_scores[0]);
    assert!(raw_scores[1] > raw_scores[0]);
}
