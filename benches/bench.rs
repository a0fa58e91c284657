// Criterion benchmarks for Intern Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intern_match::core::{tokenize::Tokenizer, vectorize::TfidfVectorizer};
use intern_match::{Internship, Matcher, SkillSet};

const SKILL_POOL: &[&str] = &[
    "Python", "Data Analysis", "Machine Learning", "React", "JavaScript", "UI/UX",
    "Deep Learning", "Research", "Project Management", "Communication", "Excel",
    "Cybersecurity", "Networking", "Digital Marketing", "Social Media", "SQL",
    "Statistics", "HTML", "CSS", "Content Writing",
];

fn create_internship(id: usize) -> Internship {
    let skills = (0..3 + id % 3).map(|k| SKILL_POOL[(id * 7 + k * 3) % SKILL_POOL.len()]);

    Internship {
        id: id as u32,
        title: format!("Internship {}", id),
        ministry: "Ministry of Education".to_string(),
        location: "New Delhi".to_string(),
        required_skills: SkillSet::new(skills),
        extra: Default::default(),
    }
}

fn bench_tokenize(c: &mut Criterion) {
    let skills = SkillSet::new(["Python", "Data Analysis", "Machine Learning", "UI/UX"]);

    c.bench_function("tokenize_phrase", |b| {
        b.iter(|| Tokenizer::Phrase.tokenize(black_box(&skills)));
    });
    c.bench_function("tokenize_word", |b| {
        b.iter(|| Tokenizer::Word.tokenize(black_box(&skills)));
    });
}

fn bench_vectorize(c: &mut Criterion) {
    let docs: Vec<Vec<String>> = (0..100)
        .map(|i| Tokenizer::Phrase.tokenize(&create_internship(i).required_skills))
        .collect();
    let vectorizer = TfidfVectorizer::default();

    c.bench_function("tfidf_fit_transform_100_docs", |b| {
        b.iter(|| vectorizer.fit_transform(black_box(&docs)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_settings();
    let query = SkillSet::new(["Python", "Data Analysis", "Machine Learning"]);

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Internship> = (0..*candidate_count).map(create_internship).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&query), black_box(candidates.clone())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_vectorize, bench_matching);

criterion_main!(benches);
