// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod tokenize;
pub mod vectorize;

pub use matcher::Matcher;
pub use scoring::{cosine_similarity, to_match_score};
pub use tokenize::Tokenizer;
pub use vectorize::{TermVector, TfidfVectorizer};
