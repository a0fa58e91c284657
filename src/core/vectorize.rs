use std::collections::{BTreeMap, HashMap};

/// Sparse, L2-normalized TF-IDF vector keyed by vocabulary index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<usize, f64>,
}

impl TermVector {
    pub fn get(&self, term: usize) -> f64 {
        self.weights.get(&term).copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &TermVector) -> f64 {
        // iterate the shorter side
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .map(|(term, w)| w * large.get(*term))
            .sum()
    }
}

/// Term-frequency / inverse-document-frequency weighting
///
/// Formula:
/// ```text
/// tf(t, d) = raw count of t in d
/// idf(t)   = ln((1 + n) / (1 + df(t))) + 1   (smooth_idf = true)
///          = ln(n / df(t)) + 1               (smooth_idf = false)
/// w(t, d)  = tf(t, d) * idf(t), then each document is L2-normalized
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfidfVectorizer {
    pub smooth_idf: bool,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self { smooth_idf: true }
    }
}

impl TfidfVectorizer {
    pub fn new(smooth_idf: bool) -> Self {
        Self { smooth_idf }
    }

    /// Fit the vocabulary and IDF weights on `documents`, then vectorize each
    ///
    /// Output vectors are in the same order as the input documents.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[Vec<S>]) -> Vec<TermVector> {
        let mut vocabulary: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<BTreeMap<usize, f64>> = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut tf = BTreeMap::new();
            for term in doc {
                let next = vocabulary.len();
                let id = *vocabulary.entry(term.as_ref()).or_insert(next);
                *tf.entry(id).or_insert(0.0) += 1.0;
            }
            counts.push(tf);
        }

        let mut df = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for term in tf.keys() {
                df[*term] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| self.inverse_document_frequency(n, d as f64))
            .collect();

        counts
            .into_iter()
            .map(|tf| {
                let mut weights: BTreeMap<usize, f64> = tf
                    .into_iter()
                    .map(|(term, count)| (term, count * idf[term]))
                    .collect();

                let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    weights.values_mut().for_each(|w| *w /= norm);
                }

                TermVector { weights }
            })
            .collect()
    }

    #[inline]
    fn inverse_document_frequency(&self, n: f64, df: f64) -> f64 {
        if self.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}
