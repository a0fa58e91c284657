use crate::core::vectorize::TermVector;

/// Cosine of the angle between two term vectors
///
/// Defined as 0 when either vector is zero (e.g. an empty skill set), so the
/// result is always a finite value in [0, 1] for non-negative weights.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }

    let denom = a.norm() * b.norm();
    if denom <= 0.0 {
        return 0.0;
    }

    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// Scale a similarity in [0, 1] to a 0-100 score with one decimal place
///
/// Halves round away from zero, so an exact `.x5` can land 0.1 above a
/// round-half-to-even implementation.
#[inline]
pub fn to_match_score(similarity: f64) -> f64 {
    let clamped = if similarity.is_finite() {
        similarity.clamp(0.0, 1.0)
    } else {
        0.0
    };

    (clamped * 1000.0).round() / 10.0
}
