//! Cosine similarity over feature vectors.

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for mismatched lengths, empty input or a zero-magnitude side.
/// Identical non-zero vectors return exactly 1.0. The result is clamped to
/// [-1, 1] and is never NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom == 0.0 || !denom.is_finite() || !dot.is_finite() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    (dot / denom).clamp(-1.0, 1.0)
}
