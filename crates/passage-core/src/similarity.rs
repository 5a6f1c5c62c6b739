//! Cosine similarity between embedding vectors

/// Cosine similarity between two vectors: `dot(a,b) / (|a| * |b|)`.
///
/// Returns `0.0` when either vector has zero norm or the lengths differ,
/// so callers never divide by zero. Range is `[-1.0, 1.0]` otherwise.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
