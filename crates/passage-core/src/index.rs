//! In-memory similarity index over embedding vectors
//!
//! Vectors are stored positionally: index `i` here corresponds to item `i`
//! in whatever parallel sequence the caller maintains (chunks, sentences).

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::similarity::cosine_similarity;

/// Exhaustive-scan cosine similarity index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityIndex {
    /// Expected dimensionality of every stored vector
    dimensions: usize,
    /// Stored vectors, insertion order preserved
    vectors: Vec<Vec<f32>>,
}

impl SimilarityIndex {
    /// Create an empty index for vectors of the given dimensionality
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: Vec::new(),
        }
    }

    /// Build an index from a batch of vectors
    pub fn from_vectors(dimensions: usize, vectors: Vec<Vec<f32>>) -> Result<Self> {
        let mut index = Self::new(dimensions);
        for vector in vectors {
            index.insert(vector)?;
        }
        Ok(index)
    }

    /// Append a vector, rejecting dimension mismatches
    pub fn insert(&mut self, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.dimensions {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        self.vectors.push(vector);
        Ok(())
    }

    /// Number of stored vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the index holds no vectors
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimensionality this index was created with
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Find the stored vector most similar to `query`.
    ///
    /// Returns `(index, score)` of the maximum cosine similarity. Ties
    /// resolve to the lowest index, so results are deterministic for any
    /// stable insertion order. Fails fast on an empty index rather than
    /// producing an undefined argmax.
    pub fn best_match(&self, query: &[f32]) -> Result<(usize, f32)> {
        if self.vectors.is_empty() {
            return Err(CoreError::EmptyIndex);
        }
        if query.len() != self.dimensions {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let mut best_idx = 0usize;
        let mut best_score = cosine_similarity(query, &self.vectors[0]);

        for (i, vector) in self.vectors.iter().enumerate().skip(1) {
            let score = cosine_similarity(query, vector);
            // Strictly greater keeps the first index on ties
            if score > best_score {
                best_idx = i;
                best_score = score;
            }
        }

        tracing::trace!(
            candidates = self.vectors.len(),
            best_idx,
            best_score,
            "best_match scan complete"
        );
        Ok((best_idx, best_score))
    }

    /// Cosine score of `query` against every stored vector, in order
    pub fn scores(&self, query: &[f32]) -> Result<Vec<f32>> {
        if query.len() != self.dimensions {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }
        Ok(self
            .vectors
            .iter()
            .map(|v| cosine_similarity(query, v))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_match_on_empty_index_fails() {
        let index = SimilarityIndex::new(3);
        assert!(matches!(
            index.best_match(&[1.0, 0.0, 0.0]),
            Err(CoreError::EmptyIndex)
        ));
    }

    #[test]
    fn insert_rejects_wrong_dimension() {
        let mut index = SimilarityIndex::new(3);
        let err = index.insert(vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn query_dimension_is_checked() {
        let mut index = SimilarityIndex::new(2);
        index.insert(vec![1.0, 0.0]).unwrap();
        assert!(matches!(
            index.best_match(&[1.0, 0.0, 0.0]),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn single_entry_always_wins() {
        let mut index = SimilarityIndex::new(2);
        index.insert(vec![0.0, 1.0]).unwrap();

        // Even an orthogonal query returns index 0
        let (idx, score) = index.best_match(&[1.0, 0.0]).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let mut index = SimilarityIndex::new(2);
        // Two identical vectors score identically against any query
        index.insert(vec![1.0, 0.0]).unwrap();
        index.insert(vec![1.0, 0.0]).unwrap();
        index.insert(vec![0.0, 1.0]).unwrap();

        let (idx, score) = index.best_match(&[2.0, 0.0]).unwrap();
        assert_eq!(idx, 0);
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn best_match_picks_most_similar() {
        let mut index = SimilarityIndex::new(3);
        index.insert(vec![1.0, 0.0, 0.0]).unwrap();
        index.insert(vec![0.0, 1.0, 0.0]).unwrap();
        index.insert(vec![0.7, 0.7, 0.0]).unwrap();

        let (idx, _) = index.best_match(&[0.0, 2.0, 0.0]).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn scores_preserve_order() {
        let mut index = SimilarityIndex::new(2);
        index.insert(vec![1.0, 0.0]).unwrap();
        index.insert(vec![0.0, 1.0]).unwrap();

        let scores = index.scores(&[1.0, 0.0]).unwrap();
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 1.0).abs() < 1e-6);
        assert_eq!(scores[1], 0.0);
    }
}
