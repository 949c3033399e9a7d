//! Cosine similarity and best-match ranking.

use serde::{Deserialize, Serialize};

/// A ranked candidate: position in the knowledge base and its cosine score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub index: usize,
    pub score: f64,
}

/// Cosine similarity of two vectors.
///
/// Returns 0.0 when the lengths differ or either vector has zero norm.
/// For non-negative TF-IDF weights the result lies in `[0, 1]`.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Highest-scoring candidate, ungated.
///
/// Linear scan with strict `>`, so the earliest candidate wins ties.
/// `None` only when there are no candidates.
pub fn best_match(query: &[f64], candidates: &[Vec<f64>]) -> Option<ScoredMatch> {
    let mut best: Option<ScoredMatch> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let score = cosine(query, candidate);
        if best.map_or(true, |b| score > b.score) {
            best = Some(ScoredMatch { index, score });
        }
    }

    best
}

/// Best candidate whose score clears `threshold` (inclusive).
pub fn confident_match(
    query: &[f64],
    candidates: &[Vec<f64>],
    threshold: f64,
) -> Option<ScoredMatch> {
    let best = best_match(query, candidates)?;

    if best.score >= threshold {
        Some(best)
    } else {
        tracing::debug!(
            index = best.index,
            score = best.score,
            threshold,
            "Best match below confidence threshold"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let v = vec![0.3, 0.0, 1.7, 2.0];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_vector() {
        let zero = vec![0.0; 3];
        let v = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine(&zero, &v), 0.0);
        assert_eq!(cosine(&v, &zero), 0.0);
        assert_eq!(cosine(&zero, &zero), 0.0);
    }

    #[test]
    fn test_cosine_length_mismatch() {
        assert_eq!(cosine(&[1.0, 1.0], &[1.0, 1.0, 1.0]), 0.0);
        assert_eq!(cosine(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_and_partial() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        let partial = cosine(&[1.0, 1.0], &[1.0, 0.0]);
        assert!((partial - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn test_best_match_empty() {
        assert!(best_match(&[1.0], &[]).is_none());
    }

    #[test]
    fn test_best_match_picks_highest() {
        let candidates = vec![vec![0.0, 1.0], vec![1.0, 0.1], vec![1.0, 1.0]];
        let best = best_match(&[1.0, 0.0], &candidates).unwrap();
        assert_eq!(best.index, 1);
    }

    #[test]
    fn test_best_match_ties_keep_first() {
        let candidates = vec![vec![0.0, 1.0], vec![2.0, 0.0], vec![5.0, 0.0]];
        let best = best_match(&[1.0, 0.0], &candidates).unwrap();
        assert_eq!(best.index, 1);
        assert!((best.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_match_all_zero_returns_first() {
        let candidates = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let best = best_match(&[0.0, 0.0], &candidates).unwrap();
        assert_eq!(best, ScoredMatch { index: 0, score: 0.0 });
    }

    #[test]
    fn test_confident_match_gate() {
        let candidates = vec![vec![1.0, 1.0]];
        // score = 1/sqrt(2) ~ 0.707
        assert!(confident_match(&[1.0, 0.0], &candidates, 0.22).is_some());
        assert!(confident_match(&[1.0, 0.0], &candidates, 0.8).is_none());
        assert!(confident_match(&[0.0, 0.0], &candidates, 0.22).is_none());
    }

    #[test]
    fn test_confident_match_inclusive_threshold() {
        let candidates = vec![vec![1.0, 0.0]];
        assert!(confident_match(&[1.0, 0.0], &candidates, 1.0).is_some());
    }
}
