//! Term weight table
//!
//! A sparse, L2-normalised term vector: the TF-IDF weights of one document.

use rustc_hash::FxHashMap;

/// Mapping from normalized term to non-negative weight
#[derive(Debug, Clone, Default)]
pub struct TermWeightTable {
    /// Non-zero dimensions: term -> weight
    weights: FxHashMap<String, f64>,
    /// L2 norm before normalisation
    norm: f64,
}

impl TermWeightTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw (unnormalised) weights, dividing by their L2 norm
    pub fn from_weights(mut weights: FxHashMap<String, f64>) -> Self {
        weights.retain(|_, w| *w > 0.0);
        let norm = Self::compute_norm(&weights);
        if norm > 0.0 {
            for value in weights.values_mut() {
                *value /= norm;
            }
        }
        Self { weights, norm }
    }

    /// Compute L2 norm
    fn compute_norm(weights: &FxHashMap<String, f64>) -> f64 {
        weights.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Weight of a term; absent terms weigh zero
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Whether the term has a weight
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// L2 norm of the raw weights
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Terms sorted by weight descending, then alphabetically
    pub fn top_terms(&self, n: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<_> = self
            .weights
            .iter()
            .map(|(t, &w)| (t.as_str(), w))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(n);
        terms
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
