//! Catalogue queries over vertex attributes and connectivity

use std::collections::BTreeMap;

use crate::graph::store::Graph;

/// Bucket for vertices without a category
pub const UNCATEGORIZED: &str = "uncategorized";

impl Graph {
    /// Index of the brightest body (lowest magnitude); vertices without a magnitude are skipped
    pub fn brightest(&self) -> Option<usize> {
        self.magnitudes()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// Index of the faintest body (highest magnitude)
    pub fn faintest(&self) -> Option<usize> {
        // max_by keeps the last of equal elements; reverse so the lowest index wins ties
        self.magnitudes()
            .rev()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// Number of vertices per category, sorted by category name
    pub fn count_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for vertex in self.vertices() {
            let key = vertex
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    /// `(index, in + out degree)` for every vertex, most connected first, ties by index
    pub fn most_connected(&self) -> Vec<(usize, usize)> {
        let n = self.len();
        let mut totals = vec![0usize; n];
        for (from, to, _) in self.edges() {
            totals[from] += 1;
            totals[to] += 1;
        }

        let mut ranking: Vec<(usize, usize)> = totals.into_iter().enumerate().collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranking
    }

    fn magnitudes(&self) -> impl DoubleEndedIterator<Item = (usize, f64)> + '_ {
        self.vertices()
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.magnitude.map(|m| (i, m)))
    }
}
