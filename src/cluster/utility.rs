//! Category Utility (Gluck & Corter, 1985) over the incremental count tables.
//!
//! ```text
//! CU = 1/K · Σ_k P(C_k) · [ Σ_{a,v} P(a = v | C_k)² − Σ_{a,v} P(a = v)² ]
//! ```
//!
//! The inner sums run over every (attribute, value) pair. A partition scores well when
//! values are more predictable inside a cluster than across the whole population;
//! dividing by `K` keeps scores comparable across cluster counts.

use std::hash::Hash;

use super::encode::EncodedTable;
use super::partition::{CountTables, Partition};
use crate::error::{Error, Result};

impl CountTables {
    /// Category Utility of the assignment these tables describe.
    ///
    /// Reads the tables only. An empty cluster has weight `P(C_k) = 0` and contributes
    /// nothing; with no assigned records at all the score is `0.0`.
    pub fn category_utility(&self) -> f64 {
        let k = self.n_clusters();
        let total = self.total_assigned();
        if total == 0 || k == 0 {
            return 0.0;
        }
        let total = total as f64;

        let unconditional: f64 = self
            .value_rows()
            .map(|row| {
                let p = f64::from(row[k]) / total;
                p * p
            })
            .sum();

        let mut summation = 0.0;
        for cluster in 0..k {
            let size = self.cluster_size(cluster);
            if size == 0 {
                continue;
            }
            let size = size as f64;
            let conditional: f64 = self
                .value_rows()
                .map(|row| {
                    let p = f64::from(row[cluster]) / size;
                    p * p
                })
                .sum();
            summation += (size / total) * (conditional - unconditional);
        }

        summation / k as f64
    }
}

/// Score an arbitrary hard labeling of a raw categorical table.
///
/// `labels[i]` is the cluster of record `i` and must be `< k`. Clusters that receive no
/// records simply contribute nothing.
///
/// ```rust
/// use catclump::cluster::category_utility;
///
/// let data = vec![vec!["a", "x"], vec!["a", "x"], vec!["b", "y"], vec!["b", "y"]];
/// let good = category_utility(&data, &[0, 0, 1, 1], 2).unwrap();
/// let bad = category_utility(&data, &[0, 1, 0, 1], 2).unwrap();
/// assert!(good > bad);
/// ```
pub fn category_utility<T: Eq + Hash>(data: &[Vec<T>], labels: &[usize], k: usize) -> Result<f64> {
    let table = EncodedTable::from_rows(data)?;
    if labels.len() != table.n_rows() {
        return Err(Error::DimensionMismatch {
            expected: table.n_rows(),
            found: labels.len(),
        });
    }
    if k == 0 {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: table.n_rows(),
        });
    }
    if labels.iter().any(|&l| l >= k) {
        return Err(Error::InvalidParameter {
            name: "labels",
            message: "every label must be less than the cluster count",
        });
    }

    let mut part = Partition::new(&table, k);
    for (record, &cluster) in labels.iter().enumerate() {
        part.assign(record, cluster);
    }
    Ok(part.category_utility())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colours() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Blue", "Small", "False"],
            vec!["Green", "Medium", "True"],
            vec!["Red", "Large", "False"],
            vec!["Red", "Small", "True"],
            vec!["Green", "Medium", "False"],
            vec!["Yellow", "Medium", "False"],
            vec!["Red", "Large", "False"],
        ]
    }

    #[test]
    fn matches_hand_computed_value() {
        // Two records, one per cluster, single binary column:
        // U = 0.5² + 0.5² = 0.5, C(k) = 1 for both clusters.
        // CU = (0.5 · 0.5 + 0.5 · 0.5) / 2 = 0.25.
        let data = vec![vec!["a"], vec!["b"]];
        let cu = category_utility(&data, &[0, 1], 2).unwrap();
        assert!((cu - 0.25).abs() < 1e-12);

        // Both in one cluster: the conditional term equals the unconditional one.
        let cu = category_utility(&data, &[0, 0], 2).unwrap();
        assert!(cu.abs() < 1e-12);
    }

    #[test]
    fn single_cluster_scores_zero() {
        let data = colours();
        let cu = category_utility(&data, &[0; 7], 1).unwrap();
        assert!(cu.abs() < 1e-12);
    }

    #[test]
    fn separating_identical_groups_beats_mixing_them() {
        let data = colours();
        let grouped = category_utility(&data, &[0, 1, 0, 0, 1, 1, 0], 2).unwrap();
        let mixed = category_utility(&data, &[0, 0, 1, 0, 1, 0, 1], 2).unwrap();
        assert!(grouped > mixed);
    }

    #[test]
    fn empty_tables_score_zero() {
        let table = EncodedTable::from_rows(&colours()).unwrap();
        let part = Partition::new(&table, 3);
        assert_eq!(part.category_utility(), 0.0);
    }

    #[test]
    fn rejects_bad_labels() {
        let data = colours();
        assert!(matches!(
            category_utility(&data, &[0, 1], 2),
            Err(Error::DimensionMismatch {
                expected: 7,
                found: 2
            })
        ));
        assert!(matches!(
            category_utility(&data, &[0, 1, 2, 0, 1, 0, 1], 2),
            Err(Error::InvalidParameter { name: "labels", .. })
        ));
        assert!(matches!(
            category_utility(&data, &[0; 7], 0),
            Err(Error::InvalidClusterCount { requested: 0, .. })
        ));
    }
}
