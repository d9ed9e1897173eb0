//! Greedy Category Utility clustering with restarts.
//!
//! # The Algorithm
//!
//! Categorical records have no geometry, so instead of distances the algorithm scores a
//! whole partition with Category Utility (see [`category_utility`](super::category_utility))
//! and builds one greedily:
//!
//! 1. Pick `K` mutually dissimilar seed records, one per cluster.
//! 2. Visit the remaining records in a random order. For each, try every cluster,
//!    score the tentative partition, and keep the cluster with the highest CU.
//! 3. Repeat the whole run with different RNG seeds and keep the best partition.
//!
//! Scoring a tentative placement never rescans the records: the count tables are
//! updated in `O(M)` per assign/unassign and CU reads only the tables.
//!
//! ## Complexity
//!
//! - **Time**: `O(restarts · N · K · (K + V))` for the greedy passes, where `V` is the
//!   number of distinct (column, value) pairs, plus `O(restarts · T · K² · M)` for seeding.
//! - **Space**: `O(N · M + V · K)`.
//!
//! ## Limitations
//!
//! - One pass, no refinement: a record is never moved once placed.
//! - CU is not monotone during a run; placing a record can lower the overall score.
//!
//! ## References
//!
//! Gluck, M. A., Corter, J. E. (1985). "Information, uncertainty, and the utility of
//! categories." Proceedings of the Seventh Annual Conference of the Cognitive Science
//! Society.

use std::hash::Hash;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::encode::EncodedTable;
use super::partition::Partition;
use super::seeding::{self, SeedPairing};
use super::traits::CategoricalClustering;
use super::util;
use crate::error::{Error, Result};

/// Greedy Category Utility clusterer.
#[derive(Debug, Clone)]
pub struct GreedyCu {
    /// Number of clusters.
    k: usize,
    /// Independent runs; the best-scoring one is kept.
    restarts: usize,
    /// Reservoir draws during seeding. `None` means one per record.
    seed_trials: Option<usize>,
    /// Record pairs compared while seeding.
    seed_pairing: SeedPairing,
    /// RNG seed of restart 0; restart `r` uses `base_seed + r`.
    base_seed: u64,
}

/// Result of [`GreedyCu::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyCuFit {
    /// Cluster id of every record, in `[0, K)`.
    pub labels: Vec<usize>,
    /// Category Utility of `labels`.
    pub score: f64,
    /// Index of the restart that produced `labels`.
    pub best_restart: usize,
    /// Final Category Utility of every restart, in run order.
    pub restart_scores: Vec<f64>,
}

impl GreedyCu {
    /// Create a clusterer for `k` clusters with default settings.
    ///
    /// Defaults: 4 restarts, one seeding trial per record, all-pairs seed scoring,
    /// base seed 0.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the number of independent restarts.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Set the number of reservoir draws used to pick seeds.
    pub fn with_seed_trials(mut self, trials: usize) -> Self {
        self.seed_trials = Some(trials);
        self
    }

    /// Set which record pairs are compared when scoring a seed sample.
    pub fn with_seed_pairing(mut self, pairing: SeedPairing) -> Self {
        self.seed_pairing = pairing;
        self
    }

    /// Set the RNG seed of the first restart.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Cluster a raw categorical table.
    ///
    /// Every restart is a complete, independent run. The result is the run with the
    /// highest Category Utility; ties keep the earlier restart.
    pub fn fit<T: Eq + Hash>(&self, data: &[Vec<T>]) -> Result<GreedyCuFit> {
        let table = EncodedTable::from_rows(data)?;
        self.validate(&table)?;
        Ok(self.fit_encoded(&table))
    }

    /// Cluster an already encoded table. Parameters must have been validated.
    fn fit_encoded(&self, table: &EncodedTable) -> GreedyCuFit {
        info!(
            "Greedy CU clustering: N={}, M={}, K={}, restarts={}",
            table.n_rows(),
            table.n_cols(),
            self.k,
            self.restarts
        );

        let mut part = Partition::new(table, self.k);
        let mut restart_scores = Vec::with_capacity(self.restarts);
        let mut best: Option<(usize, f64, Vec<usize>)> = None;

        for restart in 0..self.restarts {
            let seed = self.base_seed.wrapping_add(restart as u64);
            let score = self.cluster_once(&mut part, seed);
            debug!("Restart {} (seed {}): CU={:.6}", restart, seed, score);
            restart_scores.push(score);

            if best.as_ref().is_none_or(|(_, best_score, _)| score > *best_score) {
                best = Some((restart, score, part.assignment().to_vec()));
            }
        }

        let (best_restart, score, labels) = best.unwrap_or_default();
        info!("Best CU={:.6} from restart {}", score, best_restart);

        GreedyCuFit {
            labels,
            score,
            best_restart,
            restart_scores,
        }
    }

    /// One seeded greedy pass. Leaves the final assignment in `part` and returns its CU.
    fn cluster_once(&self, part: &mut Partition<'_>, seed: u64) -> f64 {
        let mut rng = StdRng::seed_from_u64(seed);
        part.reset();

        let table = part.table();
        let n = table.n_rows();
        let trials = self.seed_trials.unwrap_or(n);

        let seeds = seeding::select_seeds(table, self.k, trials, self.seed_pairing, &mut rng);
        debug!("Seed records: {:?}", seeds);
        for (cluster, &record) in seeds.iter().enumerate() {
            part.assign(record, cluster);
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);

        let mut candidates = vec![0.0f64; self.k];
        for &record in &order {
            if part.is_assigned(record) {
                continue;
            }
            for (cluster, cu) in candidates.iter_mut().enumerate() {
                part.assign(record, cluster);
                *cu = part.category_utility();
                part.unassign(record, cluster);
            }
            let chosen = util::argmax_first(&candidates);
            trace!(
                "Record {} -> cluster {} (CU={:.6})",
                record,
                chosen,
                candidates[chosen]
            );
            part.assign(record, chosen);
        }

        part.category_utility()
    }

    fn validate(&self, table: &EncodedTable) -> Result<()> {
        let n = table.n_rows();
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if self.restarts == 0 {
            return Err(Error::InvalidParameter {
                name: "restarts",
                message: "must be at least 1",
            });
        }
        if self.seed_trials == Some(0) {
            return Err(Error::InvalidParameter {
                name: "seed_trials",
                message: "must be at least 1",
            });
        }
        Ok(())
    }
}

impl Default for GreedyCu {
    fn default() -> Self {
        Self {
            k: 2,
            restarts: 4,
            seed_trials: None,
            seed_pairing: SeedPairing::AllPairs,
            base_seed: 0,
        }
    }
}

impl CategoricalClustering for GreedyCu {
    fn fit_predict<T: Eq + Hash>(&self, data: &[Vec<T>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
