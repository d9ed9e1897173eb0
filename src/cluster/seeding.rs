//! Dissimilar seed selection.
//!
//! Greedy Category Utility clustering is sensitive to which records start each cluster.
//! If two seeds agree on every attribute, the clusters they found begin
//! indistinguishable and the greedy pass has nothing to pull them apart. So before the
//! main pass we run a cheap randomized search: draw many K-subsets of records, score
//! each by how many attribute values differ between its members, keep the best.

use rand::Rng;

use super::encode::EncodedTable;
use super::util;

/// Which record pairs of a candidate seed sample are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPairing {
    /// Every one of the `K·(K−1)/2` pairs.
    #[default]
    AllPairs,
    /// Only consecutive pairs of the sample (`K − 1` comparisons per trial).
    Adjacent,
}

/// Uniformly sample `k` distinct indices from `0..n` in one streaming pass.
///
/// Classic reservoir sampling (Algorithm R): the reservoir starts as `0..k`, and index
/// `t` replaces a random slot with probability `k / (t + 1)`. Requires `k <= n`.
pub fn reservoir_sample<R: Rng>(k: usize, n: usize, rng: &mut R) -> Vec<usize> {
    debug_assert!(k <= n);
    let mut reservoir: Vec<usize> = (0..k).collect();
    for t in k..n {
        let j = rng.random_range(0..=t);
        if j < k {
            reservoir[j] = t;
        }
    }
    reservoir
}

/// Summed attribute mismatches over the chosen pairs of `sample`.
pub fn sample_dissimilarity(table: &EncodedTable, sample: &[usize], pairing: SeedPairing) -> usize {
    match pairing {
        SeedPairing::AllPairs => {
            let mut total = 0;
            for (i, &a) in sample.iter().enumerate() {
                for &b in &sample[i + 1..] {
                    total += util::mismatches(table.row(a), table.row(b));
                }
            }
            total
        }
        SeedPairing::Adjacent => sample
            .windows(2)
            .map(|w| util::mismatches(table.row(w[0]), table.row(w[1])))
            .sum(),
    }
}

/// Pick `k` distinct, mutually dissimilar record indices.
///
/// Runs `trials` reservoir draws and returns the one with the largest
/// [`sample_dissimilarity`]; a later draw only wins if it is strictly better. Seed `i`
/// of the result is meant to start cluster `i`.
pub fn select_seeds<R: Rng>(
    table: &EncodedTable,
    k: usize,
    trials: usize,
    pairing: SeedPairing,
    rng: &mut R,
) -> Vec<usize> {
    let n = table.n_rows();
    let mut best: Option<(usize, Vec<usize>)> = None;

    for _ in 0..trials {
        let candidates = reservoir_sample(k, n, rng);
        let diff = sample_dissimilarity(table, &candidates, pairing);
        if best.as_ref().is_none_or(|(best_diff, _)| diff > *best_diff) {
            best = Some((diff, candidates));
        }
    }

    match best {
        Some((_, seeds)) => seeds,
        // Zero trials: fall back to one plain draw so every cluster still gets a seed.
        None => reservoir_sample(k, n, rng),
    }
}
