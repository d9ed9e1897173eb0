/// Number of columns where two encoded records disagree.
#[inline]
pub(crate) fn mismatches(a: &[u32], b: &[u32]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Index of the largest score, first one wins ties.
///
/// Only a strictly greater score replaces the current best, so with equal scores the
/// lowest index is returned. Empty input yields 0.
pub(crate) fn argmax_first(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}
