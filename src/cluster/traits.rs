use std::hash::Hash;

use crate::error::Result;

/// Common interface for hard clustering of categorical tables (one label per record).
pub trait CategoricalClustering {
    /// Fit the model and return one cluster label per input record.
    ///
    /// Each record is a row of categorical values; only equality between values of the
    /// same column matters.
    fn fit_predict<T: Eq + Hash>(&self, data: &[Vec<T>]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
