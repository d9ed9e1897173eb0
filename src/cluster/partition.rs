//! Assignment vector plus the incremental sufficient statistics behind Category Utility.
//!
//! The value-count table is a cascade `column -> value -> cluster`, flattened into one
//! dense buffer. Each (column, value) pair owns a row of `k + 1` counters: one per
//! cluster, then a trailing total. The cluster-size table has the same trailing-total
//! layout. Both are only ever touched by [`Partition::assign`] and
//! [`Partition::unassign`], so scoring a tentative placement is assign, score, unassign.

use super::encode::EncodedTable;

/// Assignment sentinel for records not (yet) placed in any cluster.
pub const UNASSIGNED: usize = usize::MAX;

/// Per-(column, value, cluster) counts and per-cluster sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTables {
    n_clusters: usize,
    /// First value row of each column; the last entry is the total number of rows.
    col_offsets: Vec<usize>,
    values: Vec<u32>,
    sizes: Vec<u32>,
}

impl CountTables {
    /// Allocate zeroed tables sized from per-column alphabet sizes.
    pub fn new(cardinalities: &[usize], n_clusters: usize) -> Self {
        let mut col_offsets = Vec::with_capacity(cardinalities.len() + 1);
        let mut acc = 0;
        col_offsets.push(acc);
        for &card in cardinalities {
            acc += card;
            col_offsets.push(acc);
        }

        Self {
            n_clusters,
            col_offsets,
            values: vec![0; acc * (n_clusters + 1)],
            sizes: vec![0; n_clusters + 1],
        }
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.values.fill(0);
        self.sizes.fill(0);
    }

    /// Number of clusters the tables were sized for.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Number of currently assigned records.
    pub fn total_assigned(&self) -> usize {
        self.sizes[self.n_clusters] as usize
    }

    /// Number of records currently in `cluster`.
    pub fn cluster_size(&self, cluster: usize) -> usize {
        self.sizes[cluster] as usize
    }

    /// Records in `cluster` whose `col` attribute equals `value`.
    pub fn value_count(&self, col: usize, value: u32, cluster: usize) -> usize {
        self.values[self.slot(col, value) + cluster] as usize
    }

    /// Assigned records whose `col` attribute equals `value`, over all clusters.
    pub fn value_total(&self, col: usize, value: u32) -> usize {
        self.values[self.slot(col, value) + self.n_clusters] as usize
    }

    /// Check the trailing-total invariants of both tables.
    ///
    /// Every per-cluster row must sum to its total slot, every column's totals must sum
    /// to the assigned-record count, and the cluster sizes must sum to the same count.
    pub fn is_consistent(&self) -> bool {
        let k = self.n_clusters;
        let total = self.sizes[k];
        if self.sizes[..k].iter().sum::<u32>() != total {
            return false;
        }
        if self
            .values
            .chunks_exact(k + 1)
            .any(|row| row[..k].iter().sum::<u32>() != row[k])
        {
            return false;
        }
        self.col_offsets.windows(2).all(|w| {
            (w[0]..w[1])
                .map(|r| self.values[r * (k + 1) + k])
                .sum::<u32>()
                == total
        })
    }

    #[inline]
    fn slot(&self, col: usize, value: u32) -> usize {
        (self.col_offsets[col] + value as usize) * (self.n_clusters + 1)
    }

    #[inline]
    fn add(&mut self, record: &[u32], cluster: usize) {
        let k = self.n_clusters;
        for (col, &value) in record.iter().enumerate() {
            let base = self.slot(col, value);
            self.values[base + cluster] += 1;
            self.values[base + k] += 1;
        }
        self.sizes[cluster] += 1;
        self.sizes[k] += 1;
    }

    #[inline]
    fn remove(&mut self, record: &[u32], cluster: usize) {
        let k = self.n_clusters;
        for (col, &value) in record.iter().enumerate() {
            let base = self.slot(col, value);
            self.values[base + cluster] -= 1;
            self.values[base + k] -= 1;
        }
        self.sizes[cluster] -= 1;
        self.sizes[k] -= 1;
    }

    /// Iterate over the `k + 1` counters of every (column, value) pair, column-major.
    #[inline]
    pub(crate) fn value_rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.values.chunks_exact(self.n_clusters + 1)
    }
}

/// One clustering in progress over an encoded table.
#[derive(Clone, Debug)]
pub struct Partition<'a> {
    table: &'a EncodedTable,
    assignment: Vec<usize>,
    counts: CountTables,
}

impl<'a> Partition<'a> {
    /// Start with every record unassigned.
    pub fn new(table: &'a EncodedTable, n_clusters: usize) -> Self {
        Self {
            table,
            assignment: vec![UNASSIGNED; table.n_rows()],
            counts: CountTables::new(table.cardinalities(), n_clusters),
        }
    }

    /// Unassign every record and zero the count tables.
    pub fn reset(&mut self) {
        self.assignment.fill(UNASSIGNED);
        self.counts.reset();
    }

    /// Place `record` in `cluster`. The record must currently be unassigned.
    #[inline]
    pub fn assign(&mut self, record: usize, cluster: usize) {
        debug_assert_eq!(self.assignment[record], UNASSIGNED);
        debug_assert!(cluster < self.counts.n_clusters());
        self.assignment[record] = cluster;
        self.counts.add(self.table.row(record), cluster);
    }

    /// Undo [`Partition::assign`]. The record must currently sit in `cluster`.
    #[inline]
    pub fn unassign(&mut self, record: usize, cluster: usize) {
        debug_assert_eq!(self.assignment[record], cluster);
        self.assignment[record] = UNASSIGNED;
        self.counts.remove(self.table.row(record), cluster);
    }

    /// Whether `record` currently belongs to a cluster.
    #[inline]
    pub fn is_assigned(&self, record: usize) -> bool {
        self.assignment[record] != UNASSIGNED
    }

    /// Current cluster of every record, [`UNASSIGNED`] for unplaced ones.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// The sufficient statistics of the current assignment.
    pub fn counts(&self) -> &CountTables {
        &self.counts
    }

    /// Category Utility of the current assignment.
    pub fn category_utility(&self) -> f64 {
        self.counts.category_utility()
    }

    /// The table this partition is built over.
    pub fn table(&self) -> &'a EncodedTable {
        self.table
    }
}
