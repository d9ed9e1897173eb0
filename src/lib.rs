//! Categorical clustering primitives.
//!
//! `catclump` is a small library for clustering purely categorical (nominal) records,
//! where attributes are symbols with no order or distance between them.
//!
//! The primary public API is under [`cluster`], which provides:
//! - greedy Category Utility clustering (dissimilar seeding, random-order greedy pass,
//!   multiple restarts)
//! - a Category Utility scorer for arbitrary labelings
//! - the incremental count tables the algorithm is built on

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    category_utility, CategoricalClustering, CountTables, EncodedTable, GreedyCu, GreedyCuFit,
    Partition, SeedPairing, UNASSIGNED,
};
pub use error::{Error, Result};
