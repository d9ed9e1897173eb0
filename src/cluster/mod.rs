//! Clustering algorithms for categorical (nominal) data.
//!
//! ## Why not k-means?
//!
//! K-means needs a mean and a distance. Attributes like colour or size have neither:
//! `"Red"` is not between `"Blue"` and `"Green"`, and there is no average of them.
//! Distance-free methods score a partition directly instead.
//!
//! ## Category Utility
//!
//! Category Utility measures how much knowing a record's cluster improves your ability
//! to guess its attribute values, compared to guessing from population frequencies:
//!
//! ```text
//! CU = 1/K · Σ_k P(C_k) · [ Σ_{a,v} P(a = v | C_k)² − Σ_{a,v} P(a = v)² ]
//! ```
//!
//! Higher is better. Clusters whose members share values score high; a partition that
//! mirrors the population in every cluster scores zero.
//!
//! ## Algorithms (implemented)
//!
//! ### Greedy CU
//!
//! Seed each cluster with one record (chosen to be mutually dissimilar), then place every
//! other record, in random order, into whichever cluster yields the highest CU. Several
//! independently seeded restarts are run and the best partition is kept.
//!
//! **Assumptions**:
//! - All attributes are categorical
//! - You know k in advance
//!
//! ## Usage
//!
//! ```rust
//! use catclump::cluster::{CategoricalClustering, GreedyCu};
//!
//! let data = vec![
//!     vec!["red", "small", "round"],
//!     vec!["red", "small", "round"],
//!     vec!["blue", "large", "square"],
//!     vec!["blue", "large", "square"],
//! ];
//!
//! let labels = GreedyCu::new(2).with_restarts(3).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//!
//! // Full result, including the score of the winning restart.
//! let fit = GreedyCu::new(2).fit(&data).unwrap();
//! assert!(fit.score > 0.0);
//! ```

mod encode;
mod greedy;
mod partition;
mod seeding;
mod traits;
mod util;
mod utility;

pub use encode::EncodedTable;
pub use greedy::{GreedyCu, GreedyCuFit};
pub use partition::{CountTables, Partition, UNASSIGNED};
pub use seeding::{reservoir_sample, sample_dissimilarity, select_seeds, SeedPairing};
pub use traits::CategoricalClustering;
pub use utility::category_utility;
