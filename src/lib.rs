//! # agglo
//!
//! Hierarchical merge-tree (dendrogram) construction via agglomerative
//! clustering.
//!
//! Every input row starts as a singleton cluster; the engine repeatedly
//! merges the closest pair until one cluster remains, recording each merge
//! as a parent/child relation keyed by integer cluster IDs. The result is
//! a [`Dendrogram`] holding the complete merge record for all 2m - 1 IDs.
//!
//! # Pipeline
//!
//! | Stage | Module | Role |
//! |-------|--------|------|
//! | Impute | [`impute`] | validate NaN levels, fill missing cells |
//! | Measure | [`metric`] | pluggable distance/similarity metrics |
//! | Agglomerate | [`agglomerate`] | the O(m^3) merge loop |
//!
//! Imputation is optional: skip it if the data is known clean. The engine
//! itself never guards against NaN.
//!
//! # Example
//!
//! ```rust
//! use agglo::{Agglomerator, Euclidean};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ];
//!
//! let tree = Agglomerator::new(Euclidean).build(&data).unwrap();
//!
//! // Two tight pairs merge first; the root joins the two groups.
//! assert_eq!(tree.n_leaves(), 4);
//! assert_eq!(tree.n_merges(), 3);
//! assert_eq!(tree.children(1), Some((3, 2)));
//! ```

pub mod agglomerate;
pub mod context;
/// Error types used across `agglo`.
pub mod error;
pub mod impute;
pub mod metric;

pub use agglomerate::{Agglomerator, Cluster, ClusterId, Dendrogram, MergeRecord};
pub use context::RunContext;
pub use error::{Error, Result};
pub use impute::{CentralTendency, MatrixImputation};
pub use metric::{Cosine, Euclidean, Manhattan, MetricMode, Separability};
