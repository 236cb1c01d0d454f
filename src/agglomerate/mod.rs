//! Agglomerative merge-tree construction.
//!
//! Bottom-up clustering: every input row starts as its own cluster, and
//! the closest pair is merged until a single cluster remains. The full
//! merge history forms a binary tree, the **dendrogram**.
//!
//! # The Loop
//!
//! Johnson's algorithm, as this module runs it:
//!
//! 1. Build the m x m proximity matrix over all rows.
//! 2. Find the least-separated pair of active clusters: the minimal
//!    entry of the matrix's strict upper triangle.
//! 3. Merge the pair, assign the merged cluster the next ID, and record
//!    the parent/child relation.
//! 4. Shrink the matrix: drop the merged pair's rows/columns, append the
//!    merged cluster, and recompute its separations centroid-to-centroid.
//! 5. Repeat from 2 until one cluster remains.
//!
//! # Cluster IDs
//!
//! A run over m rows issues exactly 2m - 1 IDs from one descending
//! counter:
//!
//! ```text
//! ID range      │ Holder
//! ──────────────┼────────────────────────────────
//! 2m-1 .. m     │ leaves, in input order
//! m-1  .. 1     │ merge nodes, in merge order
//! 1             │ the root (final merge)
//! ```
//!
//! # Linkage
//!
//! Step 4 recomputes each new matrix cell from the merged cluster's
//! centroid to each survivor's centroid, i.e. **centroid linkage**. True
//! single linkage would instead take the minimum of the two parents'
//! prior distances to each survivor; this module deliberately keeps the
//! centroid rule, so chained merges track group means rather than
//! nearest members.
//!
//! # Determinism
//!
//! Given the same data and metric, two runs produce identical trees: the
//! closest-pair scan breaks ties by row-major order (see
//! [`Agglomerator`]), and the matrix is rebuilt wholesale each iteration
//! so no update-order effects exist.

mod cluster;
mod dendrogram;
mod driver;
mod proximity;

pub use cluster::{Cluster, ClusterId};
pub use dendrogram::{Dendrogram, MergeRecord};
pub use driver::Agglomerator;
