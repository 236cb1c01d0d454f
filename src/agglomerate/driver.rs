//! Agglomeration driver.

use std::collections::BTreeMap;

use super::cluster::{Cluster, ClusterId};
use super::dendrogram::{Dendrogram, MergeRecord};
use super::proximity::{closest_pair, proximity_matrix, shrink};
use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::metric::Separability;

/// Agglomerative merge-tree builder.
///
/// Runs Johnson's algorithm over an m x n point matrix: start from m
/// singleton clusters, repeatedly merge the closest pair, and record every
/// merge in a [`Dendrogram`]. The whole run is synchronous and owns all of
/// its mutable state (active set, proximity matrix, ID counter, merge
/// record); nothing intermediate is observable and a run is not resumable.
///
/// Cost is O(m^3): m - 1 iterations, each scanning and rebuilding an
/// O(m^2) proximity matrix.
///
/// # Example
///
/// ```rust
/// use agglo::{Agglomerator, Euclidean};
///
/// let data = vec![
///     vec![0.0, 0.0],
///     vec![0.0, 1.0],
///     vec![10.0, 10.0],
///     vec![10.0, 11.0],
/// ];
///
/// let tree = Agglomerator::new(Euclidean).build(&data).unwrap();
/// assert_eq!(tree.len(), 7); // 2m - 1 cluster IDs
/// assert_eq!(tree.root(), 1);
/// ```
///
/// # References
///
/// - Johnson (1967). "Hierarchical clustering schemes." Psychometrika.
#[derive(Debug, Clone)]
pub struct Agglomerator<M> {
    metric: M,
    context: RunContext,
}

impl<M: Separability> Agglomerator<M> {
    /// Create a driver over the given metric.
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            context: RunContext::default(),
        }
    }

    /// Set the logging context.
    pub fn with_context(mut self, context: RunContext) -> Self {
        self.context = context;
        self
    }

    /// Run the full agglomeration over `data` and return the merge tree.
    ///
    /// `data` is row-major, m >= 1, all rows equal length. NaN cells are
    /// assumed to have been imputed away upstream; if any remain, merge
    /// order is undefined (NaN never wins a closest-pair comparison).
    pub fn build(&self, data: &[Vec<f64>]) -> Result<Dendrogram> {
        let ctx = &self.context;

        if data.is_empty() {
            ctx.error("empty data");
            return Err(Error::EmptyInput);
        }
        let mut m = data.len();
        let n = data[0].len();
        if let Some(row) = data.iter().find(|row| row.len() != n) {
            ctx.error("ragged input rows");
            return Err(Error::DimensionMismatch {
                expected: n,
                found: row.len(),
            });
        }

        // 2m - 1 IDs in total: leaves take 2m - 1 down to m in input
        // order, merges m - 1 down to 1 in merge order.
        let mut next_id: ClusterId = 2 * m - 1;
        ctx.info(&format!(
            "agglomerative clustering will produce {next_id} clusters total"
        ));

        let mut record: MergeRecord = BTreeMap::new();
        let mut active: Vec<Cluster> = Vec::with_capacity(m);
        for row in 0..m {
            record.insert(next_id, None);
            active.push(Cluster::leaf(next_id, row));
            next_id -= 1;
        }

        if m == 1 {
            ctx.warn("data of length 1: returning single-leaf tree");
            return Ok(Dendrogram::new(record, data.to_vec(), self.context));
        }

        let mut matrix = proximity_matrix(data, &self.metric, ctx);
        ctx.info("beginning cluster agglomeration");

        while m > 1 {
            let (i, j) = closest_pair(&matrix);

            // Record the pair in selection order, never sorted by ID.
            record.insert(next_id, Some((active[i].id(), active[j].id())));
            ctx.trace(&format!(
                "merging clusters at positions {i} & {j} (m={m})"
            ));

            // Remove the higher index first so the lower one stays valid.
            let b = active.remove(j);
            let a = active.remove(i);
            active.push(Cluster::merge(&a, &b, next_id));
            next_id -= 1;

            matrix = shrink(&matrix, (i, j), &active, data, &self.metric);
            m -= 1;
        }

        Ok(Dendrogram::new(record, data.to_vec(), self.context))
    }
}
