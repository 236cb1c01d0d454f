//! The merge tree produced by a full agglomeration run.

use std::collections::BTreeMap;

use super::cluster::ClusterId;
use crate::context::RunContext;

/// Complete parent-to-children map over all 2m - 1 cluster IDs.
///
/// Leaves map to `None`; merge nodes map to their ordered child pair,
/// first-selected child first (never sorted by ID value).
pub type MergeRecord = BTreeMap<ClusterId, Option<(ClusterId, ClusterId)>>;

/// Immutable record of a full agglomeration run.
///
/// Holds the complete [`MergeRecord`], the input data the tree was built
/// over, and the run context. Built once by the driver; downstream
/// consumers (flat-cluster extraction, cophenetic statistics) read it but
/// never mutate it.
///
/// Merge heights are not recorded: the tree stores structure only, in
/// keeping with the original design. Consumers needing heights must
/// recompute them from the data.
#[derive(Debug, Clone)]
pub struct Dendrogram {
    record: MergeRecord,
    data: Vec<Vec<f64>>,
    context: RunContext,
}

impl Dendrogram {
    pub(crate) fn new(record: MergeRecord, data: Vec<Vec<f64>>, context: RunContext) -> Self {
        Self {
            record,
            data,
            context,
        }
    }

    /// Number of input rows (leaves).
    pub fn n_leaves(&self) -> usize {
        self.data.len()
    }

    /// Number of merges performed: m - 1, or 0 for a single row.
    pub fn n_merges(&self) -> usize {
        self.record.len() - self.n_leaves()
    }

    /// Total cluster IDs issued: 2m - 1.
    pub fn len(&self) -> usize {
        self.record.len()
    }

    /// Always false: a tree exists only for m >= 1.
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Children of `id`, or `None` if `id` is a leaf or was never issued.
    pub fn children(&self, id: ClusterId) -> Option<(ClusterId, ClusterId)> {
        self.record.get(&id).copied().flatten()
    }

    /// Whether `id` was issued to a leaf.
    pub fn is_leaf(&self, id: ClusterId) -> bool {
        matches!(self.record.get(&id), Some(None))
    }

    /// The root ID. Always 1: merge IDs count down and the final merge
    /// takes the last one.
    pub fn root(&self) -> ClusterId {
        1
    }

    /// All (id, children) entries in ascending ID order.
    pub fn entries(&self) -> impl Iterator<Item = (ClusterId, Option<(ClusterId, ClusterId)>)> + '_ {
        self.record.iter().map(|(&id, &children)| (id, children))
    }

    /// IDs issued to leaves, ascending.
    pub fn leaves(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.entries()
            .filter(|(_, children)| children.is_none())
            .map(|(id, _)| id)
    }

    /// The input data the tree was built over.
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// The context the run was built with.
    pub fn context(&self) -> &RunContext {
        &self.context
    }
}
