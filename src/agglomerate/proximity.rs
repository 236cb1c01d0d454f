//! Proximity-matrix construction and maintenance.
//!
//! The matrix is symmetric with a zero diagonal; the engine only ever
//! reads the strict upper triangle. Each iteration replaces the matrix
//! wholesale rather than patching it in place, so no partially updated
//! state is ever observable.

use ndarray::Array2;

use super::cluster::Cluster;
use crate::context::RunContext;
use crate::metric::{MetricMode, Separability};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Metric value under distance semantics.
///
/// Similarity-mode metrics are negated so that smaller always means
/// closer; distance-mode values pass through untouched.
pub(crate) fn separation<M: Separability>(metric: &M, a: &[f64], b: &[f64]) -> f64 {
    let value = metric.separability(a, b);
    match metric.mode() {
        MetricMode::Distance => value,
        MetricMode::Similarity => -value,
    }
}

/// Initial m x m proximity matrix over the input rows.
///
/// Only the upper-triangle cells are evaluated; each is mirrored into the
/// lower triangle. With the `parallel` feature the cells are computed
/// across cores, which cannot change the result since the metric is pure.
pub(crate) fn proximity_matrix<M: Separability>(
    data: &[Vec<f64>],
    metric: &M,
    ctx: &RunContext,
) -> Array2<f64> {
    let m = data.len();
    let pairs: Vec<(usize, usize)> = (0..m)
        .flat_map(|i| ((i + 1)..m).map(move |j| (i, j)))
        .collect();

    #[cfg(feature = "parallel")]
    let values: Vec<f64> = pairs
        .par_iter()
        .map(|&(i, j)| separation(metric, &data[i], &data[j]))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let values: Vec<f64> = pairs
        .iter()
        .map(|&(i, j)| separation(metric, &data[i], &data[j]))
        .collect();

    let mut matrix = Array2::zeros((m, m));
    for (&(i, j), &value) in pairs.iter().zip(&values) {
        matrix[[i, j]] = value;
        matrix[[j, i]] = value;
    }

    ctx.info(&format!("calculated {m} x {m} proximity matrix"));
    matrix
}

/// Row/column coordinates of the minimal off-diagonal entry.
///
/// Scans the strict upper triangle in row-major order (i ascending, then
/// j ascending from i + 1) and replaces the running minimum only on a
/// strictly smaller value, so among exact ties the lexicographically
/// smallest (i, j) wins. That scan order is a contract: independent runs
/// on tied inputs must produce identical trees.
///
/// NaN cells are never strictly less than the running minimum and fall
/// through the comparison; cleaning NaN is the upstream imputation step's
/// job, not this scan's.
pub(crate) fn closest_pair(matrix: &Array2<f64>) -> (usize, usize) {
    let k = matrix.nrows();
    debug_assert!(k >= 2, "closest_pair needs at least two active clusters");

    let mut min = f64::MAX;
    let mut pair = (0, 1);
    for i in 0..k - 1 {
        for j in (i + 1)..k {
            let current = matrix[[i, j]];
            if current < min {
                pair = (i, j);
                min = current;
            }
        }
    }
    pair
}

/// Next proximity matrix after merging the clusters at positions `(i, j)`.
///
/// Every entry (a, b) with a, b not in {i, j} is copied over, compacting
/// indices monotonically so survivors keep their relative order. The
/// merged cluster occupies the last row/column; its cells are recomputed
/// as the metric separation between its centroid and each survivor's
/// centroid (centroid linkage), and mirrored to keep the matrix
/// symmetric.
///
/// `active` is the post-merge active set: survivors in compacted order
/// with the merged cluster last. O(k^2) per call.
pub(crate) fn shrink<M: Separability>(
    old: &Array2<f64>,
    (i, j): (usize, usize),
    active: &[Cluster],
    data: &[Vec<f64>],
    metric: &M,
) -> Array2<f64> {
    let k = old.nrows();
    let new_k = k - 1;
    debug_assert_eq!(active.len(), new_k);

    let mut next = Array2::zeros((new_k, new_k));
    let mut row = 0;
    for a in 0..k {
        if a == i || a == j {
            continue;
        }
        let mut col = 0;
        for b in 0..k {
            if b == i || b == j {
                continue;
            }
            next[[row, col]] = old[[a, b]];
            col += 1;
        }
        row += 1;
    }

    let centroid = active[new_k - 1].centroid(data);
    for (s, survivor) in active.iter().take(new_k - 1).enumerate() {
        let value = separation(metric, &survivor.centroid(data), &centroid);
        next[[s, new_k - 1]] = value;
        next[[new_k - 1, s]] = value;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{Cosine, Euclidean};

    fn square(values: &[f64], k: usize) -> Array2<f64> {
        Array2::from_shape_vec((k, k), values.to_vec()).unwrap()
    }

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let data = vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![6.0, 8.0]];
        let matrix = proximity_matrix(&data, &Euclidean, &RunContext::new());

        assert_eq!(matrix.nrows(), 3);
        for i in 0..3 {
            assert_eq!(matrix[[i, i]], 0.0);
            for j in 0..3 {
                assert_eq!(matrix[[i, j]], matrix[[j, i]]);
            }
        }
        assert!((matrix[[0, 1]] - 5.0).abs() < 1e-12);
        assert!((matrix[[0, 2]] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_similarity_metric_is_negated() {
        let data = vec![vec![1.0, 0.0], vec![2.0, 0.0]];
        let matrix = proximity_matrix(&data, &Cosine, &RunContext::new());
        // Parallel vectors: similarity 1, stored as -1 so smaller = closer.
        assert!((matrix[[0, 1]] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_closest_pair_minimum() {
        let matrix = square(
            &[
                0.0, 9.0, 4.0, //
                9.0, 0.0, 2.0, //
                4.0, 2.0, 0.0,
            ],
            3,
        );
        assert_eq!(closest_pair(&matrix), (1, 2));
    }

    #[test]
    fn test_closest_pair_tie_breaks_row_major() {
        // (0, 2) and (1, 2) tie at 2.0; the row-major scan keeps (0, 2).
        let matrix = square(
            &[
                0.0, 5.0, 2.0, //
                5.0, 0.0, 2.0, //
                2.0, 2.0, 0.0,
            ],
            3,
        );
        assert_eq!(closest_pair(&matrix), (0, 2));
    }

    #[test]
    fn test_closest_pair_all_equal_picks_first() {
        let matrix = square(
            &[
                0.0, 1.0, 1.0, //
                1.0, 0.0, 1.0, //
                1.0, 1.0, 0.0,
            ],
            3,
        );
        assert_eq!(closest_pair(&matrix), (0, 1));
    }

    #[test]
    fn test_shrink_compacts_and_appends() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![20.0, 0.0],
        ];
        let old = proximity_matrix(&data, &Euclidean, &RunContext::new());

        // Merge positions (0, 1); survivors keep order, merged goes last.
        let a = Cluster::leaf(7, 0);
        let b = Cluster::leaf(6, 1);
        let active = vec![
            Cluster::leaf(5, 2),
            Cluster::leaf(4, 3),
            Cluster::merge(&a, &b, 3),
        ];
        let next = shrink(&old, (0, 1), &active, &data, &Euclidean);

        assert_eq!(next.nrows(), 3);
        // Surviving entry copied through: d(row 2, row 3) = 10.
        assert!((next[[0, 1]] - 10.0).abs() < 1e-12);
        // New cells: survivor centroid to merged centroid (0, 0.5).
        let expected = Euclidean.separability(&[10.0, 0.0], &[0.0, 0.5]);
        assert!((next[[0, 2]] - expected).abs() < 1e-12);
        // Symmetry holds everywhere after the update.
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(next[[i, j]], next[[j, i]]);
            }
        }
    }
}
