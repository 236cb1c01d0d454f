//! Missing-value validation and imputation.
//!
//! The agglomeration engine assumes clean input: a NaN that reaches the
//! proximity matrix never wins a closest-pair comparison, so merge order
//! becomes undefined rather than failing loudly. This module is the
//! upstream collaborator that keeps that from happening: validate the
//! matrix, then fill every NaN cell with a column statistic.

use crate::context::RunContext;
use crate::error::{Error, Result};

/// Statistic used to fill missing cells of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralTendency {
    /// Arithmetic mean of the column's finite entries.
    Mean,
    /// Median of the column's finite entries.
    Median,
}

/// Column-wise missing-value imputation.
///
/// A column that is entirely NaN has no statistic to fill from and fails
/// validation; a matrix with no NaN at all logs a warning, since running
/// imputation on it is pointless but harmless.
#[derive(Debug, Clone)]
pub struct MatrixImputation {
    method: CentralTendency,
    context: RunContext,
}

impl MatrixImputation {
    /// Create an imputer using the given fill statistic.
    pub fn new(method: CentralTendency) -> Self {
        Self {
            method,
            context: RunContext::default(),
        }
    }

    /// Set the logging context.
    pub fn with_context(mut self, context: RunContext) -> Self {
        self.context = context;
        self
    }

    /// Validate shape and per-column NaN levels without modifying data.
    pub fn check_matrix(&self, data: &[Vec<f64>]) -> Result<()> {
        let ctx = &self.context;

        if data.is_empty() {
            ctx.error("empty data");
            return Err(Error::EmptyInput);
        }
        let n = data[0].len();
        if let Some(row) = data.iter().find(|row| row.len() != n) {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: row.len(),
            });
        }

        let mut seen_nan = false;
        for col in 0..n {
            let mut finite = false;
            for row in data {
                if row[col].is_nan() {
                    seen_nan = true;
                } else {
                    finite = true;
                }
            }
            if !finite {
                ctx.error(&format!("column {col} is entirely NaN"));
                return Err(Error::MissingValue { column: col });
            }
        }

        if !seen_nan {
            ctx.warn("no NaNs in matrix; imputation will not have any effect");
        }
        ctx.info("initializing matrix imputation method");
        Ok(())
    }

    /// Validate, then return a copy with every NaN filled by its column's
    /// statistic.
    pub fn process(&self, data: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        self.check_matrix(data)?;

        let n = data[0].len();
        let mut filled = data.to_vec();
        for col in 0..n {
            let finite: Vec<f64> = data
                .iter()
                .map(|row| row[col])
                .filter(|v| !v.is_nan())
                .collect();
            let stat = match self.method {
                CentralTendency::Mean => finite.iter().sum::<f64>() / finite.len() as f64,
                CentralTendency::Median => median(finite),
            };
            for row in filled.iter_mut() {
                if row[col].is_nan() {
                    row[col] = stat;
                }
            }
        }

        self.context
            .info(&format!("imputation complete using {:?}", self.method));
        Ok(filled)
    }
}

/// Median of a non-empty sample; the mean of the middle two for even
/// sample sizes.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nan_column_fails() {
        let data = vec![vec![1.0, f64::NAN], vec![2.0, f64::NAN]];
        let imputer = MatrixImputation::new(CentralTendency::Mean);
        assert_eq!(
            imputer.check_matrix(&data),
            Err(Error::MissingValue { column: 1 })
        );
    }

    #[test]
    fn test_mean_fill() {
        let data = vec![vec![1.0, 10.0], vec![f64::NAN, 20.0], vec![3.0, f64::NAN]];
        let filled = MatrixImputation::new(CentralTendency::Mean)
            .process(&data)
            .unwrap();

        assert_eq!(filled[1][0], 2.0);
        assert_eq!(filled[2][1], 15.0);
        assert_eq!(filled[0], vec![1.0, 10.0]);
    }

    #[test]
    fn test_median_fill() {
        let data = vec![
            vec![1.0],
            vec![2.0],
            vec![100.0],
            vec![f64::NAN],
        ];
        let filled = MatrixImputation::new(CentralTendency::Median)
            .process(&data)
            .unwrap();
        assert_eq!(filled[3][0], 2.0);
    }

    #[test]
    fn test_clean_matrix_passes_through() {
        let data = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let filled = MatrixImputation::new(CentralTendency::Mean)
            .process(&data)
            .unwrap();
        assert_eq!(filled, data);
    }

    #[test]
    fn test_ragged_rows_fail() {
        let data = vec![vec![1.0, 2.0], vec![3.0]];
        let imputer = MatrixImputation::new(CentralTendency::Median);
        assert_eq!(
            imputer.check_matrix(&data),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
