//! Validated correlation matrices.

use nalgebra::DMatrix;

use crate::error::{PortfolioError, PortfolioResult};

const TOLERANCE: f64 = 1e-12;

/// A square, symmetric correlation matrix with a unit diagonal and
/// off-diagonal entries in `[-1, 1]`.
///
/// # Example
///
/// ```rust
/// use finsim_portfolio::CorrelationMatrix;
///
/// let rho = CorrelationMatrix::two_asset(0.3).unwrap();
/// assert_eq!(rho.dim(), 2);
/// assert_eq!(rho.get(0, 1), 0.3);
///
/// assert!(CorrelationMatrix::two_asset(1.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix(DMatrix<f64>);

impl CorrelationMatrix {
    /// Validates and wraps `matrix`.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidCorrelation` if the matrix is not
    /// square, not symmetric, has a diagonal other than 1, or holds an entry
    /// outside `[-1, 1]`.
    pub fn new(matrix: DMatrix<f64>) -> PortfolioResult<Self> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(PortfolioError::invalid_correlation(format!(
                "matrix is {rows}x{cols}, expected square"
            )));
        }

        for i in 0..rows {
            let diagonal = matrix[(i, i)];
            if diagonal.is_nan() || (diagonal - 1.0).abs() > TOLERANCE {
                return Err(PortfolioError::invalid_correlation(format!(
                    "diagonal entry ({i}, {i}) is {diagonal}, expected 1"
                )));
            }
            for j in 0..i {
                let rho = matrix[(i, j)];
                if !(-1.0..=1.0).contains(&rho) {
                    return Err(PortfolioError::invalid_correlation(format!(
                        "entry ({i}, {j}) = {rho} is outside [-1, 1]"
                    )));
                }
                if (rho - matrix[(j, i)]).abs() > TOLERANCE {
                    return Err(PortfolioError::invalid_correlation(format!(
                        "entries ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
            }
        }

        Ok(Self(matrix))
    }

    /// Builds a matrix from row vectors.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidCorrelation` on ragged rows or any
    /// failure of [`CorrelationMatrix::new`].
    pub fn from_rows(rows: &[Vec<f64>]) -> PortfolioResult<Self> {
        let n = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(PortfolioError::invalid_correlation(format!(
                "row has {} entries, expected {n}",
                row.len()
            )));
        }
        Self::new(DMatrix::from_fn(n, n, |i, j| rows[i][j]))
    }

    /// The 2x2 matrix `[[1, rho], [rho, 1]]`.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidCorrelation` if `rho` is outside `[-1, 1]`.
    pub fn two_asset(rho: f64) -> PortfolioResult<Self> {
        Self::new(Self::two_asset_matrix(rho))
    }

    /// Uncorrelated assets.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Number of assets covered.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.0.nrows()
    }

    /// Correlation between assets `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.0[(i, j)]
    }

    /// The underlying matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.0
    }

    /// Unvalidated two-asset matrix for callers that take a raw coefficient.
    pub(crate) fn two_asset_unchecked(rho: f64) -> Self {
        Self(Self::two_asset_matrix(rho))
    }

    fn two_asset_matrix(rho: f64) -> DMatrix<f64> {
        DMatrix::from_row_slice(2, 2, &[1.0, rho, rho, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_asset() {
        let rho = CorrelationMatrix::two_asset(-0.4).unwrap();
        assert_eq!(rho.get(0, 0), 1.0);
        assert_eq!(rho.get(1, 0), -0.4);
        assert_eq!(rho.get(0, 1), -0.4);
    }

    #[test]
    fn test_identity() {
        let rho = CorrelationMatrix::identity(3);
        assert_eq!(rho.dim(), 3);
        assert_eq!(rho.get(1, 1), 1.0);
        assert_eq!(rho.get(0, 2), 0.0);
    }

    #[test]
    fn test_rejects_non_square() {
        let err = CorrelationMatrix::new(DMatrix::zeros(2, 3)).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidCorrelation { .. }));
    }

    #[test]
    fn test_rejects_asymmetric() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.3, 0.2, 1.0]);
        assert!(CorrelationMatrix::new(m).is_err());
    }

    #[test]
    fn test_rejects_bad_diagonal() {
        let m = DMatrix::from_row_slice(2, 2, &[0.9, 0.3, 0.3, 1.0]);
        assert!(CorrelationMatrix::new(m).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(CorrelationMatrix::two_asset(1.01).is_err());
        assert!(CorrelationMatrix::two_asset(f64::NAN).is_err());
        assert!(CorrelationMatrix::two_asset(-1.0).is_ok());
    }

    #[test]
    fn test_from_rows() {
        let rho = CorrelationMatrix::from_rows(&[vec![1.0, 0.5], vec![0.5, 1.0]]).unwrap();
        assert_eq!(rho.get(1, 0), 0.5);

        assert!(CorrelationMatrix::from_rows(&[vec![1.0, 0.5], vec![0.5]]).is_err());
    }
}
