//! Various helper functions for tensor algebra.

use crate::math::{Matrix, Real, DIM};

/// Computes twice the symmetric part of `m`, i.e., `m + mᵀ`.
pub fn two_symm(m: &Matrix<Real>) -> Matrix<Real> {
    m + m.transpose()
}

/// Computes the deviatoric part of `m`, i.e., `m` with its isotropic part removed.
pub fn dev(m: &Matrix<Real>) -> Matrix<Real> {
    m - Matrix::identity() * (m.trace() / DIM as Real)
}

#[cfg(test)]
mod test {
    use super::{dev, two_symm};
    use crate::math::{Matrix, Real};
    use approx::assert_relative_eq;

    #[test]
    fn two_symm_is_symmetric() {
        let m = Matrix::from_fn(|i, j| (i * 3 + j) as Real + 1.0);
        let s = two_symm(&m);
        assert_relative_eq!(s, s.transpose());
    }

    #[test]
    fn dev_is_trace_free() {
        let m = Matrix::from_fn(|i, j| (i + 2 * j) as Real - 0.5);
        assert_relative_eq!(dev(&m).trace(), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn dev_of_isotropic_tensor_is_zero() {
        let m = Matrix::identity() * 4.2;
        assert_relative_eq!(dev(&m), Matrix::zeros(), epsilon = 1.0e-12);
    }
}
