use log::trace;
use num_traits::Zero;
use spark::{Ring, RingOps, Sign};
use crate::{MatError, MatResult, MatTrait};
use super::SpMat;

// Laplace expansion along the first row. The cost grows factorially
// with the size, so this is only meant for small matrices.
impl<R> SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// The determinant, memoized until the next [`SpMat::set`].
    pub fn determinant(&self) -> MatResult<R> {
        self.check_square()?;

        if let Some(d) = self.det_cache.borrow().as_ref() {
            return Ok(d.clone())
        }

        let d = self.compute_det()?;

        trace!("det: {:?} -> {d}", self.shape());

        self.det_cache.replace(Some(d.clone()));
        Ok(d)
    }

    /// The determinant of the minor obtained by deleting `row` and `col`.
    /// The sign `(-1)^(row + col)` is not applied.
    pub fn cofactor(&self, row: usize, col: usize) -> MatResult<R> {
        self.minor(row, col)?.determinant()
    }

    pub fn minor(&self, row: usize, col: usize) -> MatResult<SpMat<R>> {
        self.check_square()?;
        self.check_index(row, col)?;

        let n = self.rows();
        if n == 1 {
            return Err(MatError::InvalidDimension { rows: 0, cols: 0 })
        }

        let shift = |k: usize, skip: usize| if k < skip { k } else { k - 1 };
        let minor = self.extract((n - 1, n - 1), |i, j|
            (i != row && j != col).then(|| (shift(i, row), shift(j, col)))
        );

        Ok(minor)
    }

    fn check_square(&self) -> MatResult<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatError::NotSquare { shape: self.shape() })
        }
    }

    fn compute_det(&self) -> MatResult<R> {
        if self.rows() == 1 {
            return Ok(self.at(0, 0))
        }

        let mut det = R::zero();
        for (j, a) in self.row_iter(0) {
            if a.is_zero() {
                continue
            }
            let e = R::from_sign(Sign::from_parity(j as i64));
            det += e * a * self.cofactor(0, j)?;
        }

        Ok(det)
    }
}
