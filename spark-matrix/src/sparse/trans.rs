use log::trace;
use spark::{Ring, RingOps};
use crate::MatTrait;
use super::SpMat;

impl<R> SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// The transpose, memoized until the next [`SpMat::set`].
    ///
    /// Each call hands out an independent copy of the cached matrix:
    /// later changes to `self` do not reach copies already returned,
    /// and changing a returned copy does not touch `self`.
    pub fn transpose(&self) -> SpMat<R> {
        if let Some(t) = self.trans_cache.borrow().as_ref() {
            return (**t).clone()
        }

        let (m, n) = self.shape();
        let t = self.extract((n, m), |i, j| Some((j, i)));

        trace!("transpose: {:?} -> {:?}", (m, n), (n, m));

        self.trans_cache.replace(Some(Box::new(t.clone())));
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose() {
        let a = SpMat::from_dense_data(3, 4, 0..12).unwrap();
        let b = a.transpose();

        assert_eq!(b, SpMat::from_dense_data(4, 3, vec![
            0, 4,  8,
            1, 5,  9,
            2, 6, 10,
            3, 7, 11,
        ]).unwrap());
    }

    #[test]
    fn transpose_twice() {
        for seed in 0..10 {
            let a = SpMat::rand((3, 5), 0.5, seed);
            assert_eq!(a.transpose().transpose(), a);
        }
    }

    #[test]
    fn transpose_cache() {
        let mut a = SpMat::from_dense_data(2, 2, [1, 2, 3, 4]).unwrap();
        assert!(!a.is_trans_cached());

        let t1 = a.transpose();
        assert!(a.is_trans_cached());
        assert_eq!(a.transpose(), t1);

        a.set(0, 1, 7).unwrap();
        assert!(!a.is_trans_cached());

        let t2 = a.transpose();
        assert_eq!(t2.get(1, 0), Ok(7));

        // copies handed out earlier keep their contents.
        assert_eq!(t1.get(1, 0), Ok(2));
    }

    #[test]
    fn transpose_copy_is_independent() {
        let a = SpMat::from_dense_data(2, 2, [1, 2, 3, 4]).unwrap();
        let mut t = a.transpose();
        t.set(0, 0, 100).unwrap();

        assert_eq!(a.get(0, 0), Ok(1));
        assert_eq!(a.transpose().get(0, 0), Ok(1));
    }

    #[test]
    fn transpose_caches_are_separate() {
        let a = SpMat::from_dense_data(2, 3, 1..=6).unwrap();
        let t = a.transpose();
        assert!(!t.is_trans_cached());

        assert_eq!(t.transpose(), a);
        assert!(t.is_trans_cached());
        assert!(a.is_trans_cached());
        assert_eq!(a.transpose(), t);
    }

    #[test]
    fn transpose_keeps_det() {
        let a = SpMat::rand((4, 4), 0.7, 3);
        assert_eq!(a.transpose().determinant(), a.determinant());
    }
}
