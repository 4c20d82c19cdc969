use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use num_traits::Zero;
use spark::{Ring, RingOps};
use crate::{MatError, MatResult, MatTrait};
use super::SpMat;

fn check_same_shape<R>(op: &'static str, a: &SpMat<R>, b: &SpMat<R>) -> MatResult<()> {
    if a.shape() == b.shape() {
        Ok(())
    } else {
        Err(MatError::DimensionMismatch { op, lhs: a.shape(), rhs: b.shape() })
    }
}

/// Entry-wise sum over the union of both supports.
pub fn add<R>(a: &SpMat<R>, b: &SpMat<R>) -> MatResult<SpMat<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    check_same_shape("add", a, b)?;
    Ok(add_unchecked(a, b))
}

pub fn sub<R>(a: &SpMat<R>, b: &SpMat<R>) -> MatResult<SpMat<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    check_same_shape("sub", a, b)?;
    Ok(add_unchecked(a, &-b))
}

/// Entry-wise product over the intersection of both supports.
pub fn elementwise_multiply<R>(a: &SpMat<R>, b: &SpMat<R>) -> MatResult<SpMat<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    check_same_shape("elementwise_multiply", a, b)?;

    let mut res = SpMat::empty(a.rows(), a.cols());
    for (i, j, x) in a.iter() {
        if let Some(y) = b.entries().get(&(i, j)) {
            res.put(i, j, x * y);
        }
    }
    Ok(res)
}

/// Matrix product `a * b`, of shape `(a.rows, b.cols)`.
pub fn matmul<R>(a: &SpMat<R>, b: &SpMat<R>) -> MatResult<SpMat<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    if a.cols() != b.rows() {
        return Err(MatError::DimensionMismatch { op: "matmul", lhs: a.shape(), rhs: b.shape() })
    }

    let mut acc: BTreeMap<(usize, usize), R> = BTreeMap::new();
    for (i, j, x) in a.iter() {
        if x.is_zero() {
            continue
        }
        for (k, y) in b.row_iter(j) {
            let e = acc.entry((i, k)).or_insert_with(R::zero);
            *e += x * y;
        }
    }

    let mut res = SpMat::empty(a.rows(), b.cols());
    for ((i, k), z) in acc {
        res.put(i, k, z);
    }
    Ok(res)
}

/// Dense product `a * v`, of length `a.rows`.
pub fn apply_to_vector<R>(a: &SpMat<R>, v: &[R]) -> MatResult<Vec<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    if v.len() != a.cols() {
        return Err(MatError::DimensionMismatch { op: "apply_to_vector", lhs: a.shape(), rhs: (v.len(), 1) })
    }

    let mut res = vec![R::zero(); a.rows()];
    for (i, j, x) in a.iter() {
        res[i] += x * &v[j];
    }
    Ok(res)
}

fn add_unchecked<R>(a: &SpMat<R>, b: &SpMat<R>) -> SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    let mut res = SpMat::empty(a.rows(), a.cols());
    for (i, j, x) in a.iter() {
        res.put(i, j, x.clone());
    }
    for (i, j, y) in b.iter() {
        let z = res.at(i, j) + y;
        res.put(i, j, z);
    }
    res
}

impl<R> SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// Same as [`apply_to_vector`].
    pub fn apply(&self, v: &[R]) -> MatResult<Vec<R>> {
        apply_to_vector(self, v)
    }

    pub fn scale(&self, r: &R) -> SpMat<R> {
        self.clone().map_entries(|a| a * r)
    }

    fn map_entries<F>(mut self, f: F) -> SpMat<R>
    where F: Fn(&R) -> R {
        let mapped: Vec<_> = self.iter().map(|(i, j, a)| (i, j, f(a))).collect();
        for (i, j, a) in mapped {
            self.put(i, j, a);
        }
        self
    }
}

impl<R> Neg for SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map_entries(|a| -a)
    }
}

impl<R> Neg for &SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = SpMat<R>;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

// The operators panic on a shape mismatch; use the named functions to
// get a `MatResult` instead.
macro_rules! impl_binop {
    ($trait:ident, $method:ident, $func:ident) => {
        #[auto_ops]
        impl<'a, 'b, R> $trait<&'b SpMat<R>> for &'a SpMat<R>
        where R: Ring, for<'x> &'x R: RingOps<R> {
            type Output = SpMat<R>;
            fn $method(self, rhs: &'b SpMat<R>) -> Self::Output {
                match $func(self, rhs) {
                    Ok(res) => res,
                    Err(e) => panic!("{e}")
                }
            }
        }
    };
}

impl_binop!(Add, add, add);
impl_binop!(Sub, sub, sub);
impl_binop!(Mul, mul, matmul);

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: usize, cols: usize, data: Vec<i64>) -> SpMat<i64> {
        SpMat::from_dense_data(rows, cols, data).unwrap()
    }

    #[test]
    fn add_mats() {
        let a = mat(2, 2, vec![1, 2, 0, 4]);
        let b = mat(2, 2, vec![0, -2, 3, 1]);
        let c = add(&a, &b).unwrap();
        assert_eq!(c, mat(2, 2, vec![1, 0, 3, 5]));

        // cancelled entries are not stored.
        assert_eq!(c.nnz(), 3);
        assert!(!c.entries().contains_key(&(0, 1)));
    }

    #[test]
    fn add_commutative() {
        for seed in 0..10 {
            let a = SpMat::rand((4, 5), 0.4, seed);
            let b = SpMat::rand((4, 5), 0.4, seed + 100);
            let ab = add(&a, &b).unwrap();
            let ba = add(&b, &a).unwrap();
            assert_eq!(ab.entries(), ba.entries());
        }
    }

    #[test]
    fn add_mismatch() {
        let a = SpMat::<i64>::new(2, 2).unwrap();
        let b = SpMat::<i64>::new(3, 3).unwrap();
        assert_eq!(
            add(&a, &b).err(),
            Some(MatError::DimensionMismatch { op: "add", lhs: (2, 2), rhs: (3, 3) })
        );
    }

    #[test]
    fn add_drops_raw_zeros() {
        use spark::util::macros::btreemap;
        let a = SpMat::from_raw(2, 2, btreemap!{ (0, 0) => 0i64 }).unwrap();
        let b = SpMat::new(2, 2).unwrap();
        assert_eq!(add(&a, &b).unwrap().nnz(), 0);
    }

    #[test]
    fn elementwise() {
        let a = mat(2, 3, vec![1, 0, 3, 4, 5, 0]);
        let b = mat(2, 3, vec![2, 7, 0, 1, 2, 9]);
        let c = elementwise_multiply(&a, &b).unwrap();
        assert_eq!(c, mat(2, 3, vec![2, 0, 0, 4, 10, 0]));
        assert_eq!(c.nnz(), 3);
    }

    #[test]
    fn elementwise_mismatch() {
        let a = SpMat::<i64>::new(2, 3).unwrap();
        let b = SpMat::<i64>::new(3, 2).unwrap();
        assert!(matches!(
            elementwise_multiply(&a, &b),
            Err(MatError::DimensionMismatch { op: "elementwise_multiply", .. })
        ));
    }

    #[test]
    fn matmul_rect() {
        let a = mat(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let b = mat(3, 2, vec![7, 8, 9, 10, 11, 12]);
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c, mat(2, 2, vec![58, 64, 139, 154]));
    }

    #[test]
    fn matmul_cancel() {
        let a = mat(1, 2, vec![1, 1]);
        let b = mat(2, 1, vec![1, -1]);
        let c = matmul(&a, &b).unwrap();
        assert!(c.is_zero());
        assert_eq!(c.nnz(), 0);
    }

    #[test]
    fn matmul_id() {
        for seed in 0..5 {
            let a = SpMat::rand((4, 4), 0.5, seed);
            let e = SpMat::id(4).unwrap();
            assert_eq!(matmul(&a, &e).unwrap(), a);
            assert_eq!(matmul(&e, &a).unwrap(), a);
        }
    }

    #[test]
    fn matmul_agrees_with_dense() {
        let a = SpMat::rand((3, 4), 0.6, 7);
        let b = SpMat::rand((4, 5), 0.6, 8);
        let c = matmul(&a, &b).unwrap();

        let (da, db) = (a.to_dense(), b.to_dense());
        for i in 0..3 {
            for k in 0..5 {
                let z: i64 = (0..4).map(|m| da[i][m] * db[m][k]).sum();
                assert_eq!(c.get(i, k), Ok(z));
            }
        }
    }

    #[test]
    fn matmul_mismatch() {
        let a = SpMat::<i64>::new(2, 3).unwrap();
        let b = SpMat::<i64>::new(2, 3).unwrap();
        assert_eq!(
            matmul(&a, &b).err(),
            Some(MatError::DimensionMismatch { op: "matmul", lhs: (2, 3), rhs: (2, 3) })
        );
    }

    #[test]
    fn apply() {
        let a = mat(2, 3, vec![1, 0, 2, 0, 3, 0]);
        assert_eq!(apply_to_vector(&a, &[1, 2, 3]), Ok(vec![7, 6]));
        assert_eq!(a.apply(&[0, 0, 0]), Ok(vec![0, 0]));
    }

    #[test]
    fn apply_mismatch() {
        let a = mat(2, 3, vec![1, 0, 2, 0, 3, 0]);
        assert_eq!(
            apply_to_vector(&a, &[1, 2]),
            Err(MatError::DimensionMismatch { op: "apply_to_vector", lhs: (2, 3), rhs: (2, 1) })
        );
    }

    #[test]
    fn operands_untouched() {
        let a = mat(2, 2, vec![1, 2, 3, 4]);
        let b = mat(2, 2, vec![0, 1, 1, 0]);
        let (a0, b0) = (a.clone(), b.clone());
        let _ = add(&a, &b);
        let _ = elementwise_multiply(&a, &b);
        let _ = matmul(&a, &b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn operators() {
        let a = mat(2, 2, vec![1, 2, 3, 4]);
        let b = mat(2, 2, vec![0, 1, 1, 0]);

        assert_eq!(&a + &b, mat(2, 2, vec![1, 3, 4, 4]));
        assert_eq!(&a - &b, mat(2, 2, vec![1, 1, 2, 4]));
        assert_eq!(&a * &b, mat(2, 2, vec![2, 1, 4, 3]));
        assert_eq!(-&a, mat(2, 2, vec![-1, -2, -3, -4]));
        assert_eq!(&a - &a, SpMat::new(2, 2).unwrap());
        assert_eq!(a.scale(&2), mat(2, 2, vec![2, 4, 6, 8]));
        assert_eq!(a.scale(&0).nnz(), 0);
    }

    #[test]
    fn assign_operators() {
        let b = mat(2, 2, vec![0, 1, 1, 0]);
        let mut a = mat(2, 2, vec![1, 2, 3, 4]);

        a += &b;
        assert_eq!(a, mat(2, 2, vec![1, 3, 4, 4]));

        a -= b.clone();
        assert_eq!(a, mat(2, 2, vec![1, 2, 3, 4]));

        a *= &b;
        assert_eq!(a, mat(2, 2, vec![2, 1, 4, 3]));
    }

    #[test]
    #[should_panic]
    fn operator_mismatch() {
        let a = SpMat::<i64>::new(2, 2).unwrap();
        let b = SpMat::<i64>::new(3, 3).unwrap();
        let _ = a + b;
    }

    #[test]
    fn float_ops() {
        let a = SpMat::from_dense_data(2, 2, [0.5, 0.0, 0.0, 2.0]).unwrap();
        let b = SpMat::from_dense_data(2, 2, [2.0, 0.0, 0.0, 0.5]).unwrap();
        assert!(matmul(&a, &b).unwrap().is_id());
    }
}
