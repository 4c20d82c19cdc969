use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use num_traits::{One, ToPrimitive, Zero};
use spark::{Ring, RingOps};
use crate::{MatError, MatResult, MatTrait};

/// A matrix storing only its non-zero entries, keyed by `(row, col)`.
///
/// Entries are kept in a `BTreeMap`, so every traversal runs in
/// row-major order. The transpose and the determinant are computed
/// lazily, memoized, and dropped by every call to [`SpMat::set`].
pub struct SpMat<R> {
    rows: usize,
    cols: usize,
    entries: BTreeMap<(usize, usize), R>,
    pub(super) det_cache: RefCell<Option<R>>,
    pub(super) trans_cache: RefCell<Option<Box<SpMat<R>>>>,
}

impl<R> MatTrait for SpMat<R> {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<R> SpMat<R> {
    // shape must be checked by the caller.
    pub(super) fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
            det_cache: RefCell::new(None),
            trans_cache: RefCell::new(None)
        }
    }

    fn check_dim(rows: usize, cols: usize) -> MatResult<()> {
        if rows == 0 || cols == 0 {
            Err(MatError::InvalidDimension { rows, cols })
        } else {
            Ok(())
        }
    }

    pub(super) fn check_index(&self, i: usize, j: usize) -> MatResult<()> {
        if i < self.rows && j < self.cols {
            Ok(())
        } else {
            Err(MatError::IndexOutOfBounds { index: (i, j), shape: self.shape() })
        }
    }

    pub fn new(rows: usize, cols: usize) -> MatResult<Self> {
        Self::check_dim(rows, cols)?;
        Ok(Self::empty(rows, cols))
    }

    /// Wraps `entries` as is. Zero values are not filtered out here,
    /// only keys outside the shape are rejected.
    pub fn from_raw(rows: usize, cols: usize, entries: BTreeMap<(usize, usize), R>) -> MatResult<Self> {
        let mut res = Self::new(rows, cols)?;
        if let Some(&(i, j)) = entries.keys().find(|(i, j)| *i >= rows || *j >= cols) {
            return Err(MatError::IndexOutOfBounds { index: (i, j), shape: (rows, cols) })
        }
        res.entries = entries;
        Ok(res)
    }

    pub fn entries(&self) -> &BTreeMap<(usize, usize), R> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> {
        self.entries.iter().map(|(&(i, j), a)| (i, j, a))
    }

    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &R)> {
        self.entries.range((i, 0) .. (i + 1, 0)).map(|(&(_, j), a)| (j, a))
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn density(&self) -> f64 {
        let (m, n) = self.shape();
        let nnz = self.nnz().to_f64().unwrap_or(0.0);
        let total = (m * n).to_f64().unwrap_or(f64::INFINITY);
        nnz / total
    }

    pub fn is_det_cached(&self) -> bool {
        self.det_cache.borrow().is_some()
    }

    pub fn is_trans_cached(&self) -> bool {
        self.trans_cache.borrow().is_some()
    }

    fn invalidate(&mut self) {
        self.det_cache.get_mut().take();
        self.trans_cache.get_mut().take();
    }
}

impl<R> SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn from_entries<T>(rows: usize, cols: usize, entries: T) -> MatResult<Self>
    where T: IntoIterator<Item = (usize, usize, R)> {
        let mut res = Self::new(rows, cols)?;
        for (i, j, a) in entries {
            res.set(i, j, a)?;
        }
        Ok(res)
    }

    pub fn from_dense_data<I>(rows: usize, cols: usize, data: I) -> MatResult<Self>
    where I: IntoIterator<Item = R> {
        Self::check_dim(rows, cols)?;
        Self::from_entries(
            rows,
            cols,
            data.into_iter().enumerate().map(|(k, a)| (k / cols, k % cols, a))
        )
    }

    pub fn from_rows<I, V>(data: I) -> MatResult<Self>
    where I: IntoIterator<Item = V>, V: IntoIterator<Item = R> {
        let data: Vec<Vec<R>> = data.into_iter().map(|r| r.into_iter().collect()).collect();
        let rows = data.len();
        let cols = data.first().map(|r| r.len()).unwrap_or(0);

        if let Some(r) = data.iter().find(|r| r.len() != cols) {
            return Err(MatError::DimensionMismatch { op: "from_rows", lhs: (1, cols), rhs: (1, r.len()) })
        }

        Self::from_dense_data(rows, cols, data.into_iter().flatten())
    }

    pub fn id(n: usize) -> MatResult<Self> {
        Self::from_entries(n, n, (0..n).map(|i| (i, i, R::one())))
    }

    pub fn is_id(&self) -> bool {
        self.is_square() &&
        self.nnz() == self.rows &&
        self.iter().all(|(i, j, a)| i == j && a.is_one())
    }

    pub fn is_zero(&self) -> bool {
        self.entries.values().all(|a| a.is_zero())
    }

    pub fn get(&self, i: usize, j: usize) -> MatResult<R> {
        self.check_index(i, j)?;
        Ok(self.at(i, j))
    }

    pub fn set(&mut self, i: usize, j: usize, value: R) -> MatResult<()> {
        self.check_index(i, j)?;
        self.put(i, j, value);
        Ok(())
    }

    pub(super) fn at(&self, i: usize, j: usize) -> R {
        self.entries.get(&(i, j)).cloned().unwrap_or_else(R::zero)
    }

    // zeros are dropped from storage.
    pub(super) fn put(&mut self, i: usize, j: usize, value: R) {
        if value.is_zero() {
            self.entries.remove(&(i, j));
        } else {
            self.entries.insert((i, j), value);
        }
        self.invalidate();
    }

    /// Dense rows, rebuilt from the current entries on each traversal.
    pub fn rows_iter(&self) -> impl Iterator<Item = Vec<R>> + '_ {
        (0 .. self.rows).map(move |i| {
            let mut row = vec![R::zero(); self.cols];
            for (j, a) in self.row_iter(i) {
                row[j] = a.clone();
            }
            row
        })
    }

    pub fn to_dense(&self) -> Vec<Vec<R>> {
        self.rows_iter().collect()
    }

    /// Moves each entry `(i, j)` to `f(i, j)` in a matrix of the given
    /// shape, dropping entries for which `f` returns `None`.
    pub(super) fn extract<F>(&self, shape: (usize, usize), f: F) -> SpMat<R>
    where F: Fn(usize, usize) -> Option<(usize, usize)> {
        let mut res = SpMat::empty(shape.0, shape.1);
        for (i, j, a) in self.iter() {
            if let Some((k, l)) = f(i, j) {
                res.put(k, l, a.clone());
            }
        }
        res
    }
}

// caches are not carried over.
impl<R> Clone for SpMat<R>
where R: Clone {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            entries: self.entries.clone(),
            det_cache: RefCell::new(None),
            trans_cache: RefCell::new(None)
        }
    }
}

impl<R> PartialEq for SpMat<R>
where R: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.entries == other.entries
    }
}

impl<R> Display for SpMat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table = spark::util::format::table(
            "",
            0 .. self.rows,
            0 .. self.cols,
            |&i, &j| self.at(i, j)
        );
        write!(f, "{table}")
    }
}

impl<R> Debug for SpMat<R>
where R: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpMat")
            .field("shape", &self.shape())
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SpMatData<R> {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, R)>
}

#[cfg(feature = "serde")]
impl<R> serde::Serialize for SpMat<R>
where R: Clone + serde::Serialize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        let data = SpMatData {
            rows: self.rows,
            cols: self.cols,
            entries: self.iter().map(|(i, j, a)| (i, j, a.clone())).collect()
        };
        data.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R> serde::Deserialize<'de> for SpMat<R>
where R: Ring + serde::Deserialize<'de>, for<'x> &'x R: RingOps<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let data = SpMatData::<R>::deserialize(deserializer)?;
        SpMat::from_entries(data.rows, data.cols, data.entries)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
impl SpMat<i64> {
    pub fn rand(shape: (usize, usize), density: f64, seed: u64) -> Self {
        use cartesian::cartesian;
        use rand::{Rng, SeedableRng};
        use rand::rngs::StdRng;

        let (m, n) = shape;
        let range = cartesian!(0..m, 0..n);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut res = Self::empty(m, n);

        for (i, j) in range {
            if rng.gen::<f64>() < density {
                res.put(i, j, rng.gen_range(-5 ..= 5));
            }
        }
        res
    }
}
