use derive_more::Display;

pub type Shape = (usize, usize);

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum MatError { 
    #[display("invalid dimension: {rows} x {cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[display("dimension mismatch for {op}: {lhs:?} and {rhs:?}")]
    DimensionMismatch { op: &'static str, lhs: Shape, rhs: Shape },

    #[display("determinant requires a square matrix, got {shape:?}")]
    NotSquare { shape: Shape },

    #[display("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds { index: Shape, shape: Shape },
}

impl std::error::Error for MatError {}

pub type MatResult<T> = Result<T, MatError>;

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn display() { 
        let e = MatError::DimensionMismatch { op: "add", lhs: (2, 2), rhs: (3, 3) };
        assert_eq!(e.to_string(), "dimension mismatch for add: (2, 2) and (3, 3)");

        let e = MatError::NotSquare { shape: (2, 3) };
        assert_eq!(e.to_string(), "determinant requires a square matrix, got (2, 3)");

        let e = MatError::IndexOutOfBounds { index: (3, 0), shape: (3, 3) };
        assert_eq!(e.to_string(), "index (3, 0) out of bounds for shape (3, 3)");

        let e = MatError::InvalidDimension { rows: 0, cols: 2 };
        assert_eq!(e.to_string(), "invalid dimension: 0 x 2");
    }
}
