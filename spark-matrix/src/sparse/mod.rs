pub use crate::MatTrait;

mod sp_mat;
mod ops;
mod det;
mod trans;

pub use sp_mat::SpMat;
pub use ops::*;
