mod ctype;
mod helper;
pub mod dispatch;
pub mod pretty;

pub use ctype::*;
pub use helper::*;
pub use dispatch::Int;
