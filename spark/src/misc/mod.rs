mod sign;

pub use sign::*;
