pub mod apply;
pub mod binop;
pub mod demo;
pub mod det;
pub mod trans;
