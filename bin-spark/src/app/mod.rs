pub mod err;
pub mod utils;
pub mod cmd;
mod app;

pub use app::*;
