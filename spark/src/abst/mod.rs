mod elem;
mod add_mon;
mod add_grp;
mod mon;
mod ring;

pub use elem::*;
pub use add_mon::*;
pub use add_grp::*;
pub use mon::*;
pub use ring::*;
